//! 基础设施层
//!
//! 内存目录仓储、默认全局目录、使用统计后台任务与业务指标

pub mod observability;
pub mod persistence;
pub mod seed;
pub mod usage_worker;

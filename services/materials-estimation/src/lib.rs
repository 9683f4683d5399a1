//! Materials estimation engine
//!
//! 将作业几何尺寸转换为可采购的物料数量：规则引擎、作业类型生成器、推荐器、
//! 目录对账、相似度匹配、历史使用统计与关键字建议。

pub mod application;
pub mod domain;
pub mod infrastructure;

//! 使用统计聚合
//!
//! 每次历史数据刷新都对完整历史重新折叠，不做增量更新。

mod accumulator;
mod snapshot;

pub use accumulator::UsageAccumulator;
pub use snapshot::UsageSnapshot;

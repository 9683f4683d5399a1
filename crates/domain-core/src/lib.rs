//! domain-core - 跨 context 的领域核心类型
//!
//! 数值工具（用户输入解析、非有限值清洗、容差取整）与计量单位分类/取整策略。

mod entity;
pub mod numeric;
pub mod unit;

pub use entity::*;
pub use numeric::*;
pub use unit::*;

// Re-export common types
pub use common::{AuditInfo, OwnerId};

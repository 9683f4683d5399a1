//! 领域层
//!
//! 包含目录条目、物料行项目、规则/作业类型枚举、几何上下文值对象和目录仓储接口

pub mod entities;
pub mod enums;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use enums::*;
pub use repositories::*;
pub use value_objects::*;

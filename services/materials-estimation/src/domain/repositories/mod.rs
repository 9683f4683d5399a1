//! 仓储接口

mod catalog_repository;

pub use catalog_repository::*;

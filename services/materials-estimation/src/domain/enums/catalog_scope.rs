//! 目录条目归属范围

use common::OwnerId;
use serde::{Deserialize, Serialize};

/// 目录条目归属范围
///
/// 全局条目由目录维护方提供；用户条目只对其所有者可见，同名时覆盖全局条目。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CatalogScope {
    #[default]
    Global,
    User(OwnerId),
}

impl CatalogScope {
    pub fn is_global(&self) -> bool {
        matches!(self, CatalogScope::Global)
    }

    /// 该条目是否对指定所有者可见
    pub fn visible_to(&self, owner: &OwnerId) -> bool {
        match self {
            CatalogScope::Global => true,
            CatalogScope::User(id) => id == owner,
        }
    }
}

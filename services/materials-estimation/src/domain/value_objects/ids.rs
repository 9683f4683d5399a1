//! 强类型 ID 定义

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// 目录条目 ID
///
/// 全局条目使用稳定的可读 ID（例如 `stud_2x4_8ft`），作业类型生成器按此引用。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct CatalogItemId(pub String);

impl CatalogItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// 为用户自建条目生成 ID
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CatalogItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// 物料行项目 ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct MaterialId(pub Uuid);

impl MaterialId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for MaterialId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for MaterialId {
    fn default() -> Self {
        Self::new()
    }
}

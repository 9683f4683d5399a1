//! 通用类型定义

use chrono::{DateTime, Utc};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 所有者 ID（承包商账户）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct OwnerId(pub Uuid);

impl OwnerId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for OwnerId {
    fn default() -> Self {
        Self::new()
    }
}

/// 审计信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditInfo {
    pub created_at: DateTime<Utc>,
    pub created_by: Option<OwnerId>,
    pub updated_at: DateTime<Utc>,
    pub updated_by: Option<OwnerId>,
}

impl AuditInfo {
    pub fn new(owner: Option<OwnerId>) -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            created_by: owner.clone(),
            updated_at: now,
            updated_by: owner,
        }
    }

    pub fn update(&mut self, owner: Option<OwnerId>) {
        self.updated_at = Utc::now();
        self.updated_by = owner;
    }
}

impl Default for AuditInfo {
    fn default() -> Self {
        Self::new(None)
    }
}

//! 目录快照

use std::collections::HashMap;

use common::{OwnerId, normalize_key};
use domain_core::Entity;
use serde::Serialize;
use tracing::warn;

use super::CatalogItem;
use crate::domain::enums::CatalogScope;
use crate::domain::value_objects::CatalogItemId;

/// 只读目录快照
///
/// 按插入顺序保存条目，并提供按 ID 和按名称（大小写不敏感）的查找。
/// 用户条目只对其所有者可见：对该所有者同名时覆盖全局条目，对其他所有者不存在。
/// 快照整体替换，从不原地修改。
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogSnapshot {
    items: Vec<CatalogItem>,
    #[serde(skip)]
    by_id: HashMap<CatalogItemId, usize>,
    /// 归一化名称 → 全局条目
    #[serde(skip)]
    global_by_name: HashMap<String, usize>,
    /// (所有者, 归一化名称) → 用户条目
    #[serde(skip)]
    owned_by_name: HashMap<(OwnerId, String), usize>,
}

impl CatalogSnapshot {
    /// 构建快照；违反不变量或 ID 重复的条目被跳过
    pub fn new(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        let mut snapshot = Self::default();

        for item in items {
            if let Err(e) = item.validate() {
                warn!(item_id = %item.id(), error = %e, "Skipping invalid catalog item");
                continue;
            }
            if snapshot.by_id.contains_key(item.id()) {
                warn!(item_id = %item.id(), "Skipping duplicate catalog item id");
                continue;
            }

            let index = snapshot.items.len();
            snapshot.by_id.insert(item.id().clone(), index);

            let key = normalize_key(item.name());
            match item.scope() {
                CatalogScope::Global => {
                    snapshot.global_by_name.entry(key).or_insert(index);
                }
                CatalogScope::User(owner) => {
                    snapshot.owned_by_name.entry((owner.clone(), key)).or_insert(index);
                }
            }

            snapshot.items.push(item);
        }

        snapshot
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &CatalogItemId) -> Option<&CatalogItem> {
        self.by_id.get(id).map(|&i| &self.items[i])
    }

    pub fn get_str(&self, id: &str) -> Option<&CatalogItem> {
        self.get(&CatalogItemId::new(id))
    }

    /// 按 ID 查找对指定所有者可见的条目
    pub fn get_for(&self, owner: &OwnerId, id: &str) -> Option<&CatalogItem> {
        self.get_str(id).filter(|item| item.scope().visible_to(owner))
    }

    /// 按名称查找全局条目（去除首尾空白、大小写不敏感）
    pub fn find_by_name(&self, name: &str) -> Option<&CatalogItem> {
        self.global_by_name
            .get(&normalize_key(name))
            .map(|&i| &self.items[i])
    }

    /// 按名称查找对指定所有者可见的条目：先取该所有者自己的条目，再取全局条目
    pub fn find_by_name_for(&self, owner: &OwnerId, name: &str) -> Option<&CatalogItem> {
        let key = normalize_key(name);
        self.owned_by_name
            .get(&(owner.clone(), key))
            .map(|&i| &self.items[i])
            .or_else(|| self.find_by_name(name))
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

//! 生成的物料条目

use serde::{Deserialize, Serialize};

use super::CatalogItemId;

/// 作业类型生成器和关键字引擎的输出条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMaterial {
    /// 来源目录条目；关键字引擎的固定清单没有目录来源
    pub catalog_item_id: Option<CatalogItemId>,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub unit_cost: f64,
}

impl GeneratedMaterial {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>, unit_cost: f64) -> Self {
        Self {
            catalog_item_id: None,
            name: name.into(),
            quantity,
            unit: unit.into(),
            unit_cost,
        }
    }

    pub fn from_catalog(mut self, id: CatalogItemId) -> Self {
        self.catalog_item_id = Some(id);
        self
    }

    pub fn total(&self) -> f64 {
        domain_core::sanitize(self.quantity * self.unit_cost)
    }
}

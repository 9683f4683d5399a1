//! 物料推荐

use serde::{Deserialize, Serialize};

/// 推荐器产出的物料建议
///
/// 临时对象：经过目录对账后成为可采购的物料行项目。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecommendation {
    pub name: String,
    /// 原始需求量（以 `unit` 计）
    pub quantity: f64,
    pub unit: String,
    /// 类别标签
    pub category: String,
    pub note: Option<String>,
    pub estimated_unit_cost: Option<f64>,
}

impl MaterialRecommendation {
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            category: category.into(),
            note: None,
            estimated_unit_cost: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_estimated_cost(mut self, unit_cost: f64) -> Self {
        self.estimated_unit_cost = Some(unit_cost);
        self
    }
}

//! 物料行项目

use common::OwnerId;
use domain_core::{Entity, sanitize};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{GeneratedMaterial, MaterialId};

/// 物料行项目
///
/// 挂在作业或发票上的持久化单元。数量与单价在构造时清洗，`total = quantity × unit_cost`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    id: MaterialId,
    owner: OwnerId,
    name: String,
    quantity: f64,
    unit_cost: f64,
    product_ref: Option<String>,
    unit: Option<String>,
    notes: Option<String>,
}

impl Material {
    pub fn new(owner: OwnerId, name: impl Into<String>, quantity: f64, unit_cost: f64) -> Self {
        Self {
            id: MaterialId::new(),
            owner,
            name: name.into(),
            quantity: sanitize(quantity),
            unit_cost: sanitize(unit_cost),
            product_ref: None,
            unit: None,
            notes: None,
        }
    }

    /// 由生成条目构造
    pub fn from_generated(owner: OwnerId, generated: &GeneratedMaterial) -> Self {
        Self::new(owner, generated.name.clone(), generated.quantity, generated.unit_cost)
            .with_unit(generated.unit.clone())
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        let unit = unit.into();
        self.unit = if unit.trim().is_empty() { None } else { Some(unit) };
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() { None } else { Some(notes) };
        self
    }

    pub fn with_product_ref(mut self, product_ref: Option<String>) -> Self {
        self.product_ref = product_ref;
        self
    }

    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit_cost(&self) -> f64 {
        self.unit_cost
    }

    pub fn product_ref(&self) -> Option<&str> {
        self.product_ref.as_deref()
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// 行合计
    pub fn total(&self) -> f64 {
        sanitize(self.quantity * self.unit_cost)
    }
}

impl Entity for Material {
    type Id = MaterialId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

//! 目录条目聚合根

use common::{AuditInfo, OwnerId};
use domain_core::{AggregateRoot, Entity};
use errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::domain::enums::{CatalogScope, MaterialCategory, RuleKey};
use crate::domain::value_objects::{CatalogItemId, Coverage};

/// 目录条目
///
/// 由外部目录维护方拥有和修改，估算引擎只读取快照。
///
/// 业务规则:
/// - 损耗系数 >= 0
/// - 覆盖量（如有）> 0
/// - 没有规则键的条目为手工条目，默认数量为 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    id: CatalogItemId,
    #[serde(default)]
    scope: CatalogScope,
    name: String,
    category: MaterialCategory,
    /// 采购单位（each / sheet / sqft / linear_ft / bag ...）
    unit: String,
    #[serde(default)]
    default_unit_cost: f64,
    #[serde(default)]
    product_ref: Option<String>,
    /// 损耗系数（例如 0.10 表示 10%）
    #[serde(default)]
    waste_factor: f64,
    #[serde(default)]
    coverage: Option<Coverage>,
    #[serde(default)]
    rule_key: Option<RuleKey>,
    #[serde(default)]
    audit_info: AuditInfo,
}

impl CatalogItem {
    /// 创建全局手工条目
    pub fn new(
        id: impl Into<CatalogItemId>,
        name: impl Into<String>,
        category: MaterialCategory,
        unit: impl Into<String>,
        default_unit_cost: f64,
    ) -> Self {
        Self {
            id: id.into(),
            scope: CatalogScope::Global,
            name: name.into(),
            category,
            unit: unit.into(),
            default_unit_cost: domain_core::sanitize(default_unit_cost).max(0.0),
            product_ref: None,
            waste_factor: 0.0,
            coverage: None,
            rule_key: None,
            audit_info: AuditInfo::default(),
        }
    }

    /// 设置损耗系数
    pub fn with_waste_factor(mut self, waste_factor: f64) -> AppResult<Self> {
        if !waste_factor.is_finite() || waste_factor < 0.0 {
            return Err(AppError::validation(format!(
                "waste factor must be >= 0, got {waste_factor}"
            )));
        }
        self.waste_factor = waste_factor;
        Ok(self)
    }

    /// 设置覆盖量
    pub fn with_coverage(mut self, quantity: f64, unit: impl Into<String>) -> AppResult<Self> {
        self.coverage = Some(Coverage::new(quantity, unit)?);
        Ok(self)
    }

    /// 设置数量规则
    pub fn with_rule(mut self, rule: RuleKey) -> Self {
        self.rule_key = Some(rule);
        self
    }

    /// 设置商品引用（SKU 等）
    pub fn with_product_ref(mut self, product_ref: impl Into<String>) -> Self {
        let product_ref = product_ref.into();
        self.product_ref = if product_ref.is_empty() { None } else { Some(product_ref) };
        self
    }

    /// 标记为用户自有条目
    pub fn owned_by(mut self, owner: OwnerId) -> Self {
        self.audit_info = AuditInfo::new(Some(owner.clone()));
        self.scope = CatalogScope::User(owner);
        self
    }

    /// 校验不变量（用于反序列化得到的条目）
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation(format!(
                "catalog item {} has an empty name",
                self.id
            )));
        }
        if !self.waste_factor.is_finite() || self.waste_factor < 0.0 {
            return Err(AppError::validation(format!(
                "catalog item {} has invalid waste factor {}",
                self.id, self.waste_factor
            )));
        }
        if let Some(coverage) = &self.coverage {
            if !coverage.quantity.is_finite() || coverage.quantity <= 0.0 {
                return Err(AppError::validation(format!(
                    "catalog item {} has invalid coverage quantity {}",
                    self.id, coverage.quantity
                )));
            }
        }
        if !self.default_unit_cost.is_finite() || self.default_unit_cost < 0.0 {
            return Err(AppError::validation(format!(
                "catalog item {} has invalid default unit cost {}",
                self.id, self.default_unit_cost
            )));
        }
        Ok(())
    }

    // ========== Getters ==========

    pub fn scope(&self) -> &CatalogScope {
        &self.scope
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &MaterialCategory {
        &self.category
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn default_unit_cost(&self) -> f64 {
        self.default_unit_cost
    }

    pub fn product_ref(&self) -> Option<&str> {
        self.product_ref.as_deref()
    }

    pub fn waste_factor(&self) -> f64 {
        self.waste_factor
    }

    pub fn coverage(&self) -> Option<&Coverage> {
        self.coverage.as_ref()
    }

    pub fn rule_key(&self) -> Option<RuleKey> {
        self.rule_key
    }

    /// 是否为手工条目（无规则、无覆盖量）
    pub fn is_manual(&self) -> bool {
        self.rule_key.is_none() && self.coverage.is_none()
    }
}

impl Entity for CatalogItem {
    type Id = CatalogItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for CatalogItem {
    fn audit_info(&self) -> &AuditInfo {
        &self.audit_info
    }

    fn audit_info_mut(&mut self) -> &mut AuditInfo {
        &mut self.audit_info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stud() -> CatalogItem {
        CatalogItem::new("stud_2x4_8ft", "2x4 Stud 8ft", MaterialCategory::Lumber, "each", 4.25)
    }

    #[test]
    fn test_negative_waste_factor_rejected() {
        assert!(stud().with_waste_factor(-0.1).is_err());
        assert!(stud().with_waste_factor(0.1).is_ok());
    }

    #[test]
    fn test_zero_coverage_rejected() {
        assert!(stud().with_coverage(0.0, "sqft").is_err());
    }

    #[test]
    fn test_owned_by_sets_scope() {
        let owner = OwnerId::new();
        let item = stud().owned_by(owner.clone());
        assert!(item.scope().visible_to(&owner));
        assert!(!item.scope().visible_to(&OwnerId::new()));
        assert_eq!(item.audit_info().created_by, Some(owner));
    }

    #[test]
    fn test_validate_deserialized_item() {
        let item: CatalogItem = serde_json::from_value(serde_json::json!({
            "id": "bad",
            "name": "Bad Item",
            "category": "supplies",
            "unit": "each",
            "waste_factor": -1.0
        }))
        .unwrap();
        assert!(item.validate().is_err());
        assert!(stud().validate().is_ok());
    }

    #[test]
    fn test_manual_item() {
        assert!(stud().is_manual());
        assert!(!stud().with_rule(RuleKey::StudsSixteenOc).is_manual());
    }
}

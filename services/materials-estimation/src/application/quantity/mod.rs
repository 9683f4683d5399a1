//! 数量规则引擎
//!
//! `quantity(item, ctx)` 把目录条目和几何上下文换算为可采购数量。
//!
//! 两条计算路径按顺序尝试:
//! 1. 覆盖量路径：条目声明了正的覆盖量且覆盖单位可识别时，
//!    `ceil(需求量 × (1 + 损耗) / 覆盖量)`
//! 2. 规则表路径：按规则键计算基础数量，乘以 `(1 + 损耗)`，再按单位取整
//!
//! 没有规则键也没有可用覆盖量的条目默认数量为 1。
//! 输入缺失不是错误：结果为 0，原因通过 [`ZeroQuantity`] 返回。

mod coverage;
mod rules;

use domain_core::{is_positive, round_for_unit};
use thiserror::Error;

use crate::domain::entities::CatalogItem;
use crate::domain::value_objects::QuantityContext;

pub use coverage::requirement;
pub use rules::base_quantity;

/// 数量为 0 的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ZeroQuantity {
    #[error("missing required input: {field}")]
    MissingInput { field: &'static str },

    #[error("no requirement could be derived from the context")]
    NoRequirement,

    #[error("computed quantity is not positive")]
    NonPositive,

    #[error("computed quantity is not finite")]
    NonFinite,
}

impl ZeroQuantity {
    /// 原因代码（用于日志和指标标签）
    pub fn code(&self) -> &'static str {
        match self {
            ZeroQuantity::MissingInput { .. } => "missing_input",
            ZeroQuantity::NoRequirement => "no_requirement",
            ZeroQuantity::NonPositive => "non_positive",
            ZeroQuantity::NonFinite => "non_finite",
        }
    }
}

/// 数量计算结果；`Err` 表示数量为 0 及其原因
pub type QuantityOutcome = Result<f64, ZeroQuantity>;

/// 计算数量并给出为 0 时的原因
pub fn evaluate(item: &CatalogItem, ctx: &QuantityContext) -> QuantityOutcome {
    debug_assert!(
        item.waste_factor() >= 0.0,
        "catalog item {} has a negative waste factor",
        domain_core::Entity::id(item)
    );
    let waste = domain_core::sanitize(item.waste_factor()).max(0.0);

    if let Some(coverage) = item.coverage() {
        if is_positive(coverage.quantity) {
            if let Some(dimension) = coverage.dimension() {
                let needed = requirement(item.rule_key(), dimension, ctx)
                    .ok_or(ZeroQuantity::NoRequirement)?;
                let units = domain_core::ceil_units(needed * (1.0 + waste) / coverage.quantity);
                return finalize(units, item.unit());
            }
        }
    }

    let Some(rule) = item.rule_key() else {
        return Ok(1.0);
    };

    let base = check(base_quantity(rule, ctx)?)?;
    let mut quantity = base * (1.0 + waste);

    // 覆盖单位无法识别时，覆盖量仍按"每单位覆盖多少"参与换算
    if let Some(coverage) = item.coverage().filter(|c| is_positive(c.quantity)) {
        quantity /= coverage.quantity;
    }

    finalize(quantity, item.unit())
}

/// 计算数量；任何为 0 的原因都返回 `0.0`
///
/// 结果总是有限且非负。
pub fn quantity(item: &CatalogItem, ctx: &QuantityContext) -> f64 {
    evaluate(item, ctx).unwrap_or(0.0)
}

fn check(value: f64) -> QuantityOutcome {
    if !value.is_finite() {
        Err(ZeroQuantity::NonFinite)
    } else if value <= 0.0 {
        Err(ZeroQuantity::NonPositive)
    } else {
        Ok(value)
    }
}

fn finalize(quantity: f64, unit: &str) -> QuantityOutcome {
    let quantity = check(quantity)?;
    check(round_for_unit(quantity, unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::{MaterialCategory, RuleKey};

    fn item(unit: &str) -> CatalogItem {
        CatalogItem::new("test_item", "Test Item", MaterialCategory::Supplies, unit, 1.0)
    }

    #[test]
    fn test_manual_item_defaults_to_one() {
        assert_eq!(evaluate(&item("each"), &QuantityContext::new()), Ok(1.0));
    }

    #[test]
    fn test_twenty_foot_wall_needs_sixteen_studs() {
        let stud = item("each").with_rule(RuleKey::StudsSixteenOc);
        let ctx = QuantityContext {
            wall_length_ft: Some(20.0),
            ..Default::default()
        };
        assert_eq!(evaluate(&stud, &ctx), Ok(16.0));
    }

    #[test]
    fn test_missing_input_reports_field() {
        let stud = item("each").with_rule(RuleKey::StudsSixteenOc);
        assert_eq!(
            evaluate(&stud, &QuantityContext::new()),
            Err(ZeroQuantity::MissingInput {
                field: "wall_length_ft"
            })
        );
        assert_eq!(quantity(&stud, &QuantityContext::new()), 0.0);
    }

    #[test]
    fn test_coverage_path() {
        let lvp = item("box")
            .with_rule(RuleKey::FlooringTenPctWaste)
            .with_waste_factor(0.10)
            .unwrap()
            .with_coverage(20.0, "sqft")
            .unwrap();
        let ctx = QuantityContext {
            room_floor_area_sqft: Some(200.0),
            ..Default::default()
        };
        // 200 × 1.1 / 20 = 11
        assert_eq!(evaluate(&lvp, &ctx), Ok(11.0));
    }

    #[test]
    fn test_coverage_without_requirement() {
        let lvp = item("box").with_coverage(20.0, "sqft").unwrap();
        assert_eq!(
            evaluate(&lvp, &QuantityContext::new()),
            Err(ZeroQuantity::NoRequirement)
        );
    }

    #[test]
    fn test_unrecognised_coverage_unit_divides_rule_result() {
        let paint = item("gallon")
            .with_rule(RuleKey::BaseboardLinearFt)
            .with_coverage(4.0, "gallon")
            .unwrap();
        let ctx = QuantityContext {
            room_perimeter_ft: Some(41.0),
            ..Default::default()
        };
        assert_eq!(evaluate(&paint, &ctx), Ok(10.25));
    }

    #[test]
    fn test_continuous_rule_with_waste() {
        let flooring = item("sqft")
            .with_rule(RuleKey::FlooringTenPctWaste)
            .with_waste_factor(0.10)
            .unwrap();
        let ctx = QuantityContext {
            room_floor_area_sqft: Some(123.45),
            ..Default::default()
        };
        // 123.45 × 1.1 = 135.795 → 135.8
        assert_eq!(evaluate(&flooring, &ctx), Ok(135.8));
    }
}

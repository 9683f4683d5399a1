//! 目录对账：推荐 → 可采购物料行项目

use std::collections::HashMap;

use common::{OwnerId, normalize_key};
use domain_core::{ceil_units, is_positive, round_for_unit, units_match};

use super::sanitize::sanitize_logged;
use crate::domain::entities::{CatalogItem, CatalogSnapshot, Material};
use crate::domain::value_objects::MaterialRecommendation;

/// 把推荐对账为物料行项目
///
/// - 按名称查找对 `owner` 可见的目录条目（自己的条目优先，其次全局条目）；覆盖单位与推荐单位一致时，把原始需求量换算为采购单位
///   `ceil(需求量 / 覆盖量)`，并在备注中追加覆盖说明
/// - 否则保留推荐的数量，单位兼容时采用目录的规范写法
/// - 单价优先级：目录价格 → 调用方兜底价 → 推荐估价 → 0
pub fn resolve(
    recommendation: &MaterialRecommendation,
    catalog: &CatalogSnapshot,
    owner: &OwnerId,
    fallback_unit_cost: Option<f64>,
) -> Material {
    let item = catalog.find_by_name_for(owner, &recommendation.name);
    let requirement = sanitize_logged(recommendation.quantity, "quantity").max(0.0);

    let mut notes: Vec<String> = recommendation.note.iter().cloned().collect();
    let (quantity, unit) = match item {
        Some(item) => match covered_units(item, requirement, &recommendation.unit) {
            Some(units) => {
                if let Some(coverage) = item.coverage() {
                    notes.push(format!("1 {} covers {}", item.unit(), coverage.describe()));
                }
                (units, item.unit().to_string())
            }
            None if units_match(item.unit(), &recommendation.unit) => (requirement, item.unit().to_string()),
            None => (requirement, recommendation.unit.clone()),
        },
        None => (requirement, recommendation.unit.clone()),
    };

    let quantity = sanitize_logged(round_for_unit(quantity, &unit), "quantity");
    let unit_cost = sanitize_logged(
        unit_cost(item, fallback_unit_cost, recommendation.estimated_unit_cost),
        "unit_cost",
    );
    let name = item.map_or(recommendation.name.as_str(), |i| i.name());

    Material::new(owner.clone(), name, quantity, unit_cost)
        .with_unit(unit)
        .with_notes(notes.join("; "))
        .with_product_ref(item.and_then(|i| i.product_ref()).map(str::to_string))
}

/// 批量对账；兜底价按归一化名称查找
pub fn resolve_all(
    recommendations: &[MaterialRecommendation],
    catalog: &CatalogSnapshot,
    owner: &OwnerId,
    fallback_costs: &HashMap<String, f64>,
) -> Vec<Material> {
    recommendations
        .iter()
        .map(|rec| {
            let fallback = fallback_costs.get(&normalize_key(&rec.name)).copied();
            resolve(rec, catalog, owner, fallback)
        })
        .collect()
}

/// 覆盖单位与需求单位一致时的采购单位数
fn covered_units(item: &CatalogItem, requirement: f64, unit: &str) -> Option<f64> {
    let coverage = item.coverage()?;
    if !is_positive(coverage.quantity) || !units_match(&coverage.unit, unit) {
        return None;
    }
    Some(ceil_units(requirement / coverage.quantity))
}

fn unit_cost(item: Option<&CatalogItem>, fallback: Option<f64>, estimate: Option<f64>) -> f64 {
    item.map(|i| i.default_unit_cost())
        .filter(|c| is_positive(*c))
        .or(fallback.filter(|c| is_positive(*c)))
        .or(estimate.filter(|c| is_positive(*c)))
        .unwrap_or(0.0)
}

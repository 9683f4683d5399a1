//! 作业类型物料生成器

use common::OwnerId;
use domain_core::Entity;
use tracing::debug;

use super::quantity::evaluate;
use crate::domain::entities::CatalogSnapshot;
use crate::domain::enums::JobType;
use crate::domain::value_objects::{GeneratedMaterial, QuantityContext};
use crate::infrastructure::observability::metrics;

/// 为固定作业类型生成物料清单
///
/// 按作业类型的目录条目顺序输出。快照中找不到或对 `owner` 不可见的条目被跳过（目录漂移不能中断估算），
/// 数量为 0 的条目被丢弃。单价按目录原样保留。
pub fn generate(
    job_type: JobType,
    catalog: &CatalogSnapshot,
    owner: &OwnerId,
    ctx: &QuantityContext,
) -> Vec<GeneratedMaterial> {
    job_type
        .catalog_item_ids()
        .iter()
        .filter_map(|id| {
            let Some(item) = catalog.get_for(owner, id) else {
                debug!(job_type = %job_type, item_id = id, "Catalog item missing from snapshot, skipping");
                metrics::record_catalog_reference_skipped(job_type.as_str());
                return None;
            };

            match evaluate(item, ctx) {
                Ok(quantity) => Some(
                    GeneratedMaterial::new(item.name(), quantity, item.unit(), item.default_unit_cost())
                        .from_catalog(item.id().clone()),
                ),
                Err(reason) => {
                    debug!(job_type = %job_type, item_id = id, reason = %reason, "Dropping zero-quantity item");
                    metrics::record_zero_quantity(reason.code());
                    None
                }
            }
        })
        .collect()
}

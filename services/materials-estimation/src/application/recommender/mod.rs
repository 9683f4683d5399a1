//! 推荐器
//!
//! 每个推荐原型一个独立公式，不查询目录。输出原始需求量（以各自单位计），
//! 目录对账时再换算为采购单位。

mod outdoor;
mod surfaces;
mod walls;

use config::RecommenderConfig;
use domain_core::is_positive;
use tracing::debug;

use crate::domain::enums::{MaterialCategory, RecommendationArchetype};
use crate::domain::value_objects::{JobContext, MaterialRecommendation};

/// 推荐器
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    config: RecommenderConfig,
}

impl Recommender {
    pub fn new(config: RecommenderConfig) -> Self {
        Self { config }
    }

    /// 按原型生成推荐；尺寸不足时返回空列表，数量为 0 的条目被丢弃
    pub fn recommend(&self, archetype: RecommendationArchetype, ctx: &JobContext) -> Vec<MaterialRecommendation> {
        let recommendations = match archetype {
            RecommendationArchetype::InteriorWallBuild => walls::interior_wall_build(&self.config, ctx),
            RecommendationArchetype::LvpFlooring => surfaces::lvp_flooring(ctx),
            RecommendationArchetype::PaintRoom => walls::paint_room(&self.config, ctx),
            RecommendationArchetype::BasicBathroomRemodel => {
                // 按原样拼接，重复条目（如填缝胶）不合并
                let mut combined = walls::paint_room(&self.config, ctx);
                combined.extend(surfaces::lvp_flooring(ctx));
                combined
            }
            RecommendationArchetype::ExteriorPaint => walls::exterior_paint(&self.config, ctx),
            RecommendationArchetype::TileBacksplash => surfaces::tile_backsplash(ctx),
            RecommendationArchetype::DeckBuild => outdoor::deck_build(ctx),
            RecommendationArchetype::RoofShingleReplacement => outdoor::roof_shingle_replacement(ctx),
        };

        let recommendations: Vec<_> = recommendations
            .into_iter()
            .filter(|r| is_positive(r.quantity))
            .collect();
        debug!(archetype = %archetype, count = recommendations.len(), "Recommendations computed");
        recommendations
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }
}

fn recommendation(
    name: &str,
    quantity: f64,
    unit: &str,
    category: MaterialCategory,
    estimated_unit_cost: f64,
) -> MaterialRecommendation {
    MaterialRecommendation::new(name, quantity, unit, category.label()).with_estimated_cost(estimated_unit_cost)
}

/// 墙高；未提供时取配置默认值
fn wall_height(config: &RecommenderConfig, ctx: &JobContext) -> f64 {
    ctx.height_ft
        .filter(|h| is_positive(*h))
        .unwrap_or(config.default_wall_height_ft)
}

fn coats(config: &RecommenderConfig, ctx: &JobContext) -> u32 {
    ctx.coats.filter(|c| *c > 0).unwrap_or(config.default_coats)
}

/// 扣除门窗后的墙面面积，不小于 0
fn net_wall_area(config: &RecommenderConfig, ctx: &JobContext) -> Option<f64> {
    let gross = ctx.perimeter()? * wall_height(config, ctx);
    let openings = config.door_allowance_sqft * f64::from(ctx.doors)
        + config.window_allowance_sqft * f64::from(ctx.windows);
    Some((gross - openings).max(0.0))
}

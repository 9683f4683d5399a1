//! 值对象模块

mod coverage;
mod generated_material;
mod history;
mod ids;
mod job_context;
mod match_result;
mod quantity_context;
mod recommendation;
mod usage_stats;

pub use coverage::Coverage;
pub use generated_material::GeneratedMaterial;
pub use history::{HistoryDocument, HistoryKind, HistoryLineItem, decode_documents};
pub use ids::{CatalogItemId, MaterialId};
pub use job_context::JobContext;
pub use match_result::{MatchAttribute, MaterialMatchResult};
pub use quantity_context::{QuantityContext, QuantityContextForm};
pub use recommendation::MaterialRecommendation;
pub use usage_stats::MaterialUsageStats;

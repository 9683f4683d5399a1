//! 应用层
//!
//! 数量规则引擎、作业类型生成器、推荐器、目录对账、匹配评分、关键字建议与使用统计

pub mod comparison;
pub mod generator;
pub mod handler;
pub mod keywords;
pub mod quantity;
pub mod recommender;
pub mod requests;
pub mod resolution;
pub mod sanitize;
pub mod usage;

pub use comparison::MaterialComparisonBuilder;
pub use handler::EstimationHandler;
pub use quantity::{QuantityOutcome, ZeroQuantity};
pub use recommender::Recommender;
pub use requests::{EstimateInput, EstimateRequest, EstimateResponse, UsageQuery};
pub use usage::UsageSnapshot;

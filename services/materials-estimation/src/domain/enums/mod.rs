//! 枚举模块

mod archetype;
mod catalog_scope;
mod job_type;
mod material_category;
mod rule_key;

pub use archetype::RecommendationArchetype;
pub use catalog_scope::CatalogScope;
pub use job_type::JobType;
pub use material_category::MaterialCategory;
pub use rule_key::RuleKey;

use thiserror::Error;

/// 未知标识符（规则键、作业类型、推荐原型）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownIdentifier {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownIdentifier {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

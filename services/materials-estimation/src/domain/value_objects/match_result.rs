//! 目录匹配结果

use serde::{Deserialize, Serialize};

use crate::domain::entities::CatalogItem;

/// 匹配上的属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchAttribute {
    Name,
    Unit,
    Cost,
}

impl MatchAttribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchAttribute::Name => "name",
            MatchAttribute::Unit => "unit",
            MatchAttribute::Cost => "cost",
        }
    }
}

/// 候选目录条目及其置信度
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialMatchResult {
    pub item: CatalogItem,
    /// 置信度，范围 [0, 1]
    pub confidence: f64,
    pub matched_attributes: Vec<MatchAttribute>,
    pub reasons: Vec<String>,
}

impl MaterialMatchResult {
    pub fn matched(&self, attribute: MatchAttribute) -> bool {
        self.matched_attributes.contains(&attribute)
    }
}

//! 目录匹配评分
//!
//! `confidence = w_name × nameScore + w_unit × unitScore + w_cost × costScore`，限制在 [0, 1]，
//! 保留四位小数。默认权重 0.6 / 0.25 / 0.15。

use std::collections::BTreeSet;

use config::ScoringConfig;
use domain_core::{is_positive, normalize_unit};

use crate::domain::entities::{CatalogItem, Material};
use crate::domain::value_objects::{MatchAttribute, MaterialMatchResult};

/// 强匹配阈值（Jaccard）
const STRONG_NAME_MATCH: f64 = 0.6;
/// 部分匹配阈值（Jaccard）
const PARTIAL_NAME_MATCH: f64 = 0.3;

/// 匹配评分器
#[derive(Debug, Clone)]
pub struct MaterialComparisonBuilder {
    name_weight: f64,
    unit_weight: f64,
    cost_weight: f64,
}

impl Default for MaterialComparisonBuilder {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

#[derive(Debug)]
struct Score {
    value: f64,
    matched: Option<MatchAttribute>,
    reason: Option<String>,
}

impl MaterialComparisonBuilder {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            name_weight: config.name_weight,
            unit_weight: config.unit_weight,
            cost_weight: config.cost_weight,
        }
    }

    /// 最接近的目录条目
    ///
    /// 按置信度降序，同分按名称升序，截取前 `limit` 条（至少 1 条）。
    pub fn best_matches<'a>(
        &self,
        material: &Material,
        catalog: impl IntoIterator<Item = &'a CatalogItem>,
        limit: usize,
    ) -> Vec<MaterialMatchResult> {
        let mut results: Vec<MaterialMatchResult> = catalog
            .into_iter()
            .map(|candidate| self.score(material, candidate))
            .collect();

        results.sort_by(|a, b| {
            b.confidence
                .total_cmp(&a.confidence)
                .then_with(|| a.item.name().cmp(b.item.name()))
        });
        results.truncate(limit.max(1));
        results
    }

    /// 为单个候选评分
    pub fn score(&self, material: &Material, candidate: &CatalogItem) -> MaterialMatchResult {
        let parts = [
            (self.name_weight, name_score(material.name(), candidate.name())),
            (
                self.unit_weight,
                unit_score(material.unit().unwrap_or_default(), candidate.unit()),
            ),
            (
                self.cost_weight,
                cost_score(material.unit_cost(), candidate.default_unit_cost()),
            ),
        ];

        let mut confidence = 0.0;
        let mut matched_attributes = Vec::new();
        let mut reasons = Vec::new();
        for (weight, score) in parts {
            confidence += weight * score.value;
            matched_attributes.extend(score.matched);
            reasons.extend(score.reason);
        }

        let confidence = if confidence.is_finite() {
            (confidence.clamp(0.0, 1.0) * 10_000.0).round() / 10_000.0
        } else {
            0.0
        };

        MaterialMatchResult {
            item: candidate.clone(),
            confidence,
            matched_attributes,
            reasons,
        }
    }
}

/// 名称分词：小写，按空白和标点切分
fn tokens(name: &str) -> BTreeSet<String> {
    name.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// 长度接近度，分母取两者中较长的名称
fn length_proximity(a: &str, b: &str) -> f64 {
    let a = a.trim().chars().count() as f64;
    let b = b.trim().chars().count() as f64;
    let longest = a.max(b);
    if longest == 0.0 {
        return 0.0;
    }
    1.0 - (a - b).abs() / longest
}

fn name_score(source: &str, candidate: &str) -> Score {
    let similarity = jaccard(&tokens(source), &tokens(candidate));
    let value = 0.7 * similarity + 0.3 * length_proximity(source, candidate);

    let (matched, reason) = if similarity >= STRONG_NAME_MATCH {
        (
            Some(MatchAttribute::Name),
            Some(format!("Strong name match ({:.0}% shared words)", similarity * 100.0)),
        )
    } else if similarity > PARTIAL_NAME_MATCH {
        (
            None,
            Some(format!("Partial name match ({:.0}% shared words)", similarity * 100.0)),
        )
    } else {
        (None, None)
    };

    Score { value, matched, reason }
}

fn unit_score(source: &str, candidate: &str) -> Score {
    let source = normalize_unit(source);
    let candidate = normalize_unit(candidate);

    if source.is_empty() || candidate.is_empty() {
        return Score {
            value: 0.4,
            matched: None,
            reason: Some("Unit unknown".to_string()),
        };
    }
    if source == candidate {
        return Score {
            value: 1.0,
            matched: Some(MatchAttribute::Unit),
            reason: Some(format!("Same unit ({candidate})")),
        };
    }
    if source.starts_with(&candidate) || candidate.starts_with(&source) {
        return Score {
            value: 0.7,
            matched: None,
            reason: Some(format!("Similar unit ({source} vs {candidate})")),
        };
    }
    Score {
        value: 0.2,
        matched: None,
        reason: Some(format!("Different unit ({source} vs {candidate})")),
    }
}

fn cost_score(source: f64, candidate: f64) -> Score {
    if !is_positive(candidate) {
        return Score {
            value: 0.0,
            matched: None,
            reason: Some("Catalog item has no default cost".to_string()),
        };
    }

    let source = domain_core::sanitize(source);
    let difference = (source - candidate).abs() / candidate;
    if difference <= 0.10 {
        Score {
            value: 1.0,
            matched: Some(MatchAttribute::Cost),
            reason: Some(format!("Cost within 10% (${candidate:.2})")),
        }
    } else if difference <= 0.25 {
        Score {
            value: 0.6,
            matched: None,
            reason: Some(format!("Cost within 25% (${candidate:.2})")),
        }
    } else {
        Score {
            value: 0.2,
            matched: None,
            reason: Some(format!("Cost differs by more than 25% (${candidate:.2})")),
        }
    }
}

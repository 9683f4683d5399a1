//! 使用统计快照

use std::cmp::Ordering;
use std::collections::HashMap;

use common::normalize_key;

use super::UsageAccumulator;
use crate::domain::value_objects::{HistoryDocument, MaterialUsageStats};

/// 只读的使用统计快照
///
/// 统计列表按使用次数降序、最近使用时间降序排列。共现索引以归一化名称为键，
/// 按对称关系写入：A 与 B 同时出现时 `A→B` 与 `B→A` 计数相同。
#[derive(Debug, Clone, Default)]
pub struct UsageSnapshot {
    stats: Vec<MaterialUsageStats>,
    index: HashMap<String, usize>,
    co_occurrence: HashMap<String, HashMap<String, u32>>,
    document_count: usize,
}

fn by_usage(a: &MaterialUsageStats, b: &MaterialUsageStats) -> Ordering {
    b.total_usage_count
        .cmp(&a.total_usage_count)
        .then_with(|| b.last_used_at.cmp(&a.last_used_at))
        .then_with(|| a.key.cmp(&b.key))
}

impl UsageSnapshot {
    pub(super) fn new(
        mut stats: Vec<MaterialUsageStats>,
        co_occurrence: HashMap<String, HashMap<String, u32>>,
        document_count: usize,
    ) -> Self {
        stats.sort_by(by_usage);
        let index = stats
            .iter()
            .enumerate()
            .map(|(i, s)| (s.key.clone(), i))
            .collect();
        Self {
            stats,
            index,
            co_occurrence,
            document_count,
        }
    }

    /// 对完整历史折叠
    pub fn build<'a>(documents: impl IntoIterator<Item = &'a HistoryDocument>) -> Self {
        documents
            .into_iter()
            .fold(UsageAccumulator::new(), UsageAccumulator::accumulate)
            .finish()
    }

    pub fn stats(&self) -> &[MaterialUsageStats] {
        &self.stats
    }

    pub fn stats_for(&self, name: &str) -> Option<&MaterialUsageStats> {
        self.index.get(&normalize_key(name)).map(|&i| &self.stats[i])
    }

    /// 最常用物料
    pub fn frequently_used(&self, limit: usize) -> Vec<&MaterialUsageStats> {
        self.stats.iter().take(limit).collect()
    }

    /// 在某作业类型下使用过的物料（大小写不敏感的子串匹配）
    pub fn materials_for_job_type(&self, job_type: &str, limit: usize) -> Vec<&MaterialUsageStats> {
        self.stats
            .iter()
            .filter(|s| s.used_for_job_type(job_type))
            .take(limit)
            .collect()
    }

    /// 与某物料经常一起出现的物料，按共现次数降序、名称升序
    pub fn commonly_used_with(&self, name: &str, limit: usize) -> Vec<&MaterialUsageStats> {
        let Some(partners) = self.co_occurrence.get(&normalize_key(name)) else {
            return Vec::new();
        };

        let mut ranked: Vec<(&String, u32)> = partners.iter().map(|(k, c)| (k, *c)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        ranked
            .into_iter()
            .filter_map(|(key, _)| self.index.get(key).map(|&i| &self.stats[i]))
            .take(limit)
            .collect()
    }

    /// 两个物料同时出现的作业/发票数
    pub fn pair_count(&self, a: &str, b: &str) -> u32 {
        self.co_occurrence
            .get(&normalize_key(a))
            .and_then(|partners| partners.get(&normalize_key(b)))
            .copied()
            .unwrap_or(0)
    }

    pub fn document_count(&self) -> usize {
        self.document_count
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::HistoryLineItem;
    use chrono::{Duration, TimeZone, Utc};

    fn history() -> Vec<HistoryDocument> {
        let base = Utc.with_ymd_and_hms(2026, 2, 1, 8, 0, 0).unwrap();
        vec![
            HistoryDocument::job("j-1", "Interior Wall", base)
                .with_material(HistoryLineItem::new("Drywall screws", 10.0, 8.0))
                .with_material(HistoryLineItem::new("Joint Compound", 1.0, 18.0)),
            HistoryDocument::job("j-2", "Interior Wall", base + Duration::days(1))
                .with_material(HistoryLineItem::new("Drywall screws", 20.0, 9.0))
                .with_material(HistoryLineItem::new("Joint Compound", 2.0, 18.0)),
            HistoryDocument::invoice("i-1", "Basement finish", base + Duration::days(2))
                .with_material(HistoryLineItem::new("drywall screws", 30.0, 10.0))
                .with_material(HistoryLineItem::new("Caulk", 1.0, 6.5)),
        ]
    }

    #[test]
    fn test_averages() {
        let snapshot = UsageSnapshot::build(&history());
        let screws = snapshot.stats_for("Drywall Screws").unwrap();
        assert_eq!(screws.total_usage_count, 3);
        assert_eq!(screws.average_quantity, Some(20.0));
        assert_eq!(screws.average_unit_cost, Some(9.0));
        assert_eq!(snapshot.document_count(), 3);
    }

    #[test]
    fn test_frequently_used_ordering() {
        let snapshot = UsageSnapshot::build(&history());
        let names: Vec<&str> = snapshot.frequently_used(10).iter().map(|s| s.key.as_str()).collect();
        assert_eq!(names, vec!["drywall screws", "joint compound", "caulk"]);
        assert_eq!(snapshot.frequently_used(1).len(), 1);
    }

    #[test]
    fn test_materials_for_job_type() {
        let snapshot = UsageSnapshot::build(&history());
        let wall: Vec<&str> = snapshot
            .materials_for_job_type("interior", 10)
            .iter()
            .map(|s| s.key.as_str())
            .collect();
        assert_eq!(wall, vec!["drywall screws", "joint compound"]);
        assert!(snapshot.materials_for_job_type("", 10).is_empty());
    }

    #[test]
    fn test_commonly_used_with() {
        let snapshot = UsageSnapshot::build(&history());
        let partners: Vec<&str> = snapshot
            .commonly_used_with("DRYWALL SCREWS", 10)
            .iter()
            .map(|s| s.key.as_str())
            .collect();
        assert_eq!(partners, vec!["joint compound", "caulk"]);
        assert_eq!(snapshot.pair_count("joint compound", "drywall screws"), 2);
        assert_eq!(snapshot.pair_count("drywall screws", "joint compound"), 2);
        assert!(snapshot.commonly_used_with("unknown", 10).is_empty());
    }

    #[test]
    fn test_empty_history() {
        let snapshot = UsageSnapshot::build(&Vec::<HistoryDocument>::new());
        assert!(snapshot.is_empty());
        assert!(snapshot.frequently_used(5).is_empty());
    }
}

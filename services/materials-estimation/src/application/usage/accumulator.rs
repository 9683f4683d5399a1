//! 使用统计累加器

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use common::normalize_key;

use super::UsageSnapshot;
use crate::application::sanitize::sanitize_logged;
use crate::domain::value_objects::{HistoryDocument, MaterialUsageStats};

#[derive(Debug, Clone, Default)]
struct Tally {
    name: String,
    count: u32,
    quantity_sum: f64,
    unit_cost_sum: f64,
    last_used_at: Option<DateTime<Utc>>,
    job_types: BTreeMap<String, u32>,
    units: BTreeMap<String, u32>,
}

impl Tally {
    fn finish(self, key: String) -> MaterialUsageStats {
        let average = |sum: f64| (self.count > 0).then(|| sanitize_logged(sum / f64::from(self.count), "average"));
        let most_common_unit = self
            .units
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(unit, _)| unit.clone());

        MaterialUsageStats {
            key,
            average_quantity: average(self.quantity_sum),
            average_unit_cost: average(self.unit_cost_sum),
            name: self.name,
            total_usage_count: self.count,
            last_used_at: self.last_used_at,
            job_types: self.job_types,
            units: self.units,
            most_common_unit,
        }
    }
}

/// 历史折叠的累加状态
///
/// `accumulate` 按值接收并返回新的状态，配合 `Iterator::fold` 使用。
#[derive(Debug, Clone, Default)]
pub struct UsageAccumulator {
    tallies: HashMap<String, Tally>,
    co_occurrence: HashMap<String, HashMap<String, u32>>,
    documents: usize,
}

impl UsageAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 累加一个作业或发票
    pub fn accumulate(mut self, document: &HistoryDocument) -> Self {
        let title = document.title.trim();
        let mut seen = BTreeSet::new();

        for line in &document.materials {
            let key = normalize_key(&line.name);
            if key.is_empty() {
                continue;
            }

            let tally = self.tallies.entry(key.clone()).or_insert_with(|| Tally {
                name: line.name.trim().to_string(),
                ..Default::default()
            });
            tally.count += 1;
            tally.quantity_sum += sanitize_logged(line.quantity, "history_quantity");
            tally.unit_cost_sum += sanitize_logged(line.unit_cost, "history_unit_cost");
            tally.last_used_at = tally.last_used_at.max(Some(document.timestamp));
            if !title.is_empty() {
                *tally.job_types.entry(title.to_string()).or_default() += 1;
            }
            if let Some(unit) = line.unit.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
                *tally.units.entry(unit.to_string()).or_default() += 1;
            }

            seen.insert(key);
        }

        for a in &seen {
            for b in seen.iter().filter(|b| *b != a) {
                *self
                    .co_occurrence
                    .entry(a.clone())
                    .or_default()
                    .entry(b.clone())
                    .or_default() += 1;
            }
        }

        self.documents += 1;
        self
    }

    /// 计算平均值和最常用单位，生成只读快照
    pub fn finish(self) -> UsageSnapshot {
        let stats = self
            .tallies
            .into_iter()
            .map(|(key, tally)| tally.finish(key))
            .collect();
        UsageSnapshot::new(stats, self.co_occurrence, self.documents)
    }
}

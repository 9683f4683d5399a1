//! 物料使用统计

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 单个物料（按归一化名称）的历史使用统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialUsageStats {
    /// 归一化名称（聚合键）
    pub key: String,
    /// 首次出现时的显示名称
    pub name: String,
    pub total_usage_count: u32,
    pub average_quantity: Option<f64>,
    pub average_unit_cost: Option<f64>,
    pub last_used_at: Option<DateTime<Utc>>,
    /// 作业类型 / 发票标题 → 次数
    pub job_types: BTreeMap<String, u32>,
    /// 单位 → 次数
    pub units: BTreeMap<String, u32>,
    pub most_common_unit: Option<String>,
}

impl MaterialUsageStats {
    /// 是否在某作业类型下使用过（大小写不敏感的子串匹配）
    pub fn used_for_job_type(&self, job_type: &str) -> bool {
        let needle = job_type.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        self.job_types
            .keys()
            .any(|key| key.to_lowercase().contains(&needle))
    }
}

//! 估算请求与响应

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::Material;
use crate::domain::enums::{JobType, RecommendationArchetype};
use crate::domain::value_objects::{JobContext, MaterialMatchResult, MaterialUsageStats, QuantityContext};

/// 一次估算请求，按 `mode` 区分
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum EstimateRequest {
    /// 固定作业类型
    JobType {
        job_type: JobType,
        #[serde(default)]
        context: QuantityContext,
    },
    /// 推荐原型 + 目录对账
    Recommend {
        archetype: RecommendationArchetype,
        #[serde(default)]
        context: JobContext,
        /// 物料名称 → 兜底单价
        #[serde(default)]
        fallback_costs: HashMap<String, f64>,
    },
    /// 自由文本关键字
    Keywords { description: String },
    /// 最接近的目录条目
    Match {
        name: String,
        #[serde(default)]
        unit: Option<String>,
        #[serde(default)]
        unit_cost: f64,
        #[serde(default)]
        limit: Option<usize>,
    },
    /// 使用统计查询，读取后台任务最近发布的快照
    Usage { query: UsageQuery },
}

/// 运行器输入：一个估算请求，以及可选的历史作业/发票
///
/// 历史数据不属于请求本身，调用方需先通过 `UsageFeed` 推送，再执行 `request`。
#[derive(Debug, Clone, Deserialize)]
pub struct EstimateInput {
    #[serde(flatten)]
    pub request: EstimateRequest,
    #[serde(default)]
    pub jobs: Vec<Value>,
    #[serde(default)]
    pub invoices: Vec<Value>,
}

impl EstimateInput {
    pub fn has_history(&self) -> bool {
        !self.jobs.is_empty() || !self.invoices.is_empty()
    }
}

/// 使用统计查询
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UsageQuery {
    FrequentlyUsed {
        #[serde(default)]
        limit: Option<usize>,
    },
    ForJobType {
        job_type: String,
        #[serde(default)]
        limit: Option<usize>,
    },
    CommonlyUsedWith {
        name: String,
        #[serde(default)]
        limit: Option<usize>,
    },
}

/// 估算响应
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum EstimateResponse {
    Materials(Vec<Material>),
    Matches(Vec<MaterialMatchResult>),
    Usage(Vec<MaterialUsageStats>),
}

impl EstimateResponse {
    pub fn len(&self) -> usize {
        match self {
            EstimateResponse::Materials(items) => items.len(),
            EstimateResponse::Matches(items) => items.len(),
            EstimateResponse::Usage(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

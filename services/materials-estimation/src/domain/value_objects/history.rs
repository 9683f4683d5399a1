//! 历史作业/发票文档

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::Material;

/// 文档来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    Job,
    Invoice,
}

impl HistoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryKind::Job => "job",
            HistoryKind::Invoice => "invoice",
        }
    }
}

/// 历史行项目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryLineItem {
    pub name: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit_cost: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

impl HistoryLineItem {
    pub fn new(name: impl Into<String>, quantity: f64, unit_cost: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_cost,
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

impl From<&Material> for HistoryLineItem {
    fn from(material: &Material) -> Self {
        Self {
            name: material.name().to_string(),
            quantity: material.quantity(),
            unit_cost: material.unit_cost(),
            unit: material.unit().map(str::to_string),
        }
    }
}

/// 一个历史作业或发票，及其物料行项目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryDocument {
    pub kind: HistoryKind,
    pub id: String,
    /// 作业类型（作业）或标题（发票）
    #[serde(alias = "job_type")]
    pub title: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub materials: Vec<HistoryLineItem>,
}

impl HistoryDocument {
    pub fn job(id: impl Into<String>, job_type: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind: HistoryKind::Job,
            id: id.into(),
            title: job_type.into(),
            timestamp,
            materials: Vec::new(),
        }
    }

    pub fn invoice(id: impl Into<String>, title: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind: HistoryKind::Invoice,
            id: id.into(),
            title: title.into(),
            timestamp,
            materials: Vec::new(),
        }
    }

    pub fn with_material(mut self, item: HistoryLineItem) -> Self {
        self.materials.push(item);
        self
    }

    /// 从外部存储的 JSON 文档解码
    pub fn decode(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// 批量解码；无法解码的文档被跳过，返回值第二项为跳过数量
pub fn decode_documents(values: Vec<serde_json::Value>) -> (Vec<HistoryDocument>, usize) {
    let mut skipped = 0;
    let documents = values
        .into_iter()
        .filter_map(|value| match HistoryDocument::decode(value) {
            Ok(document) => Some(document),
            Err(e) => {
                debug!(error = %e, "Skipping undecodable history document");
                skipped += 1;
                None
            }
        })
        .collect();
    (documents, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_skips_bad_documents() {
        let values = vec![
            json!({
                "kind": "job",
                "id": "j-1",
                "job_type": "Paint Room",
                "timestamp": "2026-03-01T12:00:00Z",
                "materials": [{"name": "Caulk", "quantity": 2, "unit_cost": 6.5, "unit": "tube"}]
            }),
            json!({"kind": "job", "id": "j-2"}),
            json!("not a document"),
            json!({
                "kind": "invoice",
                "id": "i-1",
                "title": "Kitchen backsplash",
                "timestamp": "2026-03-02T12:00:00Z"
            }),
        ];

        let (documents, skipped) = decode_documents(values);
        assert_eq!(documents.len(), 2);
        assert_eq!(skipped, 2);
        assert_eq!(documents[0].title, "Paint Room");
        assert_eq!(documents[0].materials[0].unit.as_deref(), Some("tube"));
        assert!(documents[1].materials.is_empty());
    }
}

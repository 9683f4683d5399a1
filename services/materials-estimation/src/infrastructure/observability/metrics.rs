//! Materials Estimation Metrics
//!
//! 业务指标记录

use metrics::{counter, gauge, histogram};
use std::time::Instant;

// ============================================================================
// 数值清洗 Metrics
// ============================================================================

/// 记录一次非有限值被强制为 0
pub fn record_sanitized_value(field: &str) {
    let labels = [("field", field.to_string())];
    counter!("estimation_sanitized_values_total", &labels).increment(1);
}

// ============================================================================
// 数量计算 Metrics
// ============================================================================

/// 记录生成器引用了快照中不存在的目录条目
pub fn record_catalog_reference_skipped(job_type: &str) {
    let labels = [("job_type", job_type.to_string())];
    counter!("estimation_catalog_reference_skipped_total", &labels).increment(1);
}

/// 记录数量为 0 的原因
pub fn record_zero_quantity(reason: &str) {
    let labels = [("reason", reason.to_string())];
    counter!("estimation_zero_quantity_total", &labels).increment(1);
}

/// 记录一次估算请求
pub fn record_estimate(operation: &str, line_items: usize) {
    let labels = [("operation", operation.to_string())];
    counter!("estimation_requests_total", &labels).increment(1);
    histogram!("estimation_line_items", &labels).record(line_items as f64);
}

// ============================================================================
// 使用统计 Metrics
// ============================================================================

/// 记录无法解码而被跳过的历史文档
pub fn record_history_documents_skipped(count: usize) {
    if count > 0 {
        counter!("usage_history_documents_skipped_total").increment(count as u64);
    }
}

/// 记录一次使用统计重建
pub fn record_usage_rebuild(start: Instant, documents: usize, materials: usize) {
    counter!("usage_rebuilds_total").increment(1);
    histogram!("usage_rebuild_duration_seconds").record(start.elapsed().as_secs_f64());
    gauge!("usage_history_documents").set(documents as f64);
    gauge!("usage_tracked_materials").set(materials as f64);
}

//! 带日志的数值清洗

use tracing::warn;

use crate::infrastructure::observability::metrics;

/// 清洗即将对外暴露的数值；非有限值记录告警后强制为 0
pub fn sanitize_logged(value: f64, field: &'static str) -> f64 {
    if value.is_finite() {
        return value;
    }
    warn!(field, value = %value, "Non-finite value coerced to zero");
    metrics::record_sanitized_value(field);
    0.0
}

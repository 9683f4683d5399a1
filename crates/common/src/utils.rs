//! 通用工具函数

use uuid::Uuid;

/// 生成新的 UUID v7（时间有序）
pub fn new_id() -> Uuid {
    Uuid::now_v7()
}

/// 归一化名称键：去除首尾空白并转为小写
///
/// 用于物料名称的聚合和查找，保证 "Drywall Screws " 与 "drywall screws" 视为同一键。
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

//! 计量单位：归一化、分类与取整策略

use serde::{Deserialize, Serialize};

use crate::numeric::{ceil_units, round_up_to_hundredth, sanitize};

/// 离散单位（按件购买）的归一化形式
const DISCRETE_UNITS: [&str; 8] = ["each", "sheet", "bag", "box", "coil", "can", "tube", "roll"];

/// 单位取整类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    /// 离散：向上取整为整数，最小为 1
    Discrete,
    /// 连续：向上取整到 0.01
    Continuous,
}

impl UnitKind {
    /// 按单位字符串判定类别；未知单位按连续处理
    pub fn of(unit: &str) -> Self {
        let normalized = normalize_unit(unit);
        if DISCRETE_UNITS.contains(&normalized.as_str()) {
            UnitKind::Discrete
        } else {
            UnitKind::Continuous
        }
    }
}

/// 覆盖量所度量的维度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// 面积（平方英尺）
    Area,
    /// 长度（线性英尺）
    Length,
    /// 计数（开口数、卫生间数）
    Count,
    /// 体积（立方英尺）
    Volume,
}

impl Dimension {
    /// 识别覆盖单位；无法识别返回 `None`
    pub fn of_unit(unit: &str) -> Option<Self> {
        match normalize_unit(unit).as_str() {
            "sqft" | "sf" | "ft2" | "sq" => Some(Dimension::Area),
            "linearft" | "linft" | "lf" | "lnft" | "ft" => Some(Dimension::Length),
            "each" | "ea" | "count" | "opening" | "bathroom" => Some(Dimension::Count),
            "cuft" | "cf" | "ft3" | "cubicft" => Some(Dimension::Volume),
            _ => None,
        }
    }
}

/// 归一化单位字符串
///
/// 小写 → "square"→"sq"、"foot"/"feet"→"ft" → 去除非字母数字 → 去复数后缀。
/// `"Square Feet"` / `"sq. ft."` / `"sqft"` 均归一为 `"sqft"`。
pub fn normalize_unit(unit: &str) -> String {
    let lowered = unit
        .trim()
        .to_lowercase()
        .replace("square", "sq")
        .replace("feet", "ft")
        .replace("foot", "ft");

    let stripped: String = lowered.chars().filter(|c| c.is_ascii_alphanumeric()).collect();

    if stripped.len() > 3 && stripped.ends_with("xes") {
        stripped[..stripped.len() - 2].to_string()
    } else if stripped.len() > 2 && stripped.ends_with('s') && !stripped.ends_with("ss") {
        stripped[..stripped.len() - 1].to_string()
    } else {
        stripped
    }
}

/// 两个单位在归一化后是否相同
pub fn units_match(a: &str, b: &str) -> bool {
    let a = normalize_unit(a);
    !a.is_empty() && a == normalize_unit(b)
}

/// 按单位取整策略处理数量
///
/// 非正数或非有限数返回 0；离散单位向上取整且最小为 1；其余单位向上取整到 0.01。
pub fn round_for_unit(quantity: f64, unit: &str) -> f64 {
    let quantity = sanitize(quantity);
    if quantity <= 0.0 {
        return 0.0;
    }
    match UnitKind::of(unit) {
        UnitKind::Discrete => ceil_units(quantity).max(1.0),
        UnitKind::Continuous => round_up_to_hundredth(quantity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_unit() {
        assert_eq!(normalize_unit("Square Feet"), "sqft");
        assert_eq!(normalize_unit("sq. ft."), "sqft");
        assert_eq!(normalize_unit("linear_ft"), "linearft");
        assert_eq!(normalize_unit("Sheets"), "sheet");
        assert_eq!(normalize_unit("boxes"), "box");
        assert_eq!(normalize_unit("gallons"), "gallon");
        assert_eq!(normalize_unit("  "), "");
    }

    #[test]
    fn test_unit_kind() {
        for unit in ["each", "sheet", "bag", "box", "coil", "can", "tube", "roll", "Rolls"] {
            assert_eq!(UnitKind::of(unit), UnitKind::Discrete, "{unit}");
        }
        for unit in ["sqft", "linear_ft", "gallon", "bucket", ""] {
            assert_eq!(UnitKind::of(unit), UnitKind::Continuous, "{unit}");
        }
    }

    #[test]
    fn test_dimension_of_unit() {
        assert_eq!(Dimension::of_unit("sq ft"), Some(Dimension::Area));
        assert_eq!(Dimension::of_unit("linear_ft"), Some(Dimension::Length));
        assert_eq!(Dimension::of_unit("each"), Some(Dimension::Count));
        assert_eq!(Dimension::of_unit("cu ft"), Some(Dimension::Volume));
        assert_eq!(Dimension::of_unit("gallon"), None);
    }

    #[test]
    fn test_round_for_unit() {
        assert_eq!(round_for_unit(17.6, "each"), 18.0);
        assert_eq!(round_for_unit(0.2, "sheet"), 1.0);
        assert_eq!(round_for_unit(0.0, "sheet"), 0.0);
        assert_eq!(round_for_unit(10.123, "sqft"), 10.13);
        assert_eq!(round_for_unit(2.001, "gallon"), 2.01);
        assert_eq!(round_for_unit(f64::NAN, "each"), 0.0);
        assert_eq!(round_for_unit(-3.0, "each"), 0.0);
    }

    #[test]
    fn test_units_match() {
        assert!(units_match("Sq Ft", "sqft"));
        assert!(units_match("sheets", "Sheet"));
        assert!(!units_match("", ""));
        assert!(!units_match("gallon", "quart"));
    }
}

//! 数值工具
//!
//! 所有数量、成本、平均值在对外暴露前都要经过 [`sanitize`]，
//! 保证 NaN / Infinity 不会进入任何计算结果。

/// 容差：用于吸收浮点误差（例如 `20.0 / (16.0 / 12.0)`）
pub const TOLERANCE: f64 = 1e-9;

/// 将非有限值强制为 0
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// 值是否为有限正数
pub fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// 容差向上取整
///
/// 与整数相差不超过 [`TOLERANCE`] 的值按该整数处理，避免 `15.000000000000002` 被取整为 16。
pub fn ceil_units(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let nearest = value.round();
    if (value - nearest).abs() <= TOLERANCE * nearest.abs().max(1.0) {
        nearest
    } else {
        value.ceil()
    }
}

/// 向上取整到 0.01
pub fn round_up_to_hundredth(value: f64) -> f64 {
    sanitize(ceil_units(value * 100.0) / 100.0)
}

/// 向上取整到 0.5（油漆类按半加仑计）
pub fn round_up_to_half(value: f64) -> f64 {
    sanitize(ceil_units(value * 2.0) / 2.0)
}

/// 格式化数量用于说明文字：整数不带小数，其余最多两位小数
pub fn format_quantity(value: f64) -> String {
    let value = sanitize(value);
    if (value - value.round()).abs() <= TOLERANCE {
        return format!("{}", value.round() as i64);
    }
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// 解析用户输入的数字文本
///
/// 支持: 首尾空白、`$` 前缀、千位分隔符 (`1,250.5`)、分数 (`3/4`)、带分数 (`3 1/2`)。
/// 空白、无法解析或非有限的输入返回 `None`（视为"未填写"）。
pub fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let rest = rest.strip_prefix('$').unwrap_or(rest).trim();
    let cleaned: String = rest.chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }

    let parts: Vec<&str> = cleaned.split_whitespace().collect();
    let magnitude = match parts.as_slice() {
        [single] if single.contains('/') => parse_fraction(single)?,
        [single] => parse_plain(single)?,
        [whole, fraction] if fraction.contains('/') => {
            let whole = parse_plain(whole)?;
            if whole.fract() != 0.0 {
                return None;
            }
            whole + parse_fraction(fraction)?
        }
        _ => return None,
    };

    let value = if negative { -magnitude } else { magnitude };
    value.is_finite().then_some(value)
}

/// 解析非负数；负数按未填写处理
pub fn parse_non_negative(text: &str) -> Option<f64> {
    parse_decimal(text).filter(|v| *v >= 0.0)
}

fn parse_plain(text: &str) -> Option<f64> {
    // 只接受数字形式，拒绝 "inf" / "NaN" 这类 f64::from_str 能识别的字面量
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == 'e' || c == 'E' || c == '+' || c == '-')
    {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_fraction(text: &str) -> Option<f64> {
    let (numerator, denominator) = text.split_once('/')?;
    let numerator = parse_plain(numerator.trim())?;
    let denominator = parse_plain(denominator.trim())?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize(f64::NAN), 0.0);
        assert_eq!(sanitize(f64::INFINITY), 0.0);
        assert_eq!(sanitize(f64::NEG_INFINITY), 0.0);
        assert_eq!(sanitize(2.5), 2.5);
    }

    #[test]
    fn test_ceil_units_absorbs_float_noise() {
        assert_eq!(ceil_units(20.0 / (16.0 / 12.0)), 15.0);
        assert_eq!(ceil_units(15.01), 16.0);
        assert_eq!(ceil_units(1.8285714285714285), 2.0);
        assert_eq!(ceil_units(f64::NAN), 0.0);
    }

    #[test]
    fn test_round_up_to_hundredth() {
        assert_eq!(round_up_to_hundredth(1.1), 1.1);
        assert_eq!(round_up_to_hundredth(1.101), 1.11);
        assert_eq!(round_up_to_hundredth(17.6), 17.6);
    }

    #[test]
    fn test_round_up_to_half() {
        assert_eq!(round_up_to_half(1.83), 2.0);
        assert_eq!(round_up_to_half(1.2), 1.5);
        assert_eq!(round_up_to_half(2.0), 2.0);
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(340.0), "340");
        assert_eq!(format_quantity(2.5), "2.5");
        assert_eq!(format_quantity(1.25), "1.25");
        assert_eq!(format_quantity(f64::NAN), "0");
    }

    #[test]
    fn test_parse_decimal_accepts_common_forms() {
        assert_eq!(parse_decimal(" 12 "), Some(12.0));
        assert_eq!(parse_decimal("$1,250.50"), Some(1250.5));
        assert_eq!(parse_decimal("3/4"), Some(0.75));
        assert_eq!(parse_decimal("3 1/2"), Some(3.5));
        assert_eq!(parse_decimal("-4"), Some(-4.0));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("   "), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("inf"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("1/0"), None);
        assert_eq!(parse_decimal("1e400"), None);
        assert_eq!(parse_decimal("1.5 1/2"), None);
        assert_eq!(parse_non_negative("-2"), None);
    }
}

//! 数量计算的几何上下文

use domain_core::{parse_decimal, parse_non_negative};
use serde::{Deserialize, Serialize};

/// 几何上下文
///
/// 所有字段均可缺省。某条规则需要的字段缺失时，该规则得到 0 而不是报错。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantityContext {
    /// 墙长（英尺）
    pub wall_length_ft: Option<f64>,
    /// 墙高（英尺）
    pub wall_height_ft: Option<f64>,
    /// 房间地面面积（平方英尺）
    pub room_floor_area_sqft: Option<f64>,
    /// 房间周长（英尺）
    pub room_perimeter_ft: Option<f64>,
    /// 露台面积（平方英尺）
    pub deck_area_sqft: Option<f64>,
    /// 露台长度（英尺）
    pub deck_length_ft: Option<f64>,
    /// 托梁跨度（英尺）
    pub deck_joist_span_ft: Option<f64>,
    /// 混凝土体积（立方英尺）
    pub concrete_volume_cuft: Option<f64>,
    /// 门窗开口数
    pub opening_count: Option<u32>,
    /// 卫生间数
    pub bathroom_count: Option<u32>,
    /// 瓷砖面积（平方英尺）
    pub tile_area_sqft: Option<f64>,
}

impl QuantityContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// 墙面面积 = 墙高 × 墙长
    pub fn wall_area_sqft(&self) -> Option<f64> {
        Some(self.wall_height_ft? * self.wall_length_ft?)
    }

    /// 房间墙面面积 = 周长 × 墙高
    pub fn room_wall_area_sqft(&self) -> Option<f64> {
        Some(self.room_perimeter_ft? * self.wall_height_ft?)
    }

    pub fn openings(&self) -> Option<f64> {
        self.opening_count.map(f64::from)
    }

    pub fn bathrooms(&self) -> Option<f64> {
        self.bathroom_count.map(f64::from)
    }
}

/// 表单输入（用户在界面上录入的原始文本）
///
/// 空白或无法解析的字段视为未填写；负数同样视为未填写。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantityContextForm {
    pub wall_length_ft: Option<String>,
    pub wall_height_ft: Option<String>,
    pub room_floor_area_sqft: Option<String>,
    pub room_perimeter_ft: Option<String>,
    pub deck_area_sqft: Option<String>,
    pub deck_length_ft: Option<String>,
    pub deck_joist_span_ft: Option<String>,
    pub concrete_volume_cuft: Option<String>,
    pub opening_count: Option<String>,
    pub bathroom_count: Option<String>,
    pub tile_area_sqft: Option<String>,
}

impl QuantityContextForm {
    /// 解析为几何上下文
    pub fn into_context(self) -> QuantityContext {
        QuantityContext {
            wall_length_ft: measurement(self.wall_length_ft),
            wall_height_ft: measurement(self.wall_height_ft),
            room_floor_area_sqft: measurement(self.room_floor_area_sqft),
            room_perimeter_ft: measurement(self.room_perimeter_ft),
            deck_area_sqft: measurement(self.deck_area_sqft),
            deck_length_ft: measurement(self.deck_length_ft),
            deck_joist_span_ft: measurement(self.deck_joist_span_ft),
            concrete_volume_cuft: measurement(self.concrete_volume_cuft),
            opening_count: count(self.opening_count),
            bathroom_count: count(self.bathroom_count),
            tile_area_sqft: measurement(self.tile_area_sqft),
        }
    }
}

fn measurement(text: Option<String>) -> Option<f64> {
    text.as_deref().and_then(parse_non_negative)
}

fn count(text: Option<String>) -> Option<u32> {
    let value = text.as_deref().and_then(parse_decimal)?;
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_area_needs_both_fields() {
        let mut ctx = QuantityContext {
            wall_length_ft: Some(12.0),
            ..Default::default()
        };
        assert_eq!(ctx.wall_area_sqft(), None);
        ctx.wall_height_ft = Some(8.0);
        assert_eq!(ctx.wall_area_sqft(), Some(96.0));
    }

    #[test]
    fn test_form_parsing() {
        let form = QuantityContextForm {
            wall_length_ft: Some(" 12 1/2 ".to_string()),
            wall_height_ft: Some("".to_string()),
            room_floor_area_sqft: Some("1,200".to_string()),
            opening_count: Some("3".to_string()),
            bathroom_count: Some("1.5".to_string()),
            tile_area_sqft: Some("-10".to_string()),
            ..Default::default()
        };
        let ctx = form.into_context();
        assert_eq!(ctx.wall_length_ft, Some(12.5));
        assert_eq!(ctx.wall_height_ft, None);
        assert_eq!(ctx.room_floor_area_sqft, Some(1200.0));
        assert_eq!(ctx.opening_count, Some(3));
        assert_eq!(ctx.bathroom_count, None);
        assert_eq!(ctx.tile_area_sqft, None);
    }

    #[test]
    fn test_deserialize_partial() {
        let ctx: QuantityContext = serde_json::from_str(r#"{"wall_length_ft": 20}"#).unwrap();
        assert_eq!(ctx.wall_length_ft, Some(20.0));
        assert!(ctx.wall_height_ft.is_none());
    }
}

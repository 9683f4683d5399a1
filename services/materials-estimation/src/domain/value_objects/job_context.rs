//! 推荐器输入

use serde::{Deserialize, Serialize};

/// 推荐器的作业尺寸
///
/// 面积优先取 `area_sqft`，否则取长 × 宽；周长取 2 × (长 + 宽)。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobContext {
    pub length_ft: Option<f64>,
    pub width_ft: Option<f64>,
    pub height_ft: Option<f64>,
    pub area_sqft: Option<f64>,
    /// 涂刷遍数
    pub coats: Option<u32>,
    pub doors: u32,
    pub windows: u32,
    pub bathrooms: u32,
}

impl JobContext {
    /// 按长宽构造
    pub fn rectangle(length_ft: f64, width_ft: f64) -> Self {
        Self {
            length_ft: Some(length_ft),
            width_ft: Some(width_ft),
            ..Default::default()
        }
    }

    pub fn with_height(mut self, height_ft: f64) -> Self {
        self.height_ft = Some(height_ft);
        self
    }

    pub fn with_openings(mut self, doors: u32, windows: u32) -> Self {
        self.doors = doors;
        self.windows = windows;
        self
    }

    pub fn with_coats(mut self, coats: u32) -> Self {
        self.coats = Some(coats);
        self
    }

    /// 面积；给定面积优先
    pub fn area(&self) -> Option<f64> {
        self.area_sqft
            .filter(|a| a.is_finite() && *a > 0.0)
            .or_else(|| match (self.length_ft, self.width_ft) {
                (Some(l), Some(w)) => Some(l * w),
                _ => None,
            })
            .filter(|a| a.is_finite() && *a > 0.0)
    }

    /// 周长；长宽都有时为 2 × (长 + 宽)，只有面积时按正方形估算
    pub fn perimeter(&self) -> Option<f64> {
        match (self.length_ft, self.width_ft) {
            (Some(l), Some(w)) => Some(2.0 * (l + w)),
            _ => self.area_sqft.filter(|a| *a > 0.0).map(|a| 4.0 * a.sqrt()),
        }
        .filter(|p| p.is_finite() && *p > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_prefers_supplied_value() {
        let mut ctx = JobContext::rectangle(10.0, 12.0);
        assert_eq!(ctx.area(), Some(120.0));
        ctx.area_sqft = Some(100.0);
        assert_eq!(ctx.area(), Some(100.0));
    }

    #[test]
    fn test_perimeter() {
        assert_eq!(JobContext::rectangle(10.0, 12.0).perimeter(), Some(44.0));
        let square = JobContext {
            area_sqft: Some(100.0),
            ..Default::default()
        };
        assert_eq!(square.perimeter(), Some(40.0));
        assert_eq!(JobContext::default().perimeter(), None);
    }
}

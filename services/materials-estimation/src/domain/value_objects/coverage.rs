//! 覆盖量值对象

use domain_core::{Dimension, format_quantity};
use errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// 覆盖量：一个采购单位可以覆盖多少面积/长度/数量
///
/// 例如一卷垫层覆盖 100 sq ft：`Coverage { quantity: 100.0, unit: "sqft" }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coverage {
    pub quantity: f64,
    pub unit: String,
}

impl Coverage {
    /// 创建覆盖量，数量必须为有限正数
    pub fn new(quantity: f64, unit: impl Into<String>) -> AppResult<Self> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(AppError::validation(format!(
                "coverage quantity must be > 0, got {quantity}"
            )));
        }
        Ok(Self {
            quantity,
            unit: unit.into(),
        })
    }

    /// 覆盖单位对应的维度；无法识别返回 `None`
    pub fn dimension(&self) -> Option<Dimension> {
        Dimension::of_unit(&self.unit)
    }

    /// 说明文字，例如 "20 sqft"
    pub fn describe(&self) -> String {
        format!("{} {}", format_quantity(self.quantity), self.unit)
    }
}

//! 物料类别

use serde::{Deserialize, Serialize};

/// 物料类别
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialCategory {
    Lumber,
    Drywall,
    Insulation,
    Paint,
    Flooring,
    Tile,
    Trim,
    Decking,
    Concrete,
    Roofing,
    Plumbing,
    Electrical,
    Fasteners,
    Adhesives,
    Supplies,
    /// 自定义类别，附带自由文本标签
    Custom(String),
}

impl MaterialCategory {
    /// 显示标签
    pub fn label(&self) -> &str {
        match self {
            MaterialCategory::Lumber => "Lumber",
            MaterialCategory::Drywall => "Drywall",
            MaterialCategory::Insulation => "Insulation",
            MaterialCategory::Paint => "Paint",
            MaterialCategory::Flooring => "Flooring",
            MaterialCategory::Tile => "Tile",
            MaterialCategory::Trim => "Trim",
            MaterialCategory::Decking => "Decking",
            MaterialCategory::Concrete => "Concrete",
            MaterialCategory::Roofing => "Roofing",
            MaterialCategory::Plumbing => "Plumbing",
            MaterialCategory::Electrical => "Electrical",
            MaterialCategory::Fasteners => "Fasteners",
            MaterialCategory::Adhesives => "Adhesives",
            MaterialCategory::Supplies => "Supplies",
            MaterialCategory::Custom(label) => label.as_str(),
        }
    }
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

//! 推荐原型（与目录无关的尺寸推荐）

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UnknownIdentifier;

/// 推荐原型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RecommendationArchetype {
    InteriorWallBuild,
    LvpFlooring,
    PaintRoom,
    /// 涂刷 + 地面，两组推荐直接拼接
    BasicBathroomRemodel,
    ExteriorPaint,
    TileBacksplash,
    DeckBuild,
    RoofShingleReplacement,
}

impl RecommendationArchetype {
    pub const ALL: [RecommendationArchetype; 8] = [
        RecommendationArchetype::InteriorWallBuild,
        RecommendationArchetype::LvpFlooring,
        RecommendationArchetype::PaintRoom,
        RecommendationArchetype::BasicBathroomRemodel,
        RecommendationArchetype::ExteriorPaint,
        RecommendationArchetype::TileBacksplash,
        RecommendationArchetype::DeckBuild,
        RecommendationArchetype::RoofShingleReplacement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationArchetype::InteriorWallBuild => "interior_wall_build",
            RecommendationArchetype::LvpFlooring => "lvp_flooring",
            RecommendationArchetype::PaintRoom => "paint_room",
            RecommendationArchetype::BasicBathroomRemodel => "basic_bathroom_remodel",
            RecommendationArchetype::ExteriorPaint => "exterior_paint",
            RecommendationArchetype::TileBacksplash => "tile_backsplash",
            RecommendationArchetype::DeckBuild => "deck_build",
            RecommendationArchetype::RoofShingleReplacement => "roof_shingle_replacement",
        }
    }
}

impl std::fmt::Display for RecommendationArchetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecommendationArchetype {
    type Err = UnknownIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        RecommendationArchetype::ALL
            .iter()
            .copied()
            .find(|a| a.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| UnknownIdentifier::new("archetype", s))
    }
}

impl TryFrom<String> for RecommendationArchetype {
    type Error = UnknownIdentifier;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RecommendationArchetype> for String {
    fn from(archetype: RecommendationArchetype) -> Self {
        archetype.as_str().to_string()
    }
}

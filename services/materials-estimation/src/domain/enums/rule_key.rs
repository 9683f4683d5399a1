//! 数量规则键

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UnknownIdentifier;

/// 数量规则键
///
/// 每个目录条目可以声明一个规则键，用于选择数量公式；未声明的条目只能手工填写数量。
/// 规则集合是封闭的，公式分派由编译器保证穷尽。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RuleKey {
    // 墙体框架与石膏板
    StudsSixteenOc,
    WallPlates,
    DrywallSheets,
    DrywallScrews,
    JointCompound,
    DrywallTape,
    WallInsulation,
    // 涂料
    PaintGallons,
    PrimerGallons,
    PaintersTape,
    CaulkTubes,
    // 地面
    FlooringTenPctWaste,
    UnderlaymentRolls,
    BaseboardLinearFt,
    TransitionStrips,
    // 混凝土与露台
    ConcreteBags,
    DeckBoards,
    DeckPosts,
    DeckJoists,
    JoistHangers,
    DeckBeams,
    DeckScrews,
    JoistLumberLf,
    // 管道
    PexTubing,
    PexFittings,
    ShutoffValves,
    // 瓷砖
    TileSqft,
    ThinsetBags,
    GroutBags,
    CementBoardSheets,
    // 门窗
    WindowFlashingRolls,
    WindowShims,
    WindowFoamCans,
}

impl RuleKey {
    pub const ALL: [RuleKey; 33] = [
        RuleKey::StudsSixteenOc,
        RuleKey::WallPlates,
        RuleKey::DrywallSheets,
        RuleKey::DrywallScrews,
        RuleKey::JointCompound,
        RuleKey::DrywallTape,
        RuleKey::WallInsulation,
        RuleKey::PaintGallons,
        RuleKey::PrimerGallons,
        RuleKey::PaintersTape,
        RuleKey::CaulkTubes,
        RuleKey::FlooringTenPctWaste,
        RuleKey::UnderlaymentRolls,
        RuleKey::BaseboardLinearFt,
        RuleKey::TransitionStrips,
        RuleKey::ConcreteBags,
        RuleKey::DeckBoards,
        RuleKey::DeckPosts,
        RuleKey::DeckJoists,
        RuleKey::JoistHangers,
        RuleKey::DeckBeams,
        RuleKey::DeckScrews,
        RuleKey::JoistLumberLf,
        RuleKey::PexTubing,
        RuleKey::PexFittings,
        RuleKey::ShutoffValves,
        RuleKey::TileSqft,
        RuleKey::ThinsetBags,
        RuleKey::GroutBags,
        RuleKey::CementBoardSheets,
        RuleKey::WindowFlashingRolls,
        RuleKey::WindowShims,
        RuleKey::WindowFoamCans,
    ];

    /// 规则标识符
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKey::StudsSixteenOc => "studs_16oc",
            RuleKey::WallPlates => "wall_plates",
            RuleKey::DrywallSheets => "drywall_sheets",
            RuleKey::DrywallScrews => "drywall_screws",
            RuleKey::JointCompound => "joint_compound",
            RuleKey::DrywallTape => "drywall_tape",
            RuleKey::WallInsulation => "wall_insulation",
            RuleKey::PaintGallons => "paint_gallons",
            RuleKey::PrimerGallons => "primer_gallons",
            RuleKey::PaintersTape => "painters_tape",
            RuleKey::CaulkTubes => "caulk_tubes",
            RuleKey::FlooringTenPctWaste => "flooring_10pct_waste",
            RuleKey::UnderlaymentRolls => "underlayment_rolls",
            RuleKey::BaseboardLinearFt => "baseboard_linear_ft",
            RuleKey::TransitionStrips => "transition_strips",
            RuleKey::ConcreteBags => "concrete_bags",
            RuleKey::DeckBoards => "deck_boards",
            RuleKey::DeckPosts => "deck_posts",
            RuleKey::DeckJoists => "deck_joists",
            RuleKey::JoistHangers => "joist_hangers",
            RuleKey::DeckBeams => "deck_beams",
            RuleKey::DeckScrews => "deck_screws",
            RuleKey::JoistLumberLf => "joist_lumber_lf",
            RuleKey::PexTubing => "pex_tubing",
            RuleKey::PexFittings => "pex_fittings",
            RuleKey::ShutoffValves => "shutoff_valves",
            RuleKey::TileSqft => "tile_sqft",
            RuleKey::ThinsetBags => "thinset_bags",
            RuleKey::GroutBags => "grout_bags",
            RuleKey::CementBoardSheets => "cement_board_sheets",
            RuleKey::WindowFlashingRolls => "window_flashing_rolls",
            RuleKey::WindowShims => "window_shims",
            RuleKey::WindowFoamCans => "window_foam_cans",
        }
    }
}

impl std::fmt::Display for RuleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RuleKey {
    type Err = UnknownIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        RuleKey::ALL
            .iter()
            .copied()
            .find(|rule| rule.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| UnknownIdentifier::new("rule key", s))
    }
}

impl TryFrom<String> for RuleKey {
    type Error = UnknownIdentifier;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RuleKey> for String {
    fn from(rule: RuleKey) -> Self {
        rule.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_parses_back() {
        for rule in RuleKey::ALL {
            assert_eq!(rule.as_str().parse::<RuleKey>().unwrap(), rule);
        }
    }

    #[test]
    fn test_unknown_rule() {
        let err = "gold_leaf".parse::<RuleKey>().unwrap_err();
        assert_eq!(err.value, "gold_leaf");
    }

    #[test]
    fn test_serde_uses_identifier() {
        let json = serde_json::to_string(&RuleKey::FlooringTenPctWaste).unwrap();
        assert_eq!(json, "\"flooring_10pct_waste\"");
        let rule: RuleKey = serde_json::from_str("\"studs_16oc\"").unwrap();
        assert_eq!(rule, RuleKey::StudsSixteenOc);
    }
}

//! 作业类型（目录驱动的物料生成）

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UnknownIdentifier;

/// 作业类型
///
/// 每种作业类型对应一个固定顺序的目录条目 ID 列表，数量由规则引擎计算。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum JobType {
    InteriorWall,
    LvpFloor,
    PaintRoom,
    BasicBathRemodel,
    DeckSurfaceReplace,
    WindowInstall,
}

impl JobType {
    pub const ALL: [JobType; 6] = [
        JobType::InteriorWall,
        JobType::LvpFloor,
        JobType::PaintRoom,
        JobType::BasicBathRemodel,
        JobType::DeckSurfaceReplace,
        JobType::WindowInstall,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::InteriorWall => "interior_wall",
            JobType::LvpFloor => "lvp_floor",
            JobType::PaintRoom => "paint_room",
            JobType::BasicBathRemodel => "basic_bath_remodel",
            JobType::DeckSurfaceReplace => "deck_surface_replace",
            JobType::WindowInstall => "window_install",
        }
    }

    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            JobType::InteriorWall => "Interior Wall",
            JobType::LvpFloor => "LVP Floor",
            JobType::PaintRoom => "Paint Room",
            JobType::BasicBathRemodel => "Basic Bath Remodel",
            JobType::DeckSurfaceReplace => "Deck Surface Replace",
            JobType::WindowInstall => "Window Install",
        }
    }

    /// 该作业类型使用的目录条目 ID（按输出顺序）
    pub fn catalog_item_ids(&self) -> &'static [&'static str] {
        match self {
            JobType::InteriorWall => &[
                "stud_2x4_8ft",
                "plate_2x4_16ft",
                "drywall_half_4x8",
                "drywall_screws_box",
                "joint_compound_box",
                "drywall_tape_roll",
                "wall_insulation_bag",
                "construction_adhesive_tube",
            ],
            JobType::LvpFloor => &[
                "lvp_plank_box",
                "underlayment_roll",
                "baseboard_lf",
                "transition_strip",
                "flooring_spacers_bag",
            ],
            JobType::PaintRoom => &[
                "paint_interior_gallon",
                "primer_gallon",
                "painters_tape_roll",
                "caulk_tube",
                "roller_cover",
                "drop_cloth",
            ],
            JobType::BasicBathRemodel => &[
                "pex_coil",
                "pex_fitting",
                "shutoff_valve",
                "cement_board_sheet",
                "thinset_bag",
                "grout_bag",
                "tile_floor_sqft",
                "paint_interior_gallon",
                "caulk_tube",
            ],
            JobType::DeckSurfaceReplace => &[
                "deck_board_16ft",
                "deck_screws_box",
                "joist_hanger",
                "joist_tape_roll",
            ],
            JobType::WindowInstall => &[
                "window_flashing_roll",
                "window_shims_pack",
                "window_foam_can",
                "caulk_tube",
            ],
        }
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobType {
    type Err = UnknownIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        JobType::ALL
            .iter()
            .copied()
            .find(|job| job.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| UnknownIdentifier::new("job type", s))
    }
}

impl TryFrom<String> for JobType {
    type Error = UnknownIdentifier;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<JobType> for String {
    fn from(job: JobType) -> Self {
        job.as_str().to_string()
    }
}

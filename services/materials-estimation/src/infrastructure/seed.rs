//! 默认全局目录
//!
//! 作业类型生成器按稳定 ID 引用这里的条目；推荐器的物料名称与这里的名称对齐，
//! 以便对账时能找到目录价格和覆盖量。

use errors::AppResult;

use crate::domain::entities::{CatalogItem, CatalogSnapshot};
use crate::domain::enums::{MaterialCategory as C, RuleKey as R};

fn item(id: &str, name: &str, category: C, unit: &str, cost: f64) -> CatalogItem {
    CatalogItem::new(id, name, category, unit, cost)
}

/// 默认全局目录条目
pub fn global_catalog() -> AppResult<Vec<CatalogItem>> {
    Ok(vec![
        // 墙体
        item("stud_2x4_8ft", "2x4 Stud 8ft", C::Lumber, "each", 4.25).with_rule(R::StudsSixteenOc),
        item("plate_2x4_16ft", "2x4 Plate 16ft", C::Lumber, "each", 9.50).with_rule(R::WallPlates),
        item("drywall_half_4x8", "Drywall Sheet 1/2in 4x8", C::Drywall, "sheet", 15.00)
            .with_rule(R::DrywallSheets)
            .with_waste_factor(0.10)?,
        item("drywall_screws_box", "Drywall Screws", C::Fasteners, "box", 8.50)
            .with_rule(R::DrywallScrews),
        item("joint_compound_box", "Joint Compound", C::Drywall, "box", 18.00)
            .with_rule(R::JointCompound),
        item("drywall_tape_roll", "Drywall Tape", C::Drywall, "roll", 6.00).with_rule(R::DrywallTape),
        item("wall_insulation_bag", "Wall Insulation", C::Insulation, "bag", 42.00)
            .with_rule(R::WallInsulation),
        item("construction_adhesive_tube", "Construction Adhesive", C::Adhesives, "tube", 6.00),
        item("corner_bead", "Corner Bead", C::Drywall, "each", 4.50),
        // 地面
        item("lvp_plank_box", "LVP Flooring", C::Flooring, "box", 55.00)
            .with_rule(R::FlooringTenPctWaste)
            .with_waste_factor(0.10)?
            .with_coverage(20.0, "sqft")?,
        item("underlayment_roll", "Underlayment", C::Flooring, "roll", 32.00)
            .with_rule(R::UnderlaymentRolls)
            .with_coverage(100.0, "sqft")?,
        item("baseboard_lf", "Baseboard", C::Trim, "linear_ft", 1.85)
            .with_rule(R::BaseboardLinearFt)
            .with_waste_factor(0.10)?,
        item("transition_strip", "Transition Strip", C::Flooring, "each", 24.00)
            .with_rule(R::TransitionStrips),
        item("flooring_spacers_bag", "Flooring Spacers", C::Supplies, "bag", 6.00),
        // 涂料
        item("paint_interior_gallon", "Interior Paint", C::Paint, "gallon", 38.00)
            .with_rule(R::PaintGallons),
        item("primer_gallon", "Primer", C::Paint, "gallon", 25.00).with_rule(R::PrimerGallons),
        item("painters_tape_roll", "Painter's Tape", C::Supplies, "roll", 7.00)
            .with_rule(R::PaintersTape),
        item("caulk_tube", "Caulk", C::Adhesives, "tube", 6.50).with_rule(R::CaulkTubes),
        item("roller_cover", "Roller Cover", C::Paint, "each", 5.00),
        item("drop_cloth", "Drop Cloth", C::Supplies, "each", 12.00),
        // 卫浴与瓷砖
        item("pex_coil", "PEX Tubing 1/2in 100ft", C::Plumbing, "coil", 45.00).with_rule(R::PexTubing),
        item("pex_fitting", "PEX Crimp Fitting", C::Plumbing, "each", 2.50).with_rule(R::PexFittings),
        item("shutoff_valve", "Shutoff Valve", C::Plumbing, "each", 12.00)
            .with_rule(R::ShutoffValves),
        item("cement_board_sheet", "Cement Board 3x5", C::Tile, "sheet", 14.00)
            .with_rule(R::CementBoardSheets),
        item("thinset_bag", "Thinset Mortar", C::Tile, "bag", 18.00).with_rule(R::ThinsetBags),
        item("grout_bag", "Grout", C::Tile, "bag", 16.00).with_rule(R::GroutBags),
        item("tile_floor_sqft", "Floor Tile", C::Tile, "sqft", 3.25)
            .with_rule(R::TileSqft)
            .with_waste_factor(0.10)?,
        // 露台与混凝土
        item("deck_board_16ft", "Deck Board 5/4x6 16ft", C::Decking, "each", 22.00)
            .with_rule(R::DeckBoards)
            .with_waste_factor(0.10)?,
        item("deck_screws_box", "Deck Screws", C::Fasteners, "box", 38.00).with_rule(R::DeckScrews),
        item("joist_hanger", "Joist Hanger", C::Fasteners, "each", 2.50).with_rule(R::JoistHangers),
        item("joist_tape_roll", "Joist Tape", C::Decking, "roll", 24.00)
            .with_rule(R::JoistLumberLf)
            .with_coverage(50.0, "linear_ft")?,
        item("deck_joist_2x8", "2x8 Joist 12ft", C::Lumber, "each", 18.00).with_rule(R::DeckJoists),
        item("deck_post_4x4", "4x4 Post 8ft", C::Lumber, "each", 16.00).with_rule(R::DeckPosts),
        item("deck_beam_2x10", "2x10 Beam 16ft", C::Lumber, "each", 32.00).with_rule(R::DeckBeams),
        item("concrete_mix_80lb", "Concrete Mix 80lb", C::Concrete, "bag", 6.50)
            .with_rule(R::ConcreteBags),
        // 门窗
        item("window_flashing_roll", "Window Flashing Tape", C::Supplies, "roll", 28.00)
            .with_rule(R::WindowFlashingRolls),
        item("window_shims_pack", "Window Shims", C::Supplies, "each", 4.00)
            .with_rule(R::WindowShims),
        item("window_foam_can", "Window & Door Foam", C::Adhesives, "can", 9.00)
            .with_rule(R::WindowFoamCans),
        // 屋面
        item("roofing_nails_box", "Roofing Nails", C::Roofing, "box", 45.00),
    ])
}

/// 默认全局目录快照
pub fn global_snapshot() -> AppResult<CatalogSnapshot> {
    Ok(CatalogSnapshot::new(global_catalog()?))
}

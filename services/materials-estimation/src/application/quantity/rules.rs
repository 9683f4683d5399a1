//! 规则表：规则键 → 基础数量

use domain_core::ceil_units;

use super::{QuantityOutcome, ZeroQuantity};
use crate::domain::enums::RuleKey;
use crate::domain::value_objects::QuantityContext;

/// 16 英寸中心距（英尺）
const ON_CENTER_16_FT: f64 = 16.0 / 12.0;
/// 4×8 板材面积
const SHEET_SQFT: f64 = 32.0;
/// 每张石膏板约用螺丝数
const SCREWS_PER_SHEET: f64 = 32.0;
/// 每盒螺丝数
const SCREWS_PER_BOX: f64 = 250.0;
/// 5.5 英寸宽、16 英尺长的露台板覆盖面积
const DECK_BOARD_SQFT: f64 = 16.0 * 5.5 / 12.0;

/// 按规则计算基础数量（尚未计入损耗和取整）
///
/// 所需字段缺失返回 `MissingInput`，非正数返回 `NonPositive`。
pub fn base_quantity(rule: RuleKey, ctx: &QuantityContext) -> QuantityOutcome {
    let quantity = match rule {
        RuleKey::StudsSixteenOc => ceil_units(wall_length(ctx)? / ON_CENTER_16_FT) + 1.0,
        RuleKey::WallPlates => ceil_units(wall_length(ctx)? * 3.0 / 16.0),
        RuleKey::DrywallSheets => ceil_units(wall_area(ctx)? / SHEET_SQFT),
        RuleKey::DrywallScrews => {
            let sheets = ceil_units(wall_area(ctx)? / SHEET_SQFT);
            ceil_units(sheets * SCREWS_PER_SHEET / SCREWS_PER_BOX)
        }
        RuleKey::JointCompound => ceil_units(wall_area(ctx)? / 480.0),
        RuleKey::DrywallTape => ceil_units(wall_area(ctx)? / 370.0),
        RuleKey::WallInsulation => ceil_units(wall_area(ctx)? / 40.0),

        RuleKey::PaintGallons => ceil_units(perimeter(ctx)? * wall_height(ctx)? * 2.0 / 350.0),
        RuleKey::PrimerGallons => ceil_units(perimeter(ctx)? * wall_height(ctx)? / 300.0),
        RuleKey::PaintersTape => ceil_units(perimeter(ctx)? / 60.0),
        RuleKey::CaulkTubes => ceil_units(perimeter(ctx)? / 25.0),

        RuleKey::FlooringTenPctWaste => floor_area(ctx)?,
        RuleKey::UnderlaymentRolls => ceil_units(floor_area(ctx)? / 100.0),
        RuleKey::BaseboardLinearFt => perimeter(ctx)?,
        RuleKey::TransitionStrips => openings(ctx)?,

        RuleKey::ConcreteBags => ceil_units(concrete_volume(ctx)? / 0.6),
        RuleKey::DeckBoards => ceil_units(deck_area(ctx)? / DECK_BOARD_SQFT),
        RuleKey::DeckPosts => ceil_units(deck_length(ctx)? / 8.0) + 1.0,
        RuleKey::DeckJoists => joist_count(ctx)?,
        RuleKey::JoistHangers => joist_count(ctx)? * 2.0,
        RuleKey::DeckBeams => ceil_units(deck_length(ctx)? / 16.0) * 2.0,
        RuleKey::DeckScrews => ceil_units(deck_area(ctx)? / 50.0),
        RuleKey::JoistLumberLf => joist_run(ctx)?,

        RuleKey::PexTubing => ceil_units(bathrooms(ctx)? * 80.0 / 100.0),
        RuleKey::PexFittings => bathrooms(ctx)? * 12.0,
        RuleKey::ShutoffValves => bathrooms(ctx)? * 4.0,

        RuleKey::TileSqft => tile_area(ctx)?,
        RuleKey::ThinsetBags => ceil_units(tile_area(ctx)? / 95.0),
        RuleKey::GroutBags => ceil_units(tile_area(ctx)? / 100.0),
        RuleKey::CementBoardSheets => ceil_units(tile_area(ctx)? / 15.0),

        RuleKey::WindowFlashingRolls => ceil_units(openings(ctx)? * 14.0 / 75.0),
        RuleKey::WindowShims => openings(ctx)?,
        RuleKey::WindowFoamCans => ceil_units(openings(ctx)? / 3.0),
    };
    Ok(quantity)
}

/// 托梁数 = ceil(露台长度 / 16in) + 1
pub(super) fn joist_count(ctx: &QuantityContext) -> QuantityOutcome {
    Ok(ceil_units(deck_length(ctx)? / ON_CENTER_16_FT) + 1.0)
}

/// 托梁总长 = 托梁数 × 跨度
pub(super) fn joist_run(ctx: &QuantityContext) -> QuantityOutcome {
    Ok(joist_count(ctx)? * require(ctx.deck_joist_span_ft, "deck_joist_span_ft")?)
}

fn require(value: Option<f64>, field: &'static str) -> QuantityOutcome {
    match value {
        None => Err(ZeroQuantity::MissingInput { field }),
        Some(v) if !v.is_finite() => Err(ZeroQuantity::NonFinite),
        Some(v) if v <= 0.0 => Err(ZeroQuantity::NonPositive),
        Some(v) => Ok(v),
    }
}

fn wall_length(ctx: &QuantityContext) -> QuantityOutcome {
    require(ctx.wall_length_ft, "wall_length_ft")
}

fn wall_height(ctx: &QuantityContext) -> QuantityOutcome {
    require(ctx.wall_height_ft, "wall_height_ft")
}

fn wall_area(ctx: &QuantityContext) -> QuantityOutcome {
    Ok(wall_height(ctx)? * wall_length(ctx)?)
}

fn perimeter(ctx: &QuantityContext) -> QuantityOutcome {
    require(ctx.room_perimeter_ft, "room_perimeter_ft")
}

fn floor_area(ctx: &QuantityContext) -> QuantityOutcome {
    require(ctx.room_floor_area_sqft, "room_floor_area_sqft")
}

fn deck_area(ctx: &QuantityContext) -> QuantityOutcome {
    require(ctx.deck_area_sqft, "deck_area_sqft")
}

fn deck_length(ctx: &QuantityContext) -> QuantityOutcome {
    require(ctx.deck_length_ft, "deck_length_ft")
}

fn concrete_volume(ctx: &QuantityContext) -> QuantityOutcome {
    require(ctx.concrete_volume_cuft, "concrete_volume_cuft")
}

fn openings(ctx: &QuantityContext) -> QuantityOutcome {
    require(ctx.openings(), "opening_count")
}

fn bathrooms(ctx: &QuantityContext) -> QuantityOutcome {
    require(ctx.bathrooms(), "bathroom_count")
}

/// 瓷砖面积，缺失时退回房间地面面积
fn tile_area(ctx: &QuantityContext) -> QuantityOutcome {
    match ctx.tile_area_sqft {
        Some(_) => require(ctx.tile_area_sqft, "tile_area_sqft"),
        None => require(ctx.room_floor_area_sqft, "tile_area_sqft"),
    }
}

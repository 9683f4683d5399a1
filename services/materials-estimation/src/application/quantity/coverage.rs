//! 覆盖量路径的需求量选择
//!
//! 先按规则键选择候选链，规则对该维度没有定义时按覆盖单位使用通用链。
//! 候选链取第一个有限正值。

use domain_core::{Dimension, is_positive};

use super::rules::joist_run;
use crate::domain::enums::RuleKey;
use crate::domain::value_objects::QuantityContext;

/// 按覆盖维度计算需求量；无法得到正值时返回 `None`
pub fn requirement(rule: Option<RuleKey>, dimension: Dimension, ctx: &QuantityContext) -> Option<f64> {
    match rule.and_then(|rule| rule_candidates(rule, dimension, ctx)) {
        Some(candidates) => first_positive(candidates),
        None => first_positive(generic_candidates(dimension, ctx)),
    }
}

fn first_positive(candidates: Vec<Option<f64>>) -> Option<f64> {
    candidates.into_iter().flatten().find(|v| is_positive(*v))
}

fn rule_candidates(rule: RuleKey, dimension: Dimension, ctx: &QuantityContext) -> Option<Vec<Option<f64>>> {
    let floor = ctx.room_floor_area_sqft;
    let tile = ctx.tile_area_sqft;
    let deck = ctx.deck_area_sqft;
    let wall = ctx.wall_area_sqft();
    let room_wall = ctx.room_wall_area_sqft();
    let perimeter = ctx.room_perimeter_ft;
    let openings = ctx.openings();
    let bathrooms = ctx.bathrooms();

    let candidates = match (dimension, rule) {
        (Dimension::Area, RuleKey::FlooringTenPctWaste | RuleKey::UnderlaymentRolls) => {
            vec![floor, tile, deck, wall]
        }
        (
            Dimension::Area,
            RuleKey::TileSqft | RuleKey::ThinsetBags | RuleKey::GroutBags | RuleKey::CementBoardSheets,
        ) => vec![tile, floor],
        (
            Dimension::Area,
            RuleKey::DrywallSheets
            | RuleKey::DrywallScrews
            | RuleKey::JointCompound
            | RuleKey::DrywallTape
            | RuleKey::WallInsulation,
        ) => vec![wall, room_wall],
        (Dimension::Area, RuleKey::PaintGallons) => vec![room_wall.map(|a| a * 2.0)],
        (Dimension::Area, RuleKey::PrimerGallons) => vec![room_wall],
        (Dimension::Area, RuleKey::DeckBoards | RuleKey::DeckScrews) => vec![deck],

        (Dimension::Length, RuleKey::PexTubing) => vec![bathrooms.map(|b| b * 80.0)],
        (
            Dimension::Length,
            RuleKey::BaseboardLinearFt | RuleKey::CaulkTubes | RuleKey::PaintersTape,
        ) => vec![perimeter, ctx.wall_length_ft],
        (Dimension::Length, RuleKey::WallPlates) => vec![ctx.wall_length_ft.map(|l| l * 3.0)],
        (Dimension::Length, RuleKey::JoistLumberLf) => vec![joist_run(ctx).ok()],

        (
            Dimension::Count,
            RuleKey::WindowFlashingRolls
            | RuleKey::WindowShims
            | RuleKey::WindowFoamCans
            | RuleKey::TransitionStrips,
        ) => vec![openings],
        (Dimension::Count, RuleKey::PexFittings | RuleKey::ShutoffValves) => vec![bathrooms],

        (Dimension::Volume, _) => vec![ctx.concrete_volume_cuft],

        _ => return None,
    };
    Some(candidates)
}

fn generic_candidates(dimension: Dimension, ctx: &QuantityContext) -> Vec<Option<f64>> {
    match dimension {
        Dimension::Area => vec![
            ctx.room_floor_area_sqft,
            ctx.wall_area_sqft(),
            ctx.tile_area_sqft,
            ctx.deck_area_sqft,
        ],
        Dimension::Length => vec![ctx.room_perimeter_ft, ctx.wall_length_ft, ctx.deck_length_ft],
        Dimension::Count => vec![ctx.openings(), ctx.bathrooms()],
        Dimension::Volume => vec![ctx.concrete_volume_cuft],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flooring_prefers_floor_area() {
        let ctx = QuantityContext {
            room_floor_area_sqft: Some(150.0),
            tile_area_sqft: Some(40.0),
            ..Default::default()
        };
        assert_eq!(
            requirement(Some(RuleKey::FlooringTenPctWaste), Dimension::Area, &ctx),
            Some(150.0)
        );
        assert_eq!(
            requirement(Some(RuleKey::GroutBags), Dimension::Area, &ctx),
            Some(40.0)
        );
    }

    #[test]
    fn test_flooring_falls_back_through_chain() {
        let ctx = QuantityContext {
            room_floor_area_sqft: Some(0.0),
            wall_length_ft: Some(10.0),
            wall_height_ft: Some(8.0),
            ..Default::default()
        };
        assert_eq!(
            requirement(Some(RuleKey::UnderlaymentRolls), Dimension::Area, &ctx),
            Some(80.0)
        );
    }

    #[test]
    fn test_rule_chain_without_value_gives_none() {
        let ctx = QuantityContext {
            room_floor_area_sqft: Some(150.0),
            ..Default::default()
        };
        assert_eq!(requirement(Some(RuleKey::DeckBoards), Dimension::Area, &ctx), None);
    }

    #[test]
    fn test_generic_chain_by_unit() {
        let ctx = QuantityContext {
            room_perimeter_ft: Some(44.0),
            opening_count: Some(3),
            ..Default::default()
        };
        assert_eq!(requirement(None, Dimension::Length, &ctx), Some(44.0));
        assert_eq!(requirement(None, Dimension::Count, &ctx), Some(3.0));
        assert_eq!(requirement(None, Dimension::Volume, &ctx), None);
        // 规则对该维度未定义时也使用通用链
        assert_eq!(
            requirement(Some(RuleKey::StudsSixteenOc), Dimension::Length, &ctx),
            Some(44.0)
        );
    }

    #[test]
    fn test_paint_requirement_counts_two_coats() {
        let ctx = QuantityContext {
            room_perimeter_ft: Some(40.0),
            wall_height_ft: Some(8.0),
            ..Default::default()
        };
        assert_eq!(
            requirement(Some(RuleKey::PaintGallons), Dimension::Area, &ctx),
            Some(640.0)
        );
    }
}

//! 墙面类原型：内墙框架、室内涂刷、外墙涂刷

use config::RecommenderConfig;
use domain_core::{ceil_units, format_quantity, is_positive, round_up_to_half};

use super::{coats, net_wall_area, recommendation, wall_height};
use crate::domain::enums::MaterialCategory;
use crate::domain::value_objects::{JobContext, MaterialRecommendation};

const INTERIOR_PAINT_COVERAGE_SQFT: f64 = 350.0;
const EXTERIOR_PAINT_COVERAGE_SQFT: f64 = 300.0;
const PRIMER_COVERAGE_SQFT: f64 = 300.0;
const EXTERIOR_PRIMER_COVERAGE_SQFT: f64 = 250.0;

/// 内墙框架：墙长取 `length_ft`，两面封石膏板
pub(super) fn interior_wall_build(config: &RecommenderConfig, ctx: &JobContext) -> Vec<MaterialRecommendation> {
    let Some(length) = ctx.length_ft.filter(|l| is_positive(*l)) else {
        return Vec::new();
    };
    let height = wall_height(config, ctx);
    let board_area = length * height * 2.0;
    let sheets = ceil_units(board_area / 32.0);

    vec![
        recommendation("2x4 Stud 8ft", ceil_units(length / (16.0 / 12.0)) + 1.0, "each", MaterialCategory::Lumber, 4.25)
            .with_note(format!("16 in. on center along {} ft of wall", format_quantity(length))),
        recommendation("2x4 Plate 16ft", ceil_units(length * 3.0 / 16.0), "each", MaterialCategory::Lumber, 9.50)
            .with_note("Double top plate, single bottom plate"),
        recommendation("Drywall Sheet 1/2in 4x8", sheets, "sheet", MaterialCategory::Drywall, 15.00)
            .with_note(format!("Both sides, approx. {} sq ft", format_quantity(board_area))),
        recommendation("Drywall Screws", ceil_units(sheets * 32.0 / 250.0), "box", MaterialCategory::Fasteners, 8.50),
        recommendation("Joint Compound", ceil_units(board_area / 480.0), "box", MaterialCategory::Drywall, 18.00),
        recommendation("Drywall Tape", ceil_units(board_area / 370.0), "roll", MaterialCategory::Drywall, 6.00),
        recommendation("Corner Bead", 2.0, "each", MaterialCategory::Drywall, 4.50)
            .with_note("Two exposed corners"),
    ]
}

/// 室内涂刷：墙面面积 = 周长 × 墙高 − 门窗扣除
pub(super) fn paint_room(config: &RecommenderConfig, ctx: &JobContext) -> Vec<MaterialRecommendation> {
    let (Some(area), Some(perimeter)) = (net_wall_area(config, ctx), ctx.perimeter()) else {
        return Vec::new();
    };
    let coats = coats(config, ctx);
    let gallons = round_up_to_half(area * f64::from(coats) / INTERIOR_PAINT_COVERAGE_SQFT);

    vec![
        recommendation("Interior Paint", gallons, "gallon", MaterialCategory::Paint, 38.00).with_note(format!(
            "Approx. {} sq ft, {} coat(s)",
            format_quantity(area),
            coats
        )),
        recommendation("Primer", round_up_to_half(area / PRIMER_COVERAGE_SQFT), "gallon", MaterialCategory::Paint, 25.00)
            .with_note(format!("One coat over approx. {} sq ft", format_quantity(area))),
        recommendation("Caulk", ceil_units(perimeter / 25.0), "tube", MaterialCategory::Adhesives, 6.50),
        recommendation("Painter's Tape", ceil_units(perimeter / 60.0), "roll", MaterialCategory::Supplies, 7.00),
        recommendation("Roller Cover", 2.0, "each", MaterialCategory::Paint, 5.00),
        recommendation("Drop Cloth", 1.0, "each", MaterialCategory::Supplies, 12.00),
    ]
}

/// 外墙涂刷：覆盖率 300 sq ft/gal
pub(super) fn exterior_paint(config: &RecommenderConfig, ctx: &JobContext) -> Vec<MaterialRecommendation> {
    let (Some(area), Some(perimeter)) = (net_wall_area(config, ctx), ctx.perimeter()) else {
        return Vec::new();
    };
    let coats = coats(config, ctx);
    let gallons = round_up_to_half(area * f64::from(coats) / EXTERIOR_PAINT_COVERAGE_SQFT);

    vec![
        recommendation("Exterior Paint", gallons, "gallon", MaterialCategory::Paint, 48.00).with_note(format!(
            "Approx. {} sq ft, {} coat(s)",
            format_quantity(area),
            coats
        )),
        recommendation(
            "Exterior Primer",
            round_up_to_half(area / EXTERIOR_PRIMER_COVERAGE_SQFT),
            "gallon",
            MaterialCategory::Paint,
            32.00,
        ),
        recommendation("Exterior Caulk", ceil_units(perimeter / 20.0), "tube", MaterialCategory::Adhesives, 8.00),
        recommendation("Masking Plastic", ceil_units(perimeter / 50.0), "roll", MaterialCategory::Supplies, 15.00)
            .with_note("Windows, doors and landscaping"),
    ]
}

//! 户外原型：露台与屋面

use domain_core::{ceil_units, format_quantity, is_positive};

use super::recommendation;
use crate::domain::enums::MaterialCategory;
use crate::domain::value_objects::{JobContext, MaterialRecommendation};

/// 5.5 英寸宽、16 英尺长的露台板覆盖面积
const DECK_BOARD_SQFT: f64 = 16.0 * 5.5 / 12.0;

/// 露台：面积和长度都需要，立柱按两条梁线计
pub(super) fn deck_build(ctx: &JobContext) -> Vec<MaterialRecommendation> {
    let (Some(area), Some(length)) = (ctx.area(), ctx.length_ft.filter(|l| is_positive(*l))) else {
        return Vec::new();
    };

    let joists = ceil_units(length / (16.0 / 12.0)) + 1.0;
    let posts = (ceil_units(length / 8.0) + 1.0) * 2.0;

    vec![
        recommendation(
            "Deck Board 5/4x6 16ft",
            ceil_units(area / DECK_BOARD_SQFT * 1.10),
            "each",
            MaterialCategory::Decking,
            22.00,
        )
        .with_note(format!("Approx. {} sq ft plus 10% waste", format_quantity(area))),
        recommendation("2x8 Joist 12ft", joists, "each", MaterialCategory::Lumber, 18.00)
            .with_note("16 in. on center"),
        recommendation("4x4 Post 8ft", posts, "each", MaterialCategory::Lumber, 16.00).with_note("Two beam lines"),
        recommendation("Concrete Mix 80lb", posts * 2.0, "bag", MaterialCategory::Concrete, 6.50)
            .with_note("Two bags per post footing"),
        recommendation("Joist Hanger", joists * 2.0, "each", MaterialCategory::Fasteners, 2.50),
        recommendation("Deck Screws", ceil_units(area / 50.0), "box", MaterialCategory::Fasteners, 38.00),
    ]
}

/// 屋面更换：1 square = 100 sq ft，每 square 3 捆
pub(super) fn roof_shingle_replacement(ctx: &JobContext) -> Vec<MaterialRecommendation> {
    let Some(area) = ctx.area() else {
        return Vec::new();
    };
    let squares = area / 100.0;

    let mut recs = vec![
        recommendation(
            "Asphalt Shingles",
            ceil_units(squares * 3.0 * 1.10),
            "bundle",
            MaterialCategory::Roofing,
            35.00,
        )
        .with_note(format!("Approx. {} squares plus 10% waste", format_quantity(squares))),
        recommendation("Roofing Underlayment", ceil_units(area / 400.0), "roll", MaterialCategory::Roofing, 90.00),
    ];

    if let Some(perimeter) = ctx.perimeter() {
        recs.push(recommendation("Drip Edge", perimeter, "linear_ft", MaterialCategory::Roofing, 0.95));
    }
    if let Some(length) = ctx.length_ft.filter(|l| is_positive(*l)) {
        recs.push(recommendation(
            "Ridge Cap Shingles",
            ceil_units(length / 33.0),
            "bundle",
            MaterialCategory::Roofing,
            55.00,
        ));
    }
    recs.push(recommendation("Roofing Nails", ceil_units(squares / 4.0), "box", MaterialCategory::Roofing, 45.00));
    if let Some(perimeter) = ctx.perimeter() {
        recs.push(recommendation("Starter Strip", perimeter, "linear_ft", MaterialCategory::Roofing, 1.10));
    }
    recs
}

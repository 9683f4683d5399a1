//! 地面与瓷砖类原型

use domain_core::{ceil_units, format_quantity, round_up_to_half, round_up_to_hundredth};

use super::recommendation;
use crate::domain::enums::MaterialCategory;
use crate::domain::value_objects::{JobContext, MaterialRecommendation};

/// 每扇门处不装踢脚线的长度（英尺）
const DOORWAY_GAP_FT: f64 = 3.0;

/// LVP 地板：10% 损耗，垫层 5% 搭接
pub(super) fn lvp_flooring(ctx: &JobContext) -> Vec<MaterialRecommendation> {
    let Some(area) = ctx.area() else {
        return Vec::new();
    };

    let mut recs = vec![
        recommendation("LVP Flooring", round_up_to_hundredth(area * 1.10), "sq ft", MaterialCategory::Flooring, 2.75)
            .with_note(format!("Approx. {} sq ft plus 10% waste", format_quantity(area))),
        recommendation("Underlayment", round_up_to_hundredth(area * 1.05), "sq ft", MaterialCategory::Flooring, 0.32)
            .with_note("Includes 5% overlap"),
    ];

    if let Some(perimeter) = ctx.perimeter() {
        let baseboard = (perimeter - DOORWAY_GAP_FT * f64::from(ctx.doors)).max(0.0);
        recs.push(
            recommendation("Baseboard", round_up_to_hundredth(baseboard), "linear_ft", MaterialCategory::Trim, 1.85)
                .with_note(format!("Perimeter less {} ft per door", format_quantity(DOORWAY_GAP_FT))),
        );
    }

    recs.push(recommendation(
        "Transition Strip",
        f64::from(ctx.doors.max(1)),
        "each",
        MaterialCategory::Flooring,
        24.00,
    ));
    recs.push(recommendation("Flooring Spacers", 1.0, "bag", MaterialCategory::Supplies, 6.00));
    recs
}

/// 瓷砖背景墙
pub(super) fn tile_backsplash(ctx: &JobContext) -> Vec<MaterialRecommendation> {
    let Some(area) = ctx.area() else {
        return Vec::new();
    };

    vec![
        recommendation("Backsplash Tile", round_up_to_hundredth(area * 1.10), "sq ft", MaterialCategory::Tile, 8.00)
            .with_note(format!("Approx. {} sq ft plus 10% waste", format_quantity(area))),
        recommendation("Thinset Mortar", ceil_units(area / 95.0), "bag", MaterialCategory::Tile, 18.00),
        recommendation("Grout", ceil_units(area / 100.0), "bag", MaterialCategory::Tile, 16.00),
        recommendation("Tile Spacers", 1.0, "bag", MaterialCategory::Tile, 5.00),
        recommendation("Tile Sealer", round_up_to_half(area / 200.0), "quart", MaterialCategory::Tile, 14.00),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lvp_flooring() {
        let ctx = JobContext::rectangle(12.0, 10.0).with_openings(2, 0);
        let recs = lvp_flooring(&ctx);

        assert_eq!(recs[0].name, "LVP Flooring");
        assert_eq!(recs[0].quantity, 132.0);
        assert_eq!(recs[0].unit, "sq ft");
        assert_eq!(recs[1].quantity, 126.0);
        assert_eq!(recs[2].name, "Baseboard");
        assert_eq!(recs[2].quantity, 38.0);
        assert_eq!(recs[3].quantity, 2.0);
    }

    #[test]
    fn test_lvp_with_area_only_estimates_square_perimeter() {
        let ctx = JobContext {
            area_sqft: Some(100.0),
            ..Default::default()
        };
        let recs = lvp_flooring(&ctx);
        // 只有面积时按正方形估算周长 40 ft
        let baseboard = recs.iter().find(|r| r.name == "Baseboard").unwrap();
        assert_eq!(baseboard.quantity, 40.0);
        assert_eq!(recs.iter().find(|r| r.name == "Transition Strip").unwrap().quantity, 1.0);
    }

    #[test]
    fn test_tile_backsplash() {
        let ctx = JobContext {
            area_sqft: Some(30.0),
            ..Default::default()
        };
        let recs = tile_backsplash(&ctx);
        assert_eq!(recs[0].quantity, 33.0);
        assert_eq!(recs[1].quantity, 1.0);
        assert_eq!(recs[4].quantity, 0.5);
    }
}

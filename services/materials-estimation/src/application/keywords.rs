//! 关键字建议引擎
//!
//! 对自由文本做子串匹配，命中的类别各追加一组固定物料；有命中时再追加防护清洁组，
//! 没有任何命中时返回通用施工套件。同名物料合并（数量相加），按名称排序。

use std::collections::HashMap;

use common::normalize_key;

use crate::domain::value_objects::GeneratedMaterial;

/// (名称, 数量, 单位, 单价)
type BundleEntry = (&'static str, f64, &'static str, f64);

struct KeywordBundle {
    keywords: &'static [&'static str],
    materials: &'static [BundleEntry],
}

const BUNDLES: [KeywordBundle; 8] = [
    // 涂刷
    KeywordBundle {
        keywords: &["paint", "primer", "stain"],
        materials: &[
            ("Interior Paint", 2.0, "gallon", 38.00),
            ("Primer", 1.0, "gallon", 25.00),
            ("Paint Roller Frame", 1.0, "each", 8.00),
            ("Roller Cover", 3.0, "each", 5.00),
            ("Angled Brush 2in", 2.0, "each", 9.00),
            ("Paint Tray", 2.0, "each", 4.00),
            ("Tray Liner", 4.0, "each", 1.50),
            ("Painter's Tape", 3.0, "roll", 7.00),
            ("Caulk", 2.0, "tube", 6.50),
            ("Spackle", 1.0, "each", 7.50),
            ("Sanding Sponge", 2.0, "each", 3.50),
        ],
    },
    // 石膏板
    KeywordBundle {
        keywords: &["drywall", "sheetrock", "gypsum", "wallboard"],
        materials: &[
            ("Drywall Sheet 1/2in 4x8", 10.0, "sheet", 15.00),
            ("Drywall Screws", 1.0, "box", 8.50),
            ("Joint Compound", 1.0, "box", 18.00),
            ("Drywall Tape", 1.0, "roll", 6.00),
            ("Corner Bead", 4.0, "each", 4.50),
            ("Sanding Sponge", 2.0, "each", 3.50),
        ],
    },
    // 地面
    KeywordBundle {
        keywords: &["floor", "lvp", "laminate", "vinyl plank", "hardwood", "carpet"],
        materials: &[
            ("LVP Flooring", 10.0, "box", 55.00),
            ("Underlayment", 1.0, "roll", 32.00),
            ("Baseboard", 60.0, "linear_ft", 1.85),
            ("Transition Strip", 1.0, "each", 24.00),
            ("Flooring Spacers", 1.0, "bag", 6.00),
        ],
    },
    // 户外结构
    KeywordBundle {
        keywords: &["deck", "fence", "porch", "pergola", "railing"],
        materials: &[
            ("Deck Board 5/4x6 16ft", 20.0, "each", 22.00),
            ("4x4 Post 8ft", 4.0, "each", 16.00),
            ("Deck Screws", 1.0, "box", 38.00),
            ("Joist Hanger", 8.0, "each", 2.50),
            ("Concrete Mix 80lb", 4.0, "bag", 6.50),
        ],
    },
    // 屋面
    KeywordBundle {
        keywords: &["roof", "shingle", "gutter"],
        materials: &[
            ("Asphalt Shingles", 9.0, "bundle", 35.00),
            ("Roofing Underlayment", 1.0, "roll", 90.00),
            ("Roofing Nails", 1.0, "box", 45.00),
            ("Drip Edge", 60.0, "linear_ft", 0.95),
            ("Roofing Sealant", 2.0, "tube", 8.00),
        ],
    },
    // 电气
    KeywordBundle {
        keywords: &["electric", "outlet", "wiring", "switch", "light fixture", "breaker"],
        materials: &[
            ("14/2 NM Cable 50ft", 1.0, "roll", 65.00),
            ("Outlet Receptacle", 4.0, "each", 3.00),
            ("Light Switch", 2.0, "each", 3.50),
            ("Electrical Box", 4.0, "each", 1.50),
            ("Wire Nuts", 1.0, "bag", 5.00),
        ],
    },
    // 管道
    KeywordBundle {
        keywords: &["plumb", "pipe", "faucet", "toilet", "sink", "shower", "drain"],
        materials: &[
            ("PEX Tubing 1/2in 100ft", 1.0, "coil", 45.00),
            ("PEX Crimp Fitting", 10.0, "each", 2.50),
            ("Shutoff Valve", 2.0, "each", 12.00),
            ("Thread Seal Tape", 1.0, "roll", 2.00),
            ("Plumber's Putty", 1.0, "each", 5.00),
        ],
    },
    // 混凝土
    KeywordBundle {
        keywords: &["concrete", "slab", "footing", "cement", "sidewalk", "driveway"],
        materials: &[
            ("Concrete Mix 80lb", 10.0, "bag", 6.50),
            ("Rebar #4 10ft", 6.0, "each", 8.00),
            ("2x4 Form Board 8ft", 6.0, "each", 4.25),
            ("Concrete Sealer", 1.0, "gallon", 30.00),
        ],
    },
];

/// 防护与清洁组，任一类别命中时追加
const PROTECTION_AND_CLEANUP: &[BundleEntry] = &[
    ("Drop Cloth", 2.0, "each", 12.00),
    ("Plastic Sheeting", 1.0, "roll", 18.00),
    ("Shop Towels", 1.0, "roll", 4.00),
    ("Contractor Trash Bags", 1.0, "box", 22.00),
];

/// 通用施工套件，没有任何类别命中时返回
const GENERAL_CONSTRUCTION_KIT: &[BundleEntry] = &[
    ("Construction Adhesive", 2.0, "tube", 6.00),
    ("Assorted Wood Screws", 1.0, "box", 12.00),
    ("Utility Knife Blades", 1.0, "each", 6.00),
    ("Caulk", 1.0, "tube", 6.50),
    ("Drop Cloth", 1.0, "each", 12.00),
    ("Contractor Trash Bags", 1.0, "box", 22.00),
];

/// 根据作业描述建议物料
pub fn suggest(description: &str) -> Vec<GeneratedMaterial> {
    let text = description.to_lowercase();

    let matched: Vec<&[BundleEntry]> = BUNDLES
        .iter()
        .filter(|bundle| bundle.keywords.iter().any(|k| text.contains(k)))
        .map(|bundle| bundle.materials)
        .collect();

    let entries: Vec<&BundleEntry> = if matched.is_empty() {
        GENERAL_CONSTRUCTION_KIT.iter().collect()
    } else {
        matched
            .into_iter()
            .flatten()
            .chain(PROTECTION_AND_CLEANUP)
            .collect()
    };

    merge(entries.into_iter().map(|&(name, quantity, unit, unit_cost)| {
        GeneratedMaterial::new(name, quantity, unit, unit_cost)
    }))
}

/// 按名称合并：数量相加，单位和单价取首次出现；结果按名称排序
pub fn merge(materials: impl IntoIterator<Item = GeneratedMaterial>) -> Vec<GeneratedMaterial> {
    let mut merged: Vec<GeneratedMaterial> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for material in materials {
        let key = normalize_key(&material.name);
        match positions.get(&key) {
            Some(&i) => merged[i].quantity += material.quantity,
            None => {
                positions.insert(key, merged.len());
                merged.push(material);
            }
        }
    }

    merged.sort_by(|a, b| a.name.cmp(&b.name));
    merged
}

//! Material-label → waste-category normalization.
//!
//! Maps the free-form material string reported by the image classifier onto
//! the closed set of waste categories the rest of the engine dispatches on.

use serde::{Deserialize, Serialize};

/// The closed set of waste-material classes used throughout the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Plastic,
    Metal,
    Ewaste,
    Fabric,
    Glass,
    Paper,
    Organic,
    Hazardous,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Plastic,
        Category::Metal,
        Category::Ewaste,
        Category::Fabric,
        Category::Glass,
        Category::Paper,
        Category::Organic,
        Category::Hazardous,
        Category::Other,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Plastic => "plastic",
            Category::Metal => "metal",
            Category::Ewaste => "ewaste",
            Category::Fabric => "fabric",
            Category::Glass => "glass",
            Category::Paper => "paper",
            Category::Organic => "organic",
            Category::Hazardous => "hazardous",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword table evaluated in declared order. Order is significant:
/// "battery" appears under both `Ewaste` and `Hazardous` and must resolve
/// to `Ewaste` because it is declared first.
const KEYWORD_TABLE: &[(Category, &[&str])] = &[
    (
        Category::Plastic,
        &["plastic", "polymer", "polythene", "pet", "hdpe", "pvc"],
    ),
    (
        Category::Metal,
        &[
            "metal",
            "aluminum",
            "aluminium",
            "steel",
            "iron",
            "copper",
            "brass",
            "tin",
        ],
    ),
    (
        Category::Ewaste,
        &[
            "electronic",
            "e-waste",
            "ewaste",
            "circuit",
            "battery",
            "phone",
            "computer",
            "laptop",
            "device",
        ],
    ),
    (
        Category::Fabric,
        &[
            "fabric",
            "cloth",
            "textile",
            "cotton",
            "polyester",
            "clothes",
            "clothing",
            "garment",
        ],
    ),
    (Category::Glass, &["glass", "bottle", "jar"]),
    (
        Category::Paper,
        &["paper", "cardboard", "carton", "newspaper"],
    ),
    (
        Category::Organic,
        &["organic", "food", "compost", "biodegradable", "waste"],
    ),
    (
        Category::Hazardous,
        &["hazardous", "chemical", "toxic", "paint", "oil", "battery"],
    ),
];

/// Normalize a raw material label into a [`Category`].
///
/// Lower-cases the input and walks [`KEYWORD_TABLE`] in order, returning the
/// first category with a substring-matching keyword. Total: every input maps
/// to exactly one category, falling back to [`Category::Other`].
#[must_use]
pub fn categorize(material: &str) -> Category {
    let lower = material.to_lowercase();
    for (category, keywords) in KEYWORD_TABLE {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return *category;
        }
    }
    Category::Other
}

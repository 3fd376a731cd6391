//! Monetary value estimation tables.
//!
//! All estimates are rounded to whole currency units. Amounts are
//! currency-agnostic at this level; the original product displayed ₹.

/// Resale estimate for an e-waste device: keyword base price depreciated by
/// age and functionality.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn ewaste_value(item_name: &str, functionality: Option<&str>, age: Option<&str>) -> i64 {
    let item_lower = item_name.to_lowercase();
    let base: f64 = if item_lower.contains("laptop") {
        15000.0
    } else if item_lower.contains("phone") || item_lower.contains("mobile") {
        8000.0
    } else if item_lower.contains("tablet") {
        10000.0
    } else if item_lower.contains("computer") || item_lower.contains("desktop") {
        12000.0
    } else if item_lower.contains("monitor") {
        3000.0
    } else {
        2000.0
    };

    let age_factor = match age {
        Some("Less than 1 year") => 0.7,
        Some("1-3 years") => 0.5,
        Some("3-5 years") => 0.3,
        _ => 0.15,
    };

    let functionality_factor = match functionality {
        Some("Partially working") => 0.5,
        Some("Not working") => 0.2,
        _ => 1.0,
    };

    (base * age_factor * functionality_factor).round() as i64
}

fn metal_weight_kg(weight: Option<&str>) -> f64 {
    match weight {
        Some("Very light (<1kg)") => 0.5,
        Some("Light (1-5kg)") => 3.0,
        Some("Medium (5-20kg)") => 12.0,
        Some("Heavy (>20kg)") => 30.0,
        _ => 5.0,
    }
}

/// Resale estimate for a metal item in sellable condition: weight bucket ×
/// ₹50/kg × condition multiplier.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn metal_value(weight: Option<&str>, condition: Option<&str>) -> i64 {
    let mut value = metal_weight_kg(weight) * 50.0;
    match condition {
        Some("Excellent") => value *= 2.0,
        Some("Good") => value *= 1.5,
        _ => {}
    }
    value.round() as i64
}

/// Scrap-rate estimate: weight bucket × ₹40/kg, no condition multiplier.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn scrap_value(weight: Option<&str>) -> i64 {
    (metal_weight_kg(weight) * 40.0).round() as i64
}

/// Bulk-paper estimate: quantity bucket × ₹10/kg.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn paper_value(quantity: Option<&str>) -> i64 {
    let weight_kg: f64 = match quantity {
        Some("Medium (bag full)") => 5.0,
        Some("Large (multiple bags)") => 20.0,
        Some("Very large") => 50.0,
        _ => 1.0,
    };
    (weight_kg * 10.0).round() as i64
}

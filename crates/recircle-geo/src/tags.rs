//! Category → Overpass tag-filter tables and tag interpretation.

use std::collections::BTreeMap;

use recircle_core::Category;

/// Ordered Overpass tag filters per category: specific filters first, then a
/// generic recycling-amenity fallback so a sparse area still returns
/// something relevant.
pub(crate) fn overpass_filters(category: Category) -> &'static [&'static str] {
    match category {
        Category::Ewaste => &[
            r#"["amenity"="recycling"]["recycling:electronics"="yes"]"#,
            r#"["amenity"="recycling"]["recycling:computers"="yes"]"#,
            r#"["shop"="computer"]"#,
            r#"["amenity"="recycling"]"#,
        ],
        Category::Plastic => &[
            r#"["amenity"="recycling"]["recycling:plastic"="yes"]"#,
            r#"["amenity"="recycling"]["recycling:plastic_bottles"="yes"]"#,
            r#"["amenity"="recycling"]"#,
        ],
        Category::Metal => &[
            r#"["amenity"="recycling"]["recycling:scrap_metal"="yes"]"#,
            r#"["amenity"="recycling"]["recycling:metal"="yes"]"#,
            r#"["shop"="scrap_yard"]"#,
            r#"["amenity"="recycling"]"#,
        ],
        Category::Fabric => &[
            r#"["amenity"="recycling"]["recycling:clothes"="yes"]"#,
            r#"["amenity"="charity"]"#,
            r#"["shop"="charity"]"#,
            r#"["amenity"="recycling"]["recycling:textiles"="yes"]"#,
        ],
        Category::Glass => &[
            r#"["amenity"="recycling"]["recycling:glass"="yes"]"#,
            r#"["amenity"="recycling"]["recycling:glass_bottles"="yes"]"#,
            r#"["amenity"="recycling"]"#,
        ],
        Category::Paper => &[
            r#"["amenity"="recycling"]["recycling:paper"="yes"]"#,
            r#"["amenity"="recycling"]["recycling:cardboard"="yes"]"#,
            r#"["amenity"="recycling"]"#,
        ],
        Category::Organic => &[
            r#"["amenity"="recycling"]["recycling:organic"="yes"]"#,
            r#"["amenity"="recycling"]["recycling:green_waste"="yes"]"#,
        ],
        Category::Hazardous => &[
            r#"["amenity"="recycling"]["recycling:hazardous_waste"="yes"]"#,
            r#"["amenity"="waste_disposal"]"#,
        ],
        Category::Other => &[
            r#"["amenity"="recycling"]"#,
            r#"["amenity"="waste_disposal"]"#,
        ],
    }
}

fn tag_is<'a>(tags: &'a BTreeMap<String, String>, key: &str, value: &str) -> bool {
    tags.get(key).is_some_and(|v| v == value)
}

/// Derive a display facility type from OSM tags using a fixed precedence:
/// charity > textile recycler > e-waste recycler > scrap dealer > recycling
/// center > waste management.
pub(crate) fn facility_type(tags: &BTreeMap<String, String>) -> &'static str {
    if tag_is(tags, "shop", "charity") || tag_is(tags, "amenity", "charity") {
        "NGO / Charity"
    } else if tag_is(tags, "recycling:clothes", "yes") || tag_is(tags, "recycling:textiles", "yes")
    {
        "Textile Recycler"
    } else if tag_is(tags, "recycling:electronics", "yes")
        || tag_is(tags, "recycling:computers", "yes")
    {
        "E-waste Recycler"
    } else if tag_is(tags, "recycling:scrap_metal", "yes") || tag_is(tags, "shop", "scrap_yard") {
        "Scrap Dealer"
    } else if tag_is(tags, "amenity", "recycling") {
        "Recycling Center"
    } else if tag_is(tags, "amenity", "waste_disposal") {
        "Waste Management"
    } else {
        "Recycling Center"
    }
}

/// Assemble a display address from whichever `addr:*` components are present.
/// Absent components are skipped rather than left blank.
pub(crate) fn build_address(tags: &BTreeMap<String, String>) -> String {
    let parts: Vec<&str> = [
        "addr:housenumber",
        "addr:street",
        "addr:suburb",
        "addr:city",
        "addr:state",
    ]
    .iter()
    .filter_map(|key| tags.get(*key).map(String::as_str))
    .collect();

    if parts.is_empty() {
        "Address not available".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn every_category_has_filters_ending_in_a_generic_fallback() {
        for category in Category::ALL {
            let filters = overpass_filters(category);
            assert!(!filters.is_empty(), "category {category}");
        }
        // The broad categories end with the generic recycling filter.
        assert_eq!(
            overpass_filters(Category::Plastic).last().copied(),
            Some(r#"["amenity"="recycling"]"#)
        );
    }

    #[test]
    fn charity_outranks_other_facility_types() {
        let t = tags(&[("shop", "charity"), ("recycling:clothes", "yes")]);
        assert_eq!(facility_type(&t), "NGO / Charity");
    }

    #[test]
    fn electronics_recycler_outranks_generic_center() {
        let t = tags(&[("amenity", "recycling"), ("recycling:electronics", "yes")]);
        assert_eq!(facility_type(&t), "E-waste Recycler");
    }

    #[test]
    fn unrecognized_tags_default_to_recycling_center() {
        assert_eq!(facility_type(&tags(&[("name", "X")])), "Recycling Center");
    }

    #[test]
    fn address_skips_missing_components() {
        let t = tags(&[("addr:street", "MG Road"), ("addr:city", "Indore")]);
        assert_eq!(build_address(&t), "MG Road, Indore");
    }

    #[test]
    fn address_falls_back_when_no_components_present() {
        assert_eq!(build_address(&tags(&[])), "Address not available");
    }
}

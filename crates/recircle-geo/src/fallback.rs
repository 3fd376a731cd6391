//! Synthetic facility data used when Overpass fails or finds nothing.
//!
//! Names, types and baseline distances are fixed per category so every call
//! returns the same 5 facilities in the same order; only coordinates, phone
//! and open-state are pseudo-random.

use rand::Rng;

use recircle_core::{Category, Facility};

struct BaselineFacility {
    name: &'static str,
    facility_type: &'static str,
    base_distance_km: f64,
}

const EWASTE: &[BaselineFacility] = &[
    BaselineFacility { name: "E-Waste Collection Center", facility_type: "E-waste Recycler", base_distance_km: 2.5 },
    BaselineFacility { name: "Tech Recycle India", facility_type: "E-waste Recycler", base_distance_km: 4.2 },
    BaselineFacility { name: "Green Electronics Disposal", facility_type: "E-waste Recycler", base_distance_km: 6.8 },
    BaselineFacility { name: "Digital Waste Management", facility_type: "E-waste Recycler", base_distance_km: 8.1 },
    BaselineFacility { name: "Eco Tech Recyclers", facility_type: "E-waste Recycler", base_distance_km: 10.5 },
];

const PLASTIC: &[BaselineFacility] = &[
    BaselineFacility { name: "Plastic Recycling Hub", facility_type: "Recycling Center", base_distance_km: 1.8 },
    BaselineFacility { name: "Green Plastic Solutions", facility_type: "Recycling Center", base_distance_km: 3.5 },
    BaselineFacility { name: "EcoPlast Recyclers", facility_type: "Recycling Center", base_distance_km: 5.2 },
    BaselineFacility { name: "Municipal Waste Center", facility_type: "Waste Management", base_distance_km: 7.0 },
    BaselineFacility { name: "Clean City Recyclers", facility_type: "Recycling Center", base_distance_km: 9.3 },
];

const METAL: &[BaselineFacility] = &[
    BaselineFacility { name: "Shri Ram Scrap Dealers", facility_type: "Scrap Dealer", base_distance_km: 1.2 },
    BaselineFacility { name: "Metal Recycling Co.", facility_type: "Scrap Dealer", base_distance_km: 3.0 },
    BaselineFacility { name: "Iron & Steel Scrap", facility_type: "Scrap Dealer", base_distance_km: 4.5 },
    BaselineFacility { name: "Universal Scrap Traders", facility_type: "Scrap Dealer", base_distance_km: 6.8 },
    BaselineFacility { name: "Metro Metal Recyclers", facility_type: "Scrap Dealer", base_distance_km: 8.9 },
];

const FABRIC: &[BaselineFacility] = &[
    BaselineFacility { name: "Cloth Bank NGO", facility_type: "NGO", base_distance_km: 2.0 },
    BaselineFacility { name: "Goonj - Clothing Donation", facility_type: "NGO", base_distance_km: 4.3 },
    BaselineFacility { name: "Textile Recycling Center", facility_type: "Recycling Center", base_distance_km: 5.8 },
    BaselineFacility { name: "Helping Hands Foundation", facility_type: "NGO", base_distance_km: 7.2 },
    BaselineFacility { name: "Second Life Textiles", facility_type: "Recycling Center", base_distance_km: 9.5 },
];

const GLASS: &[BaselineFacility] = &[
    BaselineFacility { name: "Glass Recycling Plant", facility_type: "Recycling Center", base_distance_km: 3.2 },
    BaselineFacility { name: "City Waste Management", facility_type: "Waste Management", base_distance_km: 5.0 },
    BaselineFacility { name: "Green Glass Recyclers", facility_type: "Recycling Center", base_distance_km: 7.4 },
    BaselineFacility { name: "Municipal Collection Point", facility_type: "Waste Management", base_distance_km: 8.8 },
    BaselineFacility { name: "Eco Glass Solutions", facility_type: "Recycling Center", base_distance_km: 11.2 },
];

const PAPER: &[BaselineFacility] = &[
    BaselineFacility { name: "Paper Recycling Hub", facility_type: "Scrap Dealer", base_distance_km: 1.5 },
    BaselineFacility { name: "Raddi Wala Paper Scrap", facility_type: "Scrap Dealer", base_distance_km: 2.8 },
    BaselineFacility { name: "Book Donation Center", facility_type: "NGO", base_distance_km: 4.6 },
    BaselineFacility { name: "Cardboard Recyclers", facility_type: "Recycling Center", base_distance_km: 6.3 },
    BaselineFacility { name: "Waste Paper Collection", facility_type: "Scrap Dealer", base_distance_km: 8.7 },
];

const DEFAULT: &[BaselineFacility] = &[
    BaselineFacility { name: "City Recycling Center", facility_type: "Recycling Center", base_distance_km: 2.5 },
    BaselineFacility { name: "Municipal Waste Facility", facility_type: "Waste Management", base_distance_km: 4.0 },
    BaselineFacility { name: "Green Earth NGO", facility_type: "NGO", base_distance_km: 6.5 },
    BaselineFacility { name: "Eco Solutions Hub", facility_type: "Recycling Center", base_distance_km: 8.0 },
    BaselineFacility { name: "Waste Management Authority", facility_type: "Waste Management", base_distance_km: 10.0 },
];

const AREAS: [&str; 8] = [
    "MG Road",
    "Park Street",
    "Gandhi Nagar",
    "Residency Road",
    "Nehru Place",
    "Sector 15",
    "Industrial Area",
    "Market Road",
];

fn baseline_for(category: Category) -> &'static [BaselineFacility] {
    match category {
        Category::Ewaste => EWASTE,
        Category::Plastic => PLASTIC,
        Category::Metal => METAL,
        Category::Fabric => FABRIC,
        Category::Glass => GLASS,
        Category::Paper => PAPER,
        Category::Organic | Category::Hazardous | Category::Other => DEFAULT,
    }
}

fn jitter(coordinate: f64, rng: &mut impl Rng) -> f64 {
    // ±0.05 degrees, kept to 6 decimals like real geocoded data.
    let offset = (rng.random::<f64>() - 0.5) * 0.1;
    ((coordinate + offset) * 1_000_000.0).round() / 1_000_000.0
}

fn synthetic_phone(rng: &mut impl Rng) -> String {
    format!("+91 {}", rng.random_range(7_000_000_000_u64..10_000_000_000_u64))
}

/// Materialize the fixed per-category facility list around a point.
pub(crate) fn synthetic_facilities(lat: f64, lng: f64, category: Category) -> Vec<Facility> {
    let mut rng = rand::rng();
    baseline_for(category)
        .iter()
        .enumerate()
        .map(|(index, base)| Facility {
            name: base.name.to_string(),
            facility_type: base.facility_type.to_string(),
            address: format!(
                "{}, {}, Indore, Madhya Pradesh",
                index + 1,
                AREAS[index % AREAS.len()]
            ),
            distance: base.base_distance_km,
            lat: jitter(lat, &mut rng),
            lng: jitter(lng, &mut rng),
            phone: synthetic_phone(&mut rng),
            is_open: rng.random_bool(0.7),
            rating: None,
            source_id: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_five_facilities_in_declared_order() {
        for category in Category::ALL {
            let facilities = synthetic_facilities(22.72, 75.86, category);
            assert_eq!(facilities.len(), 5, "category {category}");
            for window in facilities.windows(2) {
                assert!(window[0].distance <= window[1].distance, "category {category}");
            }
        }
    }

    #[test]
    fn names_and_types_are_stable_across_calls() {
        let first = synthetic_facilities(22.72, 75.86, Category::Metal);
        let second = synthetic_facilities(22.72, 75.86, Category::Metal);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.facility_type, b.facility_type);
            assert_eq!(a.distance, b.distance);
            assert_eq!(a.address, b.address);
        }
        assert_eq!(first[0].name, "Shri Ram Scrap Dealers");
    }

    #[test]
    fn coordinates_stay_within_jitter_bounds() {
        let facilities = synthetic_facilities(22.72, 75.86, Category::Glass);
        for f in &facilities {
            assert!((f.lat - 22.72).abs() <= 0.05 + 1e-9, "lat {}", f.lat);
            assert!((f.lng - 75.86).abs() <= 0.05 + 1e-9, "lng {}", f.lng);
        }
    }

    #[test]
    fn phone_numbers_look_indian() {
        let facilities = synthetic_facilities(22.72, 75.86, Category::Other);
        for f in &facilities {
            assert!(f.phone.starts_with("+91 7") || f.phone.starts_with("+91 8") || f.phone.starts_with("+91 9"), "{}", f.phone);
        }
    }

    #[test]
    fn unmapped_categories_share_the_default_table() {
        let organic = synthetic_facilities(22.72, 75.86, Category::Organic);
        let hazardous = synthetic_facilities(22.72, 75.86, Category::Hazardous);
        assert_eq!(organic[0].name, "City Recycling Center");
        assert_eq!(hazardous[0].name, "City Recycling Center");
    }
}

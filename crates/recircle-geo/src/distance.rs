//! Great-circle distance.

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates in km, rounded to one decimal.
#[must_use]
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    (EARTH_RADIUS_KM * c * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hundredth_degree_of_latitude_at_equator_is_about_1_1_km() {
        let d = haversine_km(0.0, 0.0, 0.01, 0.0);
        assert!((d - 1.1).abs() < f64::EPSILON, "got {d}");
    }

    #[test]
    fn zero_distance_for_identical_points() {
        assert_eq!(haversine_km(22.72, 75.86, 22.72, 75.86), 0.0);
    }

    #[test]
    fn result_has_one_decimal() {
        let d = haversine_km(22.7196, 75.8577, 22.7532, 75.8937);
        assert!((d * 10.0).fract().abs() < 1e-9, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = haversine_km(12.97, 77.59, 13.08, 80.27);
        let b = haversine_km(13.08, 80.27, 12.97, 77.59);
        assert!((a - b).abs() < f64::EPSILON);
        // Bengaluru → Chennai is roughly 290 km.
        assert!(a > 250.0 && a < 330.0, "got {a}");
    }
}

//! Facility resolution: real Overpass data when available, synthetic
//! fallback otherwise. Never fails outward.

use async_trait::async_trait;

use recircle_core::{Category, Facility, NearbyFinder};

use crate::client::{OverpassClient, OverpassElement};
use crate::distance::haversine_km;
use crate::fallback::synthetic_facilities;
use crate::tags::{build_address, facility_type, overpass_filters};

/// Default search radius in meters.
pub const DEFAULT_RADIUS_M: u32 = 5000;

/// Real results are capped at this many, closest first.
pub const MAX_FACILITIES: usize = 8;

/// Resolves nearby facilities for a category around a coordinate.
#[derive(Debug, Clone)]
pub struct FacilityResolver {
    client: OverpassClient,
}

impl FacilityResolver {
    #[must_use]
    pub fn new(client: OverpassClient) -> Self {
        Self { client }
    }

    /// Rank facilities near `(lat, lng)` for `category`.
    ///
    /// Upstream errors, timeouts and empty result sets all collapse into the
    /// synthetic fallback; the trigger and its cause are logged but never
    /// propagated. The returned list is sorted ascending by distance and
    /// holds at most [`MAX_FACILITIES`] entries (exactly 5 on fallback).
    pub async fn resolve(
        &self,
        lat: f64,
        lng: f64,
        category: Category,
        radius_m: u32,
    ) -> Vec<Facility> {
        let filters = overpass_filters(category);
        match self.client.search(lat, lng, radius_m, filters).await {
            Ok(elements) => {
                let facilities = rank_elements(&elements, lat, lng);
                if facilities.is_empty() {
                    tracing::info!(
                        %category,
                        lat,
                        lng,
                        "no named facilities in Overpass result, using synthetic fallback"
                    );
                    synthetic_facilities(lat, lng, category)
                } else {
                    tracing::info!(
                        %category,
                        count = facilities.len(),
                        "resolved facilities from Overpass"
                    );
                    facilities
                }
            }
            Err(error) => {
                tracing::warn!(
                    %category,
                    lat,
                    lng,
                    %error,
                    "Overpass lookup failed, using synthetic fallback"
                );
                synthetic_facilities(lat, lng, category)
            }
        }
    }
}

#[async_trait]
impl NearbyFinder for FacilityResolver {
    async fn find_nearby(
        &self,
        lat: f64,
        lng: f64,
        category: Category,
        radius_m: u32,
    ) -> Vec<Facility> {
        self.resolve(lat, lng, category, radius_m).await
    }
}

/// Convert named, positioned elements into facilities, closest first,
/// capped at [`MAX_FACILITIES`].
fn rank_elements(elements: &[OverpassElement], lat: f64, lng: f64) -> Vec<Facility> {
    let mut facilities: Vec<Facility> = elements
        .iter()
        .filter_map(|el| {
            let name = el.tags.get("name")?;
            let (el_lat, el_lng) = el.coordinates()?;
            let phone = el
                .tags
                .get("phone")
                .or_else(|| el.tags.get("contact:phone"))
                .cloned()
                .unwrap_or_else(|| "Not available".to_string());
            Some(Facility {
                name: name.clone(),
                facility_type: facility_type(&el.tags).to_string(),
                address: build_address(&el.tags),
                distance: haversine_km(lat, lng, el_lat, el_lng),
                lat: el_lat,
                lng: el_lng,
                phone,
                is_open: true,
                rating: None,
                source_id: el.id.map(|id| id.to_string()),
            })
        })
        .collect();
    facilities.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    facilities.truncate(MAX_FACILITIES);
    facilities
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

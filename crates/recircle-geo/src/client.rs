//! HTTP client for the OpenStreetMap Overpass API.
//!
//! Wraps `reqwest` with Overpass-specific query construction and typed
//! response deserialization. The resolver decides what to do with failures;
//! this client just reports them.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::GeoError;

const DEFAULT_BASE_URL: &str = "https://overpass-api.de/api/interpreter";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// One element of an Overpass response. Ways carry their coordinates in
/// `center` (requested via `out body center`), nodes in `lat`/`lon`.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassElement {
    pub id: Option<i64>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub center: Option<OverpassCenter>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OverpassCenter {
    pub lat: f64,
    pub lon: f64,
}

impl OverpassElement {
    /// Effective coordinates: node position, or way center.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => self.center.map(|c| (c.lat, c.lon)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

/// Client for the Overpass interpreter endpoint.
///
/// Use [`OverpassClient::new`] for production or
/// [`OverpassClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct OverpassClient {
    client: Client,
    base_url: String,
}

impl OverpassClient {
    /// Creates a client pointed at the public Overpass interpreter.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, GeoError> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom interpreter URL (for wiremock tests).
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`GeoError::InvalidBaseUrl`] for an empty URL.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, GeoError> {
        if base_url.is_empty() {
            return Err(GeoError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "base URL must not be empty".to_string(),
            });
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("recircle/0.1 (facility-lookup)")
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Runs one combined search for all tag filters around a point.
    ///
    /// # Errors
    ///
    /// - [`GeoError::Http`] on network failure, timeout, or non-2xx status.
    /// - [`GeoError::Deserialize`] if the body is not an Overpass JSON
    ///   envelope.
    pub async fn search(
        &self,
        lat: f64,
        lng: f64,
        radius_m: u32,
        filters: &[&str],
    ) -> Result<Vec<OverpassElement>, GeoError> {
        let query = build_query(lat, lng, radius_m, filters);
        tracing::debug!(lat, lng, radius_m, filters = filters.len(), "querying Overpass");

        let response = self
            .client
            .post(&self.base_url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(query)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let parsed: OverpassResponse =
            serde_json::from_str(&body).map_err(|e| GeoError::Deserialize {
                context: format!("overpass search around ({lat}, {lng})"),
                source: e,
            })?;
        Ok(parsed.elements)
    }
}

/// Build the Overpass QL query: one `node` + `way` pair per filter, unioned,
/// with way centers included so both carry coordinates.
fn build_query(lat: f64, lng: f64, radius_m: u32, filters: &[&str]) -> String {
    let mut clauses = String::new();
    for filter in filters {
        clauses.push_str(&format!(
            "  node{filter}(around:{radius_m},{lat},{lng});\n  way{filter}(around:{radius_m},{lat},{lng});\n"
        ));
    }
    format!("[out:json][timeout:25];\n(\n{clauses});\nout body center;")
}

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

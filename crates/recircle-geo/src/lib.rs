//! Geo-resolution: turn coordinates + waste category into a ranked facility
//! list, backed by the OpenStreetMap Overpass API with a deterministic
//! synthetic fallback when the upstream fails or returns nothing.

pub mod client;
pub mod distance;
mod error;
mod fallback;
pub mod resolver;
mod tags;

pub use client::{OverpassClient, OverpassElement};
pub use error::GeoError;
pub use resolver::{FacilityResolver, DEFAULT_RADIUS_M, MAX_FACILITIES};

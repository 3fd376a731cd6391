//! Capability contracts for the orchestrator's external collaborators.
//!
//! The lifecycle orchestrator takes these as injected trait objects so every
//! collaborator can be substituted with a test double. Errors here are
//! transport-agnostic; concrete clients map their own failures into them.

use async_trait::async_trait;
use thiserror::Error;

use crate::category::Category;
use crate::types::{Facility, FeedbackRecord, ItemRecord};

/// Failure of the image classification capability.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The classifier call itself failed (network, HTTP status, model error).
    #[error("classifier request failed: {0}")]
    Upstream(String),

    /// The classifier responded but the payload could not be understood.
    #[error("could not parse classifier response: {0}")]
    InvalidResponse(String),
}

/// Failure of the record store capability.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record store failure: {0}")]
    Backend(String),
}

/// Structured result of classifying one image.
#[derive(Debug, Clone)]
pub enum Classification {
    /// The image does not show a valid waste/recyclable item.
    Rejected { reason: String, confidence: String },
    /// A valid item with extracted metadata.
    Item(ClassifiedItem),
}

/// Metadata extracted from a valid item image.
#[derive(Debug, Clone)]
pub struct ClassifiedItem {
    pub material: String,
    pub item_name: String,
    pub description: String,
    pub condition_estimate: String,
    /// One of `high`, `medium`, `low`.
    pub confidence: String,
}

/// Turns raw image bytes into a structured [`Classification`].
#[async_trait]
pub trait ImageClassifier: Send + Sync {
    async fn classify(
        &self,
        image: &[u8],
        mime_type: &str,
    ) -> Result<Classification, ClassifyError>;
}

/// Resolves nearby facilities for a category. Never fails outward: upstream
/// problems must be absorbed into a fallback result by the implementation.
#[async_trait]
pub trait NearbyFinder: Send + Sync {
    async fn find_nearby(
        &self,
        lat: f64,
        lng: f64,
        category: Category,
        radius_m: u32,
    ) -> Vec<Facility>;
}

/// Record store for item lifecycle records: create/get/update by id.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Persist a new record. The store assigns and returns the object id.
    async fn create(&self, record: ItemRecord) -> Result<String, StoreError>;

    async fn get(&self, id: &str) -> Result<Option<ItemRecord>, StoreError>;

    /// Overwrite the record stored under `id`. Last write wins; no
    /// versioning is performed.
    async fn update(&self, id: &str, record: ItemRecord) -> Result<(), StoreError>;
}

/// Create-only store for feedback records.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    async fn create(&self, record: FeedbackRecord) -> Result<String, StoreError>;
}

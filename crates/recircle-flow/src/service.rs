//! The lifecycle service: four operations over one item record.

use std::collections::BTreeMap;
use std::sync::Arc;

use recircle_core::{
    categorize, object_id, questions_for, Classification, Facility, ImageClassifier, ItemRecord,
    ItemStore, NearbyFinder, Recommendation,
};
use recircle_recommend::{recommend, ClassificationMeta};

use crate::error::FlowError;

/// Default facility search radius in meters.
pub const DEFAULT_RADIUS_M: u32 = 5000;

/// Outcome of submitting an image.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The classifier judged the image not to show a valid waste item.
    /// No record was created; the caller should discard the stored image.
    Rejected { reason: String, confidence: String },
    /// A new item record, persisted, with its follow-up questions.
    Accepted(ItemRecord),
}

/// Orchestrates one item's lifecycle across its injected collaborators.
///
/// Stateless between calls; all state lives in the record store. Concurrent
/// operations on the same item id race last-write-wins at the store.
pub struct LifecycleService {
    classifier: Arc<dyn ImageClassifier>,
    finder: Arc<dyn NearbyFinder>,
    items: Arc<dyn ItemStore>,
}

impl LifecycleService {
    #[must_use]
    pub fn new(
        classifier: Arc<dyn ImageClassifier>,
        finder: Arc<dyn NearbyFinder>,
        items: Arc<dyn ItemStore>,
    ) -> Self {
        Self {
            classifier,
            finder,
            items,
        }
    }

    /// Classify an image and, when valid, create and persist the item record.
    ///
    /// `image_ref` is the opaque reference under which the caller stored the
    /// image bytes; it is recorded as-is.
    ///
    /// # Errors
    ///
    /// - [`FlowError::Classification`] if the classifier call fails.
    /// - [`FlowError::Store`] if persisting the new record fails.
    pub async fn submit_image(
        &self,
        image: &[u8],
        mime_type: &str,
        image_ref: &str,
    ) -> Result<SubmitOutcome, FlowError> {
        let classification = self.classifier.classify(image, mime_type).await?;

        let item = match classification {
            Classification::Rejected { reason, confidence } => {
                tracing::info!(%reason, "item submission rejected");
                return Ok(SubmitOutcome::Rejected { reason, confidence });
            }
            Classification::Item(item) => item,
        };

        let category = categorize(&item.material);
        let questions = questions_for(category);

        let mut record = ItemRecord {
            id: String::new(),
            image_ref: image_ref.to_string(),
            material: item.material,
            item_name: item.item_name,
            description: item.description,
            condition_estimate: item.condition_estimate,
            confidence: item.confidence,
            category,
            questions,
            user_answers: None,
            recommendation: None,
            nearby_facilities: None,
            created_at: chrono::Utc::now(),
        };
        let id = self.items.create(record.clone()).await?;
        record.id = id;

        tracing::info!(item_id = %record.id, %category, "item record created");
        Ok(SubmitOutcome::Accepted(record))
    }

    /// Fetch an item record. Idempotent, no state transition.
    ///
    /// # Errors
    ///
    /// - [`FlowError::InvalidInput`] for a malformed id.
    /// - [`FlowError::NotFound`] when no record exists.
    /// - [`FlowError::Store`] on store failure.
    pub async fn get_item(&self, id: &str) -> Result<ItemRecord, FlowError> {
        let record = self.fetch(id).await?;
        Ok(record)
    }

    /// Store the user's answers and derive the recommendation.
    ///
    /// The recommendation is computed before anything is written: a failed
    /// computation leaves the record untouched. The answer count is not
    /// enforced here — only emptiness; the calling surface owns the
    /// 4-answer convention.
    ///
    /// # Errors
    ///
    /// - [`FlowError::InvalidInput`] for a malformed id or empty answers.
    /// - [`FlowError::NotFound`] when no record exists.
    /// - [`FlowError::Store`] on store failure.
    pub async fn submit_answers(
        &self,
        id: &str,
        answers: BTreeMap<String, String>,
    ) -> Result<Recommendation, FlowError> {
        if answers.is_empty() {
            return Err(FlowError::InvalidInput(
                "answers must not be empty".to_string(),
            ));
        }
        let mut record = self.fetch(id).await?;

        let meta = ClassificationMeta {
            material: record.material.clone(),
            description: record.description.clone(),
            condition_estimate: record.condition_estimate.clone(),
        };
        let recommendation = recommend(record.category, &record.item_name, &answers, &meta);

        record.user_answers = Some(answers);
        record.recommendation = Some(recommendation.clone());
        self.items.update(id, record).await?;

        tracing::info!(item_id = id, action = %recommendation.action, "recommendation stored");
        Ok(recommendation)
    }

    /// Resolve nearby facilities for the item's category and persist them.
    ///
    /// Repeatable: each call overwrites the previous facility list. Geodata
    /// failures are absorbed by the finder and never surface here.
    ///
    /// # Errors
    ///
    /// - [`FlowError::InvalidInput`] for a malformed id or non-finite
    ///   coordinates.
    /// - [`FlowError::NotFound`] when no record exists.
    /// - [`FlowError::Store`] on store failure.
    pub async fn resolve_location(
        &self,
        id: &str,
        lat: f64,
        lng: f64,
    ) -> Result<Vec<Facility>, FlowError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(FlowError::InvalidInput(
                "latitude and longitude are required".to_string(),
            ));
        }
        let mut record = self.fetch(id).await?;

        let facilities = self
            .finder
            .find_nearby(lat, lng, record.category, DEFAULT_RADIUS_M)
            .await;

        record.nearby_facilities = Some(facilities.clone());
        self.items.update(id, record).await?;

        tracing::info!(item_id = id, count = facilities.len(), "facilities stored");
        Ok(facilities)
    }

    async fn fetch(&self, id: &str) -> Result<ItemRecord, FlowError> {
        if !object_id::is_valid(id) {
            return Err(FlowError::InvalidInput(format!(
                "invalid item id format: {id}"
            )));
        }
        self.items
            .get(id)
            .await?
            .ok_or_else(|| FlowError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

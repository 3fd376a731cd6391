use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use recircle_core::object_id;
use recircle_core::{FeedbackRecord, FeedbackStore, ItemRecord, ItemStore, StoreError};

/// Map-backed item store. Assigns object ids on create.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    items: RwLock<HashMap<String, ItemRecord>>,
}

impl MemoryItemStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn create(&self, mut record: ItemRecord) -> Result<String, StoreError> {
        let id = object_id::generate();
        record.id.clone_from(&id);
        self.items.write().await.insert(id.clone(), record);
        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<Option<ItemRecord>, StoreError> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn update(&self, id: &str, record: ItemRecord) -> Result<(), StoreError> {
        // Unconditional overwrite: the caller read the record, mutated it,
        // and writes it back. Last write wins.
        self.items.write().await.insert(id.to_string(), record);
        Ok(())
    }
}

/// Map-backed feedback store. Create-only.
#[derive(Debug, Default)]
pub struct MemoryFeedbackStore {
    records: RwLock<HashMap<String, FeedbackRecord>>,
}

impl MemoryFeedbackStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl FeedbackStore for MemoryFeedbackStore {
    async fn create(&self, mut record: FeedbackRecord) -> Result<String, StoreError> {
        let id = object_id::generate();
        record.id.clone_from(&id);
        self.records.write().await.insert(id.clone(), record);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ItemRecord {
        ItemRecord {
            id: String::new(),
            image_ref: "uploads/test.jpg".to_string(),
            material: "plastic".to_string(),
            item_name: "Bottle".to_string(),
            description: "a bottle".to_string(),
            condition_estimate: "used".to_string(),
            confidence: "high".to_string(),
            category: recircle_core::Category::Plastic,
            questions: recircle_core::questions_for(recircle_core::Category::Plastic),
            user_answers: None,
            recommendation: None,
            nearby_facilities: None,
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn create_assigns_a_valid_object_id() {
        let store = MemoryItemStore::new();
        let id = store.create(sample_record()).await.unwrap();
        assert!(object_id::is_valid(&id));

        let fetched = store.get(&id).await.unwrap().expect("record should exist");
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.item_name, "Bottle");
    }

    #[tokio::test]
    async fn get_unknown_id_returns_none() {
        let store = MemoryItemStore::new();
        assert!(store.get("507f1f77bcf86cd799439011").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_overwrites_the_record() {
        let store = MemoryItemStore::new();
        let id = store.create(sample_record()).await.unwrap();

        let mut record = store.get(&id).await.unwrap().unwrap();
        record.user_answers = Some(std::collections::BTreeMap::from([(
            "condition".to_string(),
            "New/Unused".to_string(),
        )]));
        store.update(&id, record).await.unwrap();

        let fetched = store.get(&id).await.unwrap().unwrap();
        assert!(fetched.user_answers.is_some());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn feedback_store_assigns_ids() {
        let store = MemoryFeedbackStore::new();
        let id = store
            .create(FeedbackRecord {
                id: String::new(),
                item_id: "507f1f77bcf86cd799439011".to_string(),
                rating: 5,
                comment: Some("great".to_string()),
                was_helpful: Some(true),
                created_at: chrono::Utc::now(),
            })
            .await
            .unwrap();
        assert!(object_id::is_valid(&id));
        assert_eq!(store.len().await, 1);
    }
}

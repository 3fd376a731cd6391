//! Domain records shared across the workspace.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// One follow-up question shown to the user after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
}

/// The engine's output: an action paired with rationale, optional valuation,
/// optional marketplace link, and tips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub action: String,
    pub reasoning: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_search_url: Option<String>,
    pub tips: Vec<String>,
}

/// A ranked real-world or synthetic location capable of receiving an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub name: String,
    #[serde(rename = "type")]
    pub facility_type: String,
    pub address: String,
    /// Great-circle distance from the query point, km, one decimal.
    pub distance: f64,
    pub lat: f64,
    pub lng: f64,
    pub phone: String,
    pub is_open: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
}

/// One persisted item lifecycle record, created per submitted photo.
///
/// Invariant: `recommendation` is present iff `user_answers` is present.
/// `nearby_facilities`, when present, is sorted ascending by distance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: String,
    pub image_ref: String,
    pub material: String,
    pub item_name: String,
    pub description: String,
    pub condition_estimate: String,
    pub confidence: String,
    pub category: Category,
    pub questions: Vec<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_answers: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearby_facilities: Option<Vec<Facility>>,
    pub created_at: DateTime<Utc>,
}

/// User feedback on a completed recommendation. Created once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub id: String,
    pub item_id: String,
    /// 1–5 inclusive.
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub was_helpful: Option<bool>,
    pub created_at: DateTime<Utc>,
}

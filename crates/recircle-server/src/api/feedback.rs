use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};

use recircle_core::FeedbackRecord;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct FeedbackBody {
    pub item_id: Option<String>,
    pub rating: Option<u8>,
    pub comment: Option<String>,
    pub was_helpful: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct FeedbackData {
    pub id: String,
    pub message: &'static str,
}

pub(super) async fn submit_feedback(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<FeedbackBody>,
) -> Result<Json<ApiResponse<FeedbackData>>, ApiError> {
    let Some(rating @ 1..=5) = body.rating else {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            "rating must be between 1 and 5",
        ));
    };

    let record = FeedbackRecord {
        id: String::new(),
        item_id: body.item_id.unwrap_or_default(),
        rating,
        comment: body.comment.filter(|c| !c.trim().is_empty()),
        was_helpful: body.was_helpful,
        created_at: chrono::Utc::now(),
    };

    let id = state.feedback.create(record).await.map_err(|e| {
        tracing::error!(error = %e, "failed to store feedback");
        ApiError::new(req_id.0.clone(), "internal_error", "failed to store feedback")
    })?;

    tracing::info!(feedback_id = %id, rating, "feedback recorded");
    Ok(Json(ApiResponse {
        data: FeedbackData {
            id,
            message: "Thank you for your feedback!",
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

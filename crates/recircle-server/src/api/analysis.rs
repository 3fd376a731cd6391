use std::collections::BTreeMap;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

use recircle_core::{Facility, ItemRecord, Question, Recommendation};
use recircle_flow::SubmitOutcome;

use crate::middleware::RequestId;

use super::{map_flow_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AcceptedData {
    pub item_id: String,
    pub material: String,
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub condition_estimate: String,
    pub confidence: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RejectionData {
    pub is_valid_item: bool,
    pub rejection_reason: String,
    pub confidence: String,
}

fn extension_for(mime_type: &str) -> Option<&'static str> {
    match mime_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

pub(super) async fn upload(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut image: Option<(Vec<u8>, String)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::new(req_id.0.clone(), "bad_request", format!("invalid multipart body: {e}"))
    })? {
        if field.name() != Some("image") {
            continue;
        }
        let mime_type = field.content_type().unwrap_or_default().to_string();
        if extension_for(&mime_type).is_none() {
            return Err(ApiError::new(
                req_id.0.clone(),
                "bad_request",
                "only image files are allowed (jpeg, jpg, png, webp)",
            ));
        }
        let bytes = field.bytes().await.map_err(|e| {
            ApiError::new(req_id.0.clone(), "bad_request", format!("failed to read image: {e}"))
        })?;
        image = Some((bytes.to_vec(), mime_type));
        break;
    }

    let Some((bytes, mime_type)) = image else {
        return Err(ApiError::new(
            req_id.0.clone(),
            "bad_request",
            "please upload an image file",
        ));
    };

    // Extension is rechecked above; unwrap-free lookup.
    let ext = extension_for(&mime_type).unwrap_or("jpg");
    let file_name = format!(
        "{}-{}.{ext}",
        chrono::Utc::now().timestamp_millis(),
        rand::rng().random_range(0..1_000_000_000_u64)
    );
    let image_path = state.upload_dir.join(&file_name);
    let image_ref = image_path.to_string_lossy().to_string();

    let outcome = state
        .flow
        .submit_image(&bytes, &mime_type, &image_ref)
        .await
        .map_err(|e| map_flow_error(req_id.0.clone(), &e))?;

    match outcome {
        SubmitOutcome::Rejected { reason, confidence } => {
            // Nothing was written to disk for a rejected item, so there is
            // no stored image to discard.
            Ok((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse {
                    data: RejectionData {
                        is_valid_item: false,
                        rejection_reason: reason,
                        confidence,
                    },
                    meta: ResponseMeta::new(req_id.0),
                }),
            )
                .into_response())
        }
        SubmitOutcome::Accepted(record) => {
            if let Err(e) = persist_image(&state, &image_path, &bytes).await {
                tracing::warn!(error = %e, path = %image_ref, "failed to persist uploaded image");
            }
            let data = AcceptedData {
                item_id: record.id,
                material: record.material,
                item_name: record.item_name,
                description: record.description,
                category: record.category.to_string(),
                condition_estimate: record.condition_estimate,
                confidence: record.confidence,
                questions: record.questions,
            };
            Ok(Json(ApiResponse {
                data,
                meta: ResponseMeta::new(req_id.0),
            })
            .into_response())
        }
    }
}

async fn persist_image(
    state: &AppState,
    path: &std::path::Path,
    bytes: &[u8],
) -> std::io::Result<()> {
    tokio::fs::create_dir_all(&state.upload_dir).await?;
    tokio::fs::write(path, bytes).await
}

pub(super) async fn get_analysis(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(item_id): Path<String>,
) -> Result<Json<ApiResponse<ItemRecord>>, ApiError> {
    let record = state
        .flow
        .get_item(&item_id)
        .await
        .map_err(|e| map_flow_error(req_id.0.clone(), &e))?;
    Ok(Json(ApiResponse {
        data: record,
        meta: ResponseMeta::new(req_id.0),
    }))
}

#[derive(Debug, Deserialize)]
pub(super) struct SubmitAnswersBody {
    pub answers: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AnswersData {
    pub item_id: String,
    pub recommendation: Recommendation,
}

pub(super) async fn submit_answers(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(item_id): Path<String>,
    Json(body): Json<SubmitAnswersBody>,
) -> Result<Json<ApiResponse<AnswersData>>, ApiError> {
    let answers = body.answers.unwrap_or_default();
    let recommendation = state
        .flow
        .submit_answers(&item_id, answers)
        .await
        .map_err(|e| map_flow_error(req_id.0.clone(), &e))?;
    Ok(Json(ApiResponse {
        data: AnswersData {
            item_id,
            recommendation,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

#[derive(Debug, Deserialize)]
pub(super) struct LocationBody {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UserLocation {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct LocationsData {
    pub item_id: String,
    pub user_location: UserLocation,
    pub locations: Vec<Facility>,
}

pub(super) async fn resolve_location(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(item_id): Path<String>,
    Json(body): Json<LocationBody>,
) -> Result<Json<ApiResponse<LocationsData>>, ApiError> {
    let (Some(latitude), Some(longitude)) = (body.latitude, body.longitude) else {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            "please provide latitude and longitude",
        ));
    };
    let locations = state
        .flow
        .resolve_location(&item_id, latitude, longitude)
        .await
        .map_err(|e| map_flow_error(req_id.0.clone(), &e))?;
    Ok(Json(ApiResponse {
        data: LocationsData {
            item_id,
            user_location: UserLocation {
                latitude,
                longitude,
            },
            locations,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

//! HTTP client for the Gemini `generateContent` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use recircle_core::{Classification, ClassifyError, ImageClassifier};

use crate::parse::parse_reply;
use crate::prompt::CLASSIFY_PROMPT;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Vision classifier backed by the Gemini REST API.
///
/// Use [`GeminiClassifier::new`] for production or
/// [`GeminiClassifier::with_base_url`] to point at a mock server in tests.
pub struct GeminiClassifier {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClassifier {
    /// Creates a classifier pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::Upstream`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, ClassifyError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a classifier with a custom base URL (for wiremock tests).
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::Upstream`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, ClassifyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("recircle/0.1 (item-classification)")
            .build()
            .map_err(|e| ClassifyError::Upstream(e.to_string()))?;
        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            model: model.to_owned(),
        })
    }

    async fn generate(&self, image: &[u8], mime_type: &str) -> Result<String, ClassifyError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let body = json!({
            "contents": [{
                "parts": [
                    { "text": CLASSIFY_PROMPT },
                    { "inline_data": { "mime_type": mime_type, "data": STANDARD.encode(image) } }
                ]
            }]
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClassifyError::Upstream(e.to_string()))?
            .error_for_status()
            .map_err(|e| ClassifyError::Upstream(e.to_string()))?;

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ClassifyError::InvalidResponse(e.to_string()))?;

        let text: String = parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect();

        if text.is_empty() {
            return Err(ClassifyError::InvalidResponse(
                "model reply contained no text parts".to_string(),
            ));
        }
        Ok(text)
    }
}

#[async_trait]
impl ImageClassifier for GeminiClassifier {
    async fn classify(
        &self,
        image: &[u8],
        mime_type: &str,
    ) -> Result<Classification, ClassifyError> {
        tracing::debug!(bytes = image.len(), mime_type, "classifying image");
        let reply = self.generate(image, mime_type).await?;
        let classification = parse_reply(&reply)?;
        match &classification {
            Classification::Item(item) => {
                tracing::info!(
                    item_name = %item.item_name,
                    material = %item.material,
                    confidence = %item.confidence,
                    "image classified"
                );
            }
            Classification::Rejected { reason, .. } => {
                tracing::info!(%reason, "image rejected by classifier");
            }
        }
        Ok(classification)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

//! Extraction of the structured classification from the model's text reply.

use serde::Deserialize;

use recircle_core::{Classification, ClassifiedItem, ClassifyError};

const DEFAULT_REJECTION_REASON: &str = "This image does not appear to contain a recyclable or \
     disposable item. Please upload an image of waste, old items, or recyclables.";

/// The JSON shape the prompt asks the model to produce.
#[derive(Debug, Deserialize)]
pub(crate) struct RawClassification {
    pub is_valid_item: bool,
    pub rejection_reason: Option<String>,
    pub material: Option<String>,
    pub item_name: Option<String>,
    pub description: Option<String>,
    pub condition_estimate: Option<String>,
    pub confidence: Option<String>,
}

/// Pull the JSON object out of the model's reply.
///
/// Models often wrap the payload in a fenced ```json block; try that first,
/// then fall back to the outermost `{...}` span.
fn extract_json(text: &str) -> Option<&str> {
    if let Some(fence_start) = text.find("```json") {
        let after = &text[fence_start + "```json".len()..];
        if let Some(fence_end) = after.find("```") {
            return Some(after[..fence_end].trim());
        }
    }
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Parse the model reply text into a [`Classification`].
///
/// # Errors
///
/// Returns [`ClassifyError::InvalidResponse`] if no JSON object can be found
/// or it does not match the expected shape.
pub(crate) fn parse_reply(text: &str) -> Result<Classification, ClassifyError> {
    let json = extract_json(text).ok_or_else(|| {
        ClassifyError::InvalidResponse("no JSON object in model reply".to_string())
    })?;
    let raw: RawClassification = serde_json::from_str(json)
        .map_err(|e| ClassifyError::InvalidResponse(e.to_string()))?;

    let confidence = raw.confidence.unwrap_or_else(|| "low".to_string());

    if raw.is_valid_item {
        Ok(Classification::Item(ClassifiedItem {
            material: raw.material.unwrap_or_default(),
            item_name: raw.item_name.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            condition_estimate: raw.condition_estimate.unwrap_or_default(),
            confidence,
        }))
    } else {
        Ok(Classification::Rejected {
            reason: raw
                .rejection_reason
                .unwrap_or_else(|| DEFAULT_REJECTION_REASON.to_string()),
            confidence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fenced_json_block() {
        let reply = "Here you go:\n```json\n{\"is_valid_item\": true, \"material\": \"plastic\", \
                     \"item_name\": \"Bottle\", \"confidence\": \"high\"}\n```\nDone.";
        let classification = parse_reply(reply).unwrap();
        match classification {
            Classification::Item(item) => {
                assert_eq!(item.material, "plastic");
                assert_eq!(item.item_name, "Bottle");
                assert_eq!(item.confidence, "high");
            }
            Classification::Rejected { .. } => panic!("expected item"),
        }
    }

    #[test]
    fn parses_bare_json_object() {
        let reply = "{\"is_valid_item\": false, \"rejection_reason\": \"selfie\", \
                     \"confidence\": \"high\"}";
        match parse_reply(reply).unwrap() {
            Classification::Rejected { reason, confidence } => {
                assert_eq!(reason, "selfie");
                assert_eq!(confidence, "high");
            }
            Classification::Item(_) => panic!("expected rejection"),
        }
    }

    #[test]
    fn rejection_without_reason_gets_default_text() {
        let reply = "{\"is_valid_item\": false}";
        match parse_reply(reply).unwrap() {
            Classification::Rejected { reason, confidence } => {
                assert!(reason.contains("does not appear to contain"));
                assert_eq!(confidence, "low");
            }
            Classification::Item(_) => panic!("expected rejection"),
        }
    }

    #[test]
    fn reply_without_json_is_an_error() {
        let result = parse_reply("I cannot analyze this image.");
        assert!(matches!(result, Err(ClassifyError::InvalidResponse(_))));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let result = parse_reply("{\"is_valid_item\": }");
        assert!(matches!(result, Err(ClassifyError::InvalidResponse(_))));
    }
}

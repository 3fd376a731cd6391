use wiremock::matchers::{method, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn classifier_for(server: &MockServer) -> GeminiClassifier {
    GeminiClassifier::with_base_url("test-key", "gemini-flash-lite-latest", 5, &server.uri())
        .expect("classifier construction should not fail")
}

fn model_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }] }
        }]
    })
}

#[tokio::test]
async fn classify_returns_item_for_valid_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path_regex(r"^/v1beta/models/.+:generateContent$"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_reply(
            "```json\n{\"is_valid_item\": true, \"material\": \"electronic\", \
             \"item_name\": \"Laptop\", \"description\": \"an old laptop\", \
             \"condition_estimate\": \"used\", \"confidence\": \"high\"}\n```",
        )))
        .mount(&server)
        .await;

    let classification = classifier_for(&server)
        .classify(b"fake-image-bytes", "image/jpeg")
        .await
        .expect("classification should succeed");

    match classification {
        Classification::Item(item) => {
            assert_eq!(item.item_name, "Laptop");
            assert_eq!(item.material, "electronic");
            assert_eq!(item.confidence, "high");
        }
        Classification::Rejected { .. } => panic!("expected item"),
    }
}

#[tokio::test]
async fn classify_returns_rejection_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_reply(
            "{\"is_valid_item\": false, \"rejection_reason\": \"This is a selfie\", \
             \"confidence\": \"high\"}",
        )))
        .mount(&server)
        .await;

    match classifier_for(&server)
        .classify(b"fake", "image/png")
        .await
        .expect("classification should succeed")
    {
        Classification::Rejected { reason, confidence } => {
            assert_eq!(reason, "This is a selfie");
            assert_eq!(confidence, "high");
        }
        Classification::Item(_) => panic!("expected rejection"),
    }
}

#[tokio::test]
async fn http_failure_maps_to_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = classifier_for(&server).classify(b"fake", "image/jpeg").await;
    assert!(matches!(result, Err(ClassifyError::Upstream(_))));
}

#[tokio::test]
async fn empty_model_reply_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })),
        )
        .mount(&server)
        .await;

    let result = classifier_for(&server).classify(b"fake", "image/jpeg").await;
    assert!(matches!(result, Err(ClassifyError::InvalidResponse(_))));
}

#[tokio::test]
async fn non_json_model_text_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(model_reply("I can't help with that.")),
        )
        .mount(&server)
        .await;

    let result = classifier_for(&server).classify(b"fake", "image/jpeg").await;
    assert!(matches!(result, Err(ClassifyError::InvalidResponse(_))));
}

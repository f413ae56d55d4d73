//! Functional tests for the Gemini client wire protocol

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use poster_styler::client::{GeminiClient, ImageGenerator, StyleRequest};
use poster_styler::config::GeminiConfig;
use poster_styler::encoding::{self, ReferenceImage};
use poster_styler::error::AppError;

fn test_config(server: &MockServer) -> GeminiConfig {
    GeminiConfig {
        api_key: Some("test-key".to_string()),
        base_url: server.uri(),
        model: "gemini-2.5-flash-image".to_string(),
        timeout_ms: 5000,
    }
}

fn request(prompt: &str, reference: Option<ReferenceImage>) -> StyleRequest {
    StyleRequest {
        prompt: prompt.to_string(),
        style_instruction: "Style: Y3K (Year 3000 Aesthetics).".to_string(),
        reference,
    }
}

async fn mount_success(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash-image:generateContent"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "here you go"},
                        {"inlineData": {"mimeType": "image/png", "data": "QUFBQQ=="}}
                    ]
                }
            }]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_success_returns_data_url() {
    let server = MockServer::start().await;
    mount_success(&server).await;

    let client = GeminiClient::new(&test_config(&server)).unwrap();
    let url = client
        .generate_styled(request("a lighthouse", None))
        .await
        .unwrap();

    assert_eq!(url, "data:image/png;base64,QUFBQQ==");
}

#[tokio::test]
async fn test_text_only_request_has_single_text_part() {
    let server = MockServer::start().await;
    mount_success(&server).await;

    let client = GeminiClient::new(&test_config(&server)).unwrap();
    client
        .generate_styled(request("a lighthouse", None))
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);

    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    let parts = body["contents"][0]["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 1);

    let text = parts[0]["text"].as_str().unwrap();
    assert!(text.starts_with("Task: Generate an image"));
    assert!(text.contains("User Prompt: a lighthouse"));
    assert!(text.contains("Style: Y3K (Year 3000 Aesthetics)."));
}

#[tokio::test]
async fn test_reference_image_is_first_part() {
    // Scenario: a PNG reference image makes the call an edit, with the
    // encoded image as the first content part
    let server = MockServer::start().await;
    mount_success(&server).await;

    let source_bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    let reference = ReferenceImage::new(source_bytes.clone(), "image/png");

    let client = GeminiClient::new(&test_config(&server)).unwrap();
    client
        .generate_styled(request("a lighthouse", Some(reference)))
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    let parts = body["contents"][0]["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 2);

    assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
    let payload = parts[0]["inlineData"]["data"].as_str().unwrap();
    assert!(!payload.is_empty());
    assert_eq!(encoding::decode(payload).unwrap(), source_bytes);

    let text = parts[1]["text"].as_str().unwrap();
    assert!(text.starts_with("Task: Edit the provided image"));
}

#[tokio::test]
async fn test_http_error_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exhausted"))
        .mount(&server)
        .await;

    let client = GeminiClient::new(&test_config(&server)).unwrap();
    let result = client.generate_styled(request("x", None)).await;

    match result {
        Err(AppError::Api(message)) => {
            assert!(message.contains("429"));
            assert!(message.contains("quota exhausted"));
        }
        other => panic!("expected Api error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_zero_candidates_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let client = GeminiClient::new(&test_config(&server)).unwrap();
    let result = client.generate_styled(request("x", None)).await;

    assert!(matches!(result, Err(AppError::NoCandidates)));
}

#[tokio::test]
async fn test_text_only_response_is_no_image_error() {
    // The model declined and returned text only
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": "I cannot generate that image."}]
                }
            }]
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::new(&test_config(&server)).unwrap();
    let result = client.generate_styled(request("x", None)).await;

    assert!(matches!(result, Err(AppError::NoImageData)));
}

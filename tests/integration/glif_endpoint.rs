use axum::http::StatusCode;
use glif::client::{GlifClient, GlifInputs, GlifInvoker, RunRequest};
use glif::config::GlifConfig;
use glif::GlifError;
use indexmap::IndexMap;
use serde_json::json;

use crate::support::MockGlif;

fn config_for(mock: &MockGlif, strict_mode: bool) -> GlifConfig {
    GlifConfig {
        api_token: "test-token".to_string(),
        api_url: mock.url.clone(),
        strict_mode,
    }
}

#[tokio::test]
async fn posts_json_body_with_bearer_token() {
    let mock = MockGlif::json(
        StatusCode::OK,
        json!({
            "id": "run-1",
            "inputs": { "0": "a cute robot" },
            "output": "https://img.example/x.png",
            "outputFull": { "type": "IMAGE" }
        }),
    );
    let request = RunRequest::new("glif-1", GlifInputs::single("a cute robot")).unwrap();

    let result = GlifClient::new()
        .run(&request, &config_for(&mock, false))
        .await
        .unwrap();
    assert_eq!(result.id, "run-1");
    assert_eq!(result.output, json!("https://img.example/x.png"));
    assert_eq!(result.output_full, json!({ "type": "IMAGE" }));

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    let captured = &requests[0];
    assert_eq!(captured.query, None);
    assert_eq!(captured.authorization.as_deref(), Some("Bearer test-token"));
    assert_eq!(captured.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        captured.body,
        json!({ "id": "glif-1", "inputs": ["a cute robot"] })
    );
}

#[tokio::test]
async fn strict_mode_sends_strict_query() {
    let mock = MockGlif::json(StatusCode::OK, json!({ "id": "run-2", "output": "ok" }));
    let request = RunRequest::new("glif-1", GlifInputs::single("x")).unwrap();

    GlifClient::new()
        .run(&request, &config_for(&mock, true))
        .await
        .unwrap();
    assert_eq!(mock.requests()[0].query.as_deref(), Some("strict=1"));
}

#[tokio::test]
async fn named_inputs_sent_as_object() {
    let mock = MockGlif::json(StatusCode::OK, json!({ "output": "done" }));
    let mut named = IndexMap::new();
    named.insert("subject".to_string(), "lighthouse".to_string());
    named.insert("style".to_string(), "woodcut".to_string());
    let request = RunRequest::new("glif-1", named).unwrap();

    GlifClient::new()
        .run(&request, &config_for(&mock, false))
        .await
        .unwrap();
    assert_eq!(
        mock.requests()[0].body,
        json!({ "id": "glif-1", "inputs": { "subject": "lighthouse", "style": "woodcut" } })
    );
}

#[tokio::test]
async fn non_success_status_is_transport_error() {
    let mock = MockGlif::json(StatusCode::UNAUTHORIZED, json!({ "error": "bad token" }));
    let request = RunRequest::new("glif-1", GlifInputs::single("x")).unwrap();

    let err = GlifClient::new()
        .run(&request, &config_for(&mock, false))
        .await
        .unwrap_err();
    assert!(matches!(err, GlifError::TransportError(ref text) if text == "Unauthorized"));
    assert_eq!(err.to_string(), "Glif API error: Unauthorized");
}

#[tokio::test]
async fn error_field_is_returned_unvalidated() {
    let mock = MockGlif::json(StatusCode::OK, json!({ "error": "quota exceeded" }));
    let request = RunRequest::new("glif-1", GlifInputs::single("x")).unwrap();

    let result = GlifClient::new()
        .run(&request, &config_for(&mock, false))
        .await
        .unwrap();
    assert_eq!(result.failure(), Some("quota exceeded"));
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let mock = MockGlif::raw(StatusCode::OK, "not json");
    let request = RunRequest::new("glif-1", GlifInputs::single("x")).unwrap();

    let err = GlifClient::new()
        .run(&request, &config_for(&mock, false))
        .await
        .unwrap_err();
    assert!(matches!(err, GlifError::InvalidResponse(_)));
}

#[tokio::test]
async fn supplied_http_client_is_used() {
    let mock = MockGlif::json(StatusCode::OK, json!({ "output": "ok" }));
    let http = reqwest::Client::builder()
        .user_agent("glif-host/1.0")
        .build()
        .unwrap();
    let request = RunRequest::new("glif-1", GlifInputs::single("x")).unwrap();

    let result = GlifClient::with_http_client(http)
        .run(&request, &config_for(&mock, false))
        .await
        .unwrap();
    assert_eq!(result.output, json!("ok"));
    assert_eq!(mock.requests()[0].user_agent.as_deref(), Some("glif-host/1.0"));
}

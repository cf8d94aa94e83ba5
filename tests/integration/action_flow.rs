use axum::http::StatusCode;
use glif::action::{
    glif_plugin_with, Action, HandlerOptions, Message, RunGlifAction, DEFAULT_PROMPT,
};
use glif::config::{ConfigResolver, MapSettings, GLIF_API_TOKEN, GLIF_API_URL, GLIF_STRICT_MODE};
use glif::Reply;
use serde_json::json;

use crate::support::MockGlif;

fn action() -> RunGlifAction {
    RunGlifAction::new().with_resolver(ConfigResolver::with_fallback(MapSettings::new()))
}

fn host_for(mock: &MockGlif) -> MapSettings {
    MapSettings::new()
        .with(GLIF_API_TOKEN, "host-token")
        .with(GLIF_API_URL, mock.url.clone())
}

async fn dispatch(runtime: &MapSettings, message: &Message, options: &HandlerOptions) -> Vec<Reply> {
    let plugin = glif_plugin_with(action());
    let action = plugin.action("GLIF_GENERATE").expect("RUN_GLIF registered");
    let mut replies = Vec::new();
    let mut callback = |reply: Reply| replies.push(reply);
    action.handle(runtime, message, options, &mut callback).await;
    replies
}

#[tokio::test]
async fn image_run_replies_with_attachment() {
    let mock = MockGlif::json(
        StatusCode::OK,
        json!({ "id": "run-1", "output": "https://img.example/x.png", "outputFull": {} }),
    );
    let message = Message::new("user1", "Run Glif with prompt: a cute robot");

    let replies = dispatch(&host_for(&mock), &message, &HandlerOptions::default()).await;
    assert_eq!(replies.len(), 1);
    let reply = &replies[0];
    assert_eq!(reply.text, "https://img.example/x.png");
    let attachments = reply.attachments.as_ref().unwrap();
    assert_eq!(attachments.len(), 1);
    assert_eq!(attachments[0].url, "https://img.example/x.png");
    assert_eq!(attachments[0].text, "https://img.example/x.png");

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer host-token"));
    assert_eq!(requests[0].body["inputs"], json!([DEFAULT_PROMPT]));
}

#[tokio::test]
async fn text_run_replies_without_attachment() {
    let mock = MockGlif::json(StatusCode::OK, json!({ "output": "hello world" }));
    let options = HandlerOptions {
        glif_id: Some("text-glif".to_string()),
        ..HandlerOptions::default()
    };

    let replies = dispatch(&host_for(&mock), &Message::new("u", "hi"), &options).await;
    assert_eq!(replies, vec![Reply::text("hello world")]);
    assert_eq!(mock.requests()[0].body["id"], json!("text-glif"));
}

#[tokio::test]
async fn remote_error_field_becomes_failure_reply() {
    let mock = MockGlif::json(StatusCode::OK, json!({ "error": "quota exceeded" }));

    let replies = dispatch(&host_for(&mock), &Message::default(), &HandlerOptions::default()).await;
    assert_eq!(replies, vec![Reply::text("Failed to run Glif: quota exceeded")]);
}

#[tokio::test]
async fn server_error_becomes_failure_reply() {
    let mock = MockGlif::json(StatusCode::INTERNAL_SERVER_ERROR, json!({}));

    let replies = dispatch(&host_for(&mock), &Message::default(), &HandlerOptions::default()).await;
    assert_eq!(
        replies,
        vec![Reply::text(
            "Failed to run Glif: Glif API error: Internal Server Error"
        )]
    );
}

#[tokio::test]
async fn strict_mode_setting_reaches_the_wire() {
    let mock = MockGlif::json(StatusCode::OK, json!({ "output": "ok" }));
    let host = host_for(&mock).with(GLIF_STRICT_MODE, "true");

    dispatch(&host, &Message::default(), &HandlerOptions::default()).await;
    assert_eq!(mock.requests()[0].query.as_deref(), Some("strict=1"));
}

#[tokio::test]
async fn missing_token_never_reaches_the_network() {
    let mock = MockGlif::json(StatusCode::OK, json!({ "output": "ok" }));
    let host = MapSettings::new().with(GLIF_API_URL, mock.url.clone());

    let plugin = glif_plugin_with(action());
    let action = plugin.action("RUN_GLIF").unwrap();
    assert!(!action.validate(&host, &Message::default()).await);

    let replies = dispatch(&host, &Message::default(), &HandlerOptions::default()).await;
    assert_eq!(replies.len(), 1);
    assert!(replies[0].text.contains("GLIF_API_TOKEN: Required"));
    assert!(mock.requests().is_empty());
}

//! Dispatcher state machine tests: signature rejection, ping, unknown
//! commands, and routing, driven through `route` with an explicit config.

use ed25519_dalek::{Signer, SigningKey};
use serde_json::{Value, json};

use imagine::api::handler::route;
use imagine::core::config::AppConfig;

fn test_key() -> SigningKey {
    SigningKey::from_bytes(&[42u8; 32])
}

fn test_config() -> AppConfig {
    AppConfig {
        discord_token: "bot-token".to_string(),
        discord_application_id: "app-123".to_string(),
        discord_public_key: hex::encode(test_key().verifying_key().to_bytes()),
        openai_api_key: "sk-test".to_string(),
        openai_model: None,
    }
}

fn signed_event(body: &str) -> Value {
    let timestamp = "1700000000";
    let signature = test_key().sign(format!("{timestamp}{body}").as_bytes());
    post_event(
        body,
        json!({
            "x-signature-ed25519": hex::encode(signature.to_bytes()),
            "x-signature-timestamp": timestamp,
        }),
    )
}

fn post_event(body: &str, headers: Value) -> Value {
    json!({
        "rawPath": "/",
        "requestContext": { "http": { "method": "POST" } },
        "headers": headers,
        "body": body,
    })
}

#[tokio::test]
async fn test_get_root_returns_identity() {
    let event = json!({
        "rawPath": "/",
        "requestContext": { "http": { "method": "GET" } },
        "headers": {},
    });
    let response = route(&test_config(), &event).await;
    assert_eq!(response["statusCode"], 200);
    assert!(response["body"].as_str().unwrap().contains("app-123"));
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let event = json!({
        "rawPath": "/other",
        "requestContext": { "http": { "method": "GET" } },
        "headers": {},
    });
    let response = route(&test_config(), &event).await;
    assert_eq!(response["statusCode"], 404);
}

#[tokio::test]
async fn test_missing_signature_headers_yield_401() {
    let event = post_event(r#"{"type":1}"#, json!({}));
    let response = route(&test_config(), &event).await;
    assert_eq!(response["statusCode"], 401);
}

#[tokio::test]
async fn test_tampered_body_yields_401_before_any_handler() {
    let mut event = signed_event(r#"{"id":"i1","type":2,"data":{"name":"ai"}}"#);
    event["body"] = json!(r#"{"id":"i1","type":2,"data":{"name":"imagine"}}"#);
    let response = route(&test_config(), &event).await;
    assert_eq!(response["statusCode"], 401);
}

#[tokio::test]
async fn test_garbage_signature_yields_401() {
    let event = post_event(
        r#"{"type":1}"#,
        json!({
            "x-signature-ed25519": "00".repeat(64),
            "x-signature-timestamp": "1700000000",
        }),
    );
    let response = route(&test_config(), &event).await;
    assert_eq!(response["statusCode"], 401);
}

#[tokio::test]
async fn test_ping_yields_pong_without_invoking_handlers() {
    let event = signed_event(r#"{"id":"p1","type":1}"#);
    let response = route(&test_config(), &event).await;
    assert_eq!(response["statusCode"], 200);
    let body: Value = serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["type"], 1);
}

#[tokio::test]
async fn test_signature_headers_are_case_insensitive() {
    let body = r#"{"id":"p2","type":1}"#;
    let timestamp = "1700000000";
    let signature = test_key().sign(format!("{timestamp}{body}").as_bytes());
    let event = post_event(
        body,
        json!({
            "X-Signature-Ed25519": hex::encode(signature.to_bytes()),
            "X-Signature-Timestamp": timestamp,
        }),
    );
    let response = route(&test_config(), &event).await;
    assert_eq!(response["statusCode"], 200);
}

#[tokio::test]
async fn test_unknown_command_yields_400() {
    let event = signed_event(r#"{"id":"c1","type":2,"data":{"name":"summon"}}"#);
    let response = route(&test_config(), &event).await;
    assert_eq!(response["statusCode"], 400);
    assert!(response["body"].as_str().unwrap().contains("Unknown command"));
}

#[tokio::test]
async fn test_unknown_interaction_type_yields_400() {
    let event = signed_event(r#"{"id":"m1","type":9}"#);
    let response = route(&test_config(), &event).await;
    assert_eq!(response["statusCode"], 400);
}

#[tokio::test]
async fn test_missing_body_yields_400() {
    let event = json!({
        "rawPath": "/",
        "requestContext": { "http": { "method": "POST" } },
        "headers": {},
    });
    let response = route(&test_config(), &event).await;
    assert_eq!(response["statusCode"], 400);
}

#[tokio::test]
async fn test_unparseable_interaction_yields_400() {
    let event = signed_event("trust me this is an interaction");
    let response = route(&test_config(), &event).await;
    assert_eq!(response["statusCode"], 400);
}

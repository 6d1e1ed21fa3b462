use serde_json::Value;

use imagine::api::helpers::{
    channel_message, deferred_message, err_response, pong, text_response,
};

fn body_json(response: &Value) -> Value {
    let body = response["body"].as_str().expect("body should be a string");
    serde_json::from_str(body).expect("body should be JSON")
}

#[test]
fn test_pong_response() {
    let response = pong();
    assert_eq!(response["statusCode"], 200);
    assert_eq!(body_json(&response)["type"], 1);
}

#[test]
fn test_channel_message_carries_content() {
    let response = channel_message("Alice: hi\nGPT: hello");
    assert_eq!(response["statusCode"], 200);
    let body = body_json(&response);
    assert_eq!(body["type"], 4);
    assert_eq!(body["data"]["content"], "Alice: hi\nGPT: hello");
}

#[test]
fn test_deferred_message_is_type_five() {
    let body = body_json(&deferred_message());
    assert_eq!(body["type"], 5);
    assert!(body.get("data").is_none());
}

#[test]
fn test_err_response_shape() {
    let response = err_response(400, "Unknown command");
    assert_eq!(response["statusCode"], 400);
    assert_eq!(body_json(&response)["error"], "Unknown command");
}

#[test]
fn test_text_response_is_plain() {
    let response = text_response(404, "Not Found.");
    assert_eq!(response["statusCode"], 404);
    assert_eq!(response["body"], "Not Found.");
    assert_eq!(response["headers"]["content-type"], "text/plain;charset=UTF-8");
}

//! Response builders for the API handler.
//!
//! Lambda Function-URL responses are JSON values with `statusCode`,
//! `headers`, and a stringified `body`.

use serde_json::{Value, json};

/// Interaction response type `1`: pong acknowledgment.
pub const RESPONSE_TYPE_PONG: u8 = 1;
/// Interaction response type `4`: immediate message with content.
pub const RESPONSE_TYPE_CHANNEL_MESSAGE: u8 = 4;
/// Interaction response type `5`: deferred, will respond later.
pub const RESPONSE_TYPE_DEFERRED_CHANNEL_MESSAGE: u8 = 5;

/// Returns a 200 OK response with a JSON interaction body.
#[must_use]
pub fn ok_json(body: &Value) -> Value {
    json!({
        "statusCode": 200,
        "headers": { "content-type": "application/json;charset=UTF-8" },
        "body": body.to_string()
    })
}

/// Pong acknowledgment for a ping interaction.
#[must_use]
pub fn pong() -> Value {
    ok_json(&json!({ "type": RESPONSE_TYPE_PONG }))
}

/// Immediate reply carrying the given message content.
#[must_use]
pub fn channel_message(content: &str) -> Value {
    ok_json(&json!({
        "type": RESPONSE_TYPE_CHANNEL_MESSAGE,
        "data": { "content": content }
    }))
}

/// Deferred acknowledgment; the final message arrives via the webhook edit.
#[must_use]
pub fn deferred_message() -> Value {
    ok_json(&json!({ "type": RESPONSE_TYPE_DEFERRED_CHANNEL_MESSAGE }))
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": message }).to_string()
    })
}

/// Returns a plain-text response (health check, 404s).
#[must_use]
pub fn text_response(status_code: u16, text: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "content-type": "text/plain;charset=UTF-8" },
        "body": text
    })
}

//! Extraction helpers for Lambda Function-URL event payloads.

use serde_json::Value;

/// Case-insensitive header lookup over the event's `headers` object.
pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// HTTP method, from the v2 payload shape with a v1 fallback.
pub fn request_method(payload: &Value) -> Option<&str> {
    payload
        .get("requestContext")
        .and_then(|rc| rc.get("http"))
        .and_then(|http| http.get("method"))
        .and_then(|m| m.as_str())
        .or_else(|| payload.get("httpMethod").and_then(|m| m.as_str()))
}

/// Request path, from the v2 payload shape with a v1 fallback.
pub fn request_path(payload: &Value) -> Option<&str> {
    payload
        .get("rawPath")
        .and_then(|p| p.as_str())
        .or_else(|| payload.get("path").and_then(|p| p.as_str()))
}

/// The raw request body string, required for signature verification.
pub fn request_body(payload: &Value) -> Option<&str> {
    payload.get("body").and_then(|b| b.as_str())
}

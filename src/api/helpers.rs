//! Lambda proxy response builders.

use serde_json::{Value, json};

use super::insight::InsightResponse;

fn headers() -> Value {
    json!({
        "Content-Type": "application/json",
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Methods": "POST, OPTIONS",
        "Access-Control-Allow-Headers": "Content-Type"
    })
}

/// Returns a proxy response carrying `body` serialized as JSON.
#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": headers(),
        "body": body.to_string()
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "error": message }))
}

/// Returns the empty 204 answer to a CORS preflight.
#[must_use]
pub fn preflight() -> Value {
    json!({
        "statusCode": 204,
        "headers": headers(),
        "body": ""
    })
}

impl From<InsightResponse> for Value {
    fn from(response: InsightResponse) -> Self {
        json_response(response.status, &response.body)
    }
}

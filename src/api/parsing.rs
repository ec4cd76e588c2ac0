use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde_json::Value;

use crate::errors::InsightError;
use crate::utils::json::v_str;

/// HTTP method of an API Gateway (v1 or v2) or Function URL event.
pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
}

pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"])
        .or_else(|| v_str(payload, &["path"]))
        .or_else(|| v_str(payload, &["requestContext", "http", "path"]))
}

/// `true` for `/` and the empty path.
pub fn is_root_path(path: &str) -> bool {
    path.is_empty() || path == "/"
}

/// Returns the request body as text, decoding it when `isBase64Encoded` is set.
///
/// # Errors
///
/// Returns [`InsightError::ParseError`] if the body is not a string or does not
/// decode as UTF-8 base64.
pub fn extract_body(payload: &Value) -> Result<Option<String>, InsightError> {
    let body = match payload.get("body") {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) => s,
        Some(_) => return Err(InsightError::ParseError("Invalid body format".to_string())),
    };

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !encoded {
        return Ok(Some(body.clone()));
    }

    let bytes = BASE64
        .decode(body.as_bytes())
        .map_err(|e| InsightError::ParseError(format!("Failed to decode base64 body: {e}")))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| InsightError::ParseError(format!("Body is not valid UTF-8: {e}")))?;
    Ok(Some(text))
}

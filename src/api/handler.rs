//! API Lambda handler - thin router in front of [`InsightService`].
//!
//! Accepts API Gateway (REST v1, HTTP v2) and Function URL events and answers
//! with a proxy response object.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use super::helpers;
use super::insight::InsightService;
use super::parsing;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never fails for request-level problems; those become HTTP responses.
#[tracing::instrument(level = "info", skip(service, event), fields(aws_request_id = %event.context.request_id))]
pub async fn function_handler(
    service: &InsightService,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(route(service, &event.payload).await)
}

/// Routes one proxy event. `POST /` reaches the insight service; `OPTIONS`
/// answers CORS preflights.
pub async fn route(service: &InsightService, payload: &Value) -> Value {
    let method = parsing::request_method(payload).unwrap_or("POST");
    let path = parsing::request_path(payload).unwrap_or("/");
    info!(method, path, "API Lambda received request");

    if method.eq_ignore_ascii_case("OPTIONS") {
        return helpers::preflight();
    }

    if !parsing::is_root_path(path) {
        warn!(path, "No route for path");
        return helpers::err_response(404, "Not found");
    }

    if !method.eq_ignore_ascii_case("POST") {
        warn!(method, "Method not allowed");
        return helpers::err_response(405, "Method not allowed");
    }

    let body = match parsing::extract_body(payload) {
        Ok(Some(text)) => serde_json::from_str::<Value>(&text).unwrap_or_else(|e| {
            warn!(error = %e, "Request body is not valid JSON");
            Value::Null
        }),
        Ok(None) => Value::Null,
        Err(e) => {
            error!(error = %e, "Failed to read request body");
            Value::Null
        }
    };

    service.handle(&body).await.into()
}

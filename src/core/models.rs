use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Page and selection details sent by the browser extension under `latest`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightContext {
    pub url: Option<String>,
    pub page_title: Option<String>,
    pub page_description: Option<String>,
    pub selected_text: Option<String>,
    pub full_context: Option<String>,
    pub timestamp: Option<String>,
}

impl HighlightContext {
    /// Extracts the highlight from a request body.
    ///
    /// Returns `None` when `latest` is missing, null, not an object, or an
    /// empty object.
    #[must_use]
    pub fn from_body(body: &Value) -> Option<Self> {
        let latest = body.get("latest")?.as_object()?;
        if latest.is_empty() {
            return None;
        }

        let text = |key: &str| latest.get(key).and_then(field_text);

        Some(Self {
            url: text("url"),
            page_title: text("pageTitle"),
            page_description: text("pageDescription"),
            selected_text: text("selectedText"),
            full_context: text("fullContext"),
            timestamp: text("timestamp"),
        })
    }
}

// Non-string scalars are kept as their JSON text so a numeric timestamp still
// reaches the prompt.
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoResult {
    pub video_id: String,
    pub title: String,
    pub channel: String,
    pub url: String,
    pub thumbnail: String,
}

/// A shopping listing. Every field is optional because providers omit them
/// freely; absent fields serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductResult {
    pub title: Option<Value>,
    pub price: Option<Value>,
    pub link: Option<Value>,
    pub thumbnail: Option<Value>,
    pub source: Option<Value>,
}

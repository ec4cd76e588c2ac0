//! Highlight → insight orchestration.
//!
//! Builds the prompt, asks the model for the structured insight, then
//! attaches video and shopping results. Enrichment never fails the request.

use std::sync::Arc;

use serde_json::{Map, Value, json};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::ai::{ContentGenerator, GeminiClient, build_prompt, strip_code_fence};
use crate::core::config::AppConfig;
use crate::core::models::HighlightContext;
use crate::errors::InsightError;
use crate::search::{ProductSearch, SerpApiShopping, VideoSearch, YouTubeSearch};
use crate::utils::json::is_truthy;

pub const VIDEO_RESULT_CAP: usize = 5;
pub const PRODUCT_RESULT_CAP: usize = 10;

pub const YOUTUBE_KEYWORD_KEY: &str = "youtube_search_keyword";
pub const PRODUCTS_KEYWORD_KEY: &str = "similar_products_keyword";
pub const VIDEOS_KEY: &str = "youtube_videos";
pub const PRODUCTS_KEY: &str = "similar_products";

/// Status code and JSON body produced for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightResponse {
    pub status: u16,
    pub body: Value,
}

impl InsightResponse {
    #[must_use]
    pub const fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    #[must_use]
    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }),
        }
    }
}

#[derive(Debug)]
enum Failure {
    Unparseable { details: String, raw_response: String },
    Upstream(InsightError),
}

impl From<InsightError> for Failure {
    fn from(error: InsightError) -> Self {
        Failure::Upstream(error)
    }
}

#[derive(Clone)]
pub struct InsightService {
    generator: Arc<dyn ContentGenerator>,
    videos: Arc<dyn VideoSearch>,
    products: Arc<dyn ProductSearch>,
}

impl InsightService {
    pub fn new(
        generator: Arc<dyn ContentGenerator>,
        videos: Arc<dyn VideoSearch>,
        products: Arc<dyn ProductSearch>,
    ) -> Self {
        Self {
            generator,
            videos,
            products,
        }
    }

    /// Wires the Gemini, YouTube and SerpApi clients from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, InsightError> {
        Ok(Self::new(
            Arc::new(GeminiClient::new(config)?),
            Arc::new(YouTubeSearch::new(config)?),
            Arc::new(SerpApiShopping::new(config)?),
        ))
    }

    /// Handles one decoded request body.
    #[tracing::instrument(level = "info", skip_all, fields(request_id = %Uuid::new_v4()))]
    pub async fn handle(&self, body: &Value) -> InsightResponse {
        let Some(ctx) = HighlightContext::from_body(body) else {
            warn!("Request has no highlight data");
            return InsightResponse::error(400, "No data provided");
        };

        match self.build_insight(&ctx).await {
            Ok(insight) => {
                info!("All responses fetched successfully");
                InsightResponse::ok(insight)
            }
            Err(Failure::Unparseable {
                details,
                raw_response,
            }) => {
                error!(error = %details, "Failed to parse AI response");
                InsightResponse {
                    status: 500,
                    body: json!({
                        "error": "Failed to parse AI response",
                        "details": details,
                        "raw_response": raw_response,
                    }),
                }
            }
            Err(Failure::Upstream(e)) => {
                error!(error = %e, error_debug = ?e, "Failed to generate content");
                InsightResponse {
                    status: 500,
                    body: json!({
                        "error": "Failed to generate content",
                        "details": e.to_string(),
                    }),
                }
            }
        }
    }

    async fn build_insight(&self, ctx: &HighlightContext) -> Result<Value, Failure> {
        let prompt = build_prompt(ctx);

        info!("Fetching AI response");
        let raw = self.generator.generate(&prompt).await?;

        let mut insight = parse_insight(&raw)?;
        info!("Main AI response parsed successfully");

        let selected_text = ctx.selected_text.as_deref().unwrap_or_default();
        let youtube_keyword = keyword_or(&insight, YOUTUBE_KEYWORD_KEY, selected_text);
        let products_keyword = keyword_or(&insight, PRODUCTS_KEYWORD_KEY, selected_text);

        info!(
            youtube_keyword = %youtube_keyword,
            products_keyword = %products_keyword,
            "Searching enrichment sources"
        );

        let (videos, products) = futures::join!(
            self.videos.search_videos(&youtube_keyword, VIDEO_RESULT_CAP),
            self.products
                .search_products(&products_keyword, PRODUCT_RESULT_CAP),
        );

        let videos = collapse_enrichment("youtube", videos);
        let products = collapse_enrichment("shopping", products);

        insight.insert(
            VIDEOS_KEY.to_string(),
            serde_json::to_value(videos).map_err(InsightError::from)?,
        );
        insight.insert(
            PRODUCTS_KEY.to_string(),
            serde_json::to_value(products).map_err(InsightError::from)?,
        );

        Ok(Value::Object(insight))
    }
}

/// Strips any code fence and parses the model text.
///
/// Fields inside the object are not validated, but the top level must be an
/// object; anything else is an upstream failure.
fn parse_insight(raw: &str) -> Result<Map<String, Value>, Failure> {
    let cleaned = strip_code_fence(raw);
    match serde_json::from_str::<Value>(cleaned) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(Failure::Upstream(InsightError::ParseError(format!(
            "AI response is not a JSON object: {}",
            json_kind(&other)
        )))),
        Err(e) => Err(Failure::Unparseable {
            details: e.to_string(),
            raw_response: raw.to_string(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns the AI-suggested keyword under `key`, or `fallback` when it is
/// absent or falsy.
#[must_use]
pub fn keyword_or(insight: &Map<String, Value>, key: &str, fallback: &str) -> String {
    match insight.get(key) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(v) if is_truthy(v) => v.to_string(),
        _ => fallback.to_string(),
    }
}

/// Turns a failed enrichment into an empty list, logging the reason.
pub fn collapse_enrichment<T>(source: &str, result: Result<Vec<T>, InsightError>) -> Vec<T> {
    match result {
        Ok(items) => {
            info!(source, count = items.len(), "Enrichment search succeeded");
            items
        }
        Err(e) => {
            warn!(source, error = %e, "Enrichment search failed; returning no results");
            Vec::new()
        }
    }
}

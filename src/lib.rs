/// Highlight Insight - the backend for a browser extension that explains
/// highlighted text.
///
/// A single `POST /` Lambda endpoint receives the highlighted text and page
/// details, asks Gemini (with Google Search grounding) for a structured
/// insight, then enriches it with YouTube videos and Google Shopping
/// listings before returning one JSON document.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution behind API Gateway or a Function URL
/// - reqwest for the Gemini, YouTube Data and SerpApi calls
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use highlight_insight::api::InsightService;
/// use highlight_insight::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     highlight_insight::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let service = InsightService::from_config(&config)?;
///
///     let body = serde_json::json!({
///         "latest": {
///             "url": "https://example.com/headphones",
///             "pageTitle": "Headphones",
///             "pageDescription": "An audio store",
///             "selectedText": "Sony WH-1000XM5",
///             "fullContext": "The Sony WH-1000XM5 are on sale.",
///             "timestamp": "2024-01-01T00:00:00Z"
///         }
///     });
///
///     let response = service.handle(&body).await;
///     println!("{} {}", response.status, response.body);
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod search;
pub mod utils;

pub use errors::InsightError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration, filtered by `RUST_LOG` (default `info`). It
/// is safe to call more than once; later calls are no-ops.
///
/// # Example
///
/// ```
/// highlight_insight::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

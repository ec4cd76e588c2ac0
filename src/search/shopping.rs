//! SerpApi Google Shopping product search adapter.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::info;

use super::ProductSearch;
use crate::core::config::AppConfig;
use crate::core::models::ProductResult;
use crate::errors::InsightError;
use crate::utils::json::{v_array, v_str};

pub const SERPAPI_SEARCH_URL: &str = "https://serpapi.com/search";

/// SerpApi Google Shopping adapter.
pub struct SerpApiShopping {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl SerpApiShopping {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, InsightError> {
        let http = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| {
                InsightError::HttpError(format!("Failed to build SerpApi HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            api_key: config.serp_api_key.clone(),
            endpoint: SERPAPI_SEARCH_URL.to_string(),
        })
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl ProductSearch for SerpApiShopping {
    async fn search_products(
        &self,
        keyword: &str,
        max_results: usize,
    ) -> Result<Vec<ProductResult>, InsightError> {
        if max_results == 0 {
            return Ok(Vec::new());
        }

        info!(keyword, cap = max_results, "Searching Google Shopping");

        let num = max_results.to_string();
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("engine", "google_shopping"),
                ("q", keyword),
                ("api_key", self.api_key.as_str()),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        // SerpApi reports most failures as a JSON body with an `error` field,
        // sometimes alongside a non-2xx status.
        let status = response.status();
        let body: Value = response.json().await?;
        if let Some(message) = v_str(&body, &["error"]) {
            return Err(InsightError::SearchError(format!(
                "SerpApi returned {status}: {message}"
            )));
        }
        if !status.is_success() {
            return Err(InsightError::SearchError(format!("SerpApi returned {status}")));
        }

        Ok(products_from_response(&body, max_results))
    }
}

/// Maps `shopping_results` into at most `cap` products. Missing fields stay
/// `None`.
#[must_use]
pub fn products_from_response(body: &Value, cap: usize) -> Vec<ProductResult> {
    let Some(results) = v_array(body, &["shopping_results"]) else {
        return Vec::new();
    };

    results
        .iter()
        .take(cap)
        .map(|product| {
            let field = |key: &str| product.get(key).filter(|v| !v.is_null()).cloned();
            ProductResult {
                title: field("title"),
                price: field("price"),
                link: field("product_link"),
                thumbnail: field("thumbnail"),
                source: field("source"),
            }
        })
        .collect()
}

//! Gemini API client
//!
//! Sends one grounded `generateContent` call per highlight and returns the
//! model's raw text.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use super::prompt::SYSTEM_INSTRUCTION;
use super::types::{
    GeminiContent, GeminiTool, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
use crate::core::config::AppConfig;
use crate::errors::InsightError;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Produces raw model text for a prompt.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, InsightError>;
}

pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    temperature: f32,
    base_url: String,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, InsightError> {
        let http = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| InsightError::HttpError(format!("Failed to build Gemini HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key: config.gemini_api_key.clone(),
            model: sanitize_model(&config.gemini_model),
            temperature: config.temperature,
            base_url: GEMINI_API_BASE.to_string(),
        })
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    #[must_use]
    pub fn build_request(&self, prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: Some(GeminiContent::system_text(SYSTEM_INSTRUCTION)),
            contents: vec![GeminiContent::user_text(prompt)],
            generation_config: Some(GenerationConfig {
                temperature: Some(self.temperature),
            }),
            tools: vec![GeminiTool::google_search()],
        }
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, InsightError> {
        if self.api_key.is_empty() {
            return Err(InsightError::ConfigError(
                "GEMINI_API_KEY is not configured".to_string(),
            ));
        }

        #[cfg(feature = "debug-logs")]
        info!("Using Gemini prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(model = %self.model, prompt_chars = prompt.len(), "Requesting Gemini content");

        let request = self.build_request(prompt);

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| InsightError::HttpError(format!("Gemini API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(InsightError::GeminiError(format!(
                "status {status}: {error_text}"
            )));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            InsightError::GeminiError(format!("Failed to parse Gemini response: {e}"))
        })?;

        if let Some(reason) = body
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            warn!(block_reason = reason, "Gemini blocked the prompt");
        }

        let finish_reason = body
            .candidates
            .first()
            .and_then(|c| c.finish_reason.clone())
            .unwrap_or_default();
        debug!(finish_reason = %finish_reason, candidates = body.candidates.len(), "Gemini responded");

        body.text().ok_or_else(|| {
            InsightError::GeminiError(format!(
                "response contained no text (finish reason: {finish_reason})"
            ))
        })
    }
}

fn sanitize_model(model: &str) -> String {
    model.trim().trim_start_matches("models/").to_string()
}

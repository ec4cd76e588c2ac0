use thiserror::Error;

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("Failed to parse payload: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to access Gemini API: {0}")]
    GeminiError(String),

    #[error("Search provider failed: {0}")]
    SearchError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for InsightError {
    fn from(error: reqwest::Error) -> Self {
        InsightError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for InsightError {
    fn from(error: serde_json::Error) -> Self {
        InsightError::ParseError(error.to_string())
    }
}

impl From<anyhow::Error> for InsightError {
    fn from(error: anyhow::Error) -> Self {
        InsightError::ConfigError(error.to_string())
    }
}

//! YouTube Data API v3 video search adapter.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::info;

use super::VideoSearch;
use crate::core::config::AppConfig;
use crate::core::models::VideoResult;
use crate::errors::InsightError;
use crate::utils::json::{v_array, v_str};

pub const YOUTUBE_SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";

/// Upper bound the Data API accepts for `maxResults`.
pub const YOUTUBE_MAX_RESULTS: usize = 50;

/// YouTube Data API v3 `search.list` adapter.
pub struct YouTubeSearch {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl YouTubeSearch {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, InsightError> {
        let http = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| {
                InsightError::HttpError(format!("Failed to build YouTube HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            api_key: config.youtube_api_key.clone(),
            endpoint: YOUTUBE_SEARCH_URL.to_string(),
        })
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl VideoSearch for YouTubeSearch {
    async fn search_videos(
        &self,
        keyword: &str,
        max_results: usize,
    ) -> Result<Vec<VideoResult>, InsightError> {
        let cap = max_results.min(YOUTUBE_MAX_RESULTS);
        if cap == 0 {
            return Ok(Vec::new());
        }

        info!(keyword, cap, "Searching YouTube");

        let cap_param = cap.to_string();
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("part", "snippet"),
                ("q", keyword),
                ("type", "video"),
                ("maxResults", cap_param.as_str()),
                ("order", "relevance"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(InsightError::SearchError(format!(
                "YouTube API returned {status}: {error_text}"
            )));
        }

        let body: Value = response.json().await?;
        videos_from_response(&body, cap)
    }
}

/// Maps a `search.list` response into at most `cap` videos.
///
/// Every item must carry an id, title, channel and default thumbnail; one
/// malformed item fails the whole page.
///
/// # Errors
///
/// Returns [`InsightError::SearchError`] naming the first missing field.
pub fn videos_from_response(body: &Value, cap: usize) -> Result<Vec<VideoResult>, InsightError> {
    let Some(items) = v_array(body, &["items"]) else {
        return Ok(Vec::new());
    };

    items
        .iter()
        .take(cap)
        .map(|item| -> Result<VideoResult, InsightError> {
            let video_id = required(item, &["id", "videoId"])?;
            Ok(VideoResult {
                url: format!("https://www.youtube.com/watch?v={video_id}"),
                title: required(item, &["snippet", "title"])?,
                channel: required(item, &["snippet", "channelTitle"])?,
                thumbnail: required(item, &["snippet", "thumbnails", "default", "url"])?,
                video_id,
            })
        })
        .collect()
}

fn required(item: &Value, path: &[&str]) -> Result<String, InsightError> {
    v_str(item, path).map(str::to_string).ok_or_else(|| {
        InsightError::SearchError(format!("YouTube item is missing {}", path.join(".")))
    })
}

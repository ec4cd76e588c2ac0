//! Enrichment adapters for video and shopping search.
//!
//! Adapters report failures as `Err`; the request handler decides how to
//! degrade.

pub mod shopping;
pub mod youtube;

use async_trait::async_trait;

use crate::core::models::{ProductResult, VideoResult};
use crate::errors::InsightError;

pub use shopping::SerpApiShopping;
pub use youtube::YouTubeSearch;

#[async_trait]
pub trait VideoSearch: Send + Sync {
    async fn search_videos(
        &self,
        keyword: &str,
        max_results: usize,
    ) -> Result<Vec<VideoResult>, InsightError>;
}

#[async_trait]
pub trait ProductSearch: Send + Sync {
    async fn search_products(
        &self,
        keyword: &str,
        max_results: usize,
    ) -> Result<Vec<ProductResult>, InsightError>;
}

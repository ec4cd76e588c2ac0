#![allow(dead_code)]

pub mod stub;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use highlight_insight::ai::ContentGenerator;
use highlight_insight::api::InsightService;
use highlight_insight::core::models::{ProductResult, VideoResult};
use highlight_insight::errors::InsightError;
use highlight_insight::search::{ProductSearch, VideoSearch};
use serde_json::{Value, json};

pub enum Reply {
    Text(String),
    Fail(String),
}

pub struct FakeGenerator {
    reply: Reply,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn text(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Text(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Fail(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl ContentGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, InsightError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Reply::Text(t) => Ok(t.clone()),
            Reply::Fail(m) => Err(InsightError::HttpError(m.clone())),
        }
    }
}

pub struct FakeVideos {
    results: Option<Vec<VideoResult>>,
    pub calls: Mutex<Vec<(String, usize)>>,
}

impl FakeVideos {
    pub fn returning(results: Vec<VideoResult>) -> Arc<Self> {
        Arc::new(Self {
            results: Some(results),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            results: None,
            calls: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl VideoSearch for FakeVideos {
    async fn search_videos(
        &self,
        keyword: &str,
        max_results: usize,
    ) -> Result<Vec<VideoResult>, InsightError> {
        self.calls
            .lock()
            .unwrap()
            .push((keyword.to_string(), max_results));
        self.results
            .clone()
            .ok_or_else(|| InsightError::SearchError("video search down".to_string()))
    }
}

pub struct FakeProducts {
    results: Option<Vec<ProductResult>>,
    pub calls: Mutex<Vec<(String, usize)>>,
}

impl FakeProducts {
    pub fn returning(results: Vec<ProductResult>) -> Arc<Self> {
        Arc::new(Self {
            results: Some(results),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            results: None,
            calls: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl ProductSearch for FakeProducts {
    async fn search_products(
        &self,
        keyword: &str,
        max_results: usize,
    ) -> Result<Vec<ProductResult>, InsightError> {
        self.calls
            .lock()
            .unwrap()
            .push((keyword.to_string(), max_results));
        self.results
            .clone()
            .ok_or_else(|| InsightError::SearchError("shopping search down".to_string()))
    }
}

pub fn service(
    generator: Arc<FakeGenerator>,
    videos: Arc<FakeVideos>,
    products: Arc<FakeProducts>,
) -> InsightService {
    InsightService::new(generator, videos, products)
}

pub fn sample_video() -> VideoResult {
    VideoResult {
        video_id: "abc123".into(),
        title: "Sony WH-1000XM5 review".into(),
        channel: "Audio Channel".into(),
        url: "https://www.youtube.com/watch?v=abc123".into(),
        thumbnail: "https://i.ytimg.com/vi/abc123/default.jpg".into(),
    }
}

pub fn sample_product() -> ProductResult {
    ProductResult {
        title: Some(json!("Bose QuietComfort Ultra")),
        price: Some(json!("$379.00")),
        link: Some(json!("https://www.google.com/shopping/product/1")),
        thumbnail: Some(json!("https://img.example/1.jpg")),
        source: Some(json!("Best Buy")),
    }
}

pub fn highlight_body() -> Value {
    json!({"latest": {
        "url": "http://a.com",
        "pageTitle": "T",
        "pageDescription": "D",
        "selectedText": "Sony WH-1000XM5",
        "fullContext": "...",
        "timestamp": "2024-01-01"
    }})
}

pub fn ai_insight() -> Value {
    json!({
        "type": "product",
        "youtube_search_keyword": "Sony WH-1000XM5 review",
        "similar_products_keyword": "wireless noise cancelling headphones",
        "summary": "...",
        "reviews": [],
        "cons": [],
        "workarounds_and_maintenance": []
    })
}

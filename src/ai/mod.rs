//! All AI/LLM functionality

pub mod client;
pub mod prompt;
pub mod types;

// Re-export main types for convenience
pub use client::{ContentGenerator, GeminiClient};
pub use prompt::{build_prompt, strip_code_fence};

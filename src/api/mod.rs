//! API Lambda handler and request processing

pub mod handler;
pub mod helpers;
pub mod insight;
pub mod parsing;

// Re-export the main handler for convenience
pub use handler::{function_handler, route};
pub use insight::{InsightResponse, InsightService};

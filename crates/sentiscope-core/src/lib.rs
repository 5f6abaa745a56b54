//! Sentiscope Core
//!
//! Core types and utilities shared across Sentiscope components.
//!
//! This crate provides:
//! - Analysis request/result types and the sentiment label thresholds
//! - Error types and result handling
//! - OpenAI-compatible chat completion wire types
//! - Boundary input validation

pub mod chat;
pub mod error;
pub mod types;

pub use chat::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
pub use error::{Error, Result};
pub use types::{
    validate_text, AnalysisInput, AnalysisResult, SentimentLabel, SentimentPoint, LOCAL_MODEL,
    NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{AnalysisInput, AnalysisResult, SentimentLabel, SentimentPoint};
}

//! Core types for Sentiscope

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Polarity strictly above this is labelled positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Polarity strictly below this is labelled negative.
///
/// Tighter than the positive side so that weak negatives are still caught.
pub const NEGATIVE_THRESHOLD: f64 = -0.03;

/// Model tag reported by the local pipeline
pub const LOCAL_MODEL: &str = "local";

/// Discrete sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// All labels, in chart order
    pub const ALL: [SentimentLabel; 3] = [Self::Positive, Self::Neutral, Self::Negative];

    /// Threshold a continuous polarity into a label
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            Self::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = Error;

    /// Accepts English and French vocabulary, case-insensitively
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "positive" | "positif" => Ok(Self::Positive),
            "negative" | "négatif" | "negatif" => Ok(Self::Negative),
            "neutral" | "neutre" => Ok(Self::Neutral),
            other => Err(Error::invalid_input(format!("unknown sentiment label: {other}"))),
        }
    }
}

/// A single analysis request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// Raw text to analyze
    pub text: String,

    /// Whether remote scoring is requested (`None` uses the configured default)
    #[serde(default)]
    pub use_remote: Option<bool>,
}

impl AnalysisInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            use_remote: None,
        }
    }

    pub fn with_remote(mut self, use_remote: bool) -> Self {
        self.use_remote = Some(use_remote);
        self
    }
}

/// Outcome of scoring one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Signed sentiment intensity, nominally in [-1, 1]
    pub polarity: f64,

    /// Opinion strength in [0, 1]
    pub subjectivity: f64,

    /// Discrete label
    pub sentiment: SentimentLabel,

    /// "local" or the remote model identifier
    pub model: String,
}

impl AnalysisResult {
    /// Result produced by the local pipeline
    pub fn local(polarity: f64, subjectivity: f64, sentiment: SentimentLabel) -> Self {
        Self {
            polarity,
            subjectivity,
            sentiment,
            model: LOCAL_MODEL.to_string(),
        }
    }

    /// Zero-signal result for text with nothing left to score
    pub fn neutral() -> Self {
        Self::local(0.0, 0.0, SentimentLabel::Neutral)
    }

    pub fn is_local(&self) -> bool {
        self.model == LOCAL_MODEL
    }

    /// Project onto the triple consumed by chart renderers
    pub fn point(&self) -> SentimentPoint {
        SentimentPoint {
            polarity: self.polarity,
            subjectivity: self.subjectivity,
            sentiment: self.sentiment,
        }
    }
}

/// (polarity, subjectivity, label) triple used for visualization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentPoint {
    pub polarity: f64,
    pub subjectivity: f64,
    pub sentiment: SentimentLabel,
}

/// Boundary validation: reject empty or whitespace-only text
pub fn validate_text(text: &str) -> Result<&str> {
    if text.trim().is_empty() {
        return Err(Error::invalid_input("text must not be empty"));
    }
    Ok(text)
}

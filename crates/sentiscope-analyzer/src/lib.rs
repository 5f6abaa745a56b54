//! Sentiscope Analyzer
//!
//! Sentiment scoring for short French/English texts.
//!
//! The local pipeline is always available:
//! - Text normalization and stopword filtering
//! - A French lexicon heuristic with global negation handling
//! - A pattern-style English library score providing subjectivity
//! - A weighted blend with a hard negation override, then label thresholds
//!
//! An LLM chat endpoint can be used instead when a credential is configured;
//! any remote failure falls back to the local pipeline.

pub mod charts;
pub mod config;
pub mod engine;
pub mod french;
pub mod lexicon;
pub mod library;
pub mod normalizer;
pub mod remote;
pub mod scorer;
pub mod stopwords;

pub use charts::{ChartArtifacts, ChartRenderer, JsonChartWriter};
pub use config::{AnalyzerConfig, RemoteConfig};
pub use engine::{EngineBuilder, LocalBreakdown, SentimentEngine};
pub use french::FrenchHeuristicScorer;
pub use lexicon::FrenchLexicon;
pub use library::PatternLexiconScorer;
pub use normalizer::TextNormalizer;
pub use remote::{ChatTransport, HttpChatTransport, RemoteScorer};
pub use scorer::{HeuristicScorer, LibraryScore, LibraryScorer};
pub use stopwords::Stopwords;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::AnalyzerConfig;
    pub use crate::engine::SentimentEngine;
    pub use crate::scorer::{HeuristicScorer, LibraryScorer};
    pub use sentiscope_core::{AnalysisInput, AnalysisResult, SentimentLabel};
}

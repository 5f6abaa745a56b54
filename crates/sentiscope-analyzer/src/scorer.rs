//! Scorer traits for the local pipeline

/// Polarity and subjectivity reported by a library scorer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LibraryScore {
    /// In [-1, 1]
    pub polarity: f64,
    /// In [0, 1]
    pub subjectivity: f64,
}

/// Lexicon heuristic run on the lowercased original text.
///
/// The input keeps its function words, which negation handling depends on.
pub trait HeuristicScorer: Send + Sync {
    /// Score in [-1, 1]; 0 means no lexicon signal
    fn score(&self, lowered: &str) -> f64;

    /// Get the scorer name
    fn name(&self) -> &str;
}

/// General-purpose polarity/subjectivity estimator run on cleaned,
/// stopword-filtered text
pub trait LibraryScorer: Send + Sync {
    fn score(&self, filtered: &str) -> LibraryScore;

    /// Get the scorer name
    fn name(&self) -> &str;
}

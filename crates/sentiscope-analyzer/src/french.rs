//! French lexicon heuristic with global negation handling
//!
//! Bag-of-words counting over whitespace tokens of the lowercased original
//! text. Negation is a single flag for the whole text: when any negation
//! marker is present, every positive hit is counted as negative instead.
//! This is an approximation; the scorer sits behind [`HeuristicScorer`] so a
//! windowed negation model can replace it.

use crate::lexicon::{FrenchLexicon, MAX_PHRASE_WORDS};
use crate::scorer::HeuristicScorer;
use std::sync::Arc;

/// Lexicon hit counts for one text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexiconCounts {
    pub positive: usize,
    pub negative: usize,
    pub negated: bool,
}

impl LexiconCounts {
    /// (pos - neg) / (pos + neg), or 0 without any hit
    pub fn score(&self) -> f64 {
        let total = self.positive + self.negative;
        if total == 0 {
            return 0.0;
        }
        (self.positive as f64 - self.negative as f64) / total as f64
    }
}

pub struct FrenchHeuristicScorer {
    lexicon: Arc<FrenchLexicon>,
}

impl FrenchHeuristicScorer {
    pub fn new() -> Self {
        Self::with_lexicon(FrenchLexicon::shared())
    }

    pub fn with_lexicon(lexicon: Arc<FrenchLexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &FrenchLexicon {
        &self.lexicon
    }

    /// Count lexicon hits in `lowered`
    pub fn count(&self, lowered: &str) -> LexiconCounts {
        let words: Vec<&str> = lowered.split_whitespace().collect();

        let mut positive = words.iter().filter(|w| self.lexicon.is_positive(w)).count();
        let mut negative = words.iter().filter(|w| self.lexicon.is_negative(w)).count();

        // n-grams of 2..=4 words starting at every position
        for start in 0..words.len() {
            let longest = MAX_PHRASE_WORDS.min(words.len() - start);
            for len in 2..=longest {
                let phrase = words[start..start + len].join(" ");
                if self.lexicon.is_negative_phrase(&phrase) {
                    negative += 1;
                }
            }
        }

        let negated = self.lexicon.has_negation(words.iter().copied());
        if negated {
            negative += positive;
            positive = 0;
        }

        LexiconCounts {
            positive,
            negative,
            negated,
        }
    }
}

impl Default for FrenchHeuristicScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicScorer for FrenchHeuristicScorer {
    fn score(&self, lowered: &str) -> f64 {
        self.count(lowered).score()
    }

    fn name(&self) -> &str {
        "french-lexicon"
    }
}

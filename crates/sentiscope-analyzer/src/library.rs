//! Pattern-style English polarity/subjectivity scorer
//!
//! Every lexicon word carries a (polarity, subjectivity) pair. A preceding
//! intensifier scales both; a preceding negation flips polarity and halves it.
//! The text score is the mean over matched words, clamped to range.

use crate::scorer::{LibraryScore, LibraryScorer};
use std::collections::HashMap;

const ENTRIES: &[(&str, f64, f64)] = &[
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("perfect", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("nice", 0.6, 1.0),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("love", 0.5, 0.6),
    ("lovely", 0.5, 0.75),
    ("like", 0.0, 0.0),
    ("pleasant", 0.73, 0.97),
    ("cool", 0.35, 0.65),
    ("super", 0.33, 0.67),
    ("easy", 0.43, 0.83),
    ("fast", 0.2, 0.6),
    ("useful", 0.3, 0.0),
    ("reliable", 0.4, 0.5),
    ("impressive", 1.0, 1.0),
    ("satisfied", 0.5, 1.0),
    ("bad", -0.7, 0.67),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("angry", -0.5, 1.0),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("hate", -0.8, 0.9),
    ("boring", -1.0, 1.0),
    ("slow", -0.3, 0.39),
    ("broken", -0.4, 0.4),
    ("useless", -0.5, 0.0),
    ("ugly", -0.7, 1.0),
    ("wrong", -0.5, 0.9),
    ("stupid", -0.8, 1.0),
    ("expensive", -0.5, 0.7),
    ("difficult", -0.5, 1.0),
    ("annoying", -0.8, 0.9),
    ("unreliable", -0.4, 0.6),
];

// Modifiers must survive stopword filtering to ever apply, so common ones
// such as "very", "so", "not" and "no" are absent.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("really", 1.2),
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("absolutely", 1.4),
    ("totally", 1.3),
    ("highly", 1.3),
    ("quite", 1.1),
];

const NEGATIONS: &[&str] = &["never", "nt", "dont", "cant", "wont", "isnt"];

/// Negated words keep half their magnitude, with flipped sign
const NEGATION_FACTOR: f64 = -0.5;

pub struct PatternLexiconScorer {
    entries: HashMap<&'static str, (f64, f64)>,
    intensifiers: HashMap<&'static str, f64>,
}

impl PatternLexiconScorer {
    pub fn new() -> Self {
        Self {
            entries: ENTRIES.iter().map(|&(w, p, s)| (w, (p, s))).collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }
}

impl Default for PatternLexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryScorer for PatternLexiconScorer {
    fn score(&self, filtered: &str) -> LibraryScore {
        let mut assessments: Vec<(f64, f64)> = Vec::new();
        let mut intensity = 1.0;
        let mut negated = false;

        for token in filtered.split_whitespace() {
            if NEGATIONS.contains(&token) {
                negated = true;
                continue;
            }
            if let Some(&factor) = self.intensifiers.get(token) {
                intensity *= factor;
                continue;
            }

            if let Some(&(polarity, subjectivity)) = self.entries.get(token) {
                let mut polarity = polarity * intensity;
                if negated {
                    polarity *= NEGATION_FACTOR;
                }
                assessments.push((polarity, subjectivity * intensity));
            }

            // modifiers only reach the next word
            intensity = 1.0;
            negated = false;
        }

        if assessments.is_empty() {
            return LibraryScore::default();
        }

        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(|(p, _)| p).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|(_, s)| s).sum::<f64>() / n;

        LibraryScore {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }

    fn name(&self) -> &str {
        "pattern-lexicon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_words_are_neutral_and_objective() {
        let score = PatternLexiconScorer::new().score("très content application");
        assert_eq!(score, LibraryScore::default());
    }

    #[test]
    fn test_averages_matched_words() {
        let score = PatternLexiconScorer::new().score("good bad");
        assert!(score.polarity.abs() < 1e-12);
        assert!((score.subjectivity - 0.635).abs() < 1e-12);
    }

    #[test]
    fn test_intensifier_scales_and_clamps() {
        let score = PatternLexiconScorer::new().score("extremely excellent");
        assert_eq!(score.polarity, 1.0);
        assert_eq!(score.subjectivity, 1.0);

        let score = PatternLexiconScorer::new().score("really good");
        assert!((score.polarity - 0.84).abs() < 1e-12);
    }

    #[test]
    fn test_negation_flips_and_halves() {
        let score = PatternLexiconScorer::new().score("never good");
        assert!((score.polarity + 0.35).abs() < 1e-12);
    }

    #[test]
    fn test_modifiers_survive_builtin_stopwords() {
        let stopwords = crate::stopwords::Stopwords::builtin();
        for word in NEGATIONS.iter().chain(INTENSIFIERS.iter().map(|(w, _)| w)) {
            assert!(!stopwords.contains(word), "{word} would be filtered out");
        }
        for (word, _, _) in ENTRIES {
            assert!(!stopwords.contains(word), "{word} would be filtered out");
        }
    }

    #[test]
    fn test_modifier_only_reaches_next_word() {
        let score = PatternLexiconScorer::new().score("never app good");
        assert!((score.polarity - 0.7).abs() < 1e-12);
    }
}

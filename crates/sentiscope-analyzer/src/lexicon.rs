//! French sentiment lexicon
//!
//! Word-forms are lowercase and matched against whitespace tokens exactly.
//! Negative entries containing a space are multi-word phrases and are only
//! matched through n-grams.

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

const POSITIVE: &[&str] = &[
    "bon", "super", "excellent", "génial", "parfait", "incroyable", "merveilleux", "magnifique",
    "extraordinaire", "content", "heureux", "joyeux", "ravi", "enchanté", "satisfait", "aimer",
    "adorer", "apprécier", "bravo", "félicitations", "impressionnant", "réussi", "succès",
    "victoire", "gain", "avantage", "facile", "pratique", "utile", "efficace", "rapide", "fiable",
    "agréable", "confortable", "sécurisé", "stable", "solide", "durable", "brillant",
    "intelligent", "sympa", "cool", "correctement", "fonctionne", "bien", "réussir",
    "fonctionnel", "fonctionnalité",
];

const NEGATIVE: &[&str] = &[
    "mauvais", "horrible", "terrible", "affreux", "nul", "médiocre", "pire", "catastrophique",
    "triste", "malheureux", "déçu", "mécontent", "frustré", "énervé", "fâché", "en colère",
    "détester", "haïr", "déplorer", "rejeter", "critiquer", "condamner", "reprocher", "difficile",
    "compliqué", "pénible", "ennuyeux", "inefficace", "inutile", "insuffisant", "dangereux",
    "instable", "défectueux", "cassé", "problème", "erreur", "bug", "panne", "échec", "défaite",
    "perte", "désavantage", "cher", "coûteux", "excessif", "trop", "ne fonctionne pas",
    "ne marche pas", "impossible", "non fonctionnel", "pas correctement", "défaillant",
    "pas bien", "pas bon", "pas pratique", "pas utile", "pas efficace", "pas fiable",
];

const NEGATIONS: &[&str] = &["ne", "pas", "plus", "jamais", "aucun", "aucune", "ni", "sans"];

/// Longest multi-word entry, in words
pub const MAX_PHRASE_WORDS: usize = 4;

/// Read-only positive/negative/negation sets
#[derive(Debug, Clone)]
pub struct FrenchLexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
    negative_phrases: HashSet<String>,
    negations: HashSet<String>,
}

impl FrenchLexicon {
    /// Build a lexicon from explicit word lists
    pub fn new<'a>(
        positive: impl IntoIterator<Item = &'a str>,
        negative: impl IntoIterator<Item = &'a str>,
        negations: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let (negative_phrases, negative): (HashSet<String>, HashSet<String>) = negative
            .into_iter()
            .map(str::to_lowercase)
            .partition(|entry| entry.contains(' '));

        Self {
            positive: positive.into_iter().map(str::to_lowercase).collect(),
            negative,
            negative_phrases,
            negations: negations.into_iter().map(str::to_lowercase).collect(),
        }
    }

    /// The built-in lexicon, constructed once per process
    pub fn shared() -> Arc<FrenchLexicon> {
        static LEXICON: OnceLock<Arc<FrenchLexicon>> = OnceLock::new();
        LEXICON
            .get_or_init(|| {
                Arc::new(Self::new(
                    POSITIVE.iter().copied(),
                    NEGATIVE.iter().copied(),
                    NEGATIONS.iter().copied(),
                ))
            })
            .clone()
    }

    pub fn is_positive(&self, token: &str) -> bool {
        self.positive.contains(token)
    }

    pub fn is_negative(&self, token: &str) -> bool {
        self.negative.contains(token)
    }

    pub fn is_negative_phrase(&self, phrase: &str) -> bool {
        self.negative_phrases.contains(phrase)
    }

    pub fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(token)
    }

    /// Whether any of `tokens` is a negation marker
    pub fn has_negation<'t>(&self, mut tokens: impl Iterator<Item = &'t str>) -> bool {
        tokens.any(|token| self.is_negation(token))
    }
}

impl Default for FrenchLexicon {
    fn default() -> Self {
        Self::shared().as_ref().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrases_are_split_from_words() {
        let lexicon = FrenchLexicon::shared();
        assert!(lexicon.is_negative("déçu"));
        assert!(!lexicon.is_negative("ne fonctionne pas"));
        assert!(lexicon.is_negative_phrase("ne fonctionne pas"));
        assert!(lexicon.is_negative_phrase("en colère"));
    }

    #[test]
    fn test_positive_and_negative_words_are_disjoint() {
        let lexicon = FrenchLexicon::shared();
        for word in POSITIVE {
            assert!(!lexicon.is_negative(word), "{word} is in both sets");
        }
    }

    #[test]
    fn test_negation_detection() {
        let lexicon = FrenchLexicon::shared();
        assert!(lexicon.has_negation("je ne sais".split_whitespace()));
        assert!(lexicon.has_negation("sans doute".split_whitespace()));
        assert!(!lexicon.has_negation("pas.".split_whitespace()));
        assert!(!lexicon.has_negation("tout va bien".split_whitespace()));
    }

    #[test]
    fn test_phrases_fit_ngram_window() {
        for entry in NEGATIVE {
            assert!(entry.split_whitespace().count() <= MAX_PHRASE_WORDS);
        }
    }
}

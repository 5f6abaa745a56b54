//! Text normalization ahead of scoring

use crate::stopwords::Stopwords;
use regex::Regex;
use sentiscope_core::{Error, Result};

/// Regex-based text cleaner.
///
/// Lowercases, then strips URLs, @mentions and #hashtags, punctuation and
/// digit runs, and finally collapses whitespace.
pub struct TextNormalizer {
    url_regex: Regex,
    social_regex: Regex,
    punctuation_regex: Regex,
    digits_regex: Regex,
    whitespace_regex: Regex,
}

impl TextNormalizer {
    /// Create a new normalizer
    pub fn new() -> Result<Self> {
        Ok(Self {
            url_regex: compile("URL", r"https?://\S+|www\.\S+")?,
            social_regex: compile("mention", r"@\w+|#\w+")?,
            punctuation_regex: compile("punctuation", r"[^\w\s]")?,
            digits_regex: compile("digits", r"\d+")?,
            whitespace_regex: compile("whitespace", r"\s+")?,
        })
    }

    /// Clean `text` for lexical scoring. Empty or blank input yields "".
    pub fn normalize(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let text = text.to_lowercase();
        let text = self.url_regex.replace_all(&text, "");
        let text = self.social_regex.replace_all(&text, "");
        let text = self.punctuation_regex.replace_all(&text, "");
        let text = self.digits_regex.replace_all(&text, "");
        let text = self.whitespace_regex.replace_all(&text, " ");

        text.trim().to_string()
    }

    /// Drop stopwords from already-normalized text
    pub fn remove_stopwords(&self, cleaned: &str, stopwords: &Stopwords) -> String {
        cleaned
            .split_whitespace()
            .filter(|word| !stopwords.contains(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn compile(what: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| Error::internal(format!("Failed to compile {what} regex: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> TextNormalizer {
        TextNormalizer::new().unwrap()
    }

    #[test]
    fn test_strips_urls_mentions_and_hashtags() {
        let cleaned = normalizer()
            .normalize("Voir https://example.com/page et www.site.fr, merci @alice #promo");
        assert_eq!(cleaned, "voir et merci");
    }

    #[test]
    fn test_strips_punctuation_and_digits() {
        let cleaned = normalizer().normalize("Génial!!! 42 fois... L'appli v2.0 marche.");
        assert_eq!(cleaned, "génial fois lappli v marche");
    }

    #[test]
    fn test_collapses_whitespace() {
        let cleaned = normalizer().normalize("  Très \t\n  BIEN   ");
        assert_eq!(cleaned, "très bien");
    }

    #[test]
    fn test_blank_input() {
        let normalizer = normalizer();
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("   \n\t"), "");
        assert_eq!(normalizer.normalize("!!! 123 ..."), "");
    }

    #[test]
    fn test_idempotent_on_samples() {
        let normalizer = normalizer();
        for sample in [
            "Ce service ne fonctionne pas correctement.",
            "I LOVE it!!! http://x.y #wow @bob 2024",
            "a_b  c__d 9z",
        ] {
            let once = normalizer.normalize(sample);
            assert_eq!(normalizer.normalize(&once), once);
        }
    }

    #[test]
    fn test_remove_stopwords() {
        let normalizer = normalizer();
        let stopwords = Stopwords::builtin();

        let cleaned = normalizer.normalize("Je suis très content de cette application !");
        let filtered = normalizer.remove_stopwords(&cleaned, &stopwords);
        assert_eq!(filtered, "très content cette application");

        let filtered = normalizer.remove_stopwords("this is the best", &stopwords);
        assert_eq!(filtered, "best");
    }

    #[test]
    fn test_remove_stopwords_with_empty_set() {
        let normalizer = normalizer();
        let filtered = normalizer.remove_stopwords("je suis là", &Stopwords::empty());
        assert_eq!(filtered, "je suis là");
    }
}

//! Property tests for the normalizer and the local pipeline

use proptest::prelude::*;
use sentiscope_analyzer::{SentimentEngine, TextNormalizer};
use sentiscope_core::{AnalysisResult, SentimentLabel};

/// Mix of French words, punctuation, URLs, mentions and digits
fn snippet() -> impl Strategy<Value = String> {
    let token = prop_oneof![
        Just("ne".to_string()),
        Just("pas".to_string()),
        Just("génial".to_string()),
        Just("déçu".to_string()),
        Just("fonctionne".to_string()),
        Just("correctement".to_string()),
        Just("en colère".to_string()),
        Just("https://exemple.fr/a?b=1".to_string()),
        Just("@marie".to_string()),
        Just("#top".to_string()),
        "[0-9]{1,4}",
        "[a-zA-Zéèàç']{1,10}",
        "[!?.,;:]{1,3}",
        "\\PC{1,6}",
    ];
    prop::collection::vec(token, 0..12).prop_map(|tokens| tokens.join(" "))
}

proptest! {
    #[test]
    fn normalize_is_idempotent(text in snippet()) {
        let normalizer = TextNormalizer::new().unwrap();
        let once = normalizer.normalize(&text);
        prop_assert_eq!(normalizer.normalize(&once), once);
    }

    #[test]
    fn normalize_is_idempotent_on_arbitrary_text(text in "\\PC{0,40}") {
        let normalizer = TextNormalizer::new().unwrap();
        let once = normalizer.normalize(&text);
        prop_assert_eq!(normalizer.normalize(&once), once);
    }

    #[test]
    fn normalized_text_has_no_edge_or_double_spaces(text in snippet()) {
        let normalizer = TextNormalizer::new().unwrap();
        let cleaned = normalizer.normalize(&text);
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
        prop_assert!(!cleaned.contains("  "));
    }

    #[test]
    fn local_analysis_is_total(text in snippet()) {
        let engine = SentimentEngine::builder().build().unwrap();
        let result = engine.analyze_local(&text);

        prop_assert!(result.polarity.is_finite());
        prop_assert!((-1.0..=1.0).contains(&result.polarity));
        prop_assert!((0.0..=1.0).contains(&result.subjectivity));
        prop_assert!(matches!(
            result.sentiment,
            SentimentLabel::Positive | SentimentLabel::Negative | SentimentLabel::Neutral
        ));
        prop_assert_eq!(result.model.as_str(), "local");
    }

    #[test]
    fn label_matches_polarity(text in snippet()) {
        let engine = SentimentEngine::builder().build().unwrap();
        let result = engine.analyze_local(&text);
        prop_assert_eq!(result.sentiment, SentimentLabel::from_polarity(result.polarity));
    }

    #[test]
    fn whitespace_only_is_neutral(text in "[ \t\n]{0,10}") {
        let engine = SentimentEngine::builder().build().unwrap();
        prop_assert_eq!(engine.analyze_local(&text), AnalysisResult::neutral());
    }
}

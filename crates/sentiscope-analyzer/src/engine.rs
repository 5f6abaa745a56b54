//! Blending and labeling engine
//!
//! One call is one pass: dispatch to the remote scorer when requested and
//! available, otherwise run the local pipeline (normalize, filter stopwords,
//! library score + French heuristic, negation override, weighted blend,
//! threshold).

use crate::charts::{ChartArtifacts, ChartRenderer};
use crate::config::AnalyzerConfig;
use crate::french::FrenchHeuristicScorer;
use crate::lexicon::FrenchLexicon;
use crate::library::PatternLexiconScorer;
use crate::normalizer::TextNormalizer;
use crate::remote::{report_unconfigured, RemoteScorer};
use crate::scorer::{HeuristicScorer, LibraryScore, LibraryScorer};
use crate::stopwords::Stopwords;
use futures::stream::{self, StreamExt};
use sentiscope_core::{AnalysisInput, AnalysisResult, Error, Result, SentimentLabel};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Literal phrases that force the negative override
pub const EXPLICIT_NEGATIVE_PHRASES: [&str; 2] = ["ne fonctionne pas", "pas correctement"];

/// Polarity forced by the negation override
pub const NEGATION_OVERRIDE_POLARITY: f64 = -0.5;

/// Weight of the French heuristic against the library score (which has weight 1)
pub const FRENCH_WEIGHT: f64 = 3.0;

/// Intermediate values of one local scoring pass
#[derive(Debug, Clone, PartialEq)]
pub struct LocalBreakdown {
    /// Normalized text
    pub cleaned: String,
    /// Normalized text without stopwords
    pub filtered: String,
    /// Library scorer output on `filtered`
    pub library: LibraryScore,
    /// French heuristic score on the lowercased original
    pub french: f64,
    /// A negation marker appears as a token
    pub has_negation: bool,
    /// One of [`EXPLICIT_NEGATIVE_PHRASES`] appears as a substring
    pub explicit_negative: bool,
    /// Final polarity
    pub polarity: f64,
}

impl LocalBreakdown {
    /// Whether the negation override replaced the blend
    pub fn overridden(&self) -> bool {
        self.explicit_negative || (self.has_negation && self.french <= 0.0)
    }

    pub fn into_result(self) -> AnalysisResult {
        if self.filtered.is_empty() {
            return AnalysisResult::neutral();
        }
        AnalysisResult::local(
            self.polarity,
            self.library.subjectivity,
            SentimentLabel::from_polarity(self.polarity),
        )
    }
}

/// Which scorer a call goes to
enum Route<'a> {
    Remote(&'a RemoteScorer),
    Local,
}

pub struct SentimentEngine {
    normalizer: TextNormalizer,
    stopwords: Stopwords,
    lexicon: Arc<FrenchLexicon>,
    heuristic: Arc<dyn HeuristicScorer>,
    library: Arc<dyn LibraryScorer>,
    remote: Option<RemoteScorer>,
    use_remote_default: bool,
    batch_concurrency: usize,
}

impl SentimentEngine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Build the engine described by `config`
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        config.validate()?;

        let remote = RemoteScorer::from_config(&config.remote)?;
        match &remote {
            Some(scorer) => info!("Remote scorer enabled with model {}", scorer.model()),
            None => info!("No remote API key configured, local scoring only"),
        }

        Self::builder()
            .stopwords(Stopwords::load(config.stopwords_path.as_deref()))
            .remote(remote)
            .use_remote_default(config.use_remote)
            .batch_concurrency(config.batch_concurrency)
            .build()
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub fn use_remote_default(&self) -> bool {
        self.use_remote_default
    }

    /// Analyze one request, resolving an unset remote flag from configuration
    pub async fn analyze_input(&self, input: &AnalysisInput) -> AnalysisResult {
        let use_remote = input.use_remote.unwrap_or(self.use_remote_default);
        self.analyze(&input.text, use_remote).await
    }

    /// Score `text`. Total over all inputs: always returns a complete result.
    pub async fn analyze(&self, text: &str, use_remote: bool) -> AnalysisResult {
        if text.trim().is_empty() {
            metrics::counter!("sentiscope_analyses_total", "route" => "empty").increment(1);
            return AnalysisResult::neutral();
        }

        if let Route::Remote(scorer) = self.route(use_remote) {
            if let Some(result) = scorer.score(text).await {
                metrics::counter!("sentiscope_analyses_total", "route" => "remote").increment(1);
                return result;
            }
            debug!("Remote scorer unavailable, falling back to local pipeline");
        }

        metrics::counter!("sentiscope_analyses_total", "route" => "local").increment(1);
        self.analyze_local(text)
    }

    /// Score `text` with the local pipeline only
    pub fn analyze_local(&self, text: &str) -> AnalysisResult {
        self.explain(text).into_result()
    }

    /// Run the local pipeline and keep every intermediate value
    pub fn explain(&self, text: &str) -> LocalBreakdown {
        let original_lower = text.to_lowercase();
        let cleaned = self.normalizer.normalize(text);
        let filtered = self.normalizer.remove_stopwords(&cleaned, &self.stopwords);

        if filtered.is_empty() {
            return LocalBreakdown {
                cleaned,
                filtered,
                library: LibraryScore::default(),
                french: 0.0,
                has_negation: false,
                explicit_negative: false,
                polarity: 0.0,
            };
        }

        let library = self.library.score(&filtered);
        let french = self.heuristic.score(&original_lower);

        let has_negation = self.lexicon.has_negation(original_lower.split_whitespace());
        let explicit_negative = EXPLICIT_NEGATIVE_PHRASES
            .iter()
            .any(|phrase| original_lower.contains(phrase));

        let mut breakdown = LocalBreakdown {
            cleaned,
            filtered,
            library,
            french,
            has_negation,
            explicit_negative,
            polarity: 0.0,
        };

        breakdown.polarity = if breakdown.overridden() {
            NEGATION_OVERRIDE_POLARITY
        } else {
            (library.polarity + FRENCH_WEIGHT * french) / (1.0 + FRENCH_WEIGHT)
        };

        debug!(
            "{} {:.3} + {} {:.3} -> {:.3}{}",
            self.library.name(),
            library.polarity,
            self.heuristic.name(),
            french,
            breakdown.polarity,
            if breakdown.overridden() { " (negation override)" } else { "" }
        );

        breakdown
    }

    /// Score every text; output order matches input order
    pub async fn analyze_batch<S>(&self, texts: &[S], use_remote: bool) -> Vec<AnalysisResult>
    where
        S: AsRef<str> + Sync,
    {
        stream::iter(texts)
            .map(|text| self.analyze(text.as_ref(), use_remote))
            .buffered(self.batch_concurrency)
            .collect()
            .await
    }

    /// Score a batch and hand the (polarity, subjectivity, label) triples to `renderer`
    pub async fn visualize<S>(
        &self,
        texts: &[S],
        use_remote: bool,
        renderer: &dyn ChartRenderer,
    ) -> Result<(Vec<AnalysisResult>, ChartArtifacts)>
    where
        S: AsRef<str> + Sync,
    {
        if texts.is_empty() {
            warn!("No texts provided for visualization");
            return Err(Error::invalid_input("no texts provided for visualization"));
        }

        let results = self.analyze_batch(texts, use_remote).await;
        let points: Vec<_> = results.iter().map(AnalysisResult::point).collect();
        let artifacts = renderer.render(&points)?;

        Ok((results, artifacts))
    }

    fn route(&self, use_remote: bool) -> Route<'_> {
        if !use_remote {
            return Route::Local;
        }
        match &self.remote {
            Some(scorer) => Route::Remote(scorer),
            None => {
                report_unconfigured();
                Route::Local
            }
        }
    }
}

/// Builder for [`SentimentEngine`]
pub struct EngineBuilder {
    stopwords: Option<Stopwords>,
    lexicon: Arc<FrenchLexicon>,
    heuristic: Option<Arc<dyn HeuristicScorer>>,
    library: Option<Arc<dyn LibraryScorer>>,
    remote: Option<RemoteScorer>,
    use_remote_default: bool,
    batch_concurrency: usize,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            stopwords: None,
            lexicon: FrenchLexicon::shared(),
            heuristic: None,
            library: None,
            remote: None,
            use_remote_default: false,
            batch_concurrency: 1,
        }
    }

    pub fn stopwords(mut self, stopwords: Stopwords) -> Self {
        self.stopwords = Some(stopwords);
        self
    }

    /// Lexicon for the negation override check, and for the default
    /// heuristic when none is set
    pub fn lexicon(mut self, lexicon: Arc<FrenchLexicon>) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn heuristic(mut self, heuristic: Arc<dyn HeuristicScorer>) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    pub fn library(mut self, library: Arc<dyn LibraryScorer>) -> Self {
        self.library = Some(library);
        self
    }

    pub fn remote(mut self, remote: Option<RemoteScorer>) -> Self {
        self.remote = remote;
        self
    }

    pub fn use_remote_default(mut self, use_remote: bool) -> Self {
        self.use_remote_default = use_remote;
        self
    }

    pub fn batch_concurrency(mut self, concurrency: usize) -> Self {
        self.batch_concurrency = concurrency;
        self
    }

    pub fn build(self) -> Result<SentimentEngine> {
        if self.batch_concurrency == 0 {
            return Err(Error::config("batch concurrency must be at least 1"));
        }

        let lexicon = self.lexicon;
        let heuristic = self.heuristic.unwrap_or_else(|| {
            Arc::new(FrenchHeuristicScorer::with_lexicon(Arc::clone(&lexicon)))
        });
        Ok(SentimentEngine {
            normalizer: TextNormalizer::new()?,
            stopwords: self.stopwords.unwrap_or_else(Stopwords::builtin),
            lexicon,
            heuristic,
            library: self
                .library
                .unwrap_or_else(|| Arc::new(PatternLexiconScorer::new())),
            remote: self.remote,
            use_remote_default: self.use_remote_default,
            batch_concurrency: self.batch_concurrency,
        })
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

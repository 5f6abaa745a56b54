//! Configuration for the scoring engine

use sentiscope_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Remote LLM scorer settings
    #[serde(default)]
    pub remote: RemoteConfig,

    /// Use the remote scorer when the caller does not say
    #[serde(default)]
    pub use_remote: bool,

    /// Stopword file overriding the built-in lists (one word per line)
    #[serde(default)]
    pub stopwords_path: Option<PathBuf>,

    /// Maximum texts scored concurrently in a batch
    #[serde(default = "default_batch_concurrency")]
    pub batch_concurrency: usize,

    /// Where chart data is written
    #[serde(default = "default_charts_dir")]
    pub charts_dir: PathBuf,
}

/// Remote chat-completion endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// API credential; remote scoring is unavailable without one
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier, also reported as the result's model tag
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL; requests go to `{base_url}/chat/completions`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl RemoteConfig {
    /// The credential, if set and non-blank
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            temperature: 0.0,
            max_tokens: default_max_tokens(),
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            remote: RemoteConfig::default(),
            use_remote: false,
            stopwords_path: None,
            batch_concurrency: default_batch_concurrency(),
            charts_dir: default_charts_dir(),
        }
    }
}

impl AnalyzerConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load from `path` if it exists, defaults otherwise
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            info!("Loading configuration from {}", path.display());
            Self::from_file(path)
        } else {
            info!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_concurrency == 0 {
            return Err(Error::config("batch_concurrency must be at least 1"));
        }
        if self.remote.model.trim().is_empty() {
            return Err(Error::config("remote.model must not be empty"));
        }
        Ok(())
    }
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_max_tokens() -> u32 {
    100
}

fn default_batch_concurrency() -> usize {
    num_cpus::get().max(1)
}

fn default_charts_dir() -> PathBuf {
    PathBuf::from("charts")
}

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sentiscope")]
#[command(
    author,
    version,
    about = "Sentiment analysis for short French/English texts"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "sentiscope.yaml", global = true)]
    pub config: PathBuf,

    #[command(flatten)]
    pub remote: RemoteArgs,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Remote scorer overrides, also read from the environment
#[derive(Args, Debug, Default)]
pub struct RemoteArgs {
    /// API key for the chat completion endpoint
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Remote model identifier
    #[arg(long, env = "OPENAI_MODEL", global = true)]
    pub model: Option<String>,

    /// Chat completion API base URL
    #[arg(long, env = "OPENAI_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Use the remote scorer unless a command says otherwise
    #[arg(
        long,
        env = "USE_OPENAI",
        global = true,
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub use_remote: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a single text and print the result as JSON
    Analyze {
        /// Text to analyze
        #[arg(short, long)]
        text: String,

        #[command(flatten)]
        route: RouteArgs,

        /// Also print the local pipeline's intermediate scores
        #[arg(long)]
        explain: bool,
    },

    /// Analyze one text per line and write chart data
    Batch {
        /// Input file, one text per line (blank lines are skipped)
        #[arg(short, long)]
        input: PathBuf,

        /// Chart data output directory (defaults to the configured one)
        #[arg(long)]
        charts_dir: Option<PathBuf>,

        /// Skip chart data export
        #[arg(long)]
        no_charts: bool,

        #[command(flatten)]
        route: RouteArgs,
    },
}

/// Per-command choice between remote and local scoring
#[derive(Args, Debug, Default)]
pub struct RouteArgs {
    /// Try the remote scorer first
    #[arg(long, conflicts_with = "local")]
    pub remote: bool,

    /// Only use the local pipeline
    #[arg(long)]
    pub local: bool,
}

impl RouteArgs {
    /// `None` leaves the decision to configuration
    pub fn use_remote(&self) -> Option<bool> {
        match (self.remote, self.local) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

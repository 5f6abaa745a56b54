//! Sentiscope CLI
//!
//! Boundary layer around the sentiment engine: validates input, loads
//! configuration, and prints results as JSON on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use sentiscope_analyzer::{JsonChartWriter, SentimentEngine};
use sentiscope_core::{validate_text, AnalysisInput};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

mod cli;
mod config;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = config::load(&cli.config, &cli.remote)?;
    let engine = SentimentEngine::from_config(&config)?;
    debug!(
        "Engine ready (remote available: {}, remote by default: {})",
        engine.has_remote(),
        engine.use_remote_default()
    );

    match cli.command {
        Commands::Analyze {
            text,
            route,
            explain,
        } => {
            validate_text(&text)?;

            let input = AnalysisInput {
                text,
                use_remote: route.use_remote(),
            };
            let result = engine.analyze_input(&input).await;

            if explain {
                let breakdown = engine.explain(&input.text);
                print_json(&json!({
                    "result": result,
                    "local": {
                        "cleaned": breakdown.cleaned,
                        "filtered": breakdown.filtered,
                        "library_polarity": breakdown.library.polarity,
                        "library_subjectivity": breakdown.library.subjectivity,
                        "french_score": breakdown.french,
                        "has_negation": breakdown.has_negation,
                        "explicit_negative": breakdown.explicit_negative,
                        "negation_override": breakdown.overridden(),
                        "polarity": breakdown.polarity,
                    }
                }))?;
            } else {
                print_json(&result)?;
            }
        }

        Commands::Batch {
            input,
            charts_dir,
            no_charts,
            route,
        } => {
            let texts = read_texts(&input)?;
            info!("Analyzing {} texts from {}", texts.len(), input.display());

            let use_remote = route.use_remote().unwrap_or(config.use_remote);

            if no_charts {
                let results = engine.analyze_batch(&texts, use_remote).await;
                print_json(&results)?;
            } else {
                let dir: PathBuf = charts_dir.unwrap_or_else(|| config.charts_dir.clone());
                let writer = JsonChartWriter::new(dir);
                let (results, artifacts) = engine.visualize(&texts, use_remote, &writer).await?;
                print_json(&json!({
                    "results": results,
                    "charts": artifacts,
                }))?;
            }
        }
    }

    Ok(())
}

/// Read one text per non-blank line
fn read_texts(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;

    let texts: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    if texts.is_empty() {
        anyhow::bail!("No texts found in {}", path.display());
    }
    Ok(texts)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("sentiscope=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sentiscope=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

//! Chart data export for batch analyses
//!
//! Produces the data behind four charts (polarity histogram, subjectivity
//! histogram, polarity vs subjectivity scatter, label pie) as JSON documents.
//! Drawing them is left to whatever front end reads the files.

use sentiscope_core::{Error, Result, SentimentLabel, SentimentPoint};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Bins per histogram
pub const HISTOGRAM_BINS: usize = 20;

pub const POLARITY_FILE: &str = "polarity_distribution.json";
pub const SUBJECTIVITY_FILE: &str = "subjectivity_distribution.json";
pub const SCATTER_FILE: &str = "polarity_vs_subjectivity.json";
pub const PIE_FILE: &str = "sentiment_pie.json";

/// Locations of the four chart documents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartArtifacts {
    pub polarity_distribution: PathBuf,
    pub subjectivity_distribution: PathBuf,
    pub polarity_vs_subjectivity: PathBuf,
    pub sentiment_pie: PathBuf,
}

/// Consumer of (polarity, subjectivity, label) triples
pub trait ChartRenderer: Send + Sync {
    fn render(&self, points: &[SentimentPoint]) -> Result<ChartArtifacts>;
}

/// Writes chart data as pretty-printed JSON into one directory
pub struct JsonChartWriter {
    output_dir: PathBuf,
}

impl JsonChartWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl ChartRenderer for JsonChartWriter {
    fn render(&self, points: &[SentimentPoint]) -> Result<ChartArtifacts> {
        if points.is_empty() {
            return Err(Error::chart("no data points to render"));
        }

        fs::create_dir_all(&self.output_dir).map_err(|e| {
            Error::chart(format!("create {}: {e}", self.output_dir.display()))
        })?;

        let artifacts = ChartArtifacts {
            polarity_distribution: self.output_dir.join(POLARITY_FILE),
            subjectivity_distribution: self.output_dir.join(SUBJECTIVITY_FILE),
            polarity_vs_subjectivity: self.output_dir.join(SCATTER_FILE),
            sentiment_pie: self.output_dir.join(PIE_FILE),
        };

        let polarities: Vec<f64> = points.iter().map(|p| p.polarity).collect();
        let subjectivities: Vec<f64> = points.iter().map(|p| p.subjectivity).collect();

        write_json(
            &artifacts.polarity_distribution,
            &Histogram::build("Polarity distribution", "polarity", &polarities, HISTOGRAM_BINS),
        )?;
        write_json(
            &artifacts.subjectivity_distribution,
            &Histogram::build(
                "Subjectivity distribution",
                "subjectivity",
                &subjectivities,
                HISTOGRAM_BINS,
            ),
        )?;
        write_json(&artifacts.polarity_vs_subjectivity, &Scatter::build(points))?;
        write_json(&artifacts.sentiment_pie, &Pie::build(points))?;

        info!(
            "Wrote chart data for {} analyses to {}",
            points.len(),
            self.output_dir.display()
        );
        Ok(artifacts)
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .map_err(|e| Error::chart(format!("write {}: {e}", path.display())))
}

fn label_color(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "green",
        SentimentLabel::Neutral => "blue",
        SentimentLabel::Negative => "red",
    }
}

/// Equal-width histogram over the data range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub title: String,
    pub x_label: String,
    /// `bins + 1` ascending edges; the last bin includes its right edge
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn build(title: &str, x_label: &str, values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if values.is_empty() {
            lo = 0.0;
            hi = 1.0;
        } else if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges = (0..=bins).map(|i| lo + width * i as f64).collect();

        let mut counts = vec![0; bins];
        for &v in values {
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            edges,
            counts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub label: SentimentLabel,
    pub color: String,
    /// (polarity, subjectivity)
    pub points: Vec<(f64, f64)>,
}

/// Polarity vs subjectivity, one series per label present
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scatter {
    pub title: String,
    pub series: Vec<ScatterSeries>,
}

impl Scatter {
    pub fn build(points: &[SentimentPoint]) -> Self {
        let series = SentimentLabel::ALL
            .iter()
            .filter_map(|&label| {
                let members: Vec<(f64, f64)> = points
                    .iter()
                    .filter(|p| p.sentiment == label)
                    .map(|p| (p.polarity, p.subjectivity))
                    .collect();
                (!members.is_empty()).then(|| ScatterSeries {
                    label,
                    color: label_color(label).to_string(),
                    points: members,
                })
            })
            .collect();

        Self {
            title: "Polarity vs subjectivity".to_string(),
            series,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: SentimentLabel,
    pub color: String,
    pub count: usize,
    pub percent: f64,
}

/// Label proportions, largest slice first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pie {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl Pie {
    pub fn build(points: &[SentimentPoint]) -> Self {
        let total = points.len().max(1) as f64;
        let mut slices: Vec<PieSlice> = SentimentLabel::ALL
            .iter()
            .map(|&label| {
                let count = points.iter().filter(|p| p.sentiment == label).count();
                PieSlice {
                    label,
                    color: label_color(label).to_string(),
                    count,
                    percent: count as f64 * 100.0 / total,
                }
            })
            .filter(|slice| slice.count > 0)
            .collect();
        // stable: ties keep chart order
        slices.sort_by(|a, b| b.count.cmp(&a.count));

        Self {
            title: "Sentiment breakdown".to_string(),
            slices,
        }
    }
}

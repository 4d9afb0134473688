//! Batch-series line plot artifact — pion counts per batch of events.

use serde::{Deserialize, Serialize};

use ps_stats::Aggregate;

/// Plot-friendly artifact for the per-batch positive/negative pion trend.
///
/// `x_values[i]` is the number of events consumed before batch `i` started,
/// so the series plots against event number, matching the reference chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSeriesArtifact {
    /// Event number at the start of each batch.
    pub x_values: Vec<u64>,
    /// Positive-pion count per batch.
    pub positive: Vec<u64>,
    /// Negative-pion count per batch.
    pub negative: Vec<u64>,
    /// Label for the positive series.
    pub positive_label: String,
    /// Label for the negative series.
    pub negative_label: String,
    /// X-axis label.
    pub x_label: String,
    /// Y-axis label.
    pub y_label: String,
    /// Plot title.
    pub title: String,
}

impl BatchSeriesArtifact {
    /// Build the artifact from an aggregation result.
    pub fn from_aggregate(agg: &Aggregate) -> Self {
        let batch_size = agg.batch_size as u64;
        let x_values = (0..agg.series.len() as u64).map(|i| i * batch_size).collect();
        Self {
            x_values,
            positive: agg.series.positive.clone(),
            negative: agg.series.negative.clone(),
            positive_label: "Positive Pions".to_string(),
            negative_label: "Negative Pions".to_string(),
            x_label: "Event number".to_string(),
            y_label: format!("Number of pions in {} events", agg.batch_size),
            title: format!("Positive and Negative Pions per {} Events", agg.batch_size),
        }
    }
}

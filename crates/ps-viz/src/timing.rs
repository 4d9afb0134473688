//! Execution-time bar chart artifact for multi-file runs.

use serde::{Deserialize, Serialize};

/// Labeled per-file wall-clock times plus the run total.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimingArtifact {
    /// One label per processed file (file name).
    pub labels: Vec<String>,
    /// Elapsed seconds per file, aligned with `labels`.
    pub seconds: Vec<f64>,
    /// Total elapsed seconds for the whole run.
    pub total_seconds: f64,
    /// Y-axis label.
    pub y_label: String,
    /// Plot title.
    pub title: String,
}

impl TimingArtifact {
    /// Build from `(label, seconds)` pairs in report order.
    pub fn from_timings(timings: &[(String, f64)], total_seconds: f64) -> Self {
        Self {
            labels: timings.iter().map(|(l, _)| l.clone()).collect(),
            seconds: timings.iter().map(|&(_, s)| s).collect(),
            total_seconds,
            y_label: "Execution time [s]".to_string(),
            title: "Per-file execution time".to_string(),
        }
    }
}

//! Analysis configuration.
//!
//! Every constant the reference scripts hardcoded (batch size, subsample
//! size, thresholds, uncertainty convention) is an explicit, serializable
//! field here. Partial JSON config files work: missing fields take the
//! defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Which Poisson uncertainty convention to use for the per-event averages
/// and the combined uncertainty.
///
/// The two reference analyses disagree: one divides `sqrt(total)` by the
/// event count, the other takes `sqrt(average)` directly. These are
/// numerically different, so both are surfaced as named strategies rather
/// than silently reconciled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UncertaintyFormula {
    /// `sqrt(total) / event_count` for the average; `sqrt(total)` per side
    /// in the combined uncertainty.
    #[default]
    SqrtTotalOverCount,
    /// `sqrt(average)` for the average; `sqrt(average)` per side in the
    /// combined uncertainty.
    SqrtAverage,
}

/// Configuration for one counting analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Events per batch snapshot.
    pub batch_size: usize,

    /// Uniform per-batch subsample size (without replacement). `None`
    /// disables subsampling; events are then processed exhaustively.
    pub sample_size: Option<usize>,

    /// RNG seed for the subsampler.
    pub seed: u64,

    /// Uncertainty convention for averages and the combined uncertainty.
    pub uncertainty: UncertaintyFormula,

    /// Loose "large / not large" significance threshold.
    pub significance_threshold: f64,

    /// Strict "statistically significant" threshold, in sigma.
    pub sigma_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            sample_size: None,
            seed: 42,
            uncertainty: UncertaintyFormula::default(),
            significance_threshold: 0.05,
            sigma_threshold: 2.0,
        }
    }
}

impl AnalysisConfig {
    /// Load a config from a JSON file; missing fields take defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let cfg: Self = serde_json::from_str(&json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::Validation("batch_size must be > 0".into()));
        }
        if let Some(k) = self.sample_size {
            if k == 0 {
                return Err(Error::Validation("sample_size must be > 0".into()));
            }
            if k > self.batch_size {
                return Err(Error::Validation(format!(
                    "sample_size ({}) must not exceed batch_size ({})",
                    k, self.batch_size
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let cfg = AnalysisConfig::default();
        assert_eq!(cfg.batch_size, 1000);
        assert_eq!(cfg.sample_size, None);
        assert!((cfg.significance_threshold - 0.05).abs() < 1e-12);
        assert!((cfg.sigma_threshold - 2.0).abs() < 1e-12);
        assert_eq!(cfg.uncertainty, UncertaintyFormula::SqrtTotalOverCount);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn sample_size_must_not_exceed_batch_size() {
        let cfg = AnalysisConfig { batch_size: 100, sample_size: Some(300), ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_json_takes_defaults() {
        let cfg: AnalysisConfig =
            serde_json::from_str(r#"{"batch_size": 50, "uncertainty": "sqrt-average"}"#).unwrap();
        assert_eq!(cfg.batch_size, 50);
        assert_eq!(cfg.uncertainty, UncertaintyFormula::SqrtAverage);
        assert!((cfg.significance_threshold - 0.05).abs() < 1e-12);
    }

    #[test]
    fn config_json_roundtrip() {
        let cfg = AnalysisConfig { sample_size: Some(300), ..Default::default() };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sample_size, Some(300));
        assert_eq!(back.batch_size, cfg.batch_size);
    }
}

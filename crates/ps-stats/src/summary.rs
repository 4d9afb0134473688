//! Counting statistics: averages, Poisson uncertainties, significance.
//!
//! The two reference analyses drifted apart on the uncertainty formula
//! (`sqrt(total)/count` vs `sqrt(average)`), so the formula is a named
//! parameter ([`UncertaintyFormula`]) rather than a silent choice. All
//! division and sqrt sites are guarded: zero events gives zero averages,
//! and a zero combined uncertainty gives `+∞` significance.

use serde::{Deserialize, Serialize};

use ps_core::{AnalysisConfig, UncertaintyFormula};

use crate::aggregator::Aggregate;

/// `total / events`, 0 when there are no events.
pub fn average(total: u64, events: u64) -> f64 {
    if events == 0 {
        return 0.0;
    }
    total as f64 / events as f64
}

/// Statistical uncertainty on the per-event average, per the chosen formula.
pub fn average_uncertainty(total: u64, events: u64, formula: UncertaintyFormula) -> f64 {
    if events == 0 || total == 0 {
        return 0.0;
    }
    match formula {
        UncertaintyFormula::SqrtTotalOverCount => (total as f64).sqrt() / events as f64,
        UncertaintyFormula::SqrtAverage => average(total, events).sqrt(),
    }
}

/// Per-side count uncertainty entering the combined uncertainty:
/// `sqrt(total)` or `sqrt(average)` per the chosen formula, 0 when the
/// argument is not positive.
pub fn count_uncertainty(total: u64, events: u64, formula: UncertaintyFormula) -> f64 {
    if total == 0 {
        return 0.0;
    }
    match formula {
        UncertaintyFormula::SqrtTotalOverCount => (total as f64).sqrt(),
        UncertaintyFormula::SqrtAverage => average(total, events).sqrt(),
    }
}

/// `|positive − negative|`.
pub fn difference(positive: u64, negative: u64) -> u64 {
    positive.abs_diff(negative)
}

/// Quadrature sum of the two per-side uncertainties.
pub fn combined_uncertainty(unc_positive: f64, unc_negative: f64) -> f64 {
    (unc_positive * unc_positive + unc_negative * unc_negative).sqrt()
}

/// `difference / combined`, `+∞` when the denominator is exactly 0.
pub fn significance(difference: f64, combined: f64) -> f64 {
    if combined == 0.0 {
        return f64::INFINITY;
    }
    difference / combined
}

/// Full statistics for one processed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSummary {
    /// Events fully consumed.
    pub events: u64,
    /// Total positive pions.
    pub positive_total: u64,
    /// Total negative pions.
    pub negative_total: u64,
    /// Average positive pions per event.
    pub average_positive: f64,
    /// Uncertainty on `average_positive`.
    pub uncertainty_positive: f64,
    /// Average negative pions per event.
    pub average_negative: f64,
    /// Uncertainty on `average_negative`.
    pub uncertainty_negative: f64,
    /// `|positive_total − negative_total|`.
    pub difference: u64,
    /// Quadrature-combined count uncertainty.
    pub combined_uncertainty: f64,
    /// `difference / combined_uncertainty` (`+∞` when combined is 0;
    /// serialized as `null` in JSON).
    pub significance: f64,
    /// Formula the uncertainties were computed with.
    pub uncertainty_formula: UncertaintyFormula,
    /// Loose threshold the "large / not large" verdict used.
    pub significance_threshold: f64,
    /// Strict sigma threshold the "statistically significant" verdict used.
    pub sigma_threshold: f64,
    /// `significance > significance_threshold`.
    pub is_large: bool,
    /// `significance > sigma_threshold`.
    pub statistically_significant: bool,
}

impl FileSummary {
    /// Derive the summary from final aggregation results. Invoked once,
    /// after the reader is exhausted.
    pub fn from_aggregate(agg: &Aggregate, config: &AnalysisConfig) -> Self {
        let t = agg.totals;
        let formula = config.uncertainty;

        let diff = difference(t.positive, t.negative);
        let combined = combined_uncertainty(
            count_uncertainty(t.positive, t.events, formula),
            count_uncertainty(t.negative, t.events, formula),
        );
        let sig = significance(diff as f64, combined);

        Self {
            events: t.events,
            positive_total: t.positive,
            negative_total: t.negative,
            average_positive: average(t.positive, t.events),
            uncertainty_positive: average_uncertainty(t.positive, t.events, formula),
            average_negative: average(t.negative, t.events),
            uncertainty_negative: average_uncertainty(t.negative, t.events, formula),
            difference: diff,
            combined_uncertainty: combined,
            significance: sig,
            uncertainty_formula: formula,
            significance_threshold: config.significance_threshold,
            sigma_threshold: config.sigma_threshold,
            is_large: sig > config.significance_threshold,
            statistically_significant: sig > config.sigma_threshold,
        }
    }
}

use std::fmt::Write;

use ps_stats::FileSummary;

/// Render the per-file textual report.
///
/// The layout follows the reference analysis output: counts, averages with
/// uncertainties, difference, combined uncertainty, significance, then one
/// verdict sentence per threshold (the loose "large" threshold and the
/// strict sigma threshold stay independent).
pub(crate) fn render_summary(label: &str, s: &FileSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "File: {label}");
    let _ = writeln!(out, "  Events: {}", s.events);
    let _ = writeln!(
        out,
        "  Positive pions: {}, Negative pions: {}",
        s.positive_total, s.negative_total
    );
    let _ = writeln!(
        out,
        "  Average positive pions/event: {:.10} \u{b1} {:.10}",
        s.average_positive, s.uncertainty_positive
    );
    let _ = writeln!(
        out,
        "  Average negative pions/event: {:.10} \u{b1} {:.10}",
        s.average_negative, s.uncertainty_negative
    );
    let _ = writeln!(out, "  Difference: {}", s.difference);
    let _ = writeln!(out, "  Combined uncertainty: {:.10}", s.combined_uncertainty);
    let _ = writeln!(out, "  Significance: {:.10}", s.significance);
    if s.is_large {
        let _ = writeln!(out, "  The significance is very large compared to the threshold.");
    } else {
        let _ = writeln!(out, "  The significance is not large compared to the threshold.");
    }
    if s.statistically_significant {
        let _ = writeln!(
            out,
            "  The difference is statistically significant (> {} sigma).",
            s.sigma_threshold
        );
    } else {
        let _ = writeln!(
            out,
            "  The difference is not statistically significant (<= {} sigma).",
            s.sigma_threshold
        );
    }
    out
}

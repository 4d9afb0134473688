//! Common data types for PionStat

use serde::{Deserialize, Serialize};

/// One measured particle within an event: momentum components and PDG code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Momentum x-component (GeV).
    pub px: f64,
    /// Momentum y-component (GeV).
    pub py: f64,
    /// Momentum z-component (GeV).
    pub pz: f64,
    /// PDG particle species code (211/−211 are the charged pions).
    pub pdg_code: i64,
}

impl Particle {
    /// Parse one whitespace-delimited detail line (`px py pz pdg_code ...`).
    ///
    /// Returns `None` for lines with fewer than four fields or with fields
    /// that do not parse; such lines are consumed but contribute nothing.
    /// Extra trailing fields are ignored.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut it = line.split_whitespace();
        let px: f64 = it.next()?.parse().ok()?;
        let py: f64 = it.next()?.parse().ok()?;
        let pz: f64 = it.next()?.parse().ok()?;
        let pdg_code: i64 = it.next()?.parse().ok()?;
        Some(Self { px, py, pz, pdg_code })
    }
}

/// One collision record: an identifier and the particles measured in it.
///
/// Immutable once parsed; the aggregation loop discards events after
/// consuming them, so nothing beyond the current batch stays in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event identifier from the header line.
    pub event_id: i64,
    /// Particles parsed from the detail lines. May be shorter than the
    /// declared count when the file is truncated or lines are malformed.
    pub particles: Vec<Particle>,
}

/// Monotonically increasing counters owned by one file's aggregation loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningTotals {
    /// Total positive-pion count across all consumed events.
    pub positive: u64,
    /// Total negative-pion count across all consumed events.
    pub negative: u64,
    /// Number of events fully consumed so far.
    pub events: u64,
}

/// Per-flush batch snapshots, two parallel ordered series.
///
/// Used only for trend reporting; the final totals always come from
/// [`RunningTotals`], though the sums must agree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSeries {
    /// Positive-pion count per flushed batch.
    pub positive: Vec<u64>,
    /// Negative-pion count per flushed batch.
    pub negative: Vec<u64>,
}

impl BatchSeries {
    /// Number of flushed batches (both series always have equal length).
    pub fn len(&self) -> usize {
        self.positive.len()
    }

    /// True when no batch has been flushed yet.
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty()
    }
}

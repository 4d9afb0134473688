//! Batch aggregation of per-event pion counts.
//!
//! The aggregator owns all mutable state for one file's pass: the running
//! totals and the batch snapshot series. Every `batch_size` events the
//! current subtotal pair is appended to the series and reset; `finish`
//! flushes any nonzero trailing subtotal so no batch entry is ever dropped.
//! Final totals are taken from the running counters, never by summing the
//! series, though the two must agree.

use serde::{Deserialize, Serialize};

use ps_core::{BatchSeries, Event, RunningTotals};

use crate::classify::Charge;

/// Result of aggregating one event stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    /// Final running totals.
    pub totals: RunningTotals,
    /// Per-batch snapshots, in flush order.
    pub series: BatchSeries,
    /// Batch size the snapshots were taken at.
    pub batch_size: usize,
}

/// Streaming accumulator for one file's event sequence.
pub struct Aggregator {
    batch_size: usize,
    totals: RunningTotals,
    series: BatchSeries,
    batch_positive: u64,
    batch_negative: u64,
    since_flush: usize,
}

impl Aggregator {
    /// New aggregator flushing a snapshot every `batch_size` events.
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            totals: RunningTotals::default(),
            series: BatchSeries::default(),
            batch_positive: 0,
            batch_negative: 0,
            since_flush: 0,
        }
    }

    /// Classify every particle in `event` and fold the per-event counts
    /// into the running totals and the current batch subtotal.
    pub fn push(&mut self, event: &Event) {
        let mut positive = 0u64;
        let mut negative = 0u64;
        for particle in &event.particles {
            match Charge::from_pdg(particle.pdg_code) {
                Charge::Positive => positive += 1,
                Charge::Negative => negative += 1,
                Charge::Other => {}
            }
        }

        self.totals.positive += positive;
        self.totals.negative += negative;
        self.totals.events += 1;
        self.batch_positive += positive;
        self.batch_negative += negative;
        self.since_flush += 1;

        if self.since_flush == self.batch_size {
            self.flush();
        }
    }

    fn flush(&mut self) {
        self.series.positive.push(self.batch_positive);
        self.series.negative.push(self.batch_negative);
        self.batch_positive = 0;
        self.batch_negative = 0;
        self.since_flush = 0;
    }

    /// Flush any nonzero trailing subtotal and return the result.
    pub fn finish(mut self) -> Aggregate {
        if self.batch_positive > 0 || self.batch_negative > 0 {
            self.flush();
        }
        Aggregate { totals: self.totals, series: self.series, batch_size: self.batch_size }
    }
}

/// Drain an event stream through a fresh aggregator.
pub fn aggregate(events: impl Iterator<Item = Event>, batch_size: usize) -> Aggregate {
    let mut agg = Aggregator::new(batch_size);
    for event in events {
        agg.push(&event);
    }
    agg.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps_core::Particle;

    fn event(codes: &[i64]) -> Event {
        let particles = codes
            .iter()
            .map(|&pdg_code| Particle { px: 0.0, py: 0.0, pz: 0.0, pdg_code })
            .collect();
        Event { event_id: 0, particles }
    }

    #[test]
    fn batch_series_scenario() {
        // Two events, batch size 1: [{211,211}, {-211}].
        let events = vec![event(&[211, 211]), event(&[-211])];
        let agg = aggregate(events.into_iter(), 1);
        assert_eq!(agg.series.positive, vec![2, 0]);
        assert_eq!(agg.series.negative, vec![0, 1]);
        assert_eq!(agg.totals.positive, 2);
        assert_eq!(agg.totals.negative, 1);
        assert_eq!(agg.totals.events, 2);
    }

    #[test]
    fn totals_equal_series_sums() {
        let events: Vec<Event> = (0..25)
            .map(|i| if i % 3 == 0 { event(&[211, -211, 211]) } else { event(&[-211, 22]) })
            .collect();
        let agg = aggregate(events.into_iter(), 10);
        assert_eq!(agg.series.positive.iter().sum::<u64>(), agg.totals.positive);
        assert_eq!(agg.series.negative.iter().sum::<u64>(), agg.totals.negative);
        // 25 events at batch size 10: two full batches plus a trailing one.
        assert_eq!(agg.series.len(), 3);
    }

    #[test]
    fn trailing_partial_batch_is_flushed() {
        let events = vec![event(&[211]); 5];
        let agg = aggregate(events.into_iter(), 4);
        assert_eq!(agg.series.positive, vec![4, 1]);
        assert_eq!(agg.totals.positive, 5);
    }

    #[test]
    fn all_neutral_trailing_batch_is_not_flushed() {
        // A trailing subtotal of (0, 0) carries no information; the
        // reference only flushes nonzero remainders.
        let events = vec![event(&[211]), event(&[-211]), event(&[22])];
        let agg = aggregate(events.into_iter(), 2);
        assert_eq!(agg.series.positive, vec![1]);
        assert_eq!(agg.series.negative, vec![1]);
        assert_eq!(agg.totals.events, 3);
    }

    #[test]
    fn empty_stream() {
        let agg = aggregate(std::iter::empty(), 1000);
        assert_eq!(agg.totals, RunningTotals::default());
        assert!(agg.series.is_empty());
    }

    #[test]
    fn non_pion_codes_are_excluded() {
        let agg = aggregate(vec![event(&[111, 22, 2212, 0])].into_iter(), 1000);
        assert_eq!(agg.totals.positive, 0);
        assert_eq!(agg.totals.negative, 0);
        assert_eq!(agg.totals.events, 1);
    }
}

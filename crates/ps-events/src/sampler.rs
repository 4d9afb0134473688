//! Per-batch uniform subsampling.
//!
//! For cost-reduction runs the aggregation can operate on a uniform random
//! subset of each batch instead of every event. Sampling is without
//! replacement and per batch; the RNG is injected and seedable so runs are
//! reproducible (same convention as the toy-data generators elsewhere in
//! the workspace: `StdRng::seed_from_u64`).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ps_core::{Error, Event, Result};

/// Adapter that groups an event stream into fixed-size batches and draws a
/// uniform sample without replacement from each batch before yielding it.
pub struct SampledBatches<I, R: Rng> {
    inner: I,
    batch_size: usize,
    sample_size: usize,
    rng: R,
}

impl<I: Iterator<Item = Event>> SampledBatches<I, StdRng> {
    /// Convenience constructor with a deterministic seeded RNG.
    pub fn with_seed(
        inner: I,
        batch_size: usize,
        sample_size: usize,
        seed: u64,
    ) -> Result<Self> {
        Self::new(inner, batch_size, sample_size, StdRng::seed_from_u64(seed))
    }
}

impl<I: Iterator<Item = Event>, R: Rng> SampledBatches<I, R> {
    /// Wrap an event stream. `sample_size` must not exceed `batch_size`.
    pub fn new(inner: I, batch_size: usize, sample_size: usize, rng: R) -> Result<Self> {
        if batch_size == 0 {
            return Err(Error::Validation("batch_size must be > 0".into()));
        }
        if sample_size > batch_size {
            return Err(Error::Validation(format!(
                "sample_size ({sample_size}) must not exceed batch_size ({batch_size})"
            )));
        }
        Ok(Self { inner, batch_size, sample_size, rng })
    }

    /// Partial Fisher–Yates: after the loop the first `k` slots hold a
    /// uniform sample without replacement.
    fn sample_in_place(&mut self, batch: &mut Vec<Event>) {
        let k = self.sample_size.min(batch.len());
        for i in 0..k {
            let j = self.rng.gen_range(i..batch.len());
            batch.swap(i, j);
        }
        batch.truncate(k);
    }
}

impl<I: Iterator<Item = Event>, R: Rng> Iterator for SampledBatches<I, R> {
    type Item = Vec<Event>;

    fn next(&mut self) -> Option<Vec<Event>> {
        // Capacity hint only; batch_size is user-controlled.
        let mut batch = Vec::with_capacity(self.batch_size.min(4096));
        while batch.len() < self.batch_size {
            match self.inner.next() {
                Some(event) => batch.push(event),
                None => break,
            }
        }
        if batch.is_empty() {
            return None;
        }
        self.sample_in_place(&mut batch);
        Some(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(n: usize) -> Vec<Event> {
        (0..n).map(|i| Event { event_id: i as i64, particles: vec![] }).collect()
    }

    #[test]
    fn sample_size_respected_per_batch() {
        let batches: Vec<_> =
            SampledBatches::with_seed(events(25).into_iter(), 10, 3, 42).unwrap().collect();
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].len(), 3);
        assert_eq!(batches[1].len(), 3);
        // Trailing batch has 5 events, still sampled down to 3.
        assert_eq!(batches[2].len(), 3);
    }

    #[test]
    fn short_trailing_batch_samples_what_it_has() {
        let batches: Vec<_> =
            SampledBatches::with_seed(events(12).into_iter(), 10, 8, 1).unwrap().collect();
        assert_eq!(batches[0].len(), 8);
        assert_eq!(batches[1].len(), 2);
    }

    #[test]
    fn sample_is_without_replacement() {
        let batches: Vec<_> =
            SampledBatches::with_seed(events(10).into_iter(), 10, 10, 7).unwrap().collect();
        let mut ids: Vec<i64> = batches[0].iter().map(|e| e.event_id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..10).collect::<Vec<i64>>());
    }

    #[test]
    fn deterministic_under_fixed_seed() {
        let a: Vec<Vec<i64>> = SampledBatches::with_seed(events(30).into_iter(), 10, 4, 99)
            .unwrap()
            .map(|b| b.iter().map(|e| e.event_id).collect())
            .collect();
        let b: Vec<Vec<i64>> = SampledBatches::with_seed(events(30).into_iter(), 10, 4, 99)
            .unwrap()
            .map(|b| b.iter().map(|e| e.event_id).collect())
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_sample_larger_than_batch() {
        assert!(SampledBatches::with_seed(events(5).into_iter(), 10, 11, 0).is_err());
    }

    #[test]
    fn empty_stream_yields_no_batches() {
        let mut it = SampledBatches::with_seed(events(0).into_iter(), 10, 3, 0).unwrap();
        assert!(it.next().is_none());
    }
}

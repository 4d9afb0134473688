use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use ps_core::{AnalysisConfig, Result};
use ps_events::{EventReader, SampledBatches};
use ps_stats::aggregator::Aggregator;
use ps_stats::{Aggregate, FileSummary};

/// Everything one file's pipeline produced.
pub(crate) struct FileOutcome {
    pub aggregate: Aggregate,
    pub summary: FileSummary,
    pub seconds: f64,
}

/// Run the full Reader → Aggregator → Calculator pipeline on one file.
///
/// Only opening the file can fail; everything downstream absorbs per-record
/// problems. With `sample_size` set, each batch of events is uniformly
/// subsampled before aggregation (estimation mode).
pub(crate) fn process_file(path: &Path, config: &AnalysisConfig) -> Result<FileOutcome> {
    let started = Instant::now();
    let reader = EventReader::open(path)?;
    let mut agg = Aggregator::new(config.batch_size);

    match config.sample_size {
        Some(k) => {
            let batches =
                SampledBatches::with_seed(reader, config.batch_size, k, config.seed)?;
            for batch in batches {
                for event in &batch {
                    agg.push(event);
                }
            }
        }
        None => {
            for event in reader {
                agg.push(&event);
            }
        }
    }

    let aggregate = agg.finish();
    let summary = FileSummary::from_aggregate(&aggregate, config);
    tracing::info!(
        path = %path.display(),
        events = summary.events,
        positive = summary.positive_total,
        negative = summary.negative_total,
        "file processed"
    );
    Ok(FileOutcome { aggregate, summary, seconds: started.elapsed().as_secs_f64() })
}

/// Fan independent file pipelines across the rayon pool.
///
/// Each job owns its reader and counters exclusively; no state is shared.
/// The output vector is indexed by input order, so reporting is
/// deterministic no matter which worker finishes first. A failed file
/// stays in the output as an `Err` and never stops its siblings.
pub(crate) fn run_many(
    files: &[PathBuf],
    config: &AnalysisConfig,
    jobs: usize,
) -> Vec<(PathBuf, Result<FileOutcome>)> {
    if jobs > 0 {
        // Best-effort; if a global pool already exists, keep going.
        let _ = rayon::ThreadPoolBuilder::new().num_threads(jobs).build_global();
    }
    files
        .par_iter()
        .map(|path| (path.clone(), process_file(path, config)))
        .collect()
}

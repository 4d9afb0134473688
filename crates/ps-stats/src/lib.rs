//! # ps-stats
//!
//! The counting core: classify particles by PDG code, fold per-event counts
//! into running totals and periodic batch snapshots, and derive the
//! Poisson-style summary statistics (averages, uncertainties, significance).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aggregator;
pub mod classify;
pub mod summary;

pub use aggregator::{Aggregate, Aggregator};
pub use classify::Charge;
pub use summary::FileSummary;

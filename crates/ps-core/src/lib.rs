//! # ps-core
//!
//! Core types for PionStat: the event/particle data model, the analysis
//! configuration, and the shared error type.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{AnalysisConfig, UncertaintyFormula};
pub use error::{Error, Result};
pub use types::{BatchSeries, Event, Particle, RunningTotals};

/// Crate version (workspace-wide).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// PDG code for the positive charged pion.
pub const PDG_PION_PLUS: i64 = 211;

/// PDG code for the negative charged pion.
pub const PDG_PION_MINUS: i64 = -211;

/// PDG code for the neutral pion (not counted, but named by `pdg_name`).
pub const PDG_PION_ZERO: i64 = 111;

//! # ps-viz
//!
//! Plot-friendly JSON artifacts. Chart rendering itself is out of scope:
//! these structs carry labeled numeric sequences plus axis labels, ready for
//! any downstream renderer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod series;
pub mod timing;

pub use series::BatchSeriesArtifact;
pub use timing::TimingArtifact;

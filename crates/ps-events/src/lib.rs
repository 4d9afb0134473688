//! # ps-events
//!
//! Lazy reader for the two-line-per-record event text format, an optional
//! per-batch uniform subsampler, and single-particle kinematics helpers.
//!
//! ## Example
//!
//! ```no_run
//! use ps_events::EventReader;
//!
//! let reader = EventReader::open("output-Set0.txt").unwrap();
//! for event in reader {
//!     println!("event {} has {} particles", event.event_id, event.particles.len());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kinematics;
pub mod reader;
pub mod sampler;

pub use reader::EventReader;
pub use sampler::SampledBatches;

//! Clipped summary statistics for images and sample buffers.
//!
//! Computes the number of accepted samples, mean, sample standard deviation,
//! minimum and maximum over the values that fall inside an inclusive
//! `[clipmin, clipmax]` range, in a single pass and without allocating.
//!
//! ```
//! use imagestats::compute_mean;
//!
//! let (num_good, mean, stddev, min, max) =
//!     compute_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.0, 10.0).as_tuple();
//! assert_eq!((num_good, mean, min, max), (5, 3.0, 1.0, 5.0));
//! assert!((stddev - 1.5811).abs() < 1e-4);
//! ```

#![no_std]

mod clip;
mod clipped;
mod error;
mod samples;
mod stats;

pub use clip::ClipRange;
pub use clipped::{compute_mean, try_compute_mean, ClippedStatistics, DegeneratePolicy};
pub use error::StatsError;
pub use samples::{Grid, Samples};
pub use stats::ClippedStats;

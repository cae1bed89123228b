//! Error types for clipped statistics.

use thiserror::Error;

/// Errors that can occur while preparing input or deriving statistics.
///
/// The variants fall into two families. [`UnsupportedRank`] and
/// [`ShapeMismatch`] mean the input could not be viewed as a flat row-major
/// buffer. [`NoSamples`] and [`SingleSample`] mean the pass completed but too
/// few samples survived clipping for a mean or sample standard deviation to be
/// defined.
///
/// [`UnsupportedRank`]: StatsError::UnsupportedRank
/// [`ShapeMismatch`]: StatsError::ShapeMismatch
/// [`NoSamples`]: StatsError::NoSamples
/// [`SingleSample`]: StatsError::SingleSample
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StatsError {
    /// Input has a rank other than 1 or 2
    #[error("expected a rank 1 or rank 2 input, got rank {rank}")]
    UnsupportedRank { rank: usize },

    /// Declared shape does not cover the buffer exactly
    #[error("shape {rows}x{cols} does not match a buffer of {len} samples")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },

    /// No sample fell inside the clip range
    #[error("no samples within clip range [{clipmin}, {clipmax}]")]
    NoSamples { clipmin: f64, clipmax: f64 },

    /// Exactly one sample was accepted, so the sample standard deviation is undefined
    #[error("only one sample ({value}) within clip range, standard deviation is undefined")]
    SingleSample { value: f64 },
}

impl StatsError {
    /// Returns `true` for the errors raised after a pass accepted fewer than two samples.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::NoSamples { .. } | Self::SingleSample { .. })
    }

    /// Returns `true` for the errors raised before any statistics were computed.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::UnsupportedRank { .. } | Self::ShapeMismatch { .. })
    }
}

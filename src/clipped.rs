//! Clipped mean, standard deviation, minimum and maximum in one pass.
//!
//! Only samples inside an inclusive `[clipmin, clipmax]` range contribute.
//! Two contracts are offered for the cases where fewer than two samples
//! survive clipping:
//!
//! - [`compute_mean`] always returns numbers. Zero accepted samples give a NaN
//!   mean and standard deviation with `min == clipmax` and `max == clipmin`;
//!   one accepted sample gives a NaN standard deviation. Results produced by
//!   earlier versions of this routine are reproduced exactly.
//! - [`try_compute_mean`] reports those cases as [`StatsError`] instead.
//!
//! [`ClippedStatistics`] bundles the clip range with a [`DegeneratePolicy`]
//! and accepts any [`Samples`] input, including rank 2 images.

use crate::clip::ClipRange;
use crate::error::StatsError;
use crate::samples::Samples;
use crate::stats::{ClippedAccumulator, ClippedStats};

/// What to do when fewer than two samples survive clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Return the IEEE results (NaN mean/stddev, swapped min/max sentinels).
    Propagate,
    /// Return [`StatsError::NoSamples`] or [`StatsError::SingleSample`].
    #[default]
    Reject,
}

/// Clip range plus degenerate-case policy, reusable across inputs.
///
/// # Example
///
/// ```
/// use imagestats::{ClippedStatistics, DegeneratePolicy, StatsError};
///
/// let image = [[1.0, 2.0, 3.0], [4.0, 5.0, 99.0]];
///
/// let stats = ClippedStatistics::new(0.0, 10.0).compute(&image)?;
/// assert_eq!(stats.num_good, 5);
/// assert_eq!(stats.mean, 3.0);
///
/// // Nothing in range: rejected by default, sentinels when propagating
/// let empty: [f64; 0] = [];
/// let strict = ClippedStatistics::new(0.0, 10.0);
/// assert!(strict.compute(&empty).unwrap_err().is_degenerate());
///
/// let lenient = strict.with_policy(DegeneratePolicy::Propagate);
/// let stats = lenient.compute(&empty)?;
/// assert_eq!((stats.min, stats.max), (10.0, 0.0));
/// # Ok::<(), StatsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClippedStatistics {
    range: ClipRange,
    policy: DegeneratePolicy,
}

impl ClippedStatistics {
    /// Creates a calculator for `[clipmin, clipmax]` with [`DegeneratePolicy::Reject`].
    pub fn new(clipmin: f64, clipmax: f64) -> Self {
        Self::with_range(ClipRange::new(clipmin, clipmax))
    }

    pub fn with_range(range: ClipRange) -> Self {
        Self {
            range,
            policy: DegeneratePolicy::default(),
        }
    }

    /// Replaces the degenerate-case policy.
    pub fn with_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn range(&self) -> ClipRange {
        self.range
    }

    pub fn policy(&self) -> DegeneratePolicy {
        self.policy
    }

    /// Runs the clipped pass over `samples` in row-major order.
    ///
    /// # Errors
    ///
    /// [`StatsError::NoSamples`] / [`StatsError::SingleSample`] under
    /// [`DegeneratePolicy::Reject`].
    pub fn compute<S: Samples + ?Sized>(&self, samples: &S) -> Result<ClippedStats, StatsError> {
        let acc = accumulate(samples.as_flat(), self.range);

        match self.policy {
            DegeneratePolicy::Propagate => Ok(acc.finish()),
            DegeneratePolicy::Reject => acc.try_finish(),
        }
    }
}

impl Default for ClippedStatistics {
    fn default() -> Self {
        Self::with_range(ClipRange::unbounded())
    }
}

fn accumulate(samples: &[f64], range: ClipRange) -> ClippedAccumulator {
    if !range.is_ordered() {
        log::warn!(
            "clip range [{}, {}] is inverted, no samples will be accepted",
            range.min,
            range.max
        );
    }

    let mut acc = ClippedAccumulator::new(range);
    acc.extend_from_slice(samples);

    log::trace!(
        "accepted {} of {} samples within [{}, {}]",
        acc.count(),
        samples.len(),
        range.min,
        range.max
    );
    acc
}

/// Computes clipped statistics, returning NaN for degenerate counts.
///
/// # Example
///
/// ```
/// use imagestats::compute_mean;
///
/// let stats = compute_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 2.0, 4.0);
/// assert_eq!(stats.as_tuple(), (3, 3.0, 1.0, 2.0, 4.0));
///
/// let none = compute_mean(&[], 0.0, 10.0);
/// assert_eq!(none.num_good, 0);
/// assert!(none.mean.is_nan());
/// assert_eq!((none.min, none.max), (10.0, 0.0));
/// ```
pub fn compute_mean(samples: &[f64], clipmin: f64, clipmax: f64) -> ClippedStats {
    accumulate(samples, ClipRange::new(clipmin, clipmax)).finish()
}

/// Computes clipped statistics, failing when fewer than two samples are accepted.
///
/// # Example
///
/// ```
/// use imagestats::{try_compute_mean, StatsError};
///
/// let stats = try_compute_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.0, 10.0)?;
/// assert_eq!(stats.num_good, 5);
///
/// let err = try_compute_mean(&[5.0, 15.0, 25.0], 10.0, 20.0).unwrap_err();
/// assert_eq!(err, StatsError::SingleSample { value: 15.0 });
/// # Ok::<(), StatsError>(())
/// ```
pub fn try_compute_mean(
    samples: &[f64],
    clipmin: f64,
    clipmax: f64,
) -> Result<ClippedStats, StatsError> {
    accumulate(samples, ClipRange::new(clipmin, clipmax)).try_finish()
}

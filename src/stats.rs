use crate::clip::ClipRange;
use crate::error::StatsError;

/// Summary statistics of the samples accepted by a clip range.
///
/// Produced by [`compute_mean`](crate::compute_mean) and friends. Field order
/// matches the historical `(numGoodPixels, mean, stddev, minValue, maxValue)`
/// tuple, see [`ClippedStats::as_tuple`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClippedStats {
    /// Number of samples inside the clip range
    pub num_good: usize,
    /// Arithmetic mean of the accepted samples
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator) of the accepted samples
    pub stddev: f64,
    /// Smallest accepted sample, or the upper clip bound if none was accepted
    pub min: f64,
    /// Largest accepted sample, or the lower clip bound if none was accepted
    pub max: f64,
}

impl ClippedStats {
    /// Returns `(num_good, mean, stddev, min, max)`.
    pub fn as_tuple(&self) -> (usize, f64, f64, f64, f64) {
        (self.num_good, self.mean, self.stddev, self.min, self.max)
    }
}

impl From<ClippedStats> for (usize, f64, f64, f64, f64) {
    fn from(stats: ClippedStats) -> Self {
        stats.as_tuple()
    }
}

/// Single-pass accumulator for clipped count, sum, sum of squares, minimum and maximum.
///
/// The running minimum is seeded with the upper clip bound and the running
/// maximum with the lower clip bound. A sample only replaces them when it is
/// strictly smaller or larger, so if nothing is accepted the reported minimum
/// and maximum are the clip bounds with their roles swapped.
///
/// # Algorithm
///
/// - `mean = sum / n`
/// - `stddev = sqrt((sum_sq - mean * sum) / (n - 1))`
///
/// The variance is the expanded form of `Σ(x - mean)² / (n - 1)` evaluated
/// from the two running sums. With fewer than two samples it divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ClippedAccumulator {
    range: ClipRange,
    count: usize,
    sum: f64,
    sum_squares: f64,
    running_min: f64,
    running_max: f64,
}

impl ClippedAccumulator {
    /// Creates an empty accumulator for the given clip range.
    pub(crate) fn new(range: ClipRange) -> Self {
        Self {
            range,
            count: 0,
            sum: 0.0,
            sum_squares: 0.0,
            running_min: range.max,
            running_max: range.min,
        }
    }

    /// Offers one sample. Returns `true` if it was inside the clip range.
    #[inline]
    pub(crate) fn push(&mut self, sample: f64) -> bool {
        if !self.range.contains(sample) {
            return false;
        }

        if sample < self.running_min {
            self.running_min = sample;
        }
        if sample > self.running_max {
            self.running_max = sample;
        }
        self.count += 1;
        self.sum += sample;
        self.sum_squares += sample * sample;
        true
    }

    /// Offers every sample of `samples` in index order.
    pub(crate) fn extend_from_slice(&mut self, samples: &[f64]) {
        for &sample in samples {
            self.push(sample);
        }
    }

    /// Number of accepted samples so far.
    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// Mean of the accepted samples. NaN when nothing was accepted.
    pub(crate) fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }

    /// Sample standard deviation of the accepted samples. NaN for fewer than two samples.
    pub(crate) fn stddev(&self) -> f64 {
        let mean = self.mean();
        libm::sqrt((self.sum_squares - mean * self.sum) / (self.count as f64 - 1.0))
    }

    /// Derives the statistics, letting degenerate counts surface as NaN.
    ///
    /// With zero accepted samples `min` and `max` are the upper and lower clip
    /// bounds respectively.
    pub(crate) fn finish(&self) -> ClippedStats {
        ClippedStats {
            num_good: self.count,
            mean: self.mean(),
            stddev: self.stddev(),
            min: self.running_min,
            max: self.running_max,
        }
    }

    /// Derives the statistics, failing when fewer than two samples were accepted.
    ///
    /// # Errors
    ///
    /// - [`StatsError::NoSamples`] if the clip range accepted nothing
    /// - [`StatsError::SingleSample`] if it accepted exactly one sample
    pub(crate) fn try_finish(&self) -> Result<ClippedStats, StatsError> {
        match self.count {
            0 => {
                log::debug!(
                    "no samples within clip range [{}, {}]",
                    self.range.min,
                    self.range.max
                );
                Err(StatsError::NoSamples {
                    clipmin: self.range.min,
                    clipmax: self.range.max,
                })
            }
            1 => {
                log::debug!("single sample {} within clip range", self.running_min);
                Err(StatsError::SingleSample {
                    value: self.running_min,
                })
            }
            _ => Ok(self.finish()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accumulate(samples: &[f64], min: f64, max: f64) -> ClippedAccumulator {
        let mut acc = ClippedAccumulator::new(ClipRange::new(min, max));
        acc.extend_from_slice(samples);
        acc
    }

    #[test]
    fn test_push_reports_acceptance() {
        let mut acc = ClippedAccumulator::new(ClipRange::new(0.0, 1.0));
        assert!(acc.push(0.0));
        assert!(acc.push(1.0));
        assert!(!acc.push(1.5));
        assert!(!acc.push(f64::NAN));
        assert_eq!(acc.count(), 2);
    }

    #[test]
    fn test_known_values() {
        let acc = accumulate(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.0, 10.0);
        assert_eq!(acc.count(), 5);
        assert_eq!((acc.sum, acc.sum_squares), (15.0, 55.0));

        let stats = acc.finish();
        assert_eq!(stats.mean, 3.0);
        assert!((stats.stddev - libm::sqrt(2.5)).abs() < 1e-12);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
    }

    #[test]
    fn test_clipped_subset() {
        let stats = accumulate(&[1.0, 2.0, 3.0, 4.0, 5.0], 2.0, 4.0).finish();
        assert_eq!(stats.as_tuple(), (3, 3.0, 1.0, 2.0, 4.0));
    }

    #[test]
    fn test_empty_swaps_sentinels() {
        let stats = accumulate(&[], -3.0, 7.0).finish();
        assert_eq!(stats.num_good, 0);
        assert!(stats.mean.is_nan());
        assert!(stats.stddev.is_nan());
        assert_eq!(stats.min, 7.0);
        assert_eq!(stats.max, -3.0);
    }

    #[test]
    fn test_single_sample_stddev_is_nan() {
        let stats = accumulate(&[10.0], 0.0, 20.0).finish();
        assert_eq!(stats.num_good, 1);
        assert_eq!(stats.mean, 10.0);
        assert!(stats.stddev.is_nan());
        assert_eq!((stats.min, stats.max), (10.0, 10.0));
    }

    #[test]
    fn test_try_finish_degenerate() {
        let empty = accumulate(&[100.0], 0.0, 1.0);
        assert_eq!(
            empty.try_finish(),
            Err(StatsError::NoSamples {
                clipmin: 0.0,
                clipmax: 1.0
            })
        );

        let single = accumulate(&[5.0, 15.0, 25.0], 10.0, 20.0);
        assert_eq!(
            single.try_finish(),
            Err(StatsError::SingleSample { value: 15.0 })
        );

        let ok = accumulate(&[1.0, 3.0], 0.0, 10.0).try_finish().unwrap();
        assert_eq!(ok.mean, 2.0);
    }

    #[test]
    fn test_extremes_only_move_on_strict_improvement() {
        // -0.0 == 0.0, so the +0.0 sentinels are kept
        let stats = accumulate(&[-0.0], 0.0, 0.0).finish();
        assert_eq!(stats.num_good, 1);
        assert!(stats.min.is_sign_positive());
        assert!(stats.max.is_sign_positive());

        let stats = accumulate(&[-0.0, 0.0], -1.0, 1.0).finish();
        assert!(stats.min.is_sign_negative());
        assert!(stats.max.is_sign_negative());
    }

    #[test]
    fn test_single_sample_error_reports_minimum() {
        let err = accumulate(&[-0.0], -1.0, 1.0).try_finish().unwrap_err();
        match err {
            StatsError::SingleSample { value } => assert!(value.is_sign_negative()),
            other => panic!("unexpected error {other:?}"),
        }
    }
}

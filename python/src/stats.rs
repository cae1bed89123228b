//! Python bindings for clipped statistics.

use imagestats::{ClippedStatistics, ClippedStats as CoreClippedStats, DegeneratePolicy};
use numpy::{AllowTypeChange, PyArrayLikeDyn};
use pyo3::prelude::*;

use crate::adapter::clipped_stats;

/// Clipped summary statistics of an image.
///
/// Attributes:
///     num_good_pixels (int): Number of pixels inside the clip range.
///     mean (float): Mean of the accepted pixels.
///     stddev (float): Sample standard deviation (n - 1) of the accepted pixels.
///     min_value (float): Smallest accepted pixel.
///     max_value (float): Largest accepted pixel.
#[pyclass(frozen)]
#[derive(Clone)]
pub struct ClippedStats {
    #[pyo3(get)]
    pub num_good_pixels: usize,

    #[pyo3(get)]
    pub mean: f64,

    #[pyo3(get)]
    pub stddev: f64,

    #[pyo3(get)]
    pub min_value: f64,

    #[pyo3(get)]
    pub max_value: f64,
}

#[pymethods]
impl ClippedStats {
    /// Return the statistics as `(num_good_pixels, mean, stddev, min_value, max_value)`.
    fn as_tuple(&self) -> (usize, f64, f64, f64, f64) {
        (
            self.num_good_pixels,
            self.mean,
            self.stddev,
            self.min_value,
            self.max_value,
        )
    }

    fn __repr__(&self) -> String {
        format!(
            "ClippedStats(num_good_pixels={}, mean={:.6}, stddev={:.6}, min_value={}, max_value={})",
            self.num_good_pixels, self.mean, self.stddev, self.min_value, self.max_value
        )
    }
}

impl From<CoreClippedStats> for ClippedStats {
    fn from(stats: CoreClippedStats) -> Self {
        Self {
            num_good_pixels: stats.num_good,
            mean: stats.mean,
            stddev: stats.stddev,
            min_value: stats.min,
            max_value: stats.max,
        }
    }
}

/// Compute clipped mean, standard deviation, minimum and maximum of an image.
///
/// Pixels outside the inclusive range `[clipmin, clipmax]` are ignored. When
/// no pixel survives, `mean` and `stddev` are NaN and the minimum and maximum
/// are reported as `clipmax` and `clipmin`. With a single pixel `stddev` is NaN.
///
/// Args:
///     image (array_like): 1D or 2D array, converted to float64.
///     clipmin (float): Lowest accepted value.
///     clipmax (float): Highest accepted value.
///
/// Returns:
///     tuple: `(num_good_pixels, mean, stddev, min_value, max_value)`.
///
/// Raises:
///     ValueError: If the input is not 1D or 2D.
///     TypeError: If numpy cannot convert the input to float64.
///
/// Example:
///     >>> import pyimagestats
///     >>> pyimagestats.compute_mean([1.0, 2.0, 3.0, 4.0, 5.0], 2.0, 4.0)
///     (3, 3.0, 1.0, 2.0, 4.0)
#[pyfunction]
fn compute_mean(
    py: Python<'_>,
    image: PyArrayLikeDyn<'_, f64, AllowTypeChange>,
    clipmin: f64,
    clipmax: f64,
) -> PyResult<(usize, f64, f64, f64, f64)> {
    let calculator =
        ClippedStatistics::new(clipmin, clipmax).with_policy(DegeneratePolicy::Propagate);
    let stats = clipped_stats(py, &image, calculator)?;
    Ok(stats.as_tuple())
}

/// Alias of `compute_mean` under its historical name.
#[pyfunction]
#[pyo3(name = "computeMean")]
fn compute_mean_legacy(
    py: Python<'_>,
    image: PyArrayLikeDyn<'_, f64, AllowTypeChange>,
    clipmin: f64,
    clipmax: f64,
) -> PyResult<(usize, f64, f64, f64, f64)> {
    compute_mean(py, image, clipmin, clipmax)
}

/// Compute clipped statistics and return them as a `ClippedStats` object.
///
/// Args:
///     image (array_like): 1D or 2D array, converted to float64.
///     clipmin (float): Lowest accepted value.
///     clipmax (float): Highest accepted value.
///     checked (bool): Raise instead of returning NaN when fewer than two
///         pixels survive clipping. Default: True.
///
/// Returns:
///     ClippedStats: The computed statistics.
///
/// Raises:
///     ZeroDivisionError: If `checked` and fewer than two pixels were accepted.
///     ValueError: If the input is not 1D or 2D.
///
/// Example:
///     >>> import numpy as np
///     >>> stats = pyimagestats.compute_stats(np.arange(6.0).reshape(2, 3), 1.0, 4.0)
///     >>> stats.num_good_pixels
///     4
#[pyfunction]
#[pyo3(signature = (image, clipmin, clipmax, checked = true))]
fn compute_stats(
    py: Python<'_>,
    image: PyArrayLikeDyn<'_, f64, AllowTypeChange>,
    clipmin: f64,
    clipmax: f64,
    checked: bool,
) -> PyResult<ClippedStats> {
    let policy = if checked {
        DegeneratePolicy::Reject
    } else {
        DegeneratePolicy::Propagate
    };
    let calculator = ClippedStatistics::new(clipmin, clipmax).with_policy(policy);

    Ok(clipped_stats(py, &image, calculator)?.into())
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ClippedStats>()?;
    m.add_function(wrap_pyfunction!(compute_mean, m)?)?;
    m.add_function(wrap_pyfunction!(compute_mean_legacy, m)?)?;
    m.add_function(wrap_pyfunction!(compute_stats, m)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use numpy::{PyArray1, PyArray2, PyArrayDyn, PyArrayMethods};
    use pyo3::exceptions::{PyValueError, PyZeroDivisionError};

    fn array_like<'py>(array: Bound<'py, PyAny>) -> PyArrayLikeDyn<'py, f64, AllowTypeChange> {
        array.extract().unwrap()
    }

    #[test]
    fn test_compute_mean_matches_core() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let image = PyArray1::from_slice(py, &[1.0, 2.0, 3.0, 4.0, 5.0]).into_any();
            let stats = compute_mean(py, array_like(image), 2.0, 4.0).unwrap();
            assert_eq!(stats, (3, 3.0, 1.0, 2.0, 4.0));
        });
    }

    #[test]
    fn test_compute_mean_keeps_historical_sentinels() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let image = PyArray1::<f64>::zeros(py, [0], false).into_any();
            let (num_good, mean, stddev, min, max) =
                compute_mean_legacy(py, array_like(image), -5.0, 5.0).unwrap();
            assert_eq!(num_good, 0);
            assert!(mean.is_nan() && stddev.is_nan());
            assert_eq!((min, max), (5.0, -5.0));
        });
    }

    #[test]
    fn test_checked_degenerate_raises_zero_division() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let image = || PyArray1::from_slice(py, &[5.0, 15.0, 25.0]).into_any();

            let err = compute_stats(py, array_like(image()), 10.0, 20.0, true).unwrap_err();
            assert!(err.is_instance_of::<PyZeroDivisionError>(py));

            let stats = compute_stats(py, array_like(image()), 10.0, 20.0, false).unwrap();
            assert_eq!(stats.num_good_pixels, 1);
            assert!(stats.stddev.is_nan());
        });
    }

    #[test]
    fn test_rank_three_raises_value_error() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let cube = PyArrayDyn::<f64>::zeros(py, vec![2, 1, 3], false).into_any();
            let err = compute_mean(py, array_like(cube), 0.0, 1.0).unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));
        });
    }

    #[test]
    fn test_fortran_image_reads_row_major() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let image = PyArray2::<f64>::zeros(py, [2, 3], true);
            {
                let mut pixels = image.readwrite();
                for ((row, col), value) in pixels.as_array_mut().indexed_iter_mut() {
                    *value = (row * 3 + col) as f64;
                }
            }

            let stats = compute_stats(py, array_like(image.into_any()), 1.0, 4.0, true).unwrap();
            assert_eq!(stats.num_good_pixels, 4);
            assert_eq!(stats.mean, 2.5);
            assert_eq!((stats.min_value, stats.max_value), (1.0, 4.0));
        });
    }
}

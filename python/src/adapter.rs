//! Conversion of numpy inputs into the flat buffer the statistics pass reads.

use std::borrow::Cow;

use imagestats::{ClippedStatistics, ClippedStats, Grid, StatsError};
use numpy::{PyReadonlyArrayDyn, PyUntypedArrayMethods};
use pyo3::exceptions::{PyValueError, PyZeroDivisionError};
use pyo3::prelude::*;

/// Returns the samples of a float64 array in row-major order.
///
/// C-contiguous arrays are borrowed as-is. Strided or Fortran-ordered arrays
/// are copied element by element in logical (row-major) order.
pub fn flatten<'a>(image: &'a PyReadonlyArrayDyn<'_, f64>) -> PyResult<Cow<'a, [f64]>> {
    if image.is_c_contiguous() {
        return Ok(Cow::Borrowed(image.as_slice()?));
    }
    Ok(Cow::Owned(image.as_array().iter().copied().collect()))
}

/// Runs `calculator` over a rank 1 or rank 2 array with the GIL released.
///
/// The array shape is checked by [`Grid::from_shape`], so any other rank
/// raises `ValueError`.
pub fn clipped_stats(
    py: Python<'_>,
    image: &PyReadonlyArrayDyn<'_, f64>,
    calculator: ClippedStatistics,
) -> PyResult<ClippedStats> {
    let samples = flatten(image)?;
    let grid = Grid::from_shape(&samples, image.shape()).map_err(stats_error)?;
    py.allow_threads(|| calculator.compute(&grid)).map_err(stats_error)
}

/// Maps a core error onto the matching Python exception type.
pub fn stats_error(err: StatsError) -> PyErr {
    if err.is_degenerate() {
        PyZeroDivisionError::new_err(err.to_string())
    } else {
        PyValueError::new_err(err.to_string())
    }
}

use pyo3::prelude::*;

mod adapter;
mod stats;

/// pyimagestats: clipped image statistics implemented in Rust.
///
/// Computes the number of good pixels, mean, standard deviation, minimum and
/// maximum of a 1D or 2D array while ignoring pixels outside a clip range.
///
/// # Example
/// ```python
/// import numpy as np
/// import pyimagestats
///
/// image = np.random.randn(512, 512)
/// npix, mean, stddev, lo, hi = pyimagestats.compute_mean(image, -3.0, 3.0)
/// ```
#[pymodule]
fn pyimagestats(m: &Bound<'_, PyModule>) -> PyResult<()> {
    stats::register(m)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}

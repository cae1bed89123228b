//! Views that present rank 1 and rank 2 inputs as a flat row-major buffer.
//!
//! The statistics pass only ever sees `&[f64]`. Fixed-size rows flatten for
//! free; buffers with a runtime shape are checked once when the [`Grid`] is
//! built.

use crate::error::StatsError;

/// Input that can be read as a contiguous, row-major sequence of `f64`.
///
/// Implemented for plain slices and arrays (rank 1), for slices and arrays of
/// fixed-width rows (rank 2) and for [`Grid`], a rank 2 view over a flat
/// buffer with a runtime shape.
pub trait Samples {
    /// The samples in row-major order.
    fn as_flat(&self) -> &[f64];
}

impl Samples for [f64] {
    fn as_flat(&self) -> &[f64] {
        self
    }
}

impl<const N: usize> Samples for [f64; N] {
    fn as_flat(&self) -> &[f64] {
        self.as_slice()
    }
}

impl<const C: usize> Samples for [[f64; C]] {
    fn as_flat(&self) -> &[f64] {
        self.as_flattened()
    }
}

impl<const R: usize, const C: usize> Samples for [[f64; C]; R] {
    fn as_flat(&self) -> &[f64] {
        self.as_flattened()
    }
}

impl<T: Samples + ?Sized> Samples for &T {
    fn as_flat(&self) -> &[f64] {
        (**self).as_flat()
    }
}

/// Borrowed `rows x cols` image stored row-major in a flat buffer.
///
/// # Example
///
/// ```
/// use imagestats::{Grid, Samples, StatsError};
///
/// let pixels = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let grid = Grid::new(&pixels, 2, 3)?;
/// assert_eq!(grid.as_flat().len(), 6);
///
/// assert!(Grid::new(&pixels, 4, 2).is_err());
/// assert!(Grid::from_shape(&pixels, &[1, 2, 3]).is_err());
/// # Ok::<(), StatsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid<'a> {
    data: &'a [f64],
    rows: usize,
    cols: usize,
}

impl<'a> Grid<'a> {
    /// Wraps `data` as a `rows x cols` grid.
    ///
    /// # Errors
    ///
    /// [`StatsError::ShapeMismatch`] unless `rows * cols == data.len()`.
    pub fn new(data: &'a [f64], rows: usize, cols: usize) -> Result<Self, StatsError> {
        let shape_mismatch = StatsError::ShapeMismatch {
            rows,
            cols,
            len: data.len(),
        };
        match rows.checked_mul(cols) {
            Some(len) if len == data.len() => Ok(Self { data, rows, cols }),
            _ => Err(shape_mismatch),
        }
    }

    /// Wraps `data` using a dynamic shape such as the one reported by an array library.
    ///
    /// A one-element shape is treated as a single row.
    ///
    /// # Errors
    ///
    /// - [`StatsError::UnsupportedRank`] for shapes with zero or more than two axes
    /// - [`StatsError::ShapeMismatch`] if the shape does not cover `data`
    pub fn from_shape(data: &'a [f64], shape: &[usize]) -> Result<Self, StatsError> {
        match *shape {
            [len] => Self::new(data, 1, len),
            [rows, cols] => Self::new(data, rows, cols),
            _ => Err(StatsError::UnsupportedRank { rank: shape.len() }),
        }
    }
}

impl Samples for Grid<'_> {
    fn as_flat(&self) -> &[f64] {
        self.data
    }
}

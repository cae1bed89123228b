/// Inclusive `[min, max]` range that decides which samples contribute.
///
/// The range is not validated: an inverted range (`min > max`) is accepted
/// and simply rejects every sample. NaN bounds reject every sample as well,
/// since every comparison against NaN is false.
///
/// # Example
///
/// ```
/// use imagestats::ClipRange;
///
/// let range = ClipRange::new(0.0, 10.0);
/// assert!(range.contains(0.0));
/// assert!(range.contains(10.0));
/// assert!(!range.contains(10.5));
/// assert!(!range.contains(f64::NAN));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRange {
    /// Lowest accepted value
    pub min: f64,
    /// Highest accepted value
    pub max: f64,
}

impl ClipRange {
    /// Creates a range from its lower and upper bound.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A range that accepts every non-NaN sample, infinities included.
    ///
    /// ```
    /// use imagestats::ClipRange;
    ///
    /// let range = ClipRange::unbounded();
    /// assert!(range.contains(f64::INFINITY));
    /// assert!(range.contains(-1e300));
    /// ```
    pub const fn unbounded() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    /// Returns `true` if `value` lies inside the range, bounds included.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns `true` if `min <= max`.
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

impl Default for ClipRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl From<(f64, f64)> for ClipRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

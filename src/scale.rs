//! Invertible linear scales.
//!
//! A [`LinearScale`] maps a numeric domain `[d0, d1]` onto a range `[r0, r1]`
//! with a single affine function. Scales are small `Copy` values: build a new
//! one whenever the domain or range changes.

/// Upper bound of the normalized screen space used by charts (0..100 percent).
pub const NORMALIZED_EXTENT: f64 = 100.0;

/// Affine mapping between two numeric intervals.
///
/// Degenerate domains (`d0 == d1`) are not rejected; applying such a scale
/// yields non-finite values and callers are expected to guard against them.
///
/// # Examples
/// ```
/// use chartpick::LinearScale;
///
/// let scale = LinearScale::new([10.0, 20.0], [50.0, 100.0]);
/// assert_eq!(scale.apply(15.0), 75.0);
/// assert_eq!(scale.invert().apply(75.0), 15.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
    /// Range units per domain unit
    slope: f64,
}

impl LinearScale {
    /// Creates a scale mapping `domain[0] -> range[0]` and `domain[1] -> range[1]`.
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        let slope = (range[1] - range[0]) / (domain[1] - domain[0]);
        LinearScale { domain, range, slope }
    }

    /// Scale mapping the normalized extent `[0, 100]` onto itself.
    pub fn identity() -> Self {
        LinearScale::new([0.0, NORMALIZED_EXTENT], [0.0, NORMALIZED_EXTENT])
    }

    /// Maps a domain value into the range. Values outside the domain are not clamped.
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        self.range[0] + (value - self.domain[0]) * self.slope
    }

    /// Returns the scale mapping range values back into the domain.
    #[must_use]
    pub fn invert(&self) -> Self {
        LinearScale::new(self.range, self.domain)
    }

    /// Domain endpoints as given at construction
    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    /// Range endpoints as given at construction
    pub fn range(&self) -> [f64; 2] {
        self.range
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::identity()
    }
}

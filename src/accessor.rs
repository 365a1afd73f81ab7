//! Coordinate accessors for caller-supplied data items.

/// Reads one coordinate from a dataset item and its index in the dataset.
pub type Accessor<T> = Box<dyn Fn(&T, usize) -> f64>;

/// Boxes a closure or function as an [`Accessor`].
///
/// ```
/// use chartpick::accessor::accessor;
///
/// let year = accessor(|d: &(u16, f64), _| f64::from(d.0));
/// assert_eq!(year(&(1990, 71.3), 0), 1990.0);
/// ```
pub fn accessor<T, F>(f: F) -> Accessor<T>
where
    F: Fn(&T, usize) -> f64 + 'static,
{
    Box::new(f)
}

/// Items exposing their own chart coordinates.
///
/// Implementing this lets a dataset be indexed with [`default_x`] and
/// [`default_y`] instead of hand-written accessors.
pub trait Coordinates {
    /// Horizontal domain value
    fn x(&self) -> f64;
    /// Vertical domain value
    fn y(&self) -> f64;
}

impl Coordinates for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinates for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }
}

/// Accessor returning [`Coordinates::x`].
pub fn default_x<T: Coordinates + 'static>() -> Accessor<T> {
    accessor(|d: &T, _| d.x())
}

/// Accessor returning [`Coordinates::y`].
pub fn default_y<T: Coordinates + 'static>() -> Accessor<T> {
    accessor(|d: &T, _| d.y())
}

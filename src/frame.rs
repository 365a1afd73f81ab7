//! Chart coordinate frame: the scales a chart derives from its domain rectangle.
//!
//! Charts lay content out in percent of their box. The x axis maps `x1..x2`
//! onto `0..100` left to right; the y axis maps `y1..y2` onto `100..0` so that
//! larger values sit higher on screen.

use crate::scale::{LinearScale, NORMALIZED_EXTENT};
use crate::ticks::generate_ticks;

/// Chart axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal, spanning `x1..x2`
    X,
    /// Vertical, spanning `y1..y2`
    Y,
}

/// Pointer position in both domain and pixel coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    /// Domain value under the pointer on the x axis
    pub x: f64,
    /// Domain value under the pointer on the y axis
    pub y: f64,
    /// Pixels from the chart's left edge
    pub left: f64,
    /// Pixels from the chart's top edge
    pub top: f64,
}

/// Domain rectangle of a chart plus its forward and inverse scales.
///
/// # Examples
/// ```
/// use chartpick::frame::{Axis, ChartFrame};
///
/// let frame = ChartFrame::new(1950.0, 0.0, 2050.0, 100.0);
/// assert_eq!(frame.x_scale().apply(2000.0), 50.0);
/// assert_eq!(frame.y_scale().apply(100.0), 0.0);
/// assert_eq!(frame.ticks(Axis::Y, 3), vec![0.0, 50.0, 100.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartFrame {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x_scale: LinearScale,
    y_scale: LinearScale,
    x_inverse: LinearScale,
    y_inverse: LinearScale,
}

impl ChartFrame {
    /// Creates the frame for the domain rectangle `(x1, y1)`..`(x2, y2)`.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let x_scale = LinearScale::new([x1, x2], [0.0, NORMALIZED_EXTENT]);
        let y_scale = LinearScale::new([y1, y2], [NORMALIZED_EXTENT, 0.0]);
        ChartFrame {
            x1,
            y1,
            x2,
            y2,
            x_scale,
            y_scale,
            x_inverse: x_scale.invert(),
            y_inverse: y_scale.invert(),
        }
    }

    /// Domain interval of an axis, in `(start, end)` order
    pub fn extent(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X => (self.x1, self.x2),
            Axis::Y => (self.y1, self.y2),
        }
    }

    /// Domain x to percent from the left edge
    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    /// Domain y to percent from the top edge
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }

    /// Percent from the left edge to domain x
    pub fn x_inverse(&self) -> LinearScale {
        self.x_inverse
    }

    /// Percent from the top edge to domain y
    pub fn y_inverse(&self) -> LinearScale {
        self.y_inverse
    }

    /// Forward scale of an axis
    pub fn scale(&self, axis: Axis) -> LinearScale {
        match axis {
            Axis::X => self.x_scale,
            Axis::Y => self.y_scale,
        }
    }

    /// Grid ticks along an axis.
    pub fn ticks(&self, axis: Axis, count: i32) -> Vec<f64> {
        let (start, end) = self.extent(axis);
        generate_ticks(start, end, count)
    }

    /// Grid ticks paired with their offset in percent: from the left edge for
    /// [`Axis::X`], from the top edge for [`Axis::Y`].
    pub fn tick_offsets(&self, axis: Axis, count: i32) -> Vec<(f64, f64)> {
        let scale = self.scale(axis);
        self.ticks(axis, count)
            .into_iter()
            .map(|tick| (tick, scale.apply(tick)))
            .collect()
    }

    /// Translates a pixel position inside a `width` x `height` chart box into
    /// domain values.
    pub fn pointer(&self, left: f64, top: f64, width: f64, height: f64) -> Pointer {
        Pointer {
            x: self.x_inverse.apply(NORMALIZED_EXTENT * left / width),
            y: self.y_inverse.apply(NORMALIZED_EXTENT * top / height),
            left,
            top,
        }
    }
}

impl Default for ChartFrame {
    /// The unit square `(0, 0)`..`(1, 1)`.
    fn default() -> Self {
        ChartFrame::new(0.0, 0.0, 1.0, 1.0)
    }
}

//! Change detection for hover results.

use tracing::trace;

/// Remembers the last nearest item reported for a pointer stream.
///
/// Pointer-move events arrive far more often than the nearest item changes;
/// feed every `find_index` result through [`observe`](Self::observe) and only
/// react when it returns `Some`.
///
/// # Examples
/// ```
/// use chartpick::NearestTracker;
///
/// let mut tracker = NearestTracker::new();
/// assert_eq!(tracker.observe(Some(3)), Some(Some(3)));
/// assert_eq!(tracker.observe(Some(3)), None);
/// assert_eq!(tracker.observe(None), Some(None));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NearestTracker {
    current: Option<usize>,
}

impl NearestTracker {
    /// Tracker with nothing hovered
    pub fn new() -> Self {
        Self::default()
    }

    /// Dataset index last reported
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Records a query result, returning it only if it differs from the last one.
    pub fn observe(&mut self, nearest: Option<usize>) -> Option<Option<usize>> {
        if nearest == self.current {
            return None;
        }
        trace!(from = ?self.current, to = ?nearest, "nearest item changed");
        self.current = nearest;
        Some(nearest)
    }

    /// Forgets the last result, e.g. when the pointer leaves the chart.
    ///
    /// Returns the index that was hovered, if any.
    pub fn reset(&mut self) -> Option<usize> {
        self.current.take()
    }
}

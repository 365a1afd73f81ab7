//! Lazily built nearest-point index over a chart dataset.

use tracing::{debug, trace};

use crate::accessor::Accessor;
use crate::quadtree::{ProjectedPoint, QuadTree};
use crate::scale::LinearScale;

/// Answers "which item is nearest to the pointer" for one dataset.
///
/// The index borrows the dataset and keeps the accessors and scales used to
/// project it. The quadtree is built on the first [`find`](Self::find) and
/// reused until [`update`](Self::update) or [`invalidate`](Self::invalidate)
/// drops it, so repeated queries on pointer movement only pay for the search.
///
/// A fresh index projects through [`LinearScale::identity`] on both axes.
///
/// # Examples
/// ```
/// use chartpick::{LinearScale, SpatialIndex};
/// use chartpick::accessor::{default_x, default_y};
///
/// let data = [(0.5, 10.0), (2.0, 40.0), (3.5, 20.0)];
/// let mut index = SpatialIndex::new(&data, default_x(), default_y());
/// index.update(
///     default_x(),
///     default_y(),
///     LinearScale::new([0.0, 4.0], [0.0, 100.0]),
///     LinearScale::new([0.0, 50.0], [100.0, 0.0]),
/// );
///
/// // (2.0, 40.0) lands at 50% across, 20% down: pixel (200, 40) in a 400 x 200 viewport
/// assert_eq!(index.find(205.0, 42.0, 400.0, 200.0, 10.0), Some(&(2.0, 40.0)));
/// assert_eq!(index.find(0.0, 199.0, 400.0, 200.0, 10.0), None);
/// ```
pub struct SpatialIndex<'a, T> {
    data: &'a [T],
    x_of: Accessor<T>,
    y_of: Accessor<T>,
    x_scale: LinearScale,
    y_scale: LinearScale,
    /// Present only while it matches the inputs above
    tree: Option<QuadTree>,
}

impl<'a, T> SpatialIndex<'a, T> {
    /// Creates an index over `data`; nothing is projected until the first query.
    pub fn new(data: &'a [T], x_of: Accessor<T>, y_of: Accessor<T>) -> Self {
        SpatialIndex {
            data,
            x_of,
            y_of,
            x_scale: LinearScale::identity(),
            y_scale: LinearScale::identity(),
            tree: None,
        }
    }

    /// Replaces accessors and scales and drops the cached tree.
    ///
    /// The tree is rebuilt by the next [`find`](Self::find), not here.
    pub fn update(&mut self, x_of: Accessor<T>, y_of: Accessor<T>, x_scale: LinearScale, y_scale: LinearScale) {
        self.x_of = x_of;
        self.y_of = y_of;
        self.x_scale = x_scale;
        self.y_scale = y_scale;
        self.invalidate();
    }

    /// Replaces only the scales, keeping the accessors.
    pub fn set_scales(&mut self, x_scale: LinearScale, y_scale: LinearScale) {
        self.x_scale = x_scale;
        self.y_scale = y_scale;
        self.invalidate();
    }

    /// Drops the cached tree so the next query rebuilds it.
    pub fn invalidate(&mut self) {
        if self.tree.take().is_some() {
            trace!(items = self.data.len(), "spatial index invalidated");
        }
    }

    /// Whether a tree is currently cached
    pub fn is_built(&self) -> bool {
        self.tree.is_some()
    }

    /// Number of dataset items, including ones that project to NaN
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for an empty dataset
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Dataset the index was created over
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// Item nearest to pixel `(left, top)`, if closer than `radius` pixels.
    ///
    /// `width` and `height` are the viewport size in pixels. An empty dataset,
    /// or one where every item projects to NaN, never matches.
    pub fn find(&mut self, left: f64, top: f64, width: f64, height: f64, radius: f64) -> Option<&'a T> {
        let data = self.data;
        self.find_index(left, top, width, height, radius).map(|i| &data[i])
    }

    /// Like [`find`](Self::find) but returns the item's position in the dataset.
    pub fn find_index(&mut self, left: f64, top: f64, width: f64, height: f64, radius: f64) -> Option<usize> {
        let found = self.tree().nearest(left, top, width, height, radius);
        trace!(left, top, radius, ?found, "nearest point query");
        found
    }

    /// Cached tree, building it first if needed.
    pub fn tree(&mut self) -> &QuadTree {
        self.tree
            .get_or_insert_with(|| build_tree(self.data, &self.x_of, &self.y_of, self.x_scale, self.y_scale))
    }
}

/// Projects every item through its accessors and scales and indexes the result.
fn build_tree<T>(
    data: &[T],
    x_of: &Accessor<T>,
    y_of: &Accessor<T>,
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> QuadTree {
    debug!(items = data.len(), "projecting dataset for spatial index");
    let points: Vec<ProjectedPoint> = data
        .iter()
        .enumerate()
        .map(|(i, d)| ProjectedPoint::new(x_scale.apply(x_of(d, i)), y_scale.apply(y_of(d, i)), i))
        .collect();
    QuadTree::build(&points)
}

impl<T> std::fmt::Debug for SpatialIndex<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialIndex")
            .field("items", &self.data.len())
            .field("x_scale", &self.x_scale)
            .field("y_scale", &self.y_scale)
            .field("tree", &self.tree)
            .finish_non_exhaustive()
    }
}

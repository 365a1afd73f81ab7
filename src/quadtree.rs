//! Point-region quadtree over projected chart coordinates.
//!
//! Points live in normalized screen units (see [`NORMALIZED_EXTENT`]); queries
//! are made in pixels and every node region is converted on the fly using the
//! viewport size passed to [`QuadTree::nearest`]. Each node is empty, holds a
//! single point, or owns exactly four children split at its midpoint.

use tracing::{debug, trace};

use crate::scale::NORMALIZED_EXTENT;

const NW: usize = 0;
const NE: usize = 1;
const SW: usize = 2;
const SE: usize = 3;

/// Dataset item after projection through the active scales
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    /// Normalized horizontal position
    pub x: f64,
    /// Normalized vertical position (grows downward)
    pub y: f64,
    /// Position of the owning item in the dataset
    pub index: usize,
}

impl ProjectedPoint {
    /// Creates a projected point for the dataset item at `index`.
    pub fn new(x: f64, y: f64, index: usize) -> Self {
        ProjectedPoint { x, y, index }
    }

    #[inline]
    fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    #[inline]
    fn same_position(&self, other: &ProjectedPoint) -> bool {
        self.x == other.x && self.y == other.y
    }
}

/// Rectangle `[x0, x1] x [y0, y1]` in normalized units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    /// Left edge
    pub x0: f64,
    /// Top edge
    pub y0: f64,
    /// Right edge
    pub x1: f64,
    /// Bottom edge
    pub y1: f64,
}

impl Region {
    /// Creates a region from its corners.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Region { x0, y0, x1, y1 }
    }

    /// Smallest region containing every point, or an inverted infinite region
    /// when there are none.
    fn bounding(points: &[ProjectedPoint]) -> Self {
        let mut region = Region::new(
            f64::INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
        );
        for p in points {
            region.x0 = region.x0.min(p.x);
            region.y0 = region.y0.min(p.y);
            region.x1 = region.x1.max(p.x);
            region.y1 = region.y1.max(p.y);
        }
        region
    }

    #[inline]
    fn mid(&self) -> (f64, f64) {
        (self.x0 / 2.0 + self.x1 / 2.0, self.y0 / 2.0 + self.y1 / 2.0)
    }

    /// Child slot for a point: west when `x < mid_x`, north when `y < mid_y`.
    #[inline]
    fn quadrant(&self, x: f64, y: f64) -> usize {
        let (xm, ym) = self.mid();
        match (x < xm, y < ym) {
            (true, true) => NW,
            (false, true) => NE,
            (true, false) => SW,
            (false, false) => SE,
        }
    }

    /// Children in nw, ne, sw, se order.
    fn split(&self) -> [Region; 4] {
        let (xm, ym) = self.mid();
        [
            Region::new(self.x0, self.y0, xm, ym),
            Region::new(xm, self.y0, self.x1, ym),
            Region::new(self.x0, ym, xm, self.y1),
            Region::new(xm, ym, self.x1, self.y1),
        ]
    }

    /// True once halving can no longer separate points on either axis.
    fn is_indivisible(&self) -> bool {
        let (xm, ym) = self.mid();
        let splits_x = self.x0 < xm && xm < self.x1;
        let splits_y = self.y0 < ym && ym < self.y1;
        !splits_x && !splits_y
    }
}

/// Contents of a [`QuadNode`]
#[derive(Clone, Debug)]
pub enum NodeKind {
    /// No point in this region
    Empty,
    /// Exactly one point
    Leaf(ProjectedPoint),
    /// Four children in nw, ne, sw, se order
    Internal(Box<[QuadNode; 4]>),
}

/// Quadtree node covering one [`Region`]
#[derive(Clone, Debug)]
pub struct QuadNode {
    region: Region,
    kind: NodeKind,
}

impl QuadNode {
    fn empty(region: Region) -> Self {
        QuadNode {
            region,
            kind: NodeKind::Empty,
        }
    }

    /// Region covered by this node
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// What this node holds
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Inserts a point, returning `false` when it was discarded as coincident
    /// with a point already stored.
    fn insert(&mut self, point: ProjectedPoint) -> bool {
        match self.kind {
            NodeKind::Empty => {
                self.kind = NodeKind::Leaf(point);
                true
            }
            NodeKind::Leaf(leaf) => {
                if leaf.same_position(&point) || self.region.is_indivisible() {
                    return false;
                }
                self.subdivide(leaf);
                self.insert(point)
            }
            NodeKind::Internal(ref mut children) => {
                let quadrant = self.region.quadrant(point.x, point.y);
                children[quadrant].insert(point)
            }
        }
    }

    /// Turns a leaf into an internal node, moving its point into the matching child.
    fn subdivide(&mut self, displaced: ProjectedPoint) {
        let mut children = self.region.split().map(QuadNode::empty);
        children[self.region.quadrant(displaced.x, displaced.y)].kind = NodeKind::Leaf(displaced);
        self.kind = NodeKind::Internal(Box::new(children));
    }

    fn depth(&self) -> usize {
        match &self.kind {
            NodeKind::Internal(children) => 1 + children.iter().map(QuadNode::depth).max().unwrap_or(0),
            NodeKind::Empty | NodeKind::Leaf(_) => 1,
        }
    }
}

/// Outcome of a nearest-point search
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SearchStats {
    /// Dataset index of the nearest point within the radius
    pub(crate) nearest: Option<usize>,
    /// Non-empty nodes popped from the stack, pruned or not
    pub(crate) visited: usize,
    /// Leaves whose distance was measured
    pub(crate) measured: usize,
}

/// Quadtree built once from a fixed set of projected points.
///
/// # Examples
/// ```
/// use chartpick::{ProjectedPoint, QuadTree};
///
/// let tree = QuadTree::build(&[
///     ProjectedPoint::new(10.0, 10.0, 0),
///     ProjectedPoint::new(90.0, 90.0, 1),
/// ]);
/// // 200 x 100 pixel viewport: (90, 90) sits at pixel (180, 90)
/// assert_eq!(tree.nearest(170.0, 80.0, 200.0, 100.0, 20.0), Some(1));
/// assert_eq!(tree.nearest(100.0, 50.0, 200.0, 100.0, 5.0), None);
/// ```
#[derive(Clone, Debug)]
pub struct QuadTree {
    root: QuadNode,
    /// Points kept after NaN filtering and deduplication
    len: usize,
}

impl QuadTree {
    /// Builds a tree over `points`, inserting them in order.
    ///
    /// Points with a NaN coordinate are skipped. Of several points sharing the
    /// exact same position only the first one is kept.
    pub fn build(points: &[ProjectedPoint]) -> Self {
        let valid: Vec<ProjectedPoint> = points.iter().copied().filter(|p| !p.is_nan()).collect();

        let mut root = QuadNode::empty(Region::bounding(&valid));
        let mut len = 0;
        for p in &valid {
            if root.insert(*p) {
                len += 1;
            }
        }

        let tree = QuadTree { root, len };
        debug!(
            points = points.len(),
            valid = valid.len(),
            stored = tree.len,
            depth = tree.depth(),
            "built quadtree"
        );
        tree
    }

    /// Number of points stored
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no point survived filtering
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of node levels, counting the root
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Root node
    pub fn root(&self) -> &QuadNode {
        &self.root
    }

    /// Dataset index of the point nearest to pixel `(left, top)`.
    ///
    /// `width` and `height` are the viewport size in pixels; the normalized
    /// extent maps onto them. Only points strictly closer than `radius`
    /// pixels are returned; pass `f64::INFINITY` to accept any distance.
    /// Among equidistant points the first one reached wins, and the
    /// search explores children in se, sw, ne, nw order.
    pub fn nearest(&self, left: f64, top: f64, width: f64, height: f64, radius: f64) -> Option<usize> {
        let stats = self.search(left, top, width, height, radius);
        trace!(visited = stats.visited, measured = stats.measured, "quadtree search");
        stats.nearest
    }

    pub(crate) fn search(&self, left: f64, top: f64, width: f64, height: f64, radius: f64) -> SearchStats {
        let to_left = |x: f64| x * width / NORMALIZED_EXTENT;
        let to_top = |y: f64| y * height / NORMALIZED_EXTENT;

        let mut stats = SearchStats {
            nearest: None,
            visited: 0,
            measured: 0,
        };
        let mut min_dist_sq = f64::INFINITY;
        let mut stack = vec![&self.root];

        while let Some(node) = stack.pop() {
            if let NodeKind::Empty = node.kind {
                continue;
            }
            stats.visited += 1;

            let r = &node.region;
            let (left0, left1) = (to_left(r.x0), to_left(r.x1));
            let (top0, top1) = (to_top(r.y0), to_top(r.y1));

            let out_of_bounds = left < left0.min(left1) - radius
                || left > left0.max(left1) + radius
                || top < top0.min(top1) - radius
                || top > top0.max(top1) + radius;
            if out_of_bounds {
                continue;
            }

            match &node.kind {
                NodeKind::Leaf(p) => {
                    stats.measured += 1;
                    let dl = to_left(p.x) - left;
                    let dt = to_top(p.y) - top;
                    let dist_sq = dl * dl + dt * dt;
                    if dist_sq < min_dist_sq {
                        min_dist_sq = dist_sq;
                        stats.nearest = Some(p.index);
                    }
                }
                NodeKind::Internal(children) => stack.extend(children.iter()),
                NodeKind::Empty => {}
            }
        }

        stats.nearest = stats.nearest.filter(|_| min_dist_sq < radius * radius);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(f64, f64)]) -> Vec<ProjectedPoint> {
        coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| ProjectedPoint::new(x, y, i))
            .collect()
    }

    #[test]
    fn test_empty_tree() {
        let tree = QuadTree::build(&[]);
        assert!(tree.is_empty());
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.nearest(0.0, 0.0, 100.0, 100.0, f64::INFINITY), None);
    }

    #[test]
    fn test_single_point_is_root_leaf() {
        let tree = QuadTree::build(&points(&[(30.0, 40.0)]));
        assert_eq!(tree.len(), 1);
        assert!(matches!(tree.root().kind(), NodeKind::Leaf(p) if p.index == 0));
        assert_eq!(*tree.root().region(), Region::new(30.0, 40.0, 30.0, 40.0));
        assert_eq!(tree.nearest(99.0, 99.0, 100.0, 100.0, f64::INFINITY), Some(0));
    }

    #[test]
    fn test_second_point_subdivides() {
        let tree = QuadTree::build(&points(&[(0.0, 0.0), (100.0, 100.0)]));
        assert_eq!(tree.len(), 2);
        let NodeKind::Internal(children) = tree.root().kind() else {
            panic!("root should be internal after two distinct points");
        };
        assert!(matches!(children[NW].kind(), NodeKind::Leaf(p) if p.index == 0));
        assert!(matches!(children[NE].kind(), NodeKind::Empty));
        assert!(matches!(children[SW].kind(), NodeKind::Empty));
        assert!(matches!(children[SE].kind(), NodeKind::Leaf(p) if p.index == 1));
        assert_eq!(*children[SE].region(), Region::new(50.0, 50.0, 100.0, 100.0));
    }

    #[test]
    fn test_quadrant_boundaries() {
        let region = Region::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(region.quadrant(4.9, 4.9), NW);
        assert_eq!(region.quadrant(5.0, 4.9), NE);
        assert_eq!(region.quadrant(4.9, 5.0), SW);
        assert_eq!(region.quadrant(5.0, 5.0), SE);
    }

    #[test]
    fn test_coincident_points_keep_first() {
        let tree = QuadTree::build(&points(&[(10.0, 10.0), (10.0, 10.0), (10.0, 10.0)]));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.depth(), 1, "coincident points must not subdivide");
        assert_eq!(tree.nearest(0.0, 0.0, 100.0, 100.0, f64::INFINITY), Some(0));
    }

    #[test]
    fn test_nan_points_skipped() {
        let tree = QuadTree::build(&points(&[(f64::NAN, 1.0), (5.0, f64::NAN), (7.0, 8.0)]));
        assert_eq!(tree.len(), 1);
        assert_eq!(*tree.root().region(), Region::new(7.0, 8.0, 7.0, 8.0));
        assert_eq!(tree.nearest(0.0, 0.0, 100.0, 100.0, f64::INFINITY), Some(2));
    }

    #[test]
    fn test_adjacent_floats_terminate() {
        let a = 1.0_f64;
        let b = f64::from_bits(a.to_bits() + 1);
        let tree = QuadTree::build(&points(&[(a, a), (b, b), (a, b)]));
        assert!(tree.len() >= 1);
        assert!(tree.nearest(a, a, 100.0, 100.0, f64::INFINITY).is_some());
    }

    #[test]
    fn test_radius_is_strict() {
        let tree = QuadTree::build(&points(&[(0.0, 0.0), (30.0, 40.0)]));
        // (30, 40) is exactly 50 pixels from the origin
        assert_eq!(tree.nearest(0.0, 0.0, 100.0, 100.0, 1.0), Some(0));
        assert_eq!(tree.nearest(60.0, 80.0, 100.0, 100.0, 50.0), None);
        assert_eq!(tree.nearest(60.0, 80.0, 100.0, 100.0, 50.5), Some(1));
    }

    #[test]
    fn test_nan_radius_never_matches() {
        let tree = QuadTree::build(&points(&[(10.0, 10.0)]));
        assert_eq!(tree.nearest(10.0, 10.0, 100.0, 100.0, f64::NAN), None);
    }

    #[test]
    fn test_huge_bounds_still_split() {
        let tree = QuadTree::build(&points(&[(1e308, 0.0), (1.7e308, 0.0)]));
        assert_eq!(tree.len(), 2, "distinct points near f64::MAX must both be kept");
        assert!(matches!(tree.root().kind(), NodeKind::Internal(_)));
    }

    #[test]
    fn test_viewport_scaling() {
        let tree = QuadTree::build(&points(&[(50.0, 50.0), (0.0, 0.0)]));
        // 50% of an 800 x 400 viewport
        assert_eq!(tree.nearest(400.0, 200.0, 800.0, 400.0, 1.0), Some(0));
        assert_eq!(tree.nearest(50.0, 50.0, 800.0, 400.0, 10.0), None);
    }

    #[test]
    fn test_equidistant_tie_goes_to_south_east() {
        // Four points at equal distance from the centre, one per quadrant
        let tree = QuadTree::build(&points(&[(40.0, 40.0), (60.0, 40.0), (40.0, 60.0), (60.0, 60.0)]));
        assert_eq!(tree.nearest(50.0, 50.0, 100.0, 100.0, f64::INFINITY), Some(3));
    }

    #[test]
    fn test_pruning_skips_far_branches() {
        let mut coords = Vec::new();
        for i in 0..32 {
            for j in 0..32 {
                coords.push((f64::from(i) * 3.0, f64::from(j) * 3.0));
            }
        }
        let tree = QuadTree::build(&points(&coords));
        assert_eq!(tree.len(), 1024);

        let unbounded = tree.search(1.0, 1.0, 100.0, 100.0, f64::INFINITY);
        let bounded = tree.search(1.0, 1.0, 100.0, 100.0, 2.0);
        assert_eq!(unbounded.nearest, Some(0));
        assert_eq!(bounded.nearest, Some(0));
        assert_eq!(unbounded.measured, 1024, "infinite radius measures every leaf");
        assert!(bounded.measured < 16, "measured {} leaves", bounded.measured);
        assert!(bounded.visited < unbounded.visited / 10);
    }
}

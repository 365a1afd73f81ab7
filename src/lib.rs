//! # chartpick - scales, ticks and hover lookup for charts
//!
//! The numeric core behind interactive chart annotations.
//!
//! ## Features
//!
//! - **Linear Scales**: invertible affine mappings between a domain and a range
//! - **Nice Ticks**: round-number axis positions (multiples of 1, 2 and 5)
//! - **Hover Lookup**: a lazily built quadtree answering "nearest item to the
//!   pointer within a radius" queries
//!
//! ## Quick Start
//!
//! ```rust
//! use chartpick::prelude::*;
//!
//! let data = vec![(20.0, 25.0), (40.0, 10.0), (60.0, 50.0), (80.0, 75.0), (100.0, 100.0)];
//!
//! // Axis ticks for the x domain
//! assert_eq!(generate_ticks(0.0, 100.0, 5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
//!
//! // Index the dataset; identity scales keep values as percent of the viewport
//! let mut index = SpatialIndex::new(&data, default_x(), default_y());
//!
//! // Nearest item to the top-left corner of a 100 x 100 pixel viewport
//! assert_eq!(index.find(0.0, 0.0, 100.0, 100.0, f64::INFINITY), Some(&(20.0, 25.0)));
//! // Nothing within 5 pixels of the centre
//! assert_eq!(index.find(50.0, 50.0, 100.0, 100.0, 5.0), None);
//! ```
//!
//! ## How It Works
//!
//! Every item is projected through the current x and y scales into normalized
//! screen units (0 to 100). The projections are inserted into a point-region
//! quadtree that splits a node into four equal quadrants whenever a second
//! point lands in it. Queries walk the tree depth first and skip any node whose
//! pixel bounds, grown by the search radius, do not contain the pointer.
//!
//! The tree is only rebuilt when a query finds it missing, which happens after
//! construction and after [`SpatialIndex::update`].

pub mod accessor;
pub mod frame;
pub mod prelude;
pub mod quadtree;
pub mod scale;
pub mod spatial_index;
pub mod ticks;
pub mod tracker;

pub use accessor::{Accessor, Coordinates, accessor, default_x, default_y};
pub use frame::{Axis, ChartFrame, Pointer};
pub use quadtree::{ProjectedPoint, QuadTree};
pub use scale::{LinearScale, NORMALIZED_EXTENT};
pub use spatial_index::SpatialIndex;
pub use ticks::{DEFAULT_TICK_COUNT, generate_default_ticks, generate_ticks, tick_increment};
pub use tracker::NearestTracker;

mod integration_test;

//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use chartpick::prelude::*;
//! ```

pub use crate::{
    Axis, ChartFrame, LinearScale, NearestTracker, SpatialIndex, accessor, default_x, default_y,
    generate_ticks,
};

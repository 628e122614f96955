//! Geometry and constraint resolution for draggable, resizable rectangles
//!
//! This module is pure computation: given a gesture anchor, the pointer
//! position and the element's constraints it produces the next rectangle.
//! It owns no state; the [`crate::engine`] module drives it.

pub mod bounds;
pub mod resolver;
pub mod snap;
pub mod types;

pub use bounds::{drag_bounds, effective_limits, resize_bounds, EffectiveLimits};
pub use resolver::{resolve_drag, resolve_resize, Constraints};
pub use snap::{clamp, height_from_edges, snap, snap_to_grid, width_from_edges};
pub use types::*;

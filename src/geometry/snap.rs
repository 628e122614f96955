//! Stateless numeric helpers: grid snapping, clamping and edge arithmetic

use super::types::{GridSpec, Scale};

/// Snap a raw displacement to the nearest multiple of `step`.
///
/// The displacement is divided by `scale` first so the grid stays in the
/// element's unscaled units. Halves round away from zero.
pub fn snap(step: f64, raw_delta: f64, scale: f64) -> f64 {
    ((raw_delta / scale) / step).round() * step
}

/// Snap both axes of a displacement
pub fn snap_to_grid(grid: GridSpec, dx: f64, dy: f64, scale: Scale) -> (f64, f64) {
    (snap(grid.step_x, dx, scale.x), snap(grid.step_y, dy, scale.y))
}

/// Restrict `value` to the optional `[min, max]` range.
///
/// The minimum wins when both limits are violated.
pub fn clamp(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    if let Some(min) = min {
        if value < min {
            return min;
        }
    }
    if let Some(max) = max {
        if value > max {
            return max;
        }
    }
    value
}

/// Width implied by left/right insets inside a parent, or `current` without one
pub fn width_from_edges(parent_width: Option<f64>, left: f64, right: f64, current: f64) -> f64 {
    match parent_width {
        Some(parent_width) => parent_width - left - right,
        None => current,
    }
}

/// Height implied by top/bottom insets inside a parent, or `current` without one
pub fn height_from_edges(parent_height: Option<f64>, top: f64, bottom: f64, current: f64) -> f64 {
    match parent_height {
        Some(parent_height) => parent_height - top - bottom,
        None => current,
    }
}

//! Per-gesture travel limits for each edge of the element
//!
//! Bounds are computed once when a gesture starts and held fixed until it
//! ends. Recomputing them on every move would feed the changing width and
//! height back into the limits and make the edges oscillate.

use super::types::{AspectLock, Bounds, GridSpec, ParentFrame, Rect, SizeLimits};

/// Size limits after aspect-ratio and grid normalization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveLimits {
    pub min_width: f64,
    pub min_height: f64,
    pub max_width: Option<f64>,
    pub max_height: Option<f64>,
}

/// Normalize size limits for a resize gesture.
///
/// With the aspect ratio locked, the minima are raised and the maxima capped
/// so both describe ratio-consistent sizes. Maxima are then rounded down to
/// the grid so a clamped edge always lands on a grid line.
pub fn effective_limits(limits: &SizeLimits, aspect: AspectLock, grid: GridSpec) -> EffectiveLimits {
    let mut min_width = limits.min_width;
    let mut min_height = limits.min_height;
    let mut max_width = limits.max_width;
    let mut max_height = limits.max_height;

    if aspect.enabled {
        let factor = aspect.factor;
        if min_width / min_height > factor {
            min_height = min_width / factor;
        } else {
            min_width = factor * min_height;
        }

        match (max_width, max_height) {
            (Some(w), Some(h)) => {
                let w = w.min(factor * h);
                max_width = Some(w);
                max_height = Some(h.min(w / factor));
            }
            (Some(w), None) => max_height = Some(w / factor),
            (None, Some(h)) => max_width = Some(factor * h),
            (None, None) => {}
        }
    }

    EffectiveLimits {
        min_width,
        min_height,
        max_width: max_width.map(|w| w - w % grid.step_x),
        max_height: max_height.map(|h| h - h % grid.step_y),
    }
}

/// Bounds for a drag gesture: the element may travel anywhere inside the parent
pub fn drag_bounds(rect: &Rect, parent: Option<ParentFrame>) -> Bounds {
    let Some(parent) = parent else {
        return Bounds::unbounded();
    };

    let max_x = parent.width - rect.width;
    let max_y = parent.height - rect.height;
    Bounds {
        min_left: Some(0.0),
        max_left: Some(max_x),
        min_top: Some(0.0),
        max_top: Some(max_y),
        min_right: Some(0.0),
        max_right: Some(max_x),
        min_bottom: Some(0.0),
        max_bottom: Some(max_y),
    }
}

/// Bounds for a resize gesture.
///
/// An edge may move inward until the element reaches its minimum size
/// (quantized to whole grid steps) and outward until it reaches the parent
/// or its maximum size.
pub fn resize_bounds(
    rect: &Rect,
    parent: Option<ParentFrame>,
    limits: &SizeLimits,
    aspect: AspectLock,
    grid: GridSpec,
) -> Bounds {
    let limits = effective_limits(limits, aspect, grid);

    let right = parent.map(|p| p.right_of(rect)).unwrap_or(0.0);
    let bottom = parent.map(|p| p.bottom_of(rect)).unwrap_or(0.0);

    let shrink_x = ((rect.width - limits.min_width) / grid.step_x).floor() * grid.step_x;
    let shrink_y = ((rect.height - limits.min_height) / grid.step_y).floor() * grid.step_y;

    let mut bounds = Bounds {
        max_left: Some(rect.left + shrink_x),
        max_top: Some(rect.top + shrink_y),
        max_right: Some(right + shrink_x),
        max_bottom: Some(bottom + shrink_y),
        ..Bounds::unbounded()
    };

    match parent {
        Some(parent) => {
            let mut min_left: f64 = 0.0;
            let mut min_right: f64 = 0.0;
            let mut min_top: f64 = 0.0;
            let mut min_bottom: f64 = 0.0;

            if let Some(max_width) = limits.max_width {
                min_left = min_left.max(parent.width - right - max_width);
                min_right = min_right.max(parent.width - rect.left - max_width);
            }
            if let Some(max_height) = limits.max_height {
                min_top = min_top.max(parent.height - bottom - max_height);
                min_bottom = min_bottom.max(parent.height - rect.top - max_height);
            }

            bounds.min_left = Some(min_left);
            bounds.min_right = Some(min_right);
            bounds.min_top = Some(min_top);
            bounds.min_bottom = Some(min_bottom);
        }
        None => {
            if let Some(max_width) = limits.max_width {
                bounds.min_left = Some(-(right + max_width));
                bounds.min_right = Some(-(rect.left + max_width));
            }
            if let Some(max_height) = limits.max_height {
                bounds.min_top = Some(-(bottom + max_height));
                bounds.min_bottom = Some(-(rect.top + max_height));
            }
        }
    }

    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_grid() -> GridSpec {
        GridSpec::default()
    }

    #[test]
    fn test_drag_bounds_without_parent_are_unbounded() {
        let rect = Rect::new(0.0, 0.0, 200.0, 200.0);
        assert!(drag_bounds(&rect, None).is_unbounded());
    }

    #[test]
    fn test_drag_bounds_with_parent() {
        let rect = Rect::new(10.0, 10.0, 200.0, 100.0);
        let bounds = drag_bounds(&rect, Some(ParentFrame::new(300.0, 300.0)));
        assert_eq!(bounds.min_left, Some(0.0));
        assert_eq!(bounds.max_left, Some(100.0));
        assert_eq!(bounds.min_top, Some(0.0));
        assert_eq!(bounds.max_top, Some(200.0));
        assert_eq!(bounds.max_right, Some(100.0));
        assert_eq!(bounds.max_bottom, Some(200.0));
    }

    #[test]
    fn test_effective_limits_unlocked_only_rounds_maxima() {
        let limits = SizeLimits {
            min_width: 10.0,
            min_height: 20.0,
            max_width: Some(123.0),
            max_height: Some(88.0),
        };
        let eff = effective_limits(&limits, AspectLock::disabled(), GridSpec::new(10.0, 25.0));
        assert_eq!(eff.min_width, 10.0);
        assert_eq!(eff.min_height, 20.0);
        assert_eq!(eff.max_width, Some(120.0));
        assert_eq!(eff.max_height, Some(75.0));
    }

    #[test]
    fn test_effective_limits_locked_raises_minimum_height() {
        let limits = SizeLimits {
            min_width: 100.0,
            min_height: 10.0,
            ..SizeLimits::default()
        };
        let eff = effective_limits(&limits, AspectLock::locked(2.0), unit_grid());
        assert_eq!(eff.min_width, 100.0);
        assert_eq!(eff.min_height, 50.0);
    }

    #[test]
    fn test_effective_limits_locked_raises_minimum_width() {
        let limits = SizeLimits {
            min_width: 10.0,
            min_height: 40.0,
            ..SizeLimits::default()
        };
        let eff = effective_limits(&limits, AspectLock::locked(2.0), unit_grid());
        assert_eq!(eff.min_width, 80.0);
        assert_eq!(eff.min_height, 40.0);
    }

    #[test]
    fn test_effective_limits_locked_with_zero_minima() {
        let eff = effective_limits(&SizeLimits::default(), AspectLock::locked(2.0), unit_grid());
        assert_eq!(eff.min_width, 0.0);
        assert_eq!(eff.min_height, 0.0);
    }

    #[test]
    fn test_effective_limits_locked_caps_maxima_to_ratio() {
        let limits = SizeLimits {
            max_width: Some(400.0),
            max_height: Some(100.0),
            ..SizeLimits::default()
        };
        let eff = effective_limits(&limits, AspectLock::locked(2.0), unit_grid());
        assert_eq!(eff.max_width, Some(200.0));
        assert_eq!(eff.max_height, Some(100.0));
    }

    #[test]
    fn test_effective_limits_locked_derives_missing_maximum() {
        let only_width = SizeLimits {
            max_width: Some(300.0),
            ..SizeLimits::default()
        };
        let eff = effective_limits(&only_width, AspectLock::locked(3.0), unit_grid());
        assert_eq!(eff.max_height, Some(100.0));

        let only_height = SizeLimits {
            max_height: Some(50.0),
            ..SizeLimits::default()
        };
        let eff = effective_limits(&only_height, AspectLock::locked(3.0), unit_grid());
        assert_eq!(eff.max_width, Some(150.0));
    }

    #[test]
    fn test_resize_bounds_with_parent() {
        let rect = Rect::new(50.0, 40.0, 200.0, 100.0);
        let parent = ParentFrame::new(400.0, 300.0);
        let limits = SizeLimits {
            min_width: 50.0,
            min_height: 20.0,
            ..SizeLimits::default()
        };
        let bounds = resize_bounds(&rect, Some(parent), &limits, AspectLock::disabled(), GridSpec::new(10.0, 10.0));

        // right = 400 - 200 - 50 = 150, bottom = 300 - 100 - 40 = 160
        assert_eq!(bounds.min_left, Some(0.0));
        assert_eq!(bounds.max_left, Some(200.0));
        assert_eq!(bounds.min_top, Some(0.0));
        assert_eq!(bounds.max_top, Some(120.0));
        assert_eq!(bounds.min_right, Some(0.0));
        assert_eq!(bounds.max_right, Some(300.0));
        assert_eq!(bounds.min_bottom, Some(0.0));
        assert_eq!(bounds.max_bottom, Some(240.0));
    }

    #[test]
    fn test_resize_bounds_shrink_is_quantized_to_grid() {
        let rect = Rect::new(0.0, 0.0, 105.0, 100.0);
        let limits = SizeLimits {
            min_width: 50.0,
            ..SizeLimits::default()
        };
        let bounds = resize_bounds(&rect, None, &limits, AspectLock::disabled(), GridSpec::new(10.0, 10.0));
        // (105 - 50) / 10 floors to 5 steps
        assert_eq!(bounds.max_left, Some(50.0));
    }

    #[test]
    fn test_resize_bounds_with_parent_and_maxima() {
        let rect = Rect::new(50.0, 40.0, 200.0, 100.0);
        let parent = ParentFrame::new(400.0, 300.0);
        let limits = SizeLimits {
            max_width: Some(250.0),
            max_height: Some(120.0),
            ..SizeLimits::default()
        };
        let bounds = resize_bounds(&rect, Some(parent), &limits, AspectLock::disabled(), unit_grid());
        // min_left = max(0, 400 - 150 - 250) = 0
        assert_eq!(bounds.min_left, Some(0.0));
        // min_right = max(0, 400 - 50 - 250) = 100
        assert_eq!(bounds.min_right, Some(100.0));
        // min_top = max(0, 300 - 160 - 120) = 20
        assert_eq!(bounds.min_top, Some(20.0));
        // min_bottom = max(0, 300 - 40 - 120) = 140
        assert_eq!(bounds.min_bottom, Some(140.0));
    }

    #[test]
    fn test_resize_bounds_without_parent() {
        let rect = Rect::new(10.0, 20.0, 100.0, 80.0);
        let bounds = resize_bounds(&rect, None, &SizeLimits::default(), AspectLock::disabled(), unit_grid());
        assert_eq!(bounds.min_left, None);
        assert_eq!(bounds.min_top, None);
        assert_eq!(bounds.min_right, None);
        assert_eq!(bounds.min_bottom, None);
        assert_eq!(bounds.max_left, Some(110.0));
        assert_eq!(bounds.max_top, Some(100.0));
        assert_eq!(bounds.max_right, Some(100.0));
        assert_eq!(bounds.max_bottom, Some(80.0));
    }

    #[test]
    fn test_resize_bounds_without_parent_keep_max_size_travel() {
        let rect = Rect::new(10.0, 20.0, 100.0, 80.0);
        let limits = SizeLimits {
            max_width: Some(150.0),
            max_height: Some(90.0),
            ..SizeLimits::default()
        };
        let bounds = resize_bounds(&rect, None, &limits, AspectLock::disabled(), unit_grid());
        assert_eq!(bounds.min_left, Some(-150.0));
        assert_eq!(bounds.min_right, Some(-160.0));
        assert_eq!(bounds.min_top, Some(-90.0));
        assert_eq!(bounds.min_bottom, Some(-110.0));
    }
}

//! Constraint resolution for drag and resize gestures
//!
//! Both paths are pure functions of the gesture anchor and the current
//! pointer: the previous frame's rectangle never feeds back in, so skipped
//! or reordered move events cannot accumulate drift.
//!
//! Resize applies constraints in a fixed order: grid snap, size limits,
//! aspect-ratio coupling, then parent clipping. Positions are always derived
//! from the already-clamped size of the opposite edge, never the reverse.

use super::snap::{clamp, snap_to_grid};
use super::types::{
    AspectLock, Axis, Bounds, Edges, GestureAnchor, GridSpec, Handle, ParentFrame, Point, Rect,
    Scale, SizeLimits,
};

/// Everything about an element that constrains its geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub limits: SizeLimits,
    pub grid: GridSpec,
    pub scale: Scale,
    pub aspect: AspectLock,
    pub axis: Axis,
    pub parent: Option<ParentFrame>,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            limits: SizeLimits::default(),
            grid: GridSpec::default(),
            scale: Scale::default(),
            aspect: AspectLock::disabled(),
            axis: Axis::Both,
            parent: None,
        }
    }
}

/// Compute the element rectangle for a drag gesture at `pointer`
pub fn resolve_drag(
    constraints: &Constraints,
    anchor: &GestureAnchor,
    bounds: &Bounds,
    pointer: Point,
) -> Rect {
    let raw_x = if constraints.axis.allows_x() {
        anchor.pointer.x - pointer.x
    } else {
        0.0
    };
    let raw_y = if constraints.axis.allows_y() {
        anchor.pointer.y - pointer.y
    } else {
        0.0
    };

    let (dx, dy) = snap_to_grid(constraints.grid, raw_x, raw_y, constraints.scale);

    let mut left = anchor.rect.left - dx;
    let mut top = anchor.rect.top - dy;

    if constraints.parent.is_some() {
        left = clamp(left, bounds.min_left, bounds.max_left);
        top = clamp(top, bounds.min_top, bounds.max_top);
    }

    Rect::new(left, top, anchor.rect.width, anchor.rect.height)
}

/// Compute the element rectangle for a resize gesture on `handle` at `pointer`
pub fn resolve_resize(
    constraints: &Constraints,
    handle: Handle,
    anchor: &GestureAnchor,
    pointer: Point,
) -> Rect {
    let limits = &constraints.limits;
    let edges = handle.edges();
    let start = anchor.rect;

    let (dx, dy) = snap_to_grid(
        constraints.grid,
        pointer.x - anchor.pointer.x,
        pointer.y - anchor.pointer.y,
        constraints.scale,
    );

    let mut rect = start;

    if edges.contains(Edges::RIGHT) {
        rect.width = clamp(start.width + dx, Some(limits.min_width), limits.max_width);
    }
    if edges.contains(Edges::LEFT) {
        rect.width = clamp(start.width - dx, Some(limits.min_width), limits.max_width);
        rect.left = start.left + (start.width - rect.width);
    }
    if edges.contains(Edges::BOTTOM) {
        rect.height = clamp(start.height + dy, Some(limits.min_height), limits.max_height);
    }
    if edges.contains(Edges::TOP) {
        rect.height = clamp(start.height - dy, Some(limits.min_height), limits.max_height);
        rect.top = start.top + (start.height - rect.height);
    }

    let aspect = constraints.aspect;
    if aspect.enabled && aspect.factor != 0.0 {
        if edges.horizontal() {
            rect.height = rect.width / aspect.factor;
            if edges.contains(Edges::TOP) {
                rect.top = start.top + (start.height - rect.height);
            }
        } else if edges.vertical() {
            rect.width = rect.height * aspect.factor;
            if edges.contains(Edges::LEFT) {
                rect.left = start.left + (start.width - rect.width);
            }
        }
    }

    if let Some(parent) = constraints.parent {
        clip_to_parent(&mut rect, parent);
    }

    rect
}

/// Pull edges that overflow the parent back inside it, shrinking the size
fn clip_to_parent(rect: &mut Rect, parent: ParentFrame) {
    if rect.left < 0.0 {
        rect.width += rect.left;
        rect.left = 0.0;
    }
    if rect.top < 0.0 {
        rect.height += rect.top;
        rect.top = 0.0;
    }
    if rect.left + rect.width > parent.width {
        rect.width = parent.width - rect.left;
    }
    if rect.top + rect.height > parent.height {
        rect.height = parent.height - rect.top;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::bounds::drag_bounds;

    fn anchor(rect: Rect) -> GestureAnchor {
        GestureAnchor::new(Point::new(0.0, 0.0), rect)
    }

    #[test]
    fn test_drag_follows_pointer() {
        let c = Constraints::default();
        let a = anchor(Rect::new(0.0, 0.0, 200.0, 200.0));
        let rect = resolve_drag(&c, &a, &Bounds::unbounded(), Point::new(50.0, 30.0));
        assert_eq!(rect, Rect::new(50.0, 30.0, 200.0, 200.0));
    }

    #[test]
    fn test_drag_zero_displacement_keeps_anchor() {
        let c = Constraints::default();
        let a = GestureAnchor::new(Point::new(12.0, 34.0), Rect::new(5.0, 6.0, 10.0, 10.0));
        let rect = resolve_drag(&c, &a, &Bounds::unbounded(), Point::new(12.0, 34.0));
        assert_eq!(rect, a.rect);
    }

    #[test]
    fn test_drag_axis_restriction() {
        let c = Constraints {
            axis: Axis::X,
            ..Constraints::default()
        };
        let a = anchor(Rect::new(0.0, 0.0, 10.0, 10.0));
        let rect = resolve_drag(&c, &a, &Bounds::unbounded(), Point::new(40.0, 70.0));
        assert_eq!((rect.left, rect.top), (40.0, 0.0));

        let c = Constraints {
            axis: Axis::Y,
            ..Constraints::default()
        };
        let rect = resolve_drag(&c, &a, &Bounds::unbounded(), Point::new(40.0, 70.0));
        assert_eq!((rect.left, rect.top), (0.0, 70.0));
    }

    #[test]
    fn test_drag_clamped_to_parent_bounds() {
        let parent = ParentFrame::new(300.0, 300.0);
        let c = Constraints {
            parent: Some(parent),
            ..Constraints::default()
        };
        let a = anchor(Rect::new(0.0, 0.0, 200.0, 200.0));
        let bounds = drag_bounds(&a.rect, c.parent);
        let rect = resolve_drag(&c, &a, &bounds, Point::new(150.0, -40.0));
        assert_eq!((rect.left, rect.top), (100.0, 0.0));
    }

    #[test]
    fn test_drag_ignores_bounds_without_parent() {
        let c = Constraints::default();
        let a = anchor(Rect::new(0.0, 0.0, 20.0, 20.0));
        let bounds = Bounds {
            max_left: Some(5.0),
            ..Bounds::unbounded()
        };
        let rect = resolve_drag(&c, &a, &bounds, Point::new(50.0, 0.0));
        assert_eq!(rect.left, 50.0);
    }

    #[test]
    fn test_resize_right_edge() {
        let c = Constraints::default();
        let a = anchor(Rect::new(10.0, 10.0, 100.0, 50.0));
        let rect = resolve_resize(&c, Handle::Mr, &a, Point::new(25.0, 99.0));
        assert_eq!(rect, Rect::new(10.0, 10.0, 125.0, 50.0));
    }

    #[test]
    fn test_resize_left_edge_moves_left_by_width_change() {
        let c = Constraints::default();
        let a = anchor(Rect::new(10.0, 10.0, 100.0, 50.0));
        let rect = resolve_resize(&c, Handle::Ml, &a, Point::new(-20.0, 0.0));
        assert_eq!(rect, Rect::new(-10.0, 10.0, 120.0, 50.0));
    }

    #[test]
    fn test_resize_top_left_corner() {
        let c = Constraints::default();
        let a = anchor(Rect::new(50.0, 50.0, 100.0, 100.0));
        let rect = resolve_resize(&c, Handle::Tl, &a, Point::new(10.0, 20.0));
        assert_eq!(rect, Rect::new(60.0, 70.0, 90.0, 80.0));
    }

    #[test]
    fn test_resize_clamps_to_maximum() {
        let c = Constraints {
            limits: SizeLimits {
                max_width: Some(120.0),
                max_height: Some(60.0),
                ..SizeLimits::default()
            },
            ..Constraints::default()
        };
        let a = anchor(Rect::new(0.0, 0.0, 100.0, 50.0));
        let rect = resolve_resize(&c, Handle::Br, &a, Point::new(500.0, 500.0));
        assert_eq!((rect.width, rect.height), (120.0, 60.0));
    }

    #[test]
    fn test_resize_width_never_negative() {
        let c = Constraints::default();
        let a = anchor(Rect::new(0.0, 0.0, 100.0, 50.0));
        let rect = resolve_resize(&c, Handle::Mr, &a, Point::new(-500.0, 0.0));
        assert_eq!(rect.width, 0.0);
    }

    #[test]
    fn test_resize_grid_snaps_displacement() {
        let c = Constraints {
            grid: GridSpec::new(20.0, 20.0),
            ..Constraints::default()
        };
        let a = anchor(Rect::new(0.0, 0.0, 100.0, 100.0));
        let rect = resolve_resize(&c, Handle::Br, &a, Point::new(29.0, 31.0));
        assert_eq!((rect.width, rect.height), (120.0, 140.0));
    }

    #[test]
    fn test_resize_aspect_locked_horizontal() {
        let c = Constraints {
            aspect: AspectLock::locked(2.0),
            ..Constraints::default()
        };
        let a = anchor(Rect::new(0.0, 0.0, 200.0, 100.0));
        let rect = resolve_resize(&c, Handle::Mr, &a, Point::new(40.0, 0.0));
        assert_eq!((rect.width, rect.height), (240.0, 120.0));
    }

    #[test]
    fn test_resize_aspect_locked_vertical_moves_left_edge() {
        let c = Constraints {
            aspect: AspectLock::locked(2.0),
            ..Constraints::default()
        };
        let a = anchor(Rect::new(100.0, 100.0, 200.0, 100.0));
        let rect = resolve_resize(&c, Handle::Bm, &a, Point::new(0.0, 50.0));
        assert_eq!((rect.width, rect.height), (300.0, 150.0));
        assert_eq!(rect.left, 100.0);
    }

    #[test]
    fn test_resize_aspect_locked_corner_is_horizontal_dominant() {
        let c = Constraints {
            aspect: AspectLock::locked(2.0),
            ..Constraints::default()
        };
        let a = anchor(Rect::new(100.0, 100.0, 200.0, 100.0));
        let rect = resolve_resize(&c, Handle::Tl, &a, Point::new(-20.0, 80.0));
        // width follows x, height follows width, top re-derives from height
        assert_eq!(rect.width, 220.0);
        assert_eq!(rect.height, 110.0);
        assert_eq!(rect.left, 80.0);
        assert_eq!(rect.top, 90.0);
    }

    #[test]
    fn test_resize_clipped_to_parent() {
        let c = Constraints {
            parent: Some(ParentFrame::new(300.0, 300.0)),
            ..Constraints::default()
        };
        let a = anchor(Rect::new(50.0, 50.0, 100.0, 100.0));

        let rect = resolve_resize(&c, Handle::Tl, &a, Point::new(-80.0, -70.0));
        assert_eq!(rect, Rect::new(0.0, 0.0, 150.0, 150.0));

        let rect = resolve_resize(&c, Handle::Br, &a, Point::new(500.0, 500.0));
        assert_eq!(rect, Rect::new(50.0, 50.0, 250.0, 250.0));
    }

    #[test]
    fn test_resize_left_edge_respects_minimum() {
        let c = Constraints {
            limits: SizeLimits {
                min_width: 50.0,
                ..SizeLimits::default()
            },
            ..Constraints::default()
        };
        let a = anchor(Rect::new(0.0, 0.0, 200.0, 200.0));
        let rect = resolve_resize(&c, Handle::Ml, &a, Point::new(170.0, 0.0));
        assert_eq!(rect.width, 50.0);
        assert_eq!(rect.left, 150.0);
    }
}

//! Caller-supplied callbacks for gesture and activation events
//!
//! Every hook is optional. A missing start or update hook allows the
//! gesture to proceed; a missing notification hook is simply not called.

use std::fmt;

use crate::geometry::{Handle, Point, Rect};

type StartHook = Box<dyn FnMut(Point) -> bool>;
type DragHook = Box<dyn FnMut(f64, f64) -> bool>;
type DragStopHook = Box<dyn FnMut(f64, f64)>;
type ResizeStartHook = Box<dyn FnMut(Handle, Point) -> bool>;
type ResizeHook = Box<dyn FnMut(Handle, &Rect) -> bool>;
type ResizeStopHook = Box<dyn FnMut(&Rect)>;
type NotifyHook = Box<dyn FnMut()>;

/// Callbacks an engine invokes around gestures
#[derive(Default)]
pub struct Hooks {
    on_drag_start: Option<StartHook>,
    on_drag: Option<DragHook>,
    on_drag_stop: Option<DragStopHook>,
    on_resize_start: Option<ResizeStartHook>,
    on_resize: Option<ResizeHook>,
    on_resize_stop: Option<ResizeStopHook>,
    on_activated: Option<NotifyHook>,
    on_deactivated: Option<NotifyHook>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the press position; returning false cancels the drag
    pub fn on_drag_start(mut self, f: impl FnMut(Point) -> bool + 'static) -> Self {
        self.on_drag_start = Some(Box::new(f));
        self
    }

    /// Called with the candidate left/top; returning false discards the move
    pub fn on_drag(mut self, f: impl FnMut(f64, f64) -> bool + 'static) -> Self {
        self.on_drag = Some(Box::new(f));
        self
    }

    /// Called with the final left/top after a drag that moved the element
    pub fn on_drag_stop(mut self, f: impl FnMut(f64, f64) + 'static) -> Self {
        self.on_drag_stop = Some(Box::new(f));
        self
    }

    /// Called with the handle and press position; returning false cancels
    pub fn on_resize_start(mut self, f: impl FnMut(Handle, Point) -> bool + 'static) -> Self {
        self.on_resize_start = Some(Box::new(f));
        self
    }

    /// Called with the candidate rect; returning false discards the move
    pub fn on_resize(mut self, f: impl FnMut(Handle, &Rect) -> bool + 'static) -> Self {
        self.on_resize = Some(Box::new(f));
        self
    }

    /// Called with the final rect after a resize that changed the element
    pub fn on_resize_stop(mut self, f: impl FnMut(&Rect) + 'static) -> Self {
        self.on_resize_stop = Some(Box::new(f));
        self
    }

    pub fn on_activated(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_activated = Some(Box::new(f));
        self
    }

    pub fn on_deactivated(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_deactivated = Some(Box::new(f));
        self
    }

    pub(crate) fn allow_drag_start(&mut self, pointer: Point) -> bool {
        self.on_drag_start.as_mut().map_or(true, |f| f(pointer))
    }

    pub(crate) fn allow_drag(&mut self, left: f64, top: f64) -> bool {
        self.on_drag.as_mut().map_or(true, |f| f(left, top))
    }

    pub(crate) fn drag_stopped(&mut self, left: f64, top: f64) {
        if let Some(f) = self.on_drag_stop.as_mut() {
            f(left, top);
        }
    }

    pub(crate) fn allow_resize_start(&mut self, handle: Handle, pointer: Point) -> bool {
        self.on_resize_start.as_mut().map_or(true, |f| f(handle, pointer))
    }

    pub(crate) fn allow_resize(&mut self, handle: Handle, rect: &Rect) -> bool {
        self.on_resize.as_mut().map_or(true, |f| f(handle, rect))
    }

    pub(crate) fn resize_stopped(&mut self, rect: &Rect) {
        if let Some(f) = self.on_resize_stop.as_mut() {
            f(rect);
        }
    }

    pub(crate) fn activated(&mut self) {
        if let Some(f) = self.on_activated.as_mut() {
            f();
        }
    }

    pub(crate) fn deactivated(&mut self) {
        if let Some(f) = self.on_deactivated.as_mut() {
            f();
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_drag_start", &self.on_drag_start.is_some())
            .field("on_drag", &self.on_drag.is_some())
            .field("on_drag_stop", &self.on_drag_stop.is_some())
            .field("on_resize_start", &self.on_resize_start.is_some())
            .field("on_resize", &self.on_resize.is_some())
            .field("on_resize_stop", &self.on_resize_stop.is_some())
            .field("on_activated", &self.on_activated.is_some())
            .field("on_deactivated", &self.on_deactivated.is_some())
            .finish()
    }
}

/// Answers whether the pressed target matches a drag-handle or drag-cancel
/// selector. Selector syntax is up to the host.
pub trait TargetMatcher {
    fn matches(&self, selector: &str) -> bool;
}

impl<F> TargetMatcher for F
where
    F: Fn(&str) -> bool,
{
    fn matches(&self, selector: &str) -> bool {
        self(selector)
    }
}

/// A press with no target information; matches no selector
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTarget;

impl TargetMatcher for NoTarget {
    fn matches(&self, _selector: &str) -> bool {
        false
    }
}

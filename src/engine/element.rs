//! The per-element engine: configuration, current rectangle, activation and
//! the gesture state machine

use tracing::{debug, trace, warn};

use crate::geometry::{
    drag_bounds, height_from_edges, resize_bounds, resolve_drag, resolve_resize, width_from_edges,
    AspectLock, Bounds, Constraints, GestureAnchor, Handle, ParentFrame, Point, Rect, Size,
};

use super::config::EngineConfig;
use super::error::{EngineError, GestureRejection};
use super::hooks::{Hooks, NoTarget, TargetMatcher};
use super::machine::{InteractionStateMachine, Phase, Stopped};

/// A width or height as a host should style it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleDimension {
    /// Leave the dimension to the element's natural size
    Auto,
    Px(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSize {
    pub width: StyleDimension,
    pub height: StyleDimension,
}

/// Result of ending a gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSummary {
    pub rect: Rect,
    /// A drag gesture committed at least one move
    pub was_dragging: bool,
    /// A resize gesture committed at least one move
    pub was_resizing: bool,
}

/// Everything a renderer needs to draw the element
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub rect: Rect,
    pub parent: Option<ParentFrame>,
    pub active: bool,
    pub handles: Vec<Handle>,
}

/// One draggable, resizable element
#[derive(Debug)]
pub struct Engine {
    constraints: Constraints,
    rect: Rect,
    active: bool,
    draggable: bool,
    resizable: bool,
    prevent_deactivation: bool,
    handles: Vec<Handle>,
    drag_handle: Option<String>,
    drag_cancel: Option<String>,
    width_auto: bool,
    height_auto: bool,
    width_touched: bool,
    height_touched: bool,
    hooks: Hooks,
    machine: InteractionStateMachine,
}

impl Engine {
    /// Build an engine from a configuration.
    ///
    /// `"auto"` dimensions take the configuration's `natural_size`, or 0 when
    /// it is absent.
    pub fn configure(config: EngineConfig) -> Result<Self, EngineError> {
        let natural = config.natural().unwrap_or_default();
        Self::configure_measured(config, natural)
    }

    /// Build an engine, resolving `"auto"` dimensions against `natural`
    pub fn configure_measured(config: EngineConfig, natural: Size) -> Result<Self, EngineError> {
        config.validate()?;

        let rect = Rect::new(
            config.x,
            config.y,
            config.w.resolve(natural.width),
            config.h.resolve(natural.height),
        );
        let aspect = capture_aspect(&rect, config.lock_aspect_ratio)?;

        let constraints = Constraints {
            limits: config.limits(),
            grid: config.grid_spec(),
            scale: config.scale.to_scale(),
            aspect,
            axis: config.axis,
            parent: config.parent_frame(),
        };

        debug!(%rect, ?constraints, "engine configured");

        Ok(Self {
            constraints,
            rect,
            active: config.active,
            draggable: config.draggable,
            resizable: config.resizable,
            prevent_deactivation: config.prevent_deactivation,
            handles: config.handles,
            drag_handle: config.drag_handle,
            drag_cancel: config.drag_cancel,
            width_auto: config.w.is_auto(),
            height_auto: config.h.is_auto(),
            width_touched: false,
            height_touched: false,
            hooks: Hooks::default(),
            machine: InteractionStateMachine::new(),
        })
    }

    /// Attach gesture and activation callbacks
    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Distance from the right edge to the parent's right edge
    pub fn right(&self) -> Option<f64> {
        self.constraints.parent.map(|p| p.right_of(&self.rect))
    }

    /// Distance from the bottom edge to the parent's bottom edge
    pub fn bottom(&self) -> Option<f64> {
        self.constraints.parent.map(|p| p.bottom_of(&self.rect))
    }

    pub fn parent(&self) -> Option<ParentFrame> {
        self.constraints.parent
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn phase(&self) -> &Phase {
        self.machine.phase()
    }

    pub fn aspect(&self) -> AspectLock {
        self.constraints.aspect
    }

    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    /// Size as a host should style it; untouched auto dimensions stay auto
    pub fn style_size(&self) -> StyleSize {
        let dim = |auto: bool, touched: bool, value: f64| {
            if auto && !touched {
                StyleDimension::Auto
            } else {
                StyleDimension::Px(value)
            }
        };
        StyleSize {
            width: dim(self.width_auto, self.width_touched, self.rect.width),
            height: dim(self.height_auto, self.height_touched, self.rect.height),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rect: self.rect,
            parent: self.constraints.parent,
            active: self.active,
            handles: self.handles.clone(),
        }
    }

    /// Start a drag with no target information
    pub fn begin_drag(&mut self, pointer: Point) -> Result<Bounds, GestureRejection> {
        self.begin_drag_on(pointer, &NoTarget)
    }

    /// Start a drag on a pressed target.
    ///
    /// A press that passes the hook and selector checks activates the element
    /// even when dragging is switched off.
    pub fn begin_drag_on(
        &mut self,
        pointer: Point,
        target: &dyn TargetMatcher,
    ) -> Result<Bounds, GestureRejection> {
        self.check_drag_start(pointer, target)
            .inspect_err(|reason| debug!(%reason, "drag rejected"))?;

        let anchor = GestureAnchor::new(pointer, self.rect);
        let bounds = drag_bounds(&self.rect, self.constraints.parent);
        self.machine.start_drag(anchor, bounds)?;

        debug!(x = pointer.x, y = pointer.y, rect = %self.rect, "drag started");
        Ok(bounds)
    }

    fn check_drag_start(
        &mut self,
        pointer: Point,
        target: &dyn TargetMatcher,
    ) -> Result<(), GestureRejection> {
        if self.machine.is_active() {
            return Err(GestureRejection::GestureActive);
        }
        if !self.hooks.allow_drag_start(pointer) {
            return Err(GestureRejection::Vetoed);
        }
        if let Some(selector) = &self.drag_handle {
            if !target.matches(selector) {
                return Err(GestureRejection::OutsideDragHandle);
            }
        }
        if let Some(selector) = &self.drag_cancel {
            if target.matches(selector) {
                return Err(GestureRejection::InsideDragCancel);
            }
        }

        self.activate();

        if !self.draggable {
            return Err(GestureRejection::NotDraggable);
        }
        Ok(())
    }

    /// Start a resize on `handle`.
    ///
    /// With the aspect ratio locked, corner handles are remapped to the mid
    /// handle on the same horizontal side.
    pub fn begin_resize(&mut self, handle: Handle, pointer: Point) -> Result<Bounds, GestureRejection> {
        self.check_resize_start(handle, pointer)
            .inspect_err(|reason| debug!(%handle, %reason, "resize rejected"))?;

        let effective = if self.constraints.aspect.enabled && handle.is_corner() {
            handle.aspect_locked()
        } else {
            handle
        };

        let c = &self.constraints;
        let bounds = resize_bounds(&self.rect, c.parent, &c.limits, c.aspect, c.grid);
        let anchor = GestureAnchor::new(pointer, self.rect);
        self.machine.start_resize(effective, anchor, bounds)?;

        debug!(%handle, %effective, rect = %self.rect, "resize started");
        Ok(bounds)
    }

    fn check_resize_start(&mut self, handle: Handle, pointer: Point) -> Result<(), GestureRejection> {
        if self.machine.is_active() {
            return Err(GestureRejection::GestureActive);
        }
        if !self.resizable {
            return Err(GestureRejection::NotResizable);
        }
        if !self.handles.contains(&handle) {
            return Err(GestureRejection::HandleDisabled(handle));
        }
        if !self.hooks.allow_resize_start(handle, pointer) {
            return Err(GestureRejection::Vetoed);
        }
        Ok(())
    }

    /// Move the pointer during a drag
    pub fn update_drag(&mut self, pointer: Point) -> Rect {
        let Phase::PendingDrag { anchor, bounds, .. } = *self.machine.phase() else {
            warn!(x = pointer.x, y = pointer.y, "drag update without an active drag");
            return self.rect;
        };

        let candidate = resolve_drag(&self.constraints, &anchor, &bounds, pointer);
        if !self.hooks.allow_drag(candidate.left, candidate.top) {
            trace!(%candidate, "drag move vetoed");
            return self.rect;
        }

        trace!(%candidate, "drag move");
        self.rect = candidate;
        self.machine.mark_touched();
        self.rect
    }

    /// Move the pointer during a resize
    pub fn update_resize(&mut self, pointer: Point) -> Rect {
        let Phase::PendingResize { handle, anchor, .. } = *self.machine.phase() else {
            warn!(x = pointer.x, y = pointer.y, "resize update without an active resize");
            return self.rect;
        };

        if pointer.x != anchor.pointer.x {
            self.width_touched = true;
        }
        if pointer.y != anchor.pointer.y {
            self.height_touched = true;
        }

        let candidate = resolve_resize(&self.constraints, handle, &anchor, pointer);
        if !self.hooks.allow_resize(handle, &candidate) {
            trace!(%handle, %candidate, "resize move vetoed");
            return self.rect;
        }

        trace!(%handle, %candidate, "resize move");
        self.rect = candidate;
        self.machine.mark_touched();
        self.rect
    }

    /// Move the pointer, dispatching on the gesture in progress
    pub fn update(&mut self, pointer: Point) -> Rect {
        match *self.machine.phase() {
            Phase::PendingDrag { .. } => self.update_drag(pointer),
            Phase::PendingResize { .. } => self.update_resize(pointer),
            Phase::Idle => {
                warn!(x = pointer.x, y = pointer.y, "pointer move while idle");
                self.rect
            }
        }
    }

    /// Release the pointer, ending any gesture in progress.
    ///
    /// Stop hooks fire only for gestures that committed a move.
    pub fn end(&mut self) -> GestureSummary {
        let stopped = self.machine.stop();
        let rect = self.rect;

        let summary = GestureSummary {
            rect,
            was_dragging: matches!(stopped, Some(Stopped::Drag { touched: true })),
            was_resizing: matches!(stopped, Some(Stopped::Resize { touched: true, .. })),
        };

        if summary.was_dragging {
            self.hooks.drag_stopped(rect.left, rect.top);
        }
        if summary.was_resizing {
            self.hooks.resize_stopped(&rect);
        }

        match stopped {
            Some(stopped) => debug!(?stopped, %rect, "gesture ended"),
            None => trace!("release without a gesture"),
        }
        summary
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.rect.left = x;
        self.rect.top = y;
        debug!(rect = %self.rect, "position set");
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.rect.width = width;
        self.rect.height = height;
        debug!(rect = %self.rect, "size set");
    }

    /// Place the element by its distance from each parent edge.
    ///
    /// Without a parent only `left` and `top` apply.
    pub fn set_edges(&mut self, left: f64, top: f64, right: f64, bottom: f64) {
        let parent = self.constraints.parent;
        self.rect.width = width_from_edges(parent.map(|p| p.width), left, right, self.rect.width);
        self.rect.height = height_from_edges(parent.map(|p| p.height), top, bottom, self.rect.height);
        self.rect.left = left;
        self.rect.top = top;
        debug!(rect = %self.rect, "edges set");
    }

    /// Replace the parent frame; `right` and `bottom` re-derive from it
    pub fn on_parent_resized(&mut self, parent: Option<ParentFrame>) {
        self.constraints.parent = parent.and_then(ParentFrame::usable);
        debug!(parent = ?self.constraints.parent, "parent resized");
    }

    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        debug!("activated");
        self.hooks.activated();
    }

    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        debug!("deactivated");
        self.hooks.deactivated();
    }

    /// A press outside the element; deactivates unless that is prevented
    pub fn deselect(&mut self) {
        if self.prevent_deactivation {
            trace!("deselect ignored, deactivation prevented");
            return;
        }
        self.deactivate();
    }

    /// Recapture the aspect factor from the current rectangle
    pub fn reset_aspect_factor(&mut self) -> Result<(), EngineError> {
        self.constraints.aspect = capture_aspect(&self.rect, self.constraints.aspect.enabled)?;
        Ok(())
    }

    /// Lock or unlock the aspect ratio, keeping the captured factor
    pub fn set_aspect_lock(&mut self, enabled: bool) -> Result<(), EngineError> {
        let factor = self.constraints.aspect.factor;
        if enabled {
            usable_factor(factor)?;
        }
        self.constraints.aspect = AspectLock { enabled, factor };
        Ok(())
    }
}

fn capture_aspect(rect: &Rect, locked: bool) -> Result<AspectLock, EngineError> {
    let factor = rect.ratio();
    if locked {
        usable_factor(factor)?;
        Ok(AspectLock::locked(factor))
    } else {
        Ok(AspectLock { enabled: false, factor })
    }
}

fn usable_factor(factor: f64) -> Result<(), EngineError> {
    if factor.is_finite() && factor > 0.0 {
        Ok(())
    } else {
        Err(EngineError::invalid(
            "lock_aspect_ratio",
            "aspect ratio needs a non-zero width and height",
        ))
    }
}

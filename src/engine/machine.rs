//! Gesture lifecycle: idle, dragging or resizing
//!
//! The machine owns the anchor and bounds captured when a gesture starts and
//! drops them when it stops. It knows nothing about hooks or geometry; the
//! [`super::Engine`] decides whether a transition may happen.

use crate::geometry::{Bounds, GestureAnchor, Handle};

use super::error::GestureRejection;

/// Current gesture state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// A drag press was accepted; `touched` once a move has been committed
    PendingDrag {
        anchor: GestureAnchor,
        bounds: Bounds,
        touched: bool,
    },
    /// A resize press was accepted on `handle` (already remapped for aspect lock)
    PendingResize {
        handle: Handle,
        anchor: GestureAnchor,
        bounds: Bounds,
        touched: bool,
    },
}

impl Phase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Phase::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Phase::PendingDrag { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Phase::PendingResize { .. })
    }

    /// Anchor of the gesture in progress
    pub fn anchor(&self) -> Option<&GestureAnchor> {
        match self {
            Phase::Idle => None,
            Phase::PendingDrag { anchor, .. } | Phase::PendingResize { anchor, .. } => Some(anchor),
        }
    }

    /// Bounds captured for the gesture in progress
    pub fn bounds(&self) -> Option<&Bounds> {
        match self {
            Phase::Idle => None,
            Phase::PendingDrag { bounds, .. } | Phase::PendingResize { bounds, .. } => Some(bounds),
        }
    }
}

/// Which kind of gesture ended, and whether it moved the element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stopped {
    Drag { touched: bool },
    Resize { handle: Handle, touched: bool },
}

impl Stopped {
    pub fn touched(self) -> bool {
        match self {
            Stopped::Drag { touched } | Stopped::Resize { touched, .. } => touched,
        }
    }
}

#[derive(Debug, Default)]
pub struct InteractionStateMachine {
    phase: Phase,
}

impl InteractionStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_active(&self) -> bool {
        !self.phase.is_idle()
    }

    pub fn start_drag(&mut self, anchor: GestureAnchor, bounds: Bounds) -> Result<(), GestureRejection> {
        self.ensure_idle()?;
        self.phase = Phase::PendingDrag {
            anchor,
            bounds,
            touched: false,
        };
        Ok(())
    }

    pub fn start_resize(
        &mut self,
        handle: Handle,
        anchor: GestureAnchor,
        bounds: Bounds,
    ) -> Result<(), GestureRejection> {
        self.ensure_idle()?;
        self.phase = Phase::PendingResize {
            handle,
            anchor,
            bounds,
            touched: false,
        };
        Ok(())
    }

    /// Record that the gesture committed a move
    pub fn mark_touched(&mut self) {
        match &mut self.phase {
            Phase::Idle => {}
            Phase::PendingDrag { touched, .. } | Phase::PendingResize { touched, .. } => {
                *touched = true;
            }
        }
    }

    /// Return to idle, reporting the gesture that was in progress
    pub fn stop(&mut self) -> Option<Stopped> {
        match std::mem::take(&mut self.phase) {
            Phase::Idle => None,
            Phase::PendingDrag { touched, .. } => Some(Stopped::Drag { touched }),
            Phase::PendingResize { handle, touched, .. } => Some(Stopped::Resize { handle, touched }),
        }
    }

    fn ensure_idle(&self) -> Result<(), GestureRejection> {
        if self.is_active() {
            Err(GestureRejection::GestureActive)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Rect};

    fn anchor() -> GestureAnchor {
        GestureAnchor::new(Point::new(1.0, 2.0), Rect::new(0.0, 0.0, 10.0, 10.0))
    }

    #[test]
    fn test_starts_idle() {
        let machine = InteractionStateMachine::new();
        assert!(machine.phase().is_idle());
        assert!(machine.phase().anchor().is_none());
        assert!(!machine.is_active());
    }

    #[test]
    fn test_drag_lifecycle() {
        let mut machine = InteractionStateMachine::new();
        machine.start_drag(anchor(), Bounds::unbounded()).unwrap();
        assert!(machine.phase().is_dragging());
        assert_eq!(machine.phase().anchor(), Some(&anchor()));

        machine.mark_touched();
        assert_eq!(machine.stop(), Some(Stopped::Drag { touched: true }));
        assert!(machine.phase().is_idle());
        assert_eq!(machine.stop(), None);
    }

    #[test]
    fn test_untouched_resize_reports_untouched() {
        let mut machine = InteractionStateMachine::new();
        machine
            .start_resize(Handle::Br, anchor(), Bounds::unbounded())
            .unwrap();
        assert!(machine.phase().is_resizing());
        let stopped = machine.stop().unwrap();
        assert!(!stopped.touched());
        assert_eq!(
            stopped,
            Stopped::Resize {
                handle: Handle::Br,
                touched: false
            }
        );
    }

    #[test]
    fn test_second_start_is_rejected() {
        let mut machine = InteractionStateMachine::new();
        machine.start_drag(anchor(), Bounds::unbounded()).unwrap();
        let result = machine.start_resize(Handle::Tl, anchor(), Bounds::unbounded());
        assert_eq!(result, Err(GestureRejection::GestureActive));
        assert!(machine.phase().is_dragging());
    }

    #[test]
    fn test_mark_touched_while_idle_is_noop() {
        let mut machine = InteractionStateMachine::new();
        machine.mark_touched();
        assert!(machine.phase().is_idle());
    }
}

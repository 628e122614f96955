//! Error types for the interaction engine

use thiserror::Error;

use crate::geometry::Handle;

/// Errors raised while configuring an engine
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// A configuration value violates the engine's contract
    #[error("invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },
}

impl EngineError {
    /// Create an invalid configuration error
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending configuration field
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidConfiguration { field, .. } => field,
        }
    }
}

/// Why a gesture start request was refused.
///
/// A refusal leaves the engine exactly as it was, apart from the activation
/// a press on a non-draggable element performs.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GestureRejection {
    /// Another gesture is still in progress
    #[error("a gesture is already in progress")]
    GestureActive,

    /// The start hook returned false
    #[error("vetoed by start hook")]
    Vetoed,

    /// A drag handle is configured and the pressed target is not inside it
    #[error("target is outside the drag handle")]
    OutsideDragHandle,

    /// The pressed target is inside the drag-cancel region
    #[error("target is inside the drag-cancel region")]
    InsideDragCancel,

    /// Dragging is switched off for this element
    #[error("element is not draggable")]
    NotDraggable,

    /// Resizing is switched off for this element
    #[error("element is not resizable")]
    NotResizable,

    /// The handle is not in the element's enabled handle set
    #[error("handle '{0}' is not enabled")]
    HandleDisabled(Handle),
}

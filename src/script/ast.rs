//! Syntax tree for gesture scripts

use crate::geometry::{Handle, Point};

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// AST node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Root node: the statements of a script, in order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Script {
    pub statements: Vec<Spanned<Statement>>,
}

/// One script statement
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Whole drag gesture: `drag (x, y) -> (x, y) ... [on: "sel"]`
    Drag {
        path: Vec<Spanned<Point>>,
        targets: Vec<String>,
    },
    /// Whole resize gesture: `resize br (x, y) -> (x, y) ...`
    Resize {
        handle: Spanned<Handle>,
        path: Vec<Spanned<Point>>,
    },
    /// Begin a drag: `press (x, y) [on: "sel"]`
    PressDrag { at: Point, targets: Vec<String> },
    /// Begin a resize: `press ml (x, y)`
    PressResize { handle: Spanned<Handle>, at: Point },
    /// `move (x, y)`
    Move(Point),
    /// `release`
    Release,
    /// `position (x, y)`
    Position(Point),
    /// `size (w, h)`
    Size { width: f64, height: f64 },
    /// `edges (left, top, right, bottom)`
    Edges {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    },
    /// `parent (w, h)` or `parent none`
    Parent(Option<(f64, f64)>),
    Activate,
    Deactivate,
    Deselect,
}

impl Statement {
    /// The keyword that introduces the statement
    pub fn verb(&self) -> &'static str {
        match self {
            Statement::Drag { .. } => "drag",
            Statement::Resize { .. } => "resize",
            Statement::PressDrag { .. } | Statement::PressResize { .. } => "press",
            Statement::Move(_) => "move",
            Statement::Release => "release",
            Statement::Position(_) => "position",
            Statement::Size { .. } => "size",
            Statement::Edges { .. } => "edges",
            Statement::Parent(_) => "parent",
            Statement::Activate => "activate",
            Statement::Deactivate => "deactivate",
            Statement::Deselect => "deselect",
        }
    }
}

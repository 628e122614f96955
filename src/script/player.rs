//! Executes a parsed script against an engine and records what happened

use std::fmt;

use tracing::debug;

use crate::engine::{Engine, GestureRejection, Snapshot, TargetMatcher};
use crate::geometry::{ParentFrame, Point, Rect};

use super::ast::{Script, Span, Spanned, Statement};

/// How the engine responded to one statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Rejected(GestureRejection),
    /// The statement had nothing to act on, such as a move while idle
    Ignored,
}

/// One executed statement
#[derive(Debug, Clone, PartialEq)]
pub struct TraceStep {
    pub span: Span,
    pub verb: &'static str,
    pub outcome: Outcome,
    /// Element rectangle after the statement ran
    pub rect: Rect,
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Applied => write!(f, "{}: {}", self.verb, self.rect),
            Outcome::Rejected(reason) => write!(f, "{}: rejected ({})", self.verb, reason),
            Outcome::Ignored => write!(f, "{}: ignored (no gesture in progress)", self.verb),
        }
    }
}

/// Record of a whole replay
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub steps: Vec<TraceStep>,
    /// Engine state after the last statement
    pub snapshot: Snapshot,
}

impl Trace {
    pub fn final_rect(&self) -> Rect {
        self.snapshot.rect
    }

    pub fn rejections(&self) -> impl Iterator<Item = &TraceStep> + '_ {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, Outcome::Rejected(_)))
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{}", step)?;
        }
        Ok(())
    }
}

/// Run every statement of `script` against `engine`
pub fn play(script: &Script, engine: &mut Engine) -> Trace {
    let steps = script
        .statements
        .iter()
        .map(|statement| step(statement, engine))
        .collect();

    Trace {
        steps,
        snapshot: engine.snapshot(),
    }
}

fn step(statement: &Spanned<Statement>, engine: &mut Engine) -> TraceStep {
    let outcome = execute(&statement.node, engine);
    let step = TraceStep {
        span: statement.span.clone(),
        verb: statement.node.verb(),
        outcome,
        rect: engine.rect(),
    };
    debug!(span = ?step.span, %step, "script step");
    step
}

fn execute(statement: &Statement, engine: &mut Engine) -> Outcome {
    match statement {
        Statement::Drag { path, targets } => {
            let (first, rest) = split_path(path);
            match engine.begin_drag_on(first, &Selectors(targets)) {
                Ok(_) => finish_gesture(engine, rest),
                Err(reason) => Outcome::Rejected(reason),
            }
        }
        Statement::Resize { handle, path } => {
            let (first, rest) = split_path(path);
            match engine.begin_resize(handle.node, first) {
                Ok(_) => finish_gesture(engine, rest),
                Err(reason) => Outcome::Rejected(reason),
            }
        }
        Statement::PressDrag { at, targets } => {
            outcome_of(engine.begin_drag_on(*at, &Selectors(targets)).map(drop))
        }
        Statement::PressResize { handle, at } => {
            outcome_of(engine.begin_resize(handle.node, *at).map(drop))
        }
        Statement::Move(at) => {
            if engine.phase().is_idle() {
                return Outcome::Ignored;
            }
            engine.update(*at);
            Outcome::Applied
        }
        Statement::Release => {
            if engine.phase().is_idle() {
                return Outcome::Ignored;
            }
            engine.end();
            Outcome::Applied
        }
        Statement::Position(at) => {
            engine.set_position(at.x, at.y);
            Outcome::Applied
        }
        Statement::Size { width, height } => {
            engine.set_size(*width, *height);
            Outcome::Applied
        }
        Statement::Edges {
            left,
            top,
            right,
            bottom,
        } => {
            engine.set_edges(*left, *top, *right, *bottom);
            Outcome::Applied
        }
        Statement::Parent(size) => {
            engine.on_parent_resized(size.map(|(w, h)| ParentFrame::new(w, h)));
            Outcome::Applied
        }
        Statement::Activate => {
            engine.activate();
            Outcome::Applied
        }
        Statement::Deactivate => {
            engine.deactivate();
            Outcome::Applied
        }
        Statement::Deselect => {
            engine.deselect();
            Outcome::Applied
        }
    }
}

fn outcome_of(result: Result<(), GestureRejection>) -> Outcome {
    match result {
        Ok(()) => Outcome::Applied,
        Err(reason) => Outcome::Rejected(reason),
    }
}

/// Moves through the remaining points, then releases
fn finish_gesture(engine: &mut Engine, rest: &[Spanned<Point>]) -> Outcome {
    for point in rest {
        engine.update(point.node);
    }
    engine.end();
    Outcome::Applied
}

fn split_path(path: &[Spanned<Point>]) -> (Point, &[Spanned<Point>]) {
    match path.split_first() {
        Some((first, rest)) => (first.node, rest),
        // The grammar requires two points; an empty path starts and ends in place
        None => (Point::default(), &[]),
    }
}

/// Selectors listed in a statement's `[on: ...]` modifier
struct Selectors<'a>(&'a [String]);

impl TargetMatcher for Selectors<'_> {
    fn matches(&self, selector: &str) -> bool {
        self.0.iter().any(|s| s == selector)
    }
}

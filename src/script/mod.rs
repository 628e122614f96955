//! Gesture scripts: a small line-oriented language for driving an engine
//! without a host UI

pub mod ast;
mod grammar;
pub mod lexer;
pub mod player;

pub use ast::*;
pub use grammar::parse;
pub use player::{play, Outcome, Trace, TraceStep};

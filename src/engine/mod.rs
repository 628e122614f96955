//! Stateful interaction engine for one draggable, resizable element
//!
//! The [`Engine`] owns the element's rectangle and drives the
//! [`crate::geometry`] resolvers from pointer input:
//!
//! ```
//! use dragbox::engine::{Engine, EngineConfig};
//! use dragbox::geometry::Point;
//!
//! let mut engine = Engine::configure(EngineConfig::new().with_grid(10.0, 10.0)).unwrap();
//! engine.begin_drag(Point::new(0.0, 0.0)).unwrap();
//! engine.update(Point::new(53.0, 27.0));
//! let rect = engine.end().rect;
//! assert_eq!((rect.left, rect.top), (50.0, 30.0));
//! ```

pub mod config;
pub mod element;
pub mod error;
pub mod hooks;
pub mod machine;

pub use config::{ConfigError, Dimension, EngineConfig, ScaleSetting};
pub use element::{Engine, GestureSummary, Snapshot, StyleDimension, StyleSize};
pub use error::{EngineError, GestureRejection};
pub use hooks::{Hooks, NoTarget, TargetMatcher};
pub use machine::{InteractionStateMachine, Phase, Stopped};

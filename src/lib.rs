//! dragbox - geometry and constraint resolution for draggable, resizable
//! rectangles
//!
//! The [`geometry`] module holds the pure math (grid snapping, bounds,
//! drag and resize resolution), [`engine`] drives it from pointer gestures,
//! and [`script`] replays gesture scripts against an engine.
//!
//! # Example
//!
//! ```rust
//! use dragbox::{replay, EngineConfig};
//!
//! let trace = replay("drag (0, 0) -> (50, 30)", &EngineConfig::default()).unwrap();
//! assert_eq!(trace.final_rect().left, 50.0);
//! assert_eq!(trace.final_rect().top, 30.0);
//! ```

pub mod engine;
pub mod error;
pub mod geometry;
pub mod renderer;
pub mod script;

pub use engine::{
    ConfigError, Engine, EngineConfig, EngineError, GestureRejection, GestureSummary, Hooks,
    Snapshot, TargetMatcher,
};
pub use error::ParseError;
pub use geometry::{Handle, ParentFrame, Point, Rect, Size};
pub use renderer::{render_svg, HandleVisibility, SvgConfig};
pub use script::{parse, play, Script, Trace};

use thiserror::Error;

/// Errors that can occur during the replay pipeline
#[derive(Debug, Error)]
pub enum ReplayError {
    /// Error during parsing
    #[error("parse errors: {}", format_parse_errors(.0))]
    Parse(Vec<ParseError>),

    /// The engine configuration was rejected
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

impl From<Vec<ParseError>> for ReplayError {
    fn from(errors: Vec<ParseError>) -> Self {
        ReplayError::Parse(errors)
    }
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration for the complete replay pipeline
#[derive(Debug, Clone, Default)]
pub struct ReplayConfig {
    /// Element configuration the script starts from
    pub engine: EngineConfig,
    /// Measured size for `"auto"` dimensions, overriding `natural_size`
    pub natural_size: Option<Size>,
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl ReplayConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the engine configuration
    pub fn with_engine(mut self, config: EngineConfig) -> Self {
        self.engine = config;
        self
    }

    /// Set the measured natural size
    pub fn with_natural_size(mut self, size: Size) -> Self {
        self.natural_size = Some(size);
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }
}

/// Replay a gesture script against a freshly configured engine
pub fn replay(source: &str, config: &EngineConfig) -> Result<Trace, ReplayError> {
    replay_with_config(source, &ReplayConfig::new().with_engine(config.clone()))
}

/// Replay a gesture script with a custom pipeline configuration
///
/// # Example
///
/// ```rust
/// use dragbox::{replay_with_config, EngineConfig, ReplayConfig};
///
/// let config = ReplayConfig::new()
///     .with_engine(EngineConfig::new().with_grid(10.0, 10.0).with_parent(300.0, 300.0));
///
/// let trace = replay_with_config("drag (0, 0) -> (153, 27)", &config).unwrap();
/// assert_eq!(trace.final_rect().left, 100.0);
/// assert_eq!(trace.final_rect().top, 30.0);
/// ```
pub fn replay_with_config(source: &str, config: &ReplayConfig) -> Result<Trace, ReplayError> {
    let script = parse(source)?;

    let engine_config = config.engine.clone();
    let mut engine = match config.natural_size {
        Some(size) => Engine::configure_measured(engine_config, size)?,
        None => Engine::configure(engine_config)?,
    };

    Ok(play(&script, &mut engine))
}

/// Replay a gesture script and render the final state to SVG
pub fn render(source: &str, config: &ReplayConfig) -> Result<String, ReplayError> {
    let trace = replay_with_config(source, config)?;
    Ok(render_svg(&trace.snapshot, &config.svg))
}

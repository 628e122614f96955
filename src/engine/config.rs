//! Element configuration, loadable from TOML
//!
//! Every field has a default, so a configuration file only needs to list
//! what differs:
//!
//! ```toml
//! x = 10
//! w = 200
//! h = "auto"
//! grid = [10, 10]
//! parent = [800, 600]
//! lock_aspect_ratio = true
//! handles = ["tl", "tr", "br", "bl"]
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::geometry::{Axis, GridSpec, Handle, ParentFrame, Scale, Size, SizeLimits};

use super::error::EngineError;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse configuration TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] EngineError),
}

/// An initial width or height: fixed pixels, or the element's natural size
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "DimensionRepr")]
pub enum Dimension {
    Px(f64),
    Auto,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DimensionRepr {
    Number(f64),
    Keyword(String),
}

impl TryFrom<DimensionRepr> for Dimension {
    type Error = String;

    fn try_from(repr: DimensionRepr) -> Result<Self, Self::Error> {
        match repr {
            DimensionRepr::Number(v) => Ok(Dimension::Px(v)),
            DimensionRepr::Keyword(k) if k == "auto" => Ok(Dimension::Auto),
            DimensionRepr::Keyword(k) => Err(format!("expected a number or \"auto\", got \"{}\"", k)),
        }
    }
}

impl Dimension {
    pub fn is_auto(self) -> bool {
        self == Dimension::Auto
    }

    /// Resolve against a measured natural length
    pub fn resolve(self, natural: f64) -> f64 {
        match self {
            Dimension::Px(v) => v,
            Dimension::Auto => natural,
        }
    }
}

/// Render scale: one factor for both axes or one per axis
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScaleSetting {
    Uniform(f64),
    PerAxis([f64; 2]),
}

impl ScaleSetting {
    pub fn to_scale(self) -> Scale {
        match self {
            ScaleSetting::Uniform(f) => Scale::uniform(f),
            ScaleSetting::PerAxis([x, y]) => Scale { x, y },
        }
    }
}

/// Configuration options for one draggable, resizable element
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Initial left offset
    pub x: f64,
    /// Initial top offset
    pub y: f64,
    /// Initial width
    pub w: Dimension,
    /// Initial height
    pub h: Dimension,

    pub min_width: f64,
    pub min_height: f64,
    pub max_width: Option<f64>,
    pub max_height: Option<f64>,

    /// Axis drag gestures may move along
    pub axis: Axis,
    /// Snap increments `[x, y]`
    pub grid: [f64; 2],
    pub scale: ScaleSetting,
    /// Size of the containing frame `[width, height]`
    pub parent: Option<[f64; 2]>,

    pub lock_aspect_ratio: bool,
    pub draggable: bool,
    pub resizable: bool,
    /// Whether the element starts out activated
    pub active: bool,
    /// Keep the element active when it is deselected
    pub prevent_deactivation: bool,

    /// Handles that can start a resize
    pub handles: Vec<Handle>,
    /// Selector a pressed target must match for a drag to start
    pub drag_handle: Option<String>,
    /// Selector that prevents a drag from starting
    pub drag_cancel: Option<String>,

    /// Measured size used for `"auto"` dimensions
    pub natural_size: Option<[f64; 2]>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            w: Dimension::Px(200.0),
            h: Dimension::Px(200.0),
            min_width: 0.0,
            min_height: 0.0,
            max_width: None,
            max_height: None,
            axis: Axis::Both,
            grid: [1.0, 1.0],
            scale: ScaleSetting::Uniform(1.0),
            parent: None,
            lock_aspect_ratio: false,
            draggable: true,
            resizable: true,
            active: false,
            prevent_deactivation: false,
            handles: Handle::ALL.to_vec(),
            drag_handle: None,
            drag_cancel: None,
            natural_size: None,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load and validate a configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the initial position
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the initial size in pixels
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.w = Dimension::Px(width);
        self.h = Dimension::Px(height);
        self
    }

    /// Set the initial width and height dimensions
    pub fn with_dimensions(mut self, w: Dimension, h: Dimension) -> Self {
        self.w = w;
        self.h = h;
        self
    }

    /// Set the minimum size
    pub fn with_min_size(mut self, width: f64, height: f64) -> Self {
        self.min_width = width;
        self.min_height = height;
        self
    }

    /// Set the maximum size; `None` leaves that axis unbounded
    pub fn with_max_size(mut self, width: Option<f64>, height: Option<f64>) -> Self {
        self.max_width = width;
        self.max_height = height;
        self
    }

    /// Set the snap grid
    pub fn with_grid(mut self, step_x: f64, step_y: f64) -> Self {
        self.grid = [step_x, step_y];
        self
    }

    /// Set the render scale
    pub fn with_scale(mut self, scale: ScaleSetting) -> Self {
        self.scale = scale;
        self
    }

    /// Set the containing parent frame
    pub fn with_parent(mut self, width: f64, height: f64) -> Self {
        self.parent = Some([width, height]);
        self
    }

    /// Restrict drag gestures to one axis
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Lock or unlock the aspect ratio
    pub fn with_aspect_lock(mut self, locked: bool) -> Self {
        self.lock_aspect_ratio = locked;
        self
    }

    /// Enable or disable dragging
    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    /// Enable or disable resizing
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Set the handles that may start a resize
    pub fn with_handles(mut self, handles: impl Into<Vec<Handle>>) -> Self {
        self.handles = handles.into();
        self
    }

    /// Only start drags on targets matching `selector`
    pub fn with_drag_handle(mut self, selector: impl Into<String>) -> Self {
        self.drag_handle = Some(selector.into());
        self
    }

    /// Never start drags on targets matching `selector`
    pub fn with_drag_cancel(mut self, selector: impl Into<String>) -> Self {
        self.drag_cancel = Some(selector.into());
        self
    }

    /// Set whether the element starts active
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Keep the element active when deselected
    pub fn with_prevent_deactivation(mut self, prevent: bool) -> Self {
        self.prevent_deactivation = prevent;
        self
    }

    /// Set the measured natural size used by `"auto"` dimensions
    pub fn with_natural_size(mut self, width: f64, height: f64) -> Self {
        self.natural_size = Some([width, height]);
        self
    }

    pub fn limits(&self) -> SizeLimits {
        SizeLimits {
            min_width: self.min_width,
            min_height: self.min_height,
            max_width: self.max_width,
            max_height: self.max_height,
        }
    }

    pub fn grid_spec(&self) -> GridSpec {
        GridSpec::new(self.grid[0], self.grid[1])
    }

    pub fn parent_frame(&self) -> Option<ParentFrame> {
        self.parent.and_then(|[w, h]| ParentFrame::new(w, h).usable())
    }

    pub fn natural(&self) -> Option<Size> {
        self.natural_size.map(|[w, h]| Size::new(w, h))
    }

    /// Check the configuration against the engine's contract
    pub fn validate(&self) -> Result<(), EngineError> {
        finite("x", self.x)?;
        finite("y", self.y)?;
        for (field, dim) in [("w", self.w), ("h", self.h)] {
            if let Dimension::Px(v) = dim {
                non_negative(field, v)?;
            }
        }

        non_negative("min_width", self.min_width)?;
        non_negative("min_height", self.min_height)?;
        if let Some(max) = self.max_width {
            finite("max_width", max)?;
            if max < self.min_width {
                return Err(EngineError::invalid(
                    "max_width",
                    format!("{} is below min_width {}", max, self.min_width),
                ));
            }
        }
        if let Some(max) = self.max_height {
            finite("max_height", max)?;
            if max < self.min_height {
                return Err(EngineError::invalid(
                    "max_height",
                    format!("{} is below min_height {}", max, self.min_height),
                ));
            }
        }

        for step in self.grid {
            positive("grid", step)?;
        }
        let scale = self.scale.to_scale();
        positive("scale", scale.x)?;
        positive("scale", scale.y)?;

        if let Some([w, h]) = self.parent {
            non_negative("parent", w)?;
            non_negative("parent", h)?;
        }
        if let Some([w, h]) = self.natural_size {
            non_negative("natural_size", w)?;
            non_negative("natural_size", h)?;
        }

        Ok(())
    }
}

fn finite(field: &str, value: f64) -> Result<(), EngineError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::invalid(field, format!("{} is not a finite number", value)))
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), EngineError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(EngineError::invalid(field, format!("{} must not be negative", value)));
    }
    Ok(())
}

fn positive(field: &str, value: f64) -> Result<(), EngineError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(EngineError::invalid(field, format!("{} must be positive", value)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!((config.x, config.y), (0.0, 0.0));
        assert_eq!(config.w, Dimension::Px(200.0));
        assert_eq!(config.h, Dimension::Px(200.0));
        assert_eq!(config.grid, [1.0, 1.0]);
        assert_eq!(config.axis, Axis::Both);
        assert_eq!(config.handles.len(), 8);
        assert!(config.draggable && config.resizable);
        assert!(!config.active && !config.lock_aspect_ratio);
        assert!(config.parent_frame().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::new()
            .with_position(10.0, 20.0)
            .with_size(150.0, 75.0)
            .with_grid(10.0, 5.0)
            .with_parent(400.0, 300.0)
            .with_aspect_lock(true);

        assert_eq!((config.x, config.y), (10.0, 20.0));
        assert_eq!(config.w, Dimension::Px(150.0));
        assert_eq!(config.grid_spec(), GridSpec::new(10.0, 5.0));
        assert_eq!(config.parent_frame(), Some(ParentFrame::new(400.0, 300.0)));
        assert!(config.lock_aspect_ratio);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
x = 10
y = 5.5
w = 300
h = "auto"
max_width = 500
axis = "x"
grid = [10, 20]
scale = [1, 2]
parent = [800, 600]
handles = ["tl", "br"]
drag_handle = "title"
natural_size = [120, 40]
"#;
        let config = EngineConfig::from_str(toml_str).expect("Should parse");
        assert_eq!(config.x, 10.0);
        assert_eq!(config.y, 5.5);
        assert_eq!(config.w, Dimension::Px(300.0));
        assert_eq!(config.h, Dimension::Auto);
        assert_eq!(config.max_width, Some(500.0));
        assert_eq!(config.axis, Axis::X);
        assert_eq!(config.grid, [10.0, 20.0]);
        assert_eq!(config.scale.to_scale(), Scale { x: 1.0, y: 2.0 });
        assert_eq!(config.handles, vec![Handle::Tl, Handle::Br]);
        assert_eq!(config.drag_handle.as_deref(), Some("title"));
        assert_eq!(config.natural(), Some(Size::new(120.0, 40.0)));
    }

    #[test]
    fn test_parse_uniform_scale() {
        let config = EngineConfig::from_str("scale = 2").expect("Should parse");
        assert_eq!(config.scale.to_scale(), Scale::uniform(2.0));
    }

    #[test]
    fn test_unknown_dimension_keyword_is_error() {
        assert!(EngineConfig::from_str(r#"w = "wide""#).is_err());
    }

    #[test]
    fn test_unknown_field_is_error() {
        let result = EngineConfig::from_str("colour = 3");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_invalid_toml_error() {
        assert!(EngineConfig::from_str("this is not valid toml {{{{").is_err());
    }

    #[test]
    fn test_validate_rejects_min_above_max() {
        let config = EngineConfig::new()
            .with_min_size(100.0, 0.0)
            .with_max_size(Some(50.0), None);
        let err = config.validate().unwrap_err();
        assert_eq!(err.field(), "max_width");
    }

    #[test]
    fn test_validate_rejects_zero_grid_step() {
        let err = EngineConfig::new().with_grid(0.0, 1.0).validate().unwrap_err();
        assert_eq!(err.field(), "grid");
    }

    #[test]
    fn test_validate_rejects_non_positive_scale() {
        let err = EngineConfig::new()
            .with_scale(ScaleSetting::PerAxis([1.0, 0.0]))
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), "scale");
    }

    #[test]
    fn test_validate_rejects_non_finite_position() {
        let err = EngineConfig::new()
            .with_position(f64::NAN, 0.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), "x");
    }

    #[test]
    fn test_from_str_reports_validation_errors() {
        let result = EngineConfig::from_str("min_width = -5");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_sized_parent_is_ignored() {
        let config = EngineConfig::new().with_parent(0.0, 300.0);
        assert!(config.validate().is_ok());
        assert!(config.parent_frame().is_none());
    }
}

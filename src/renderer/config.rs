//! Options for drawing an element snapshot

/// When resize handles are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandleVisibility {
    /// Only while the element is active, as a host UI would show them
    #[default]
    WhenActive,
    Always,
    Never,
}

impl HandleVisibility {
    pub fn shows(self, active: bool) -> bool {
        match self {
            HandleVisibility::WhenActive => active,
            HandleVisibility::Always => true,
            HandleVisibility::Never => false,
        }
    }
}

/// SVG output options
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Margin added on every side of the drawn content
    pub viewbox_padding: f64,
    /// Emit the XML declaration
    pub standalone: bool,
    /// One element per line, indented
    pub pretty_print: bool,
    /// Prepended to every class name, e.g. `db-` gives `db-element`
    pub class_prefix: Option<String>,
    /// Side of the square drawn at each handle
    pub handle_size: f64,
    pub handles: HandleVisibility,
    /// Outline the parent frame when there is one
    pub show_frame: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            viewbox_padding: 20.0,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("db-".to_string()),
            handle_size: 8.0,
            handles: HandleVisibility::WhenActive,
            show_frame: true,
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewbox_padding(mut self, padding: f64) -> Self {
        self.viewbox_padding = padding;
        self
    }

    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Use bare class names
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    pub fn with_handle_size(mut self, size: f64) -> Self {
        self.handle_size = size;
        self
    }

    pub fn with_handles(mut self, handles: HandleVisibility) -> Self {
        self.handles = handles;
        self
    }

    pub fn with_frame(mut self, show: bool) -> Self {
        self.show_frame = show;
        self
    }

    /// Class name with the configured prefix applied
    pub fn class(&self, name: &str) -> String {
        match &self.class_prefix {
            Some(prefix) => format!("{}{}", prefix, name),
            None => name.to_string(),
        }
    }
}

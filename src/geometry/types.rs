//! Core value types shared by the bounds calculator, resolver and engine

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::Deserialize;

/// A pointer position in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair, used for measured natural sizes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The element rectangle in its parent's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Absolute x-coordinate of the right edge
    pub fn right_edge(&self) -> f64 {
        self.left + self.width
    }

    /// Absolute y-coordinate of the bottom edge
    pub fn bottom_edge(&self) -> f64 {
        self.top + self.height
    }

    /// Width divided by height
    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "left={} top={} width={} height={}",
            self.left, self.top, self.width, self.height
        )
    }
}

/// Containing frame the element is clipped to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParentFrame {
    pub width: f64,
    pub height: f64,
}

impl ParentFrame {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A frame with no area cannot contain anything and is treated as absent
    pub fn usable(self) -> Option<Self> {
        if self.width > 0.0 && self.height > 0.0 {
            Some(self)
        } else {
            None
        }
    }

    /// Distance from the rect's right edge to the frame's right edge
    pub fn right_of(&self, rect: &Rect) -> f64 {
        self.width - rect.width - rect.left
    }

    /// Distance from the rect's bottom edge to the frame's bottom edge
    pub fn bottom_of(&self, rect: &Rect) -> f64 {
        self.height - rect.height - rect.top
    }

    /// Check that the rect lies fully inside the frame
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.left >= 0.0
            && rect.top >= 0.0
            && rect.right_edge() <= self.width
            && rect.bottom_edge() <= self.height
    }
}

/// Minimum and optional maximum element size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeLimits {
    pub min_width: f64,
    pub min_height: f64,
    pub max_width: Option<f64>,
    pub max_height: Option<f64>,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            min_width: 0.0,
            min_height: 0.0,
            max_width: None,
            max_height: None,
        }
    }
}

/// Snap increments for pointer displacement, in unscaled units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub step_x: f64,
    pub step_y: f64,
}

impl GridSpec {
    pub fn new(step_x: f64, step_y: f64) -> Self {
        Self { step_x, step_y }
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// Render scale of the element; displacement is divided by it before snapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    pub fn uniform(factor: f64) -> Self {
        Self {
            x: factor,
            y: factor,
        }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

/// Aspect-ratio lock; `factor` is width / height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectLock {
    pub enabled: bool,
    pub factor: f64,
}

impl AspectLock {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            factor: 1.0,
        }
    }

    pub fn locked(factor: f64) -> Self {
        Self {
            enabled: true,
            factor,
        }
    }
}

/// Axis restriction for drag gestures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    #[default]
    Both,
}

impl Axis {
    pub fn allows_x(self) -> bool {
        self != Axis::Y
    }

    pub fn allows_y(self) -> bool {
        self != Axis::X
    }
}

bitflags! {
    /// Edges of the rectangle a resize handle moves.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        const TOP    = 0b0001;
        const BOTTOM = 0b0010;
        const LEFT   = 0b0100;
        const RIGHT  = 0b1000;
    }
}

impl Edges {
    /// The handle takes part in horizontal resizing
    pub fn horizontal(self) -> bool {
        self.intersects(Edges::LEFT | Edges::RIGHT)
    }

    /// The handle takes part in vertical resizing
    pub fn vertical(self) -> bool {
        self.intersects(Edges::TOP | Edges::BOTTOM)
    }
}

/// One of the eight resize handles, named by its two-letter code.
///
/// The first letter is the vertical edge (`t`, `m`, `b`), the second the
/// horizontal edge (`l`, `m`, `r`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    Tl,
    Tm,
    Tr,
    Mr,
    Br,
    Bm,
    Bl,
    Ml,
}

impl Handle {
    pub const ALL: [Handle; 8] = [
        Handle::Tl,
        Handle::Tm,
        Handle::Tr,
        Handle::Mr,
        Handle::Br,
        Handle::Bm,
        Handle::Bl,
        Handle::Ml,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Handle::Tl => "tl",
            Handle::Tm => "tm",
            Handle::Tr => "tr",
            Handle::Mr => "mr",
            Handle::Br => "br",
            Handle::Bm => "bm",
            Handle::Bl => "bl",
            Handle::Ml => "ml",
        }
    }

    pub fn edges(self) -> Edges {
        match self {
            Handle::Tl => Edges::TOP | Edges::LEFT,
            Handle::Tm => Edges::TOP,
            Handle::Tr => Edges::TOP | Edges::RIGHT,
            Handle::Mr => Edges::RIGHT,
            Handle::Br => Edges::BOTTOM | Edges::RIGHT,
            Handle::Bm => Edges::BOTTOM,
            Handle::Bl => Edges::BOTTOM | Edges::LEFT,
            Handle::Ml => Edges::LEFT,
        }
    }

    pub fn is_corner(self) -> bool {
        matches!(self, Handle::Tl | Handle::Tr | Handle::Br | Handle::Bl)
    }

    /// Handle used while the aspect ratio is locked.
    ///
    /// Corners collapse onto the mid handle of their horizontal edge
    /// (`tl`/`bl` → `ml`, `tr`/`br` → `mr`); mid handles are kept.
    pub fn aspect_locked(self) -> Handle {
        match self {
            Handle::Tl | Handle::Bl => Handle::Ml,
            Handle::Tr | Handle::Br => Handle::Mr,
            other => other,
        }
    }

    /// Position of the handle's anchor point on `rect`
    pub fn position_on(self, rect: &Rect) -> Point {
        let edges = self.edges();
        let x = if edges.contains(Edges::LEFT) {
            rect.left
        } else if edges.contains(Edges::RIGHT) {
            rect.right_edge()
        } else {
            rect.left + rect.width / 2.0
        };
        let y = if edges.contains(Edges::TOP) {
            rect.top
        } else if edges.contains(Edges::BOTTOM) {
            rect.bottom_edge()
        } else {
            rect.top + rect.height / 2.0
        };
        Point::new(x, y)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Handle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Handle::ALL
            .into_iter()
            .find(|h| h.code() == s)
            .ok_or_else(|| {
                format!(
                    "'{}' is not a resize handle. Expected one of: {}",
                    s,
                    Handle::ALL.map(Handle::code).join(", ")
                )
            })
    }
}

/// Snapshot taken when a gesture starts; all displacement is measured from it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureAnchor {
    pub pointer: Point,
    pub rect: Rect,
}

impl GestureAnchor {
    pub fn new(pointer: Point, rect: Rect) -> Self {
        Self { pointer, rect }
    }
}

/// Per-edge travel limits for one gesture; `None` means unconstrained
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min_left: Option<f64>,
    pub max_left: Option<f64>,
    pub min_top: Option<f64>,
    pub max_top: Option<f64>,
    pub min_right: Option<f64>,
    pub max_right: Option<f64>,
    pub min_bottom: Option<f64>,
    pub max_bottom: Option<f64>,
}

impl Bounds {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        *self == Self::unbounded()
    }
}

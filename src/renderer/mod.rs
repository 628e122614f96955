//! SVG renderer for engine snapshots
//!
//! Draws the parent frame, the element and its handles with CSS classes
//! a host can restyle.

pub mod config;
pub mod svg;

pub use config::{HandleVisibility, SvgConfig};
pub use svg::render_svg;

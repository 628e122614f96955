//! SVG generation from engine snapshots

use crate::engine::Snapshot;
use crate::geometry::{Handle, Rect};

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    /// Add the default look for frames, elements and handles
    pub fn add_default_styles(&mut self) {
        let rules = [
            ("frame", "fill: none; stroke: #9ca3af; stroke-dasharray: 4 2;"),
            ("element", "fill: #dbeafe; stroke: #3b82f6;"),
            ("active", "stroke: #1d4ed8; stroke-width: 2;"),
            ("handle", "fill: #ffffff; stroke: #1d4ed8;"),
        ];
        for (class, body) in rules {
            let rule = format!(".{} {{ {} }}", self.config.class(class), body);
            self.styles.push(rule);
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a rectangle with the given (unprefixed) CSS classes
    pub fn add_rect(&mut self, id: Option<&str>, rect: &Rect, classes: &[&str]) {
        let id_attr = id.map(|i| format!(r#" id="{}""#, i)).unwrap_or_default();
        let class_list = classes
            .iter()
            .map(|c| self.config.class(c))
            .collect::<Vec<_>>()
            .join(" ");

        self.elements.push(format!(
            r#"{}<rect{} class="{}" x="{}" y="{}" width="{}" height="{}"/>"#,
            self.indent_str(),
            id_attr,
            class_list,
            rect.left,
            rect.top,
            rect.width,
            rect.height
        ));
    }

    /// Add a square handle centred on its anchor point of `rect`
    pub fn add_handle(&mut self, handle: Handle, rect: &Rect) {
        let size = self.config.handle_size;
        let center = handle.position_on(rect);
        let square = Rect::new(center.x - size / 2.0, center.y - size / 2.0, size, size);
        let variant = format!("handle-{}", handle.code());
        self.add_rect(None, &square, &["handle", variant.as_str()]);
    }

    /// Build the final SVG string
    pub fn build(self, viewbox: Rect) -> String {
        let padding = self.config.viewbox_padding;
        let vb_x = viewbox.left - padding;
        let vb_y = viewbox.top - padding;
        let vb_w = viewbox.width + 2.0 * padding;
        let vb_h = viewbox.height + 2.0 * padding;

        let nl = self.newline();

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            vb_x, vb_y, vb_w, vb_h
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str("  <style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str("    ");
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str("  </style>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render the element, its parent frame and its handles
pub fn render_svg(snapshot: &Snapshot, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    builder.add_default_styles();

    if let Some(parent) = snapshot.parent.filter(|_| config.show_frame) {
        let frame = Rect::new(0.0, 0.0, parent.width, parent.height);
        builder.add_rect(Some("frame"), &frame, &["frame"]);
    }

    let rect = snapshot.rect;
    let classes: &[&str] = if snapshot.active {
        &["element", "active"]
    } else {
        &["element"]
    };
    builder.add_rect(Some("element"), &rect, classes);

    let handles = visible_handles(snapshot, config);
    for &handle in handles {
        builder.add_handle(handle, &rect);
    }

    builder.build(content_bounds(snapshot, config))
}

fn visible_handles<'a>(snapshot: &'a Snapshot, config: &SvgConfig) -> &'a [Handle] {
    if config.handles.shows(snapshot.active) {
        &snapshot.handles
    } else {
        &[]
    }
}

/// Smallest rectangle covering the drawn frame, the element and its handles
fn content_bounds(snapshot: &Snapshot, config: &SvgConfig) -> Rect {
    let overhang = if visible_handles(snapshot, config).is_empty() {
        0.0
    } else {
        config.handle_size / 2.0
    };
    let rect = snapshot.rect;
    let mut min_x = rect.left - overhang;
    let mut min_y = rect.top - overhang;
    let mut max_x = rect.right_edge() + overhang;
    let mut max_y = rect.bottom_edge() + overhang;

    if let Some(parent) = snapshot.parent.filter(|_| config.show_frame) {
        min_x = min_x.min(0.0);
        min_y = min_y.min(0.0);
        max_x = max_x.max(parent.width);
        max_y = max_y.max(parent.height);
    }

    Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
}

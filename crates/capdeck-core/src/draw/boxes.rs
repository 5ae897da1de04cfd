//! Labeled boxes and background zones.

use svg::node::element as svg_element;

use super::{
    Canvas, LayeredOutput, LineStyle, RenderLayer,
    note::Align,
    text::TextBlock,
};
use crate::{
    color::Color,
    geometry::{Point, Size},
    style::RoleStyle,
};

/// Stroke color shared by every labeled box.
const EDGE_COLOR: &str = "#333333";

/// Corner treatment for boxes and zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CornerStyle {
    /// Rounded corners
    #[default]
    Rounded,
    /// Sharp corners
    Square,
}

impl CornerStyle {
    fn radius(self) -> f32 {
        match self {
            Self::Rounded => 6.0,
            Self::Square => 0.0,
        }
    }
}

/// A rounded rectangle with a centered bold label and an optional smaller
/// italic sublabel beneath it.
///
/// When a sublabel is present the label sits at 62% of the box height and the
/// sublabel at 30%, matching the deck's visual convention; otherwise the
/// label is centered. An empty label produces a bare panel — callout
/// backgrounds are drawn this way, with [`Note`](super::Note)s layered on
/// top.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelBox {
    origin: Point,
    size: Size,
    label: String,
    sublabel: Option<String>,
    style: RoleStyle,
    font_size: f32,
    sublabel_size: f32,
    opacity: f32,
    corner: CornerStyle,
}

impl LabelBox {
    /// Creates a labeled box anchored at its bottom-left corner.
    pub fn new(origin: Point, size: Size, label: impl Into<String>, style: RoleStyle) -> Self {
        Self {
            origin,
            size,
            label: label.into(),
            sublabel: None,
            style,
            font_size: 11.0,
            sublabel_size: 8.0,
            opacity: 1.0,
            corner: CornerStyle::Rounded,
        }
    }

    /// Adds a sublabel rendered beneath the primary label.
    pub fn with_sublabel(mut self, sublabel: impl Into<String>) -> Self {
        self.sublabel = Some(sublabel.into());
        self
    }

    /// Overrides the primary label font size.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Overrides the sublabel font size.
    pub fn with_sublabel_size(mut self, sublabel_size: f32) -> Self {
        self.sublabel_size = sublabel_size;
        self
    }

    /// Sets the overall opacity of the box.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets the corner treatment.
    pub fn with_corner(mut self, corner: CornerStyle) -> Self {
        self.corner = corner;
        self
    }

    /// Returns the bottom-left corner.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the box dimensions.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the primary label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Renders the box to the content layer and its labels to the label
    /// layer.
    pub fn render(&self, canvas: &Canvas, output: &mut LayeredOutput) {
        let x = canvas.x(self.origin.x());
        let y_top = canvas.y(self.origin.y() + self.size.height());
        let width = canvas.length_x(self.size.width());
        let height = canvas.length_y(self.size.height());

        let rect = svg_element::Rectangle::new()
            .set("x", x)
            .set("y", y_top)
            .set("width", width)
            .set("height", height)
            .set("rx", self.corner.radius())
            .set("fill", self.style.fill().to_string())
            .set("fill-opacity", self.opacity * self.style.fill().alpha())
            .set("stroke", EDGE_COLOR)
            .set("stroke-width", 1.5)
            .set("stroke-opacity", self.opacity);

        output.add_to_layer(RenderLayer::Content, Box::new(rect));

        if self.label.is_empty() {
            return;
        }

        let center_x = self.origin.x() + self.size.width() / 2.0;
        match &self.sublabel {
            Some(sublabel) => {
                let label_y = self.origin.y() + self.size.height() * 0.62;
                let sublabel_y = self.origin.y() + self.size.height() * 0.30;

                self.emit_label(canvas, output, center_x, label_y);

                let (sx, sy) = canvas.point(Point::new(center_x, sublabel_y));
                let text = TextBlock {
                    x: sx,
                    y: sy,
                    content: sublabel,
                    font_size: self.sublabel_size,
                    color: self.style.text().with_alpha(0.9),
                    bold: false,
                    italic: true,
                    align: Align::Center,
                }
                .render();
                output.add_to_layer(RenderLayer::Label, Box::new(text));
            }
            None => {
                let label_y = self.origin.y() + self.size.height() / 2.0;
                self.emit_label(canvas, output, center_x, label_y);
            }
        }
    }

    fn emit_label(&self, canvas: &Canvas, output: &mut LayeredOutput, nx: f32, ny: f32) {
        let (x, y) = canvas.point(Point::new(nx, ny));
        let text = TextBlock {
            x,
            y,
            content: &self.label,
            font_size: self.font_size,
            color: self.style.text(),
            bold: true,
            italic: false,
            align: Align::Center,
        }
        .render();
        output.add_to_layer(RenderLayer::Label, Box::new(text));
    }
}

/// A background region: a tinted rectangle with a stroked outline, drawn
/// below all content.
///
/// Used for the trusted/untrusted trust-boundary tints and for table row
/// stripes.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    origin: Point,
    size: Size,
    fill: Color,
    edge: Color,
    edge_width: f32,
    line: LineStyle,
    corner: CornerStyle,
}

impl Zone {
    /// Creates a zone anchored at its bottom-left corner. Defaults to the
    /// trust-boundary look: rounded corners, dashed outline.
    pub fn new(origin: Point, size: Size, fill: Color, edge: Color) -> Self {
        Self {
            origin,
            size,
            fill,
            edge,
            edge_width: 2.5,
            line: LineStyle::Dashed,
            corner: CornerStyle::Rounded,
        }
    }

    /// Sets the outline width in points.
    pub fn with_edge_width(mut self, edge_width: f32) -> Self {
        self.edge_width = edge_width;
        self
    }

    /// Sets the outline line style.
    pub fn with_line_style(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    /// Sets the corner treatment.
    pub fn with_corner(mut self, corner: CornerStyle) -> Self {
        self.corner = corner;
        self
    }

    /// Returns the bottom-left corner.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the zone dimensions.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Renders the zone onto the background layer.
    pub fn render(&self, canvas: &Canvas, output: &mut LayeredOutput) {
        let mut rect = svg_element::Rectangle::new()
            .set("x", canvas.x(self.origin.x()))
            .set("y", canvas.y(self.origin.y() + self.size.height()))
            .set("width", canvas.length_x(self.size.width()))
            .set("height", canvas.length_y(self.size.height()))
            .set("rx", self.corner.radius())
            .set("fill", self.fill.to_string())
            .set("fill-opacity", self.fill.alpha())
            .set("stroke", self.edge.to_string())
            .set("stroke-opacity", self.edge.alpha())
            .set("stroke-width", self.edge_width);

        if self.line == LineStyle::Dashed {
            rect = rect.set("stroke-dasharray", "8 5");
        }

        output.add_to_layer(RenderLayer::Background, Box::new(rect));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> RoleStyle {
        RoleStyle::new(
            Color::new("#6A1B9A").unwrap(),
            Color::new("white").unwrap(),
        )
    }

    #[test]
    fn test_box_renders_rect_and_label() {
        let canvas = Canvas::new(792.0, 612.0);
        let mut output = LayeredOutput::new();

        LabelBox::new(Point::new(0.55, 0.42), Size::new(0.20, 0.38), "PROXY", style())
            .with_sublabel("Issuer keys\nCapDoc storage")
            .render(&canvas, &mut output);

        let nodes = output.render();
        // Content group (rect) and label group (label + sublabel)
        assert_eq!(nodes.len(), 2);
        let labels = nodes[1].to_string();
        assert!(labels.contains("PROXY"));
        assert!(labels.contains("font-style=\"italic\""));
    }

    #[test]
    fn test_empty_label_renders_panel_only() {
        let canvas = Canvas::new(792.0, 612.0);
        let mut output = LayeredOutput::new();

        LabelBox::new(Point::new(0.15, 0.10), Size::new(0.70, 0.08), "", style())
            .with_opacity(0.95)
            .render(&canvas, &mut output);

        let nodes = output.render();
        assert_eq!(nodes.len(), 1);
        assert!(!nodes[0].to_string().contains("<text"));
    }

    #[test]
    fn test_zone_is_dashed_background() {
        let canvas = Canvas::new(792.0, 612.0);
        let mut output = LayeredOutput::new();

        let fill = Color::new("#E8F5E9").unwrap().with_alpha(0.5);
        let edge = Color::new("#4CAF50").unwrap().with_alpha(0.5);
        Zone::new(Point::new(0.03, 0.35), Size::new(0.94, 0.55), fill, edge)
            .render(&canvas, &mut output);

        let group = output.render()[0].to_string();
        assert!(group.contains("data-layer=\"background\""));
        assert!(group.contains("stroke-dasharray"));
    }

    #[test]
    fn test_square_corner_has_no_radius() {
        assert_eq!(CornerStyle::Square.radius(), 0.0);
        assert!(CornerStyle::Rounded.radius() > 0.0);
    }
}

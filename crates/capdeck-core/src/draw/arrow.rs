//! Directional arrows and connector lines.

use svg::node::element as svg_element;

use super::{
    Canvas, LayeredOutput, RenderLayer,
    note::Align,
    text::{TextBlock, estimate_extent},
};
use crate::{
    color::Color,
    geometry::{Offset, Point},
};

/// Arrowhead treatment at the end point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadStyle {
    /// Filled triangular head
    #[default]
    Filled,
    /// No head - a plain connector line (sequence lifelines use this)
    None,
}

/// Stroke pattern for arrows and zone outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// Continuous stroke
    #[default]
    Solid,
    /// Dashed stroke
    Dashed,
}

/// A label rendered at an arrow's midpoint, displaced by a caller-supplied
/// offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowLabel {
    text: String,
    offset: Offset,
}

impl ArrowLabel {
    /// Returns the label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the displacement from the segment midpoint.
    pub fn offset(&self) -> Offset {
        self.offset
    }
}

/// A directional line between two normalized points.
///
/// # Examples
///
/// ```
/// # use capdeck_core::color::Color;
/// # use capdeck_core::draw::Arrow;
/// # use capdeck_core::geometry::{Offset, Point};
/// let arrow = Arrow::new(
///     Point::new(0.23, 0.69),
///     Point::new(0.30, 0.69),
///     Color::new("#1565C0").unwrap(),
/// )
/// .with_label("Config", Offset::new(0.0, 0.02));
///
/// let anchor = arrow.label_anchor().unwrap();
/// assert!((anchor.x() - 0.265).abs() < 1e-6);
/// assert!((anchor.y() - 0.71).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    start: Point,
    end: Point,
    color: Color,
    width: f32,
    head: HeadStyle,
    line: LineStyle,
    opacity: f32,
    label: Option<ArrowLabel>,
    label_size: f32,
}

impl Arrow {
    /// Creates a solid arrow with a filled head.
    pub fn new(start: Point, end: Point, color: Color) -> Self {
        Self {
            start,
            end,
            color,
            width: 2.0,
            head: HeadStyle::Filled,
            line: LineStyle::Solid,
            opacity: 1.0,
            label: None,
            label_size: 8.0,
        }
    }

    /// Sets the stroke width in points.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Sets the head treatment.
    pub fn with_head(mut self, head: HeadStyle) -> Self {
        self.head = head;
        self
    }

    /// Sets the stroke pattern.
    pub fn with_line_style(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    /// Sets the overall opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Attaches a midpoint label displaced by `offset`.
    pub fn with_label(mut self, text: impl Into<String>, offset: Offset) -> Self {
        self.label = Some(ArrowLabel {
            text: text.into(),
            offset,
        });
        self
    }

    /// Returns the start point.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Returns the end point.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Returns the midpoint label, if any.
    pub fn label(&self) -> Option<&ArrowLabel> {
        self.label.as_ref()
    }

    /// Returns the label anchor: the segment midpoint plus the label offset.
    pub fn label_anchor(&self) -> Option<Point> {
        self.label
            .as_ref()
            .map(|label| self.start.midpoint(self.end).translate(label.offset()))
    }

    /// Renders the line and head onto the arrow layer and the label (if any)
    /// onto the label layer.
    pub fn render(&self, canvas: &Canvas, output: &mut LayeredOutput) {
        let (x1, y1) = canvas.point(self.start);
        let (x2, y2) = canvas.point(self.end);

        let dx = x2 - x1;
        let dy = y2 - y1;
        let length = dx.hypot(dy);
        if length == 0.0 {
            return;
        }

        // Stop the shaft at the head base so dashes never poke through the tip
        let (shaft_x, shaft_y) = match self.head {
            HeadStyle::None => (x2, y2),
            HeadStyle::Filled => {
                let head_length = (6.0 + 2.0 * self.width).min(length);
                let ux = dx / length;
                let uy = dy / length;
                let base_x = x2 - ux * head_length;
                let base_y = y2 - uy * head_length;
                let half_width = head_length * 0.4;

                let points = format!(
                    "{},{} {},{} {},{}",
                    x2,
                    y2,
                    base_x - uy * half_width,
                    base_y + ux * half_width,
                    base_x + uy * half_width,
                    base_y - ux * half_width,
                );
                let head = svg_element::Polygon::new()
                    .set("points", points)
                    .set("fill", self.color.to_string())
                    .set("fill-opacity", self.opacity * self.color.alpha());
                output.add_to_layer(RenderLayer::Arrow, Box::new(head));

                (base_x, base_y)
            }
        };

        let mut shaft = svg_element::Line::new()
            .set("x1", x1)
            .set("y1", y1)
            .set("x2", shaft_x)
            .set("y2", shaft_y)
            .set("stroke", self.color.to_string())
            .set("stroke-width", self.width)
            .set("stroke-opacity", self.opacity * self.color.alpha());

        if self.line == LineStyle::Dashed {
            shaft = shaft.set("stroke-dasharray", "6 4");
        }

        output.add_to_layer(RenderLayer::Arrow, Box::new(shaft));

        if let (Some(label), Some(anchor)) = (&self.label, self.label_anchor()) {
            let (lx, ly) = canvas.point(anchor);
            let (width, height) = estimate_extent(&label.text, self.label_size);
            let pad = self.label_size * 0.3;

            let bubble = svg_element::Rectangle::new()
                .set("x", lx - width / 2.0 - pad)
                .set("y", ly - height / 2.0 - pad)
                .set("width", width + pad * 2.0)
                .set("height", height + pad * 2.0)
                .set("rx", 3.0)
                .set("fill", "white")
                .set("fill-opacity", 0.9)
                .set("stroke", self.color.to_string())
                .set("stroke-width", 1.0);
            output.add_to_layer(RenderLayer::Label, Box::new(bubble));

            let text = TextBlock {
                x: lx,
                y: ly,
                content: &label.text,
                font_size: self.label_size,
                color: self.color,
                bold: true,
                italic: false,
                align: Align::Center,
            }
            .render();
            output.add_to_layer(RenderLayer::Label, Box::new(text));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn color() -> Color {
        Color::new("#333333").unwrap()
    }

    #[test]
    fn test_label_anchor_is_midpoint_plus_offset() {
        let arrow = Arrow::new(Point::new(0.2, 0.4), Point::new(0.6, 0.4), color())
            .with_label("PASS", Offset::new(-0.03, 0.02));

        let anchor = arrow.label_anchor().unwrap();
        assert!(approx_eq!(f32, anchor.x(), 0.37));
        assert!(approx_eq!(f32, anchor.y(), 0.42));
    }

    #[test]
    fn test_unlabeled_arrow_has_no_anchor() {
        let arrow = Arrow::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), color());
        assert!(arrow.label_anchor().is_none());
    }

    #[test]
    fn test_filled_head_renders_polygon() {
        let canvas = Canvas::new(792.0, 612.0);
        let mut output = LayeredOutput::new();

        Arrow::new(Point::new(0.1, 0.5), Point::new(0.4, 0.5), color()).render(&canvas, &mut output);

        let group = output.render()[0].to_string();
        assert!(group.contains("<polygon"));
        assert!(group.contains("<line"));
    }

    #[test]
    fn test_lifeline_is_plain_dashed_line() {
        let canvas = Canvas::new(792.0, 612.0);
        let mut output = LayeredOutput::new();

        Arrow::new(Point::new(0.45, 0.06), Point::new(0.45, 0.84), color())
            .with_head(HeadStyle::None)
            .with_line_style(LineStyle::Dashed)
            .with_opacity(0.3)
            .render(&canvas, &mut output);

        let group = output.render()[0].to_string();
        assert!(!group.contains("<polygon"));
        assert!(group.contains("stroke-dasharray"));
    }

    #[test]
    fn test_labeled_arrow_emits_bubble_on_label_layer() {
        let canvas = Canvas::new(792.0, 612.0);
        let mut output = LayeredOutput::new();

        Arrow::new(Point::new(0.39, 0.68), Point::new(0.48, 0.68), color())
            .with_label("POST /capability/revoke", Offset::new(0.0, 0.02))
            .render(&canvas, &mut output);

        let nodes = output.render();
        assert_eq!(nodes.len(), 2);
        assert!(nodes[1].to_string().contains("data-layer=\"label\""));
    }
}

//! Free-standing text annotations and step markers.

use svg::node::element as svg_element;

use super::{
    Canvas, LayeredOutput, RenderLayer,
    text::{TextBlock, estimate_extent},
};
use crate::{color::Color, geometry::Point, style::RoleStyle};

/// Horizontal alignment of a [`Note`] relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Anchor is the left edge of the text
    Left,
    /// Anchor is the horizontal center of the text
    #[default]
    Center,
}

/// A rounded background behind a [`Note`], keeping it legible over other
/// elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bubble {
    fill: Color,
    edge: Color,
}

impl Bubble {
    /// Creates a bubble with the given fill and edge colors.
    pub fn new(fill: Color, edge: Color) -> Self {
        Self { fill, edge }
    }

    /// Returns the bubble fill color.
    pub fn fill(self) -> Color {
        self.fill
    }

    /// Returns the bubble edge color.
    pub fn edge(self) -> Color {
        self.edge
    }
}

/// An anchored multi-line text block.
///
/// Notes carry the narrative content of a page: zone captions, step
/// descriptions, callout text, table cells. The anchor is the vertical center
/// of the block; horizontal behavior depends on [`Align`].
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    anchor: Point,
    content: String,
    font_size: f32,
    color: Color,
    bold: bool,
    italic: bool,
    align: Align,
    bubble: Option<Bubble>,
}

impl Note {
    /// Creates a plain centered note.
    pub fn new(anchor: Point, content: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            anchor,
            content: content.into(),
            font_size,
            color,
            bold: false,
            italic: false,
            align: Align::Center,
            bubble: None,
        }
    }

    /// Renders the note in bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Renders the note in italics.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Sets the horizontal alignment.
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Draws a rounded background bubble behind the note.
    pub fn with_bubble(mut self, bubble: Bubble) -> Self {
        self.bubble = Some(bubble);
        self
    }

    /// Returns the anchor point.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Returns the text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Renders the note onto the label layer.
    ///
    /// The bubble, if any, is emitted to the same layer immediately before
    /// the text so it stays below the text but above arrows and boxes.
    pub fn render(&self, canvas: &Canvas, output: &mut LayeredOutput) {
        let (x, y) = canvas.point(self.anchor);

        if let Some(bubble) = self.bubble {
            let (width, height) = estimate_extent(&self.content, self.font_size);
            let pad = self.font_size * 0.4;
            let rect_x = match self.align {
                Align::Left => x - pad,
                Align::Center => x - width / 2.0 - pad,
            };

            let rect = svg_element::Rectangle::new()
                .set("x", rect_x)
                .set("y", y - height / 2.0 - pad)
                .set("width", width + pad * 2.0)
                .set("height", height + pad * 2.0)
                .set("rx", 4.0)
                .set("fill", bubble.fill().to_string())
                .set("fill-opacity", bubble.fill().alpha())
                .set("stroke", bubble.edge().to_string())
                .set("stroke-width", 1.0);

            output.add_to_layer(RenderLayer::Label, Box::new(rect));
        }

        let text = TextBlock {
            x,
            y,
            content: &self.content,
            font_size: self.font_size,
            color: self.color,
            bold: self.bold,
            italic: self.italic,
            align: self.align,
        }
        .render();

        output.add_to_layer(RenderLayer::Label, Box::new(text));
    }
}

/// A small filled disc with a single centered glyph, used for step numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    center: Point,
    glyph: String,
    style: RoleStyle,
    radius: f32,
    font_size: f32,
}

impl Marker {
    /// Creates a marker at the given center. The role style supplies the disc
    /// fill and the glyph color.
    pub fn new(center: Point, glyph: impl Into<String>, style: RoleStyle) -> Self {
        Self {
            center,
            glyph: glyph.into(),
            style,
            radius: 0.015,
            font_size: 8.0,
        }
    }

    /// Sets the disc radius in normalized horizontal units.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Returns the center point.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Renders the marker onto the label layer.
    pub fn render(&self, canvas: &Canvas, output: &mut LayeredOutput) {
        let (cx, cy) = canvas.point(self.center);

        let disc = svg_element::Circle::new()
            .set("cx", cx)
            .set("cy", cy)
            .set("r", canvas.length_x(self.radius))
            .set("fill", self.style.fill().to_string());

        output.add_to_layer(RenderLayer::Label, Box::new(disc));

        let glyph = TextBlock {
            x: cx,
            y: cy,
            content: &self.glyph,
            font_size: self.font_size,
            color: self.style.text(),
            bold: true,
            italic: false,
            align: Align::Center,
        }
        .render();

        output.add_to_layer(RenderLayer::Label, Box::new(glyph));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white() -> Color {
        Color::new("white").unwrap()
    }

    #[test]
    fn test_note_renders_text_on_label_layer() {
        let canvas = Canvas::new(792.0, 612.0);
        let mut output = LayeredOutput::new();

        Note::new(Point::new(0.5, 0.5), "hello", 9.0, Color::default())
            .render(&canvas, &mut output);

        let nodes = output.render();
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn test_note_bubble_precedes_text() {
        let canvas = Canvas::new(792.0, 612.0);
        let mut output = LayeredOutput::new();

        Note::new(Point::new(0.5, 0.5), "PASS", 7.0, Color::default())
            .bold()
            .with_bubble(Bubble::new(white(), Color::default()))
            .render(&canvas, &mut output);

        let nodes = output.render();
        let group = nodes[0].to_string();
        let rect_at = group.find("<rect").unwrap();
        let text_at = group.find("<text").unwrap();
        assert!(rect_at < text_at);
    }

    #[test]
    fn test_marker_draws_disc_and_glyph() {
        let canvas = Canvas::new(792.0, 612.0);
        let mut output = LayeredOutput::new();

        let style = RoleStyle::new(Color::new("#1A237E").unwrap(), white());
        Marker::new(Point::new(0.03, 0.78), "1", style).render(&canvas, &mut output);

        let group = output.render()[0].to_string();
        assert!(group.contains("<circle"));
        assert!(group.contains(">1<"));
    }
}

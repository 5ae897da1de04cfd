//! Shared text emission for the drawing primitives.
//!
//! Text is rendered as SVG `<text>` elements with one `<tspan>` per line,
//! centered vertically around the anchor point. Widths are estimated from
//! character counts; the estimate only sizes label bubbles, never layout.

use svg::node::Text as SvgText;
use svg::node::element as svg_element;

use super::note::Align;
use crate::color::Color;

/// Font family requested for every text element on a page.
pub(crate) const FONT_FAMILY: &str = "Helvetica";

/// Line height as a multiple of the font size.
pub(crate) const LINE_HEIGHT: f32 = 1.2;

/// Average glyph advance as a multiple of the font size, for bubble sizing.
const GLYPH_ADVANCE: f32 = 0.55;

/// A positioned multi-line text block in page points.
pub(crate) struct TextBlock<'a> {
    pub x: f32,
    pub y: f32,
    pub content: &'a str,
    pub font_size: f32,
    pub color: Color,
    pub bold: bool,
    pub italic: bool,
    pub align: Align,
}

impl TextBlock<'_> {
    pub(crate) fn render(&self) -> svg_element::Text {
        let lines: Vec<&str> = self.content.lines().collect();
        let line_height = self.font_size * LINE_HEIGHT;
        let total_height = line_height * lines.len() as f32;
        let y_offset = -(total_height + line_height) / 2.0;

        let mut text = svg_element::Text::new("")
            .set("x", self.x)
            .set("y", self.y + y_offset)
            .set(
                "text-anchor",
                match self.align {
                    Align::Left => "start",
                    Align::Center => "middle",
                },
            )
            .set("dominant-baseline", "central")
            .set("font-family", FONT_FAMILY)
            .set("font-size", self.font_size)
            .set("fill", self.color.to_string())
            .set("fill-opacity", self.color.alpha());

        if self.bold {
            text = text.set("font-weight", "bold");
        }
        if self.italic {
            text = text.set("font-style", "italic");
        }

        for line in lines {
            let tspan = svg_element::TSpan::new("")
                .set("x", self.x)
                .set("dy", line_height)
                .add(SvgText::new(line));
            text = text.add(tspan);
        }

        text
    }
}

/// Estimates the `(width, height)` of a text block in points.
pub(crate) fn estimate_extent(content: &str, font_size: f32) -> (f32, f32) {
    let widest = content
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let line_count = content.lines().count().max(1);

    (
        widest as f32 * font_size * GLYPH_ADVANCE,
        line_count as f32 * font_size * LINE_HEIGHT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_extent_uses_widest_line() {
        let (w_short, _) = estimate_extent("ok", 10.0);
        let (w_long, h) = estimate_extent("ok\nmuch longer line", 10.0);
        assert!(w_long > w_short);
        assert!((h - 2.0 * 10.0 * LINE_HEIGHT).abs() < 0.001);
    }

    #[test]
    fn test_render_emits_one_tspan_per_line() {
        let block = TextBlock {
            x: 100.0,
            y: 100.0,
            content: "first\nsecond\nthird",
            font_size: 10.0,
            color: Color::default(),
            bold: false,
            italic: false,
            align: Align::Center,
        };

        let rendered = block.render().to_string();
        assert_eq!(rendered.matches("<tspan").count(), 3);
    }
}

//! The page frame: header bar, subtitle, footer, and page background.

use svg::node::element as svg_element;

use super::{
    Canvas, LayeredOutput, RenderLayer,
    note::Align,
    text::TextBlock,
};
use crate::{
    color::Color,
    geometry::{Bounds, Point},
};
use crate::style::RoleStyle;

/// Normalized y-coordinate where the header band begins. Page content must
/// stay below this line.
pub const HEADER_BASE: f32 = 0.92;

const PAGE_BACKGROUND: &str = "#FAFAFA";
const SUBTITLE_COLOR: &str = "#B0BEC5";
const FOOTER_COLOR: &str = "#9E9E9E";
const FOOTER_CAPTION: &str = "CapNet — The Capability Layer for AI Agents  |  capnet.dev";

/// The region available to page content: the full page minus the reserved
/// header band.
pub fn content_region() -> Bounds {
    Bounds::new(Point::new(0.0, 0.0), Point::new(1.0, HEADER_BASE))
}

fn chrome(css: &str) -> Color {
    Color::new(css).expect("chrome color literals are valid CSS")
}

/// The fixed chrome drawn on every page before any content: a light page
/// background, a full-width title bar with optional subtitle, and the footer
/// caption.
#[derive(Debug, Clone, PartialEq)]
pub struct PageFrame {
    title: String,
    subtitle: Option<String>,
    header: RoleStyle,
}

impl PageFrame {
    /// Creates a frame. The header role style supplies the title-bar fill
    /// and the title text color.
    pub fn new(title: impl Into<String>, subtitle: Option<&str>, header: RoleStyle) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.map(str::to_string),
            header,
        }
    }

    /// Returns the page title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Renders the frame chrome.
    pub fn render(&self, canvas: &Canvas, output: &mut LayeredOutput) {
        let background = svg_element::Rectangle::new()
            .set("x", 0.0)
            .set("y", 0.0)
            .set("width", canvas.width())
            .set("height", canvas.height())
            .set("fill", PAGE_BACKGROUND);
        output.add_to_layer(RenderLayer::Background, Box::new(background));

        let title_bar = svg_element::Rectangle::new()
            .set("x", 0.0)
            .set("y", 0.0)
            .set("width", canvas.width())
            .set("height", canvas.length_y(1.0 - HEADER_BASE))
            .set("fill", self.header.fill().to_string());
        output.add_to_layer(RenderLayer::Background, Box::new(title_bar));

        let (tx, ty) = canvas.point(Point::new(0.5, 0.96));
        let title = TextBlock {
            x: tx,
            y: ty,
            content: &self.title,
            font_size: 18.0,
            color: self.header.text(),
            bold: true,
            italic: false,
            align: Align::Center,
        }
        .render();
        output.add_to_layer(RenderLayer::Label, Box::new(title));

        if let Some(subtitle) = &self.subtitle {
            let (sx, sy) = canvas.point(Point::new(0.5, 0.925));
            let subtitle = TextBlock {
                x: sx,
                y: sy,
                content: subtitle,
                font_size: 10.0,
                color: chrome(SUBTITLE_COLOR),
                bold: false,
                italic: false,
                align: Align::Center,
            }
            .render();
            output.add_to_layer(RenderLayer::Label, Box::new(subtitle));
        }

        let (fx, fy) = canvas.point(Point::new(0.5, 0.01));
        let footer = TextBlock {
            x: fx,
            y: fy,
            content: FOOTER_CAPTION,
            font_size: 7.0,
            color: chrome(FOOTER_COLOR),
            bold: false,
            italic: true,
            align: Align::Center,
        }
        .render();
        output.add_to_layer(RenderLayer::Label, Box::new(footer));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> RoleStyle {
        RoleStyle::new(
            Color::new("#1A237E").unwrap(),
            Color::new("white").unwrap(),
        )
    }

    #[test]
    fn test_frame_renders_title_and_footer() {
        let canvas = Canvas::new(792.0, 612.0);
        let mut output = LayeredOutput::new();

        PageFrame::new("ENFORCEMENT DECISION TREE", None, header()).render(&canvas, &mut output);

        let nodes = output.render();
        assert_eq!(nodes.len(), 2);
        let labels = nodes[1].to_string();
        assert!(labels.contains("ENFORCEMENT DECISION TREE"));
        assert!(labels.contains("capnet.dev"));
    }

    #[test]
    fn test_subtitle_is_optional() {
        let canvas = Canvas::new(792.0, 612.0);

        let mut with_subtitle = LayeredOutput::new();
        PageFrame::new("T", Some("Trust Boundaries & Component Roles"), header())
            .render(&canvas, &mut with_subtitle);
        let labels = with_subtitle.render().pop().unwrap().to_string();
        assert!(labels.contains("Trust Boundaries"));

        let mut without = LayeredOutput::new();
        PageFrame::new("T", None, header()).render(&canvas, &mut without);
        let labels = without.render().pop().unwrap().to_string();
        assert!(!labels.contains("Trust Boundaries"));
    }

    #[test]
    fn test_content_region_excludes_header_band() {
        let region = content_region();
        assert!(region.contains(Point::new(0.5, 0.915)));
        assert!(!region.contains(Point::new(0.5, 0.93)));
    }
}

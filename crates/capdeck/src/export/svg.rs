//! SVG rendering for composed pages.

use svg::Document;

use capdeck_core::draw::{Canvas, LayeredOutput, PageFrame};

use crate::{
    config::PageConfig,
    page::{DrawOp, Page},
};

/// Renders one page into a standalone SVG document.
///
/// The frame renders first, then every draw operation in issue order; the
/// layered output takes care of z-ordering when the document is assembled.
pub(crate) fn render_page(page: &Page, config: &PageConfig) -> Document {
    let canvas = Canvas::new(config.width(), config.height());
    let mut output = LayeredOutput::new();

    PageFrame::new(page.title(), page.subtitle(), page.header()).render(&canvas, &mut output);

    for op in page.ops() {
        match op {
            DrawOp::Zone(zone) => zone.render(&canvas, &mut output),
            DrawOp::Box(label_box) => label_box.render(&canvas, &mut output),
            DrawOp::Arrow(arrow) => arrow.render(&canvas, &mut output),
            DrawOp::Note(note) => note.render(&canvas, &mut output),
            DrawOp::Marker(marker) => marker.render(&canvas, &mut output),
        }
    }

    let mut document = Document::new()
        .set("width", config.width())
        .set("height", config.height())
        .set("viewBox", (0.0, 0.0, config.width(), config.height()));

    for node in output.render() {
        document = document.add(node);
    }

    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, page::PageBuilder};

    #[test]
    fn test_rendered_page_is_complete_svg() {
        let config = AppConfig::default();
        let styles = config.style().registry().unwrap();
        let page = PageBuilder::new("A PAGE", Some("with a subtitle"), &styles)
            .unwrap()
            .finish();

        let svg = render_page(&page, config.page()).to_string();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("A PAGE"));
        assert!(svg.contains("data-layer=\"background\""));
    }
}

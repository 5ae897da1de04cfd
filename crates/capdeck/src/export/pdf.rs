//! Multi-page PDF assembly.
//!
//! Each page SVG is parsed with usvg and converted into a PDF XObject chunk;
//! the chunks are stitched behind a single catalog and page tree, one page
//! per composer, in declared order.

use std::collections::HashMap;

use pdf_writer::{Chunk, Content, Finish, Name, Pdf, Rect, Ref};

use crate::error::DeckError;

/// XObject name each page's drawing is registered under in its resources.
const PAGE_XOBJECT: Name<'static> = Name(b"Page");

struct PagePieces {
    page_id: Ref,
    content_id: Ref,
    svg_id: Ref,
    chunk: Chunk,
}

/// Converts the per-page SVGs into one multi-page PDF.
pub(crate) fn assemble(
    svg_pages: &[String],
    width: f32,
    height: f32,
) -> Result<Vec<u8>, DeckError> {
    let mut options = svg2pdf::usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    options.font_family = "Helvetica".to_string();

    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let page_tree_id = alloc.bump();

    let mut pieces = Vec::with_capacity(svg_pages.len());
    for svg in svg_pages {
        let tree = svg2pdf::usvg::Tree::from_str(svg, &options)
            .map_err(|err| DeckError::Pdf(err.to_string()))?;
        let (chunk, svg_id) = svg2pdf::to_chunk(&tree, svg2pdf::ConversionOptions::default())
            .map_err(|err| DeckError::Pdf(err.to_string()))?;

        // Fold the chunk's refs into this document's allocator
        let mut mapping = HashMap::new();
        let chunk = chunk.renumber(|old| *mapping.entry(old).or_insert_with(|| alloc.bump()));
        let svg_id = mapping[&svg_id];

        pieces.push(PagePieces {
            page_id: alloc.bump(),
            content_id: alloc.bump(),
            svg_id,
            chunk,
        });
    }

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(pieces.iter().map(|piece| piece.page_id))
        .count(pieces.len() as i32);

    for piece in pieces {
        let mut page = pdf.page(piece.page_id);
        page.media_box(Rect::new(0.0, 0.0, width, height));
        page.parent(page_tree_id);
        page.contents(piece.content_id);
        page.resources()
            .x_objects()
            .pair(PAGE_XOBJECT, piece.svg_id);
        page.finish();

        // The converted SVG occupies the unit square; scale it to the page
        let mut content = Content::new();
        content.save_state();
        content.transform([width, 0.0, 0.0, height, 0.0, 0.0]);
        content.x_object(PAGE_XOBJECT);
        content.restore_state();
        pdf.stream(piece.content_id, &content.finish());

        pdf.extend(&piece.chunk);
    }

    Ok(pdf.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="792" height="612" viewBox="0 0 792 612"><rect x="0" y="0" width="792" height="612" fill="#FAFAFA"/></svg>"##;

    #[test]
    fn test_assemble_counts_pages() {
        let svgs = vec![MINIMAL_SVG.to_string(), MINIMAL_SVG.to_string()];
        let bytes = assemble(&svgs, 792.0, 612.0).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
        assert!(
            bytes
                .windows(b"/Count 2".len())
                .any(|window| window == b"/Count 2")
        );
    }

    #[test]
    fn test_invalid_svg_is_rejected() {
        let svgs = vec!["this is not svg".to_string()];
        assert!(matches!(
            assemble(&svgs, 792.0, 612.0),
            Err(DeckError::Pdf(_))
        ));
    }
}

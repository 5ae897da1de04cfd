//! The immutable page model and its builder.

use capdeck_core::{
    draw::{Arrow, LabelBox, Marker, Note, Zone, content_region},
    geometry::{Bounds, Point, Size},
    style::{RoleStyle, StyleRegistry},
};

use crate::error::ComposeError;

/// One draw operation on a page, in issue order.
#[derive(Debug, Clone)]
pub enum DrawOp {
    Zone(Zone),
    Box(LabelBox),
    Arrow(Arrow),
    Note(Note),
    Marker(Marker),
}

/// A fully composed page: title, optional subtitle, and the ordered draw
/// operations. Immutable once built; the unit appended to the output
/// document.
#[derive(Debug, Clone)]
pub struct Page {
    title: String,
    subtitle: Option<String>,
    header: RoleStyle,
    ops: Vec<DrawOp>,
}

impl Page {
    /// Returns the page title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the subtitle, if any.
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Returns the resolved header style for the title bar.
    pub fn header(&self) -> RoleStyle {
        self.header
    }

    /// Returns the draw operations in issue order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }
}

/// Builds a [`Page`], validating every placement against the content region.
///
/// The header band (y ≥ 0.92) is reserved for the page frame; any element
/// placed outside [0,1] × [0,0.92] fails fast with
/// [`ComposeError::OutOfBounds`] instead of being clipped silently.
///
/// # Examples
///
/// ```
/// # use capdeck::PageBuilder;
/// # use capdeck::config::AppConfig;
/// # use capdeck_core::draw::Note;
/// # use capdeck_core::geometry::Point;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let styles = AppConfig::default().style().registry()?;
/// let mut page = PageBuilder::new("A PAGE", None, &styles)?;
///
/// let ink = page.resolve("header")?.fill();
/// page.draw_note(Note::new(Point::new(0.5, 0.5), "hello", 9.0, ink))?;
///
/// let page = page.finish();
/// assert_eq!(page.ops().len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct PageBuilder<'a> {
    styles: &'a StyleRegistry,
    region: Bounds,
    page: Page,
}

impl<'a> PageBuilder<'a> {
    /// Starts a page. Resolves the `header` role for the title bar, so an
    /// incomplete palette fails here, before any content is placed.
    pub fn new(
        title: &str,
        subtitle: Option<&str>,
        styles: &'a StyleRegistry,
    ) -> Result<Self, ComposeError> {
        let header = styles.resolve("header")?;
        Ok(Self {
            styles,
            region: content_region(),
            page: Page {
                title: title.to_string(),
                subtitle: subtitle.map(str::to_string),
                header,
                ops: Vec::new(),
            },
        })
    }

    /// Resolves a style token from the registry this page draws with.
    pub fn resolve(&self, token: &str) -> Result<RoleStyle, ComposeError> {
        Ok(self.styles.resolve(token)?)
    }

    /// Places a background zone.
    pub fn draw_zone(&mut self, zone: Zone) -> Result<&mut Self, ComposeError> {
        self.check_rect("zone", zone.origin(), zone.size())?;
        self.page.ops.push(DrawOp::Zone(zone));
        Ok(self)
    }

    /// Places a labeled box.
    pub fn draw_box(&mut self, label_box: LabelBox) -> Result<&mut Self, ComposeError> {
        self.check_rect("box", label_box.origin(), label_box.size())?;
        self.page.ops.push(DrawOp::Box(label_box));
        Ok(self)
    }

    /// Places an arrow or connector line.
    pub fn draw_arrow(&mut self, arrow: Arrow) -> Result<&mut Self, ComposeError> {
        self.check_point("arrow start", arrow.start())?;
        self.check_point("arrow end", arrow.end())?;
        if let Some(anchor) = arrow.label_anchor() {
            self.check_point("arrow label", anchor)?;
        }
        self.page.ops.push(DrawOp::Arrow(arrow));
        Ok(self)
    }

    /// Places a text note.
    pub fn draw_note(&mut self, note: Note) -> Result<&mut Self, ComposeError> {
        self.check_point("note", note.anchor())?;
        self.page.ops.push(DrawOp::Note(note));
        Ok(self)
    }

    /// Places a step marker.
    pub fn draw_marker(&mut self, marker: Marker) -> Result<&mut Self, ComposeError> {
        self.check_point("marker", marker.center())?;
        self.page.ops.push(DrawOp::Marker(marker));
        Ok(self)
    }

    /// Finalizes the page. No further operations can be added.
    pub fn finish(self) -> Page {
        self.page
    }

    fn check_point(&self, element: &'static str, point: Point) -> Result<(), ComposeError> {
        if self.region.contains(point) {
            Ok(())
        } else {
            Err(ComposeError::OutOfBounds {
                element,
                x: point.x(),
                y: point.y(),
            })
        }
    }

    fn check_rect(
        &self,
        element: &'static str,
        origin: Point,
        size: Size,
    ) -> Result<(), ComposeError> {
        if self.region.contains_rect(origin, size) {
            Ok(())
        } else {
            Err(ComposeError::OutOfBounds {
                element,
                x: origin.x(),
                y: origin.y(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capdeck_core::color::Color;

    use crate::config::AppConfig;

    fn styles() -> StyleRegistry {
        AppConfig::default().style().registry().unwrap()
    }

    #[test]
    fn test_builder_resolves_header_up_front() {
        let empty = StyleRegistry::default();
        let err = PageBuilder::new("T", None, &empty).err().unwrap();
        assert!(matches!(err, ComposeError::Style(_)));
    }

    #[test]
    fn test_placement_in_header_band_is_rejected() {
        let styles = styles();
        let mut page = PageBuilder::new("T", None, &styles).unwrap();

        let ink = Color::default();
        let err = page
            .draw_note(Note::new(Point::new(0.5, 0.95), "oops", 9.0, ink))
            .err()
            .unwrap();
        assert!(matches!(err, ComposeError::OutOfBounds { .. }));
    }

    #[test]
    fn test_rect_must_fit_entirely() {
        let styles = styles();
        let mut page = PageBuilder::new("T", None, &styles).unwrap();
        let style = page.resolve("proxy").unwrap();

        // Extends past x = 1.0
        let result = page.draw_box(LabelBox::new(
            Point::new(0.9, 0.1),
            Size::new(0.2, 0.1),
            "WIDE",
            style,
        ));
        assert!(result.is_err());
    }

    #[test]
    fn test_ops_preserve_issue_order() {
        let styles = styles();
        let mut page = PageBuilder::new("T", None, &styles).unwrap();
        let style = page.resolve("agent").unwrap();
        let ink = Color::default();

        page.draw_box(LabelBox::new(
            Point::new(0.1, 0.1),
            Size::new(0.2, 0.1),
            "AGENT",
            style,
        ))
        .unwrap();
        page.draw_note(Note::new(Point::new(0.5, 0.5), "after", 9.0, ink))
            .unwrap();

        let page = page.finish();
        assert!(matches!(page.ops()[0], DrawOp::Box(_)));
        assert!(matches!(page.ops()[1], DrawOp::Note(_)));
    }
}

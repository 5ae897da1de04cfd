//! Integration tests for the Deck API.
//!
//! These exercise the full pipeline: composing the standard deck, checking
//! its invariants, and rendering the paginated PDF.

use capdeck::{
    ComposeError, Deck, DeckError, DrawOp, PageBuilder,
    config::AppConfig,
    pages::{self, Composer},
};
use capdeck_core::{geometry::Point, style::StyleRegistry};
use tempfile::tempdir;

fn assert_in_unit(element: &str, title: &str, point: Point) {
    assert!(
        (0.0..=1.0).contains(&point.x()) && (0.0..=1.0).contains(&point.y()),
        "{element} at ({}, {}) escapes page `{title}`",
        point.x(),
        point.y()
    );
}

#[test]
fn standard_deck_composes_seven_pages_in_order() {
    let deck = Deck::default();
    let pages = deck.compose(&pages::standard_deck()).unwrap();

    let titles: Vec<&str> = pages.iter().map(|page| page.title()).collect();
    assert_eq!(
        titles,
        [
            "CAPNET SYSTEM ARCHITECTURE",
            "CAPABILITY ISSUANCE FLOW",
            "ENFORCEMENT DECISION TREE",
            "AGENT ACTION FLOW",
            "REVOCATION FLOW — KILL SWITCH",
            "HIJACKER BLAST RADIUS",
            "CAPNET vs TRADITIONAL APPROACHES",
        ]
    );
}

#[test]
fn no_element_escapes_its_canvas() {
    let deck = Deck::default();

    for page in deck.compose(&pages::standard_deck()).unwrap() {
        let title = page.title().to_string();
        for op in page.ops() {
            match op {
                DrawOp::Zone(zone) => {
                    assert_in_unit("zone", &title, zone.origin());
                    assert_in_unit(
                        "zone corner",
                        &title,
                        Point::new(
                            zone.origin().x() + zone.size().width(),
                            zone.origin().y() + zone.size().height(),
                        ),
                    );
                }
                DrawOp::Box(label_box) => {
                    assert_in_unit("box", &title, label_box.origin());
                    assert_in_unit(
                        "box corner",
                        &title,
                        Point::new(
                            label_box.origin().x() + label_box.size().width(),
                            label_box.origin().y() + label_box.size().height(),
                        ),
                    );
                }
                DrawOp::Arrow(arrow) => {
                    assert_in_unit("arrow start", &title, arrow.start());
                    assert_in_unit("arrow end", &title, arrow.end());
                    if let Some(anchor) = arrow.label_anchor() {
                        assert_in_unit("arrow label", &title, anchor);
                    }
                }
                DrawOp::Note(note) => assert_in_unit("note", &title, note.anchor()),
                DrawOp::Marker(marker) => assert_in_unit("marker", &title, marker.center()),
            }
        }
    }
}

#[test]
fn every_page_renders_to_svg_with_its_title() {
    let deck = Deck::default();

    for page in deck.compose(&pages::standard_deck()).unwrap() {
        let svg = deck.render_svg(&page);
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("capnet.dev"), "footer missing on {}", page.title());
    }
}

#[test]
fn pdf_has_one_page_per_composer() {
    let deck = Deck::default();
    let bytes = deck.render_pdf().unwrap();

    assert!(bytes.starts_with(b"%PDF"));
    assert!(
        bytes
            .windows(b"/Count 7".len())
            .any(|window| window == b"/Count 7")
    );
}

#[test]
fn rendering_twice_is_byte_identical() {
    let deck = Deck::default();
    let first = deck.render_pdf().unwrap();
    let second = deck.render_pdf().unwrap();
    assert_eq!(first, second);
}

fn broken(_styles: &StyleRegistry) -> Result<capdeck::Page, ComposeError> {
    Err(ComposeError::OutOfBounds {
        element: "box",
        x: 1.4,
        y: 0.2,
    })
}

#[test]
fn failing_composer_aborts_without_partial_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("deck.pdf");

    let deck = Deck::default();
    let mut composers = pages::standard_deck();
    composers.truncate(1);
    composers.push(Composer::new("broken", broken));

    let err = deck.write_pdf_with(&path, &composers).unwrap_err();
    assert!(matches!(err, DeckError::Compose { page: "broken", .. }));
    assert!(!path.exists(), "failed render must not leave output behind");
}

fn references_undefined_token(styles: &StyleRegistry) -> Result<capdeck::Page, ComposeError> {
    let mut page = PageBuilder::new("BAD", None, styles)?;
    page.resolve("no-such-role")?;
    Ok(page.finish())
}

#[test]
fn unknown_style_token_fails_before_any_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("deck.pdf");

    let deck = Deck::default();
    let composers = vec![Composer::new("bad-token", references_undefined_token)];

    let err = deck.write_pdf_with(&path, &composers).unwrap_err();
    match err {
        DeckError::Compose {
            source: ComposeError::Style(err),
            ..
        } => assert_eq!(err.token, "no-such-role"),
        other => panic!("expected a style error, got {other:?}"),
    }
    assert!(!path.exists());
}

#[test]
fn write_replaces_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("deck.pdf");
    std::fs::write(&path, b"stale content").unwrap();

    let deck = Deck::default();
    let mut composers = pages::standard_deck();
    composers.truncate(1);

    let summary = deck.write_pdf_with(&path, &composers).unwrap();
    assert_eq!(summary.page_count(), 1);

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn config_overrides_page_dimensions() {
    let config: AppConfig = toml::from_str(
        r#"
        [page]
        width = 612.0
        height = 792.0
        "#,
    )
    .unwrap();

    assert_eq!(config.page().width(), 612.0);
    assert_eq!(config.page().height(), 792.0);

    // Palette defaults still apply when [style] is omitted
    let registry = config.style().registry().unwrap();
    assert!(registry.resolve("proxy").is_ok());
}

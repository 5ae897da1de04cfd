//! CapDeck - renders the CapNet architecture deck to a multi-page PDF.
//!
//! The deck is a fixed sequence of seven full-page vector diagrams explaining
//! the CapNet capability system: architecture, flows, and comparisons. Each
//! page is composed from declarative drawing primitives (labeled boxes,
//! arrows, notes) with role-based styling, rendered to SVG, and assembled
//! into a single paginated PDF.
//!
//! # Example
//!
//! ```no_run
//! use capdeck::{Deck, config::AppConfig};
//!
//! let deck = Deck::new(AppConfig::default());
//! let summary = deck
//!     .write_pdf("CapNet_Architecture_Diagrams.pdf")
//!     .expect("render failed");
//!
//! println!("Generated: {}", summary.path().display());
//! println!("Pages: {}", summary.page_count());
//! ```

pub mod config;
pub mod pages;

mod error;
mod export;
mod page;

pub use capdeck_core::{color, draw, geometry, style};

pub use error::{ComposeError, DeckError};
pub use page::{DrawOp, Page, PageBuilder};

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, info};
use tempfile::NamedTempFile;

use config::AppConfig;
use pages::Composer;

/// Summary of a completed render: where the document landed and how many
/// pages it holds.
#[derive(Debug, Clone)]
pub struct RenderSummary {
    path: PathBuf,
    page_count: usize,
}

impl RenderSummary {
    /// Returns the output path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of pages written.
    pub fn page_count(&self) -> usize {
        self.page_count
    }
}

/// The document assembler: composes pages in declared order and writes the
/// paginated PDF.
///
/// Rendering is a one-shot synchronous batch. Any composer failure aborts
/// the whole document; the output path is only touched once the full
/// document has been rendered, so a failed run never leaves a partial file
/// behind.
#[derive(Default)]
pub struct Deck {
    config: AppConfig,
}

impl Deck {
    /// Creates a deck with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Composes every page in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Compose`] naming the failing composer if any
    /// page fails, and [`DeckError::Config`] if the palette is invalid.
    pub fn compose(&self, composers: &[Composer]) -> Result<Vec<Page>, DeckError> {
        let styles = self.config.style().registry()?;

        let mut pages = Vec::with_capacity(composers.len());
        for composer in composers {
            debug!(page = composer.name(); "Composing page");
            let page = composer
                .compose(&styles)
                .map_err(|source| DeckError::Compose {
                    page: composer.name(),
                    source,
                })?;
            pages.push(page);
        }
        Ok(pages)
    }

    /// Renders one composed page to a standalone SVG document.
    pub fn render_svg(&self, page: &Page) -> String {
        export::svg::render_page(page, self.config.page()).to_string()
    }

    /// Renders the given composers into the bytes of a multi-page PDF.
    pub fn render_pdf_with(&self, composers: &[Composer]) -> Result<Vec<u8>, DeckError> {
        let pages = self.compose(composers)?;
        let svg_pages: Vec<String> = pages.iter().map(|page| self.render_svg(page)).collect();

        export::pdf::assemble(
            &svg_pages,
            self.config.page().width(),
            self.config.page().height(),
        )
    }

    /// Renders the standard seven-page deck into PDF bytes.
    pub fn render_pdf(&self) -> Result<Vec<u8>, DeckError> {
        self.render_pdf_with(&pages::standard_deck())
    }

    /// Renders the given composers and writes the document to `path`.
    ///
    /// The write is atomic: the document is rendered fully in memory, then
    /// persisted over the destination via a temporary file in the same
    /// directory.
    pub fn write_pdf_with(
        &self,
        path: impl AsRef<Path>,
        composers: &[Composer],
    ) -> Result<RenderSummary, DeckError> {
        let path = path.as_ref();
        let bytes = self.render_pdf_with(composers)?;

        write_atomic(path, &bytes)?;
        info!(path = path.display().to_string(), pages = composers.len(); "Deck written");

        Ok(RenderSummary {
            path: path.to_path_buf(),
            page_count: composers.len(),
        })
    }

    /// Renders the standard deck and writes it to `path`.
    pub fn write_pdf(&self, path: impl AsRef<Path>) -> Result<RenderSummary, DeckError> {
        self.write_pdf_with(path, &pages::standard_deck())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), DeckError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let wrap = |source: std::io::Error| DeckError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut file = NamedTempFile::new_in(dir).map_err(wrap)?;
    file.write_all(bytes).map_err(wrap)?;
    file.persist(path).map_err(|err| wrap(err.error))?;
    Ok(())
}

//! The seven deck pages.
//!
//! One module per diagram. Each composer is a pure function from the style
//! registry to a finished [`Page`]; coordinates and captions are literal
//! page content. Composers never read another composer's output, so the
//! deck renders deterministically in declared order.

mod action;
mod architecture;
mod blast_radius;
mod comparison;
mod enforcement;
mod issuance;
mod revocation;

use capdeck_core::{color::Color, style::StyleRegistry};

use crate::{error::ComposeError, page::Page};

/// A named page composer.
#[derive(Debug, Clone, Copy)]
pub struct Composer {
    name: &'static str,
    compose: fn(&StyleRegistry) -> Result<Page, ComposeError>,
}

impl Composer {
    /// Creates a composer from a name and a compose function.
    pub const fn new(
        name: &'static str,
        compose: fn(&StyleRegistry) -> Result<Page, ComposeError>,
    ) -> Self {
        Self { name, compose }
    }

    /// Returns the composer name, used in error reports.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Composes the page.
    pub fn compose(&self, styles: &StyleRegistry) -> Result<Page, ComposeError> {
        (self.compose)(styles)
    }
}

/// The standard deck, in its fixed page order.
pub fn standard_deck() -> Vec<Composer> {
    vec![
        Composer::new("system-architecture", architecture::compose),
        Composer::new("issuance-flow", issuance::compose),
        Composer::new("enforcement-pipeline", enforcement::compose),
        Composer::new("action-flow", action::compose),
        Composer::new("revocation-flow", revocation::compose),
        Composer::new("blast-radius", blast_radius::compose),
        Composer::new("comparison", comparison::compose),
    ]
}

/// Parses a literal page tint. One-off colors are page content, not palette
/// roles.
pub(crate) fn tint(css: &str) -> Result<Color, ComposeError> {
    Color::new(css).map_err(ComposeError::Color)
}

/// The near-black used for body text.
pub(crate) fn ink() -> Result<Color, ComposeError> {
    tint("#212121")
}

/// The muted brown used for caption subtext.
pub(crate) fn muted() -> Result<Color, ComposeError> {
    tint("#795548")
}

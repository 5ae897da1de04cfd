//! Configuration types for deck rendering.
//!
//! This module provides configuration structures that control page geometry
//! and the visual palette. All types implement [`serde::Deserialize`] for
//! loading from an external TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining page and style settings.
//! - [`PageConfig`] - Page dimensions in points.
//! - [`StyleConfig`] - The named palette behind the style registry.
//!
//! # Example
//!
//! ```
//! # use capdeck::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().registry().is_ok());
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use capdeck_core::{
    color::Color,
    style::{RoleStyle, StyleRegistry},
};

use crate::error::DeckError;

/// Top-level configuration combining page and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Page geometry section.
    #[serde(default)]
    page: PageConfig,

    /// Palette section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from the given sections.
    pub fn new(page: PageConfig, style: StyleConfig) -> Self {
        Self { page, style }
    }

    /// Returns the page configuration.
    pub fn page(&self) -> &PageConfig {
        &self.page
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Page dimensions in points.
///
/// The default is 792×612 pt — US letter landscape (11×8.5 in) at 72 pt/in,
/// the deck's native aspect.
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_page_width")]
    width: f32,

    #[serde(default = "default_page_height")]
    height: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width: default_page_width(),
            height: default_page_height(),
        }
    }
}

impl PageConfig {
    /// Returns the page width in points.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the page height in points.
    pub fn height(&self) -> f32 {
        self.height
    }
}

fn default_page_width() -> f32 {
    792.0
}

fn default_page_height() -> f32 {
    612.0
}

/// A fill/text color pair for one palette role, as CSS color strings.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleColors {
    fill: String,

    #[serde(default = "default_text_color")]
    text: String,
}

impl RoleColors {
    fn new(fill: &str, text: &str) -> Self {
        Self {
            fill: fill.to_string(),
            text: text.to_string(),
        }
    }
}

fn default_text_color() -> String {
    "#FFFFFF".to_string()
}

/// The named palette behind the style registry.
///
/// Role entries from a config file are merged over the built-in CapNet
/// palette, so a file may recolor a single role without restating the rest.
/// The palette is an explicit immutable value — composers receive the
/// registry built from it by reference and there is no module-level color
/// state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    palette: BTreeMap<String, RoleColors>,
}

impl StyleConfig {
    /// Builds the immutable [`StyleRegistry`]: the CapNet palette with this
    /// configuration's overrides applied.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Config`] if any palette entry is not a valid CSS
    /// color.
    pub fn registry(&self) -> Result<StyleRegistry, DeckError> {
        let mut palette = capnet_palette();
        palette.extend(
            self.palette
                .iter()
                .map(|(token, colors)| (token.clone(), colors.clone())),
        );

        let mut roles = Vec::with_capacity(palette.len());
        for (token, colors) in &palette {
            let fill = Color::new(&colors.fill)
                .map_err(|err| DeckError::Config(format!("palette role `{token}`: {err}")))?;
            let text = Color::new(&colors.text)
                .map_err(|err| DeckError::Config(format!("palette role `{token}`: {err}")))?;
            roles.push((token.clone(), RoleStyle::new(fill, text)));
        }
        Ok(StyleRegistry::from_roles(roles))
    }
}

/// The CapNet palette: actor roles, outcome roles, chrome, and the two
/// trust-zone tints.
fn capnet_palette() -> BTreeMap<String, RoleColors> {
    let entries = [
        ("trusted-zone", RoleColors::new("#E8F5E9", "#2E7D32")),
        ("untrusted-zone", RoleColors::new("#FFEBEE", "#C62828")),
        ("user", RoleColors::new("#1565C0", "#FFFFFF")),
        ("extension", RoleColors::new("#2E7D32", "#FFFFFF")),
        ("proxy", RoleColors::new("#6A1B9A", "#FFFFFF")),
        ("agent", RoleColors::new("#E65100", "#FFFFFF")),
        ("resource", RoleColors::new("#00838F", "#FFFFFF")),
        ("custody", RoleColors::new("#37474F", "#FFFFFF")),
        ("allow", RoleColors::new("#2E7D32", "#FFFFFF")),
        ("deny", RoleColors::new("#C62828", "#FFFFFF")),
        ("receipt", RoleColors::new("#F9A825", "#212121")),
        ("revoke", RoleColors::new("#C62828", "#FFFFFF")),
        ("check-yes", RoleColors::new("#2E7D32", "#FFFFFF")),
        ("check-no", RoleColors::new("#C62828", "#FFFFFF")),
        ("header", RoleColors::new("#1A237E", "#FFFFFF")),
        ("insight", RoleColors::new("#FFF8E1", "#E65100")),
    ];

    entries
        .into_iter()
        .map(|(token, colors)| (token.to_string(), colors))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_is_letter_landscape() {
        let page = PageConfig::default();
        assert_eq!(page.width(), 792.0);
        assert_eq!(page.height(), 612.0);
    }

    #[test]
    fn test_default_palette_builds_registry() {
        let registry = StyleConfig::default().registry().unwrap();
        for token in ["user", "extension", "proxy", "agent", "resource", "header"] {
            assert!(registry.resolve(token).is_ok(), "missing role `{token}`");
        }
    }

    #[test]
    fn test_palette_override_merges_over_defaults() {
        let style = StyleConfig {
            palette: BTreeMap::from([(
                "proxy".to_string(),
                RoleColors::new("#123456", "#FFFFFF"),
            )]),
        };

        let registry = style.registry().unwrap();
        // Untouched roles survive the override
        assert!(registry.resolve("header").is_ok());

        let proxy = registry.resolve("proxy").unwrap();
        assert_eq!(
            proxy.fill().to_string(),
            Color::new("#123456").unwrap().to_string()
        );
    }

    #[test]
    fn test_invalid_palette_color_is_rejected() {
        let style = StyleConfig {
            palette: BTreeMap::from([(
                "user".to_string(),
                RoleColors::new("definitely-not-a-color", "#FFFFFF"),
            )]),
        };
        assert!(matches!(style.registry(), Err(DeckError::Config(_))));
    }
}

//! Role-based style resolution.
//!
//! Diagram elements never carry raw palette colors; they reference semantic
//! role tokens ("proxy", "deny", "trusted-zone", ...) which the
//! [`StyleRegistry`] resolves to a fill/text color pair. The registry is
//! built once from an explicit palette and is read-only afterwards, so it can
//! be shared freely between page composers.

use std::collections::HashMap;

use thiserror::Error;

use crate::color::Color;

/// The visual attributes a style token resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleStyle {
    fill: Color,
    text: Color,
}

impl RoleStyle {
    /// Creates a role style from a fill and a text color.
    pub fn new(fill: Color, text: Color) -> Self {
        Self { fill, text }
    }

    /// Returns the fill color for this role.
    pub fn fill(self) -> Color {
        self.fill
    }

    /// Returns the text color for this role.
    pub fn text(self) -> Color {
        self.text
    }
}

/// Error returned when a composer references a token the registry does not
/// define. This is a programming error in the referencing composer, caught
/// while composing — before any output exists.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("unknown style token `{token}`")]
pub struct UnknownStyleToken {
    /// The token that failed to resolve.
    pub token: String,
}

/// A fixed mapping from semantic role tokens to visual attributes.
///
/// # Examples
///
/// ```
/// # use capdeck_core::color::Color;
/// # use capdeck_core::style::{RoleStyle, StyleRegistry};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = StyleRegistry::from_roles([(
///     "deny".to_string(),
///     RoleStyle::new(Color::new("#C62828")?, Color::new("white")?),
/// )]);
///
/// let deny = registry.resolve("deny")?;
/// assert_eq!(deny.text().to_string(), Color::new("white")?.to_string());
/// assert!(registry.resolve("nonsense").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    roles: HashMap<String, RoleStyle>,
}

impl StyleRegistry {
    /// Builds a registry from `(token, style)` pairs.
    pub fn from_roles(roles: impl IntoIterator<Item = (String, RoleStyle)>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
        }
    }

    /// Resolves a token to its visual attributes.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownStyleToken`] if the token is not defined.
    pub fn resolve(&self, token: &str) -> Result<RoleStyle, UnknownStyleToken> {
        self.roles
            .get(token)
            .copied()
            .ok_or_else(|| UnknownStyleToken {
                token: token.to_string(),
            })
    }

    /// Returns the number of defined roles.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Returns `true` if no roles are defined.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> StyleRegistry {
        StyleRegistry::from_roles([
            (
                "allow".to_string(),
                RoleStyle::new(
                    Color::new("#2E7D32").unwrap(),
                    Color::new("white").unwrap(),
                ),
            ),
            (
                "deny".to_string(),
                RoleStyle::new(
                    Color::new("#C62828").unwrap(),
                    Color::new("white").unwrap(),
                ),
            ),
        ])
    }

    #[test]
    fn test_resolve_known_token() {
        let styles = registry();
        assert!(styles.resolve("allow").is_ok());
        assert!(styles.resolve("deny").is_ok());
    }

    #[test]
    fn test_resolve_unknown_token() {
        let styles = registry();
        let err = styles.resolve("receipt").unwrap_err();
        assert_eq!(err.token, "receipt");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let styles = registry();
        let first = styles.resolve("allow").unwrap();
        let second = styles.resolve("allow").unwrap();
        assert_eq!(first, second);
    }
}

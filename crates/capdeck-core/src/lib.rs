//! CapDeck Core Types and Definitions
//!
//! This crate provides the foundational types for composing CapDeck
//! architecture diagrams. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Normalized page-space geometry ([`geometry`] module)
//! - **Styles**: The role-to-color style registry ([`style`] module)
//! - **Draw**: The primitive drawing layer producing layered SVG output
//!   ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod style;

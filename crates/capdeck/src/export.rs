//! Rendering composed pages into the output artifact.
//!
//! Two stages: [`svg`] renders a [`Page`](crate::Page) into a standalone SVG
//! document; [`pdf`] converts the per-page SVGs and stitches them into one
//! multi-page PDF.

pub(crate) mod pdf;
pub(crate) mod svg;

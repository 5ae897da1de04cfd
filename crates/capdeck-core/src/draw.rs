//! The primitive drawing layer.
//!
//! Stateless element definitions ([`LabelBox`], [`Arrow`], [`Note`],
//! [`Marker`], [`Zone`], [`PageFrame`]) that render themselves onto a
//! [`LayeredOutput`] through a [`Canvas`]. The canvas maps normalized page
//! coordinates to page points; the layered output enforces the page z-order
//! (backgrounds below boxes, boxes below arrows, all text on top).

mod arrow;
mod boxes;
mod canvas;
mod frame;
mod layer;
mod note;
mod text;

pub use arrow::{Arrow, ArrowLabel, HeadStyle, LineStyle};
pub use boxes::{CornerStyle, LabelBox, Zone};
pub use canvas::Canvas;
pub use frame::{HEADER_BASE, PageFrame, content_region};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use note::{Align, Bubble, Marker, Note};

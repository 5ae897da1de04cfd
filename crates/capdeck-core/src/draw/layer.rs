//! Layer-based rendering for SVG output.
//!
//! Drawable elements specify which z-order layer their SVG nodes belong to;
//! [`LayeredOutput`] collects the nodes and emits them grouped bottom-to-top,
//! so backgrounds always sit below boxes, boxes below arrows, and every text
//! label stays legible on top.

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers are rendered from bottom to top in the order defined by variant
/// declaration. The `Ord` derive uses declaration order, so the first variant
/// renders first (bottom), and the last variant renders last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Zone tints, panel fills, and the page frame chrome - renders first
    Background,
    /// Labeled boxes and other main content shapes
    Content,
    /// Arrows, connector lines, and lifelines
    Arrow,
    /// Text labels, label bubbles, and step markers - renders last
    Label,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Content => "content",
            Self::Arrow => "arrow",
            Self::Label => "label",
        }
    }
}

/// Represents SVG nodes grouped by rendering layer.
///
/// Nodes are collected in insertion order within each layer; rendering sorts
/// stably by layer so the relative order of nodes on the same layer is
/// preserved.
///
/// # Example
///
/// ```
/// # use capdeck_core::draw::{LayeredOutput, RenderLayer};
/// # use svg::node::element::Rectangle;
/// let mut output = LayeredOutput::new();
///
/// output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));
/// output.add_to_layer(RenderLayer::Label, Box::new(Rectangle::new()));
///
/// // Background renders first, Label last
/// let svg_nodes = output.render();
/// assert_eq!(svg_nodes.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Merges all layers from another `LayeredOutput` into this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a `data-layer`
    /// attribute identifying the layer. Empty layers are skipped.
    ///
    /// # Returns
    ///
    /// A vector of SVG group nodes, one per non-empty layer, in rendering
    /// order.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order within a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg::node::element::Rectangle;

    #[test]
    fn test_layered_output_new() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
    }

    #[test]
    fn test_layered_output_add_to_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));
        assert!(!output.is_empty());
    }

    #[test]
    fn test_layered_output_render_groups_by_layer() {
        let mut output = LayeredOutput::new();

        output.add_to_layer(RenderLayer::Label, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Label, Box::new(Rectangle::new()));

        let svg_nodes = output.render();

        // Two groups: background and label, background first
        assert_eq!(svg_nodes.len(), 2);
    }

    #[test]
    fn test_layered_output_merge() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Arrow, Box::new(Rectangle::new()));

        output1.merge(output2);

        let nodes = output1.render();
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn test_layer_ordering_matches_declaration() {
        assert!(RenderLayer::Background < RenderLayer::Content);
        assert!(RenderLayer::Content < RenderLayer::Arrow);
        assert!(RenderLayer::Arrow < RenderLayer::Label);
    }
}

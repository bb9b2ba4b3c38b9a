//! Mesh elements.

use super::id::{ElementId, NodeId};

/// A single mesh cell with its height value and corner nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: ElementId,
    height: f64,
    nodes: Vec<NodeId>,
}

impl Element {
    /// Create an element that is not yet connected to any node.
    #[must_use]
    pub const fn new(id: ElementId, height: f64) -> Self {
        Self {
            id,
            height,
            nodes: Vec::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> ElementId {
        self.id
    }

    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Nodes of this element, sorted and without duplicates.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Replace the node list. Duplicates are dropped.
    pub(crate) fn set_nodes(&mut self, mut nodes: Vec<NodeId>) {
        nodes.sort_unstable();
        nodes.dedup();
        self.nodes = nodes;
    }
}

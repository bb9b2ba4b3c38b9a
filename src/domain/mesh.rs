//! Validated, indexed mesh.
//!
//! A [`Mesh`] keeps its elements ordered by height, highest first, and
//! indexes which elements touch each node so neighbour lookups do not scan
//! the whole mesh.

use std::collections::{HashMap, HashSet};

use super::element::Element;
use super::error::DomainError;
use super::id::{ElementId, NodeId};

/// Elements of a mesh plus the lookups needed to walk it.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    elements: Vec<Element>,
    index: HashMap<ElementId, usize>,
    node_elements: HashMap<NodeId, Vec<usize>>,
}

impl Mesh {
    /// Build a mesh from height values and element connectivity.
    ///
    /// `heights` is taken in input order; elements of equal height keep that
    /// order after sorting. Elements with a height but no connectivity entry
    /// are kept without nodes.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] when a height is not finite, an element id
    /// repeats, or connectivity names an element that has no height.
    pub fn try_new<H, C>(heights: H, connectivity: C) -> Result<Self, DomainError>
    where
        H: IntoIterator<Item = (ElementId, f64)>,
        C: IntoIterator<Item = (ElementId, Vec<NodeId>)>,
    {
        let mut seen = HashSet::new();
        let mut elements = Vec::new();
        for (element_id, height) in heights {
            if !height.is_finite() {
                return Err(DomainError::NonFiniteHeight { element_id, height });
            }
            if !seen.insert(element_id) {
                return Err(DomainError::DuplicateHeight { element_id });
            }
            elements.push(Element::new(element_id, height));
        }

        // Stable, so equal heights stay in input order.
        elements.sort_by(|a, b| b.height().total_cmp(&a.height()));

        let index: HashMap<ElementId, usize> = elements
            .iter()
            .enumerate()
            .map(|(position, element)| (element.id(), position))
            .collect();

        let mut connected = HashSet::new();
        let mut node_elements: HashMap<NodeId, Vec<usize>> = HashMap::new();
        for (element_id, nodes) in connectivity {
            let position = *index
                .get(&element_id)
                .ok_or(DomainError::MissingHeight { element_id })?;
            if !connected.insert(element_id) {
                return Err(DomainError::DuplicateElement { element_id });
            }

            let element = &mut elements[position];
            element.set_nodes(nodes);
            for node in element.nodes() {
                node_elements.entry(*node).or_default().push(position);
            }
        }

        Ok(Self {
            elements,
            index,
            node_elements,
        })
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of distinct nodes referenced by any element.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_elements.len()
    }

    /// Elements ordered by height, highest first.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[must_use]
    pub fn element(&self, position: usize) -> Option<&Element> {
        self.elements.get(position)
    }

    /// Position of an element in [`Mesh::elements`].
    #[must_use]
    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Positions of every other element sharing at least one node with the
    /// element at `position`. Sorted, no duplicates.
    #[must_use]
    pub fn neighbors(&self, position: usize) -> Vec<usize> {
        let Some(element) = self.elements.get(position) else {
            return Vec::new();
        };

        let mut neighbors: Vec<usize> = element
            .nodes()
            .iter()
            .filter_map(|node| self.node_elements.get(node))
            .flatten()
            .copied()
            .filter(|&other| other != position)
            .collect();
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }

    /// Nodes that are referenced by at least one element.
    pub fn referenced_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.node_elements.keys().copied()
    }
}

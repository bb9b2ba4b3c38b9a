//! JSON mesh documents.
//!
//! The document carries three arrays:
//!
//! ```json
//! {
//!   "nodes":    [{ "id": 0, "x": 0.0, "y": 0.0 }],
//!   "elements": [{ "id": 0, "nodes": [0, 1, 2] }],
//!   "values":   [{ "element_id": 0, "value": 0.35 }]
//! }
//! ```
//!
//! `nodes` is optional and only used to warn about elements that point at
//! undeclared nodes. Unknown fields are ignored.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{ElementId, Mesh, NodeId};
use crate::error::{MeshError, Result};
use crate::port::MeshSource;

/// Node record. Coordinates are carried but not used by the search.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// Element connectivity record.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementRecord {
    pub id: ElementId,
    pub nodes: Vec<NodeId>,
}

/// Height value record.
#[derive(Debug, Clone, Deserialize)]
pub struct ValueRecord {
    pub element_id: ElementId,
    pub value: f64,
}

/// Raw mesh document as it appears on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct MeshDocument {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    pub elements: Vec<ElementRecord>,
    pub values: Vec<ValueRecord>,
}

impl MeshDocument {
    /// Convert the document into a validated mesh.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the records violate a mesh invariant.
    pub fn into_mesh(self) -> Result<Mesh> {
        let declared: HashSet<NodeId> = self.nodes.iter().map(|node| node.id).collect();

        let mesh = Mesh::try_new(
            self.values
                .into_iter()
                .map(|record| (record.element_id, record.value)),
            self.elements
                .into_iter()
                .map(|record| (record.id, record.nodes)),
        )?;

        if !declared.is_empty() {
            let undeclared = mesh
                .referenced_nodes()
                .filter(|node| !declared.contains(node))
                .count();
            if undeclared > 0 {
                warn!(undeclared, "elements reference nodes missing from the node list");
            }
        }

        Ok(mesh)
    }
}

/// Parse a mesh document held in memory.
///
/// `origin` names the document in error messages.
///
/// # Errors
///
/// Returns [`MeshError::Parse`] for malformed JSON or a domain error for an
/// inconsistent mesh.
pub fn parse_mesh(src: &str, origin: &str) -> Result<Mesh> {
    let document: MeshDocument =
        serde_json::from_str(src).map_err(|source| MeshError::Parse {
            origin: origin.to_string(),
            src: src.to_string(),
            source,
        })?;

    debug!(
        origin,
        nodes = document.nodes.len(),
        elements = document.elements.len(),
        values = document.values.len(),
        "parsed mesh document"
    );

    document.into_mesh()
}

/// Mesh source backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonMeshSource {
    path: PathBuf,
}

impl JsonMeshSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MeshSource for JsonMeshSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Mesh> {
        let src = fs::read_to_string(&self.path).map_err(|source| MeshError::Read {
            path: self.path.clone(),
            source,
        })?;
        parse_mesh(&src, &self.describe())
    }
}

//! Domain validation errors for mesh construction.
//!
//! These errors are returned by [`Mesh::try_new`](super::mesh::Mesh::try_new)
//! when the input violates a mesh invariant.
//!
//! # Examples
//!
//! ```
//! use viewfinder::domain::error::DomainError;
//! use viewfinder::domain::id::{ElementId, NodeId};
//! use viewfinder::domain::mesh::Mesh;
//!
//! // Element 2 has no height value
//! let result = Mesh::try_new(
//!     vec![(ElementId::new(1), 4.0)],
//!     vec![(ElementId::new(2), vec![NodeId::new(1)])],
//! );
//!
//! assert!(matches!(result, Err(DomainError::MissingHeight { .. })));
//! ```

use thiserror::Error;

use super::id::ElementId;

/// Errors that occur when mesh invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// An element id carries more than one height value.
    #[error("element {element_id} has more than one height value")]
    DuplicateHeight {
        /// The repeated element id.
        element_id: ElementId,
    },

    /// An element id appears more than once in the element list.
    #[error("element {element_id} is listed more than once")]
    DuplicateElement {
        /// The repeated element id.
        element_id: ElementId,
    },

    /// An element references nodes but has no height value.
    #[error("element {element_id} has no height value")]
    MissingHeight {
        /// The element without a height.
        element_id: ElementId,
    },

    /// Heights must be finite numbers.
    #[error("element {element_id} has a non-finite height {height}")]
    NonFiniteHeight {
        /// The offending element.
        element_id: ElementId,
        /// The height that was provided.
        height: f64,
    },
}

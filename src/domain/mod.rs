//! Mesh domain types and the view point search.
//!
//! Everything here is pure: no I/O, no configuration. Adapters turn input
//! documents into a [`Mesh`] and [`find_view_points`] does the rest.

pub mod element;
pub mod error;
pub mod finder;
pub mod id;
pub mod mesh;
pub mod view_point;

pub use element::Element;
pub use error::DomainError;
pub use finder::find_view_points;
pub use id::{ElementId, NodeId};
pub use mesh::Mesh;
pub use view_point::ViewPoint;

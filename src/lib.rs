//! Viewfinder - find the highest view points of a height-annotated mesh.
//!
//! A view point is an element of the mesh that no neighbouring element
//! overtops. Elements are neighbours when they share a node.
//!
//! # Modules
//!
//! - [`domain`] - Mesh types and the view point search, free of I/O
//! - [`port`] - The [`MeshSource`](port::MeshSource) trait
//! - [`adapter`] - JSON mesh files (outbound) and the command line (inbound)
//! - [`application`] - [`ViewPointService`](application::ViewPointService)
//! - [`infrastructure`] - Configuration and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use viewfinder::adapter::outbound::mesh_json::parse_mesh;
//! use viewfinder::domain::find_view_points;
//!
//! let mesh = parse_mesh(
//!     r#"{
//!         "elements": [{ "id": 1, "nodes": [1, 2] }, { "id": 2, "nodes": [2, 3] }],
//!         "values": [{ "element_id": 1, "value": 0.5 }, { "element_id": 2, "value": 2.0 }]
//!     }"#,
//!     "inline",
//! )
//! .unwrap();
//!
//! let view_points = find_view_points(&mesh, 5);
//! assert_eq!(view_points.len(), 1);
//! assert_eq!(view_points[0].element_id().value(), 2);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

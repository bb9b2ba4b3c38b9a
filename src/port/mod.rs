//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`MeshSource`] - Anything that can supply a validated [`Mesh`](crate::domain::Mesh)

pub mod mesh_source;

pub use mesh_source::MeshSource;

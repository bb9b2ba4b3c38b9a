//! Mesh source port.

use crate::domain::Mesh;
use crate::error::Result;

/// Outbound port for loading a mesh.
///
/// Implementations own the decoding of their input format and return a mesh
/// whose invariants have already been checked.
pub trait MeshSource {
    /// Human-readable description of where the mesh comes from, for logs.
    fn describe(&self) -> String;

    /// Load and validate the mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read, decoded, or violates a
    /// mesh invariant.
    fn load(&self) -> Result<Mesh>;
}

impl<S: MeshSource + ?Sized> MeshSource for &S {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn load(&self) -> Result<Mesh> {
        (**self).load()
    }
}

//! View point application service.
//!
//! Loads a mesh through a [`MeshSource`] and runs the search, timing both
//! stages.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::domain::{find_view_points, ViewPoint};
use crate::error::Result;
use crate::port::MeshSource;

/// Outcome of a view point search.
#[derive(Debug, Clone)]
pub struct ViewPointReport {
    pub view_points: Vec<ViewPoint>,
    pub element_count: usize,
    pub node_count: usize,
    pub elapsed: Duration,
}

/// Finds view points in meshes supplied by `S`.
pub struct ViewPointService<S> {
    source: S,
}

impl<S: MeshSource> ViewPointService<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Load the mesh and return at most `limit` view points, highest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh cannot be loaded.
    pub fn find(&self, limit: usize) -> Result<ViewPointReport> {
        let started = Instant::now();
        let mesh = self.source.load()?;
        debug!(
            source = %self.source.describe(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "mesh loaded"
        );

        let view_points = find_view_points(&mesh, limit);
        let elapsed = started.elapsed();

        info!(
            source = %self.source.describe(),
            elements = mesh.len(),
            nodes = mesh.node_count(),
            requested = limit,
            found = view_points.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "view point search finished"
        );

        Ok(ViewPointReport {
            view_points,
            element_count: mesh.len(),
            node_count: mesh.node_count(),
            elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, ElementId, Mesh, NodeId};
    use crate::error::Error;

    struct StaticSource(Mesh);

    impl MeshSource for StaticSource {
        fn describe(&self) -> String {
            "static".to_string()
        }

        fn load(&self) -> Result<Mesh> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl MeshSource for FailingSource {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        fn load(&self) -> Result<Mesh> {
            Err(DomainError::MissingHeight {
                element_id: ElementId::new(1),
            }
            .into())
        }
    }

    fn two_peaks() -> Mesh {
        Mesh::try_new(
            vec![
                (ElementId::new(1), 3.0),
                (ElementId::new(2), 1.0),
                (ElementId::new(3), 2.0),
            ],
            vec![
                (ElementId::new(1), vec![NodeId::new(1), NodeId::new(2)]),
                (ElementId::new(2), vec![NodeId::new(2), NodeId::new(3)]),
                (ElementId::new(3), vec![NodeId::new(3), NodeId::new(4)]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn report_carries_mesh_sizes() {
        let service = ViewPointService::new(StaticSource(two_peaks()));
        let report = service.find(10).unwrap();

        assert_eq!(report.element_count, 3);
        assert_eq!(report.node_count, 4);
        let ids: Vec<i64> = report
            .view_points
            .iter()
            .map(|v| v.element_id().value())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn source_errors_propagate() {
        let service = ViewPointService::new(FailingSource);
        assert!(matches!(service.find(1), Err(Error::Domain(_))));
    }
}

//! View point search.
//!
//! Elements are visited from highest to lowest. An element qualifies as a
//! view point when none of its neighbours is higher, or when at least one
//! neighbour has exactly the same height (it sits on a plateau). Once an
//! element qualifies, it and all its neighbours are covered and will not be
//! considered again, so no two view points are ever adjacent.

use tracing::trace;

use super::mesh::Mesh;
use super::view_point::ViewPoint;

/// Find at most `limit` view points, highest first.
#[must_use]
pub fn find_view_points(mesh: &Mesh, limit: usize) -> Vec<ViewPoint> {
    let mut view_points = Vec::with_capacity(limit.min(mesh.len()));
    let mut covered = vec![false; mesh.len()];

    for (position, element) in mesh.elements().iter().enumerate() {
        if view_points.len() >= limit {
            break;
        }
        if covered[position] {
            continue;
        }

        let neighbors = mesh.neighbors(position);
        let height = element.height();
        let (higher, level) = neighbors
            .iter()
            .filter_map(|&other| mesh.element(other))
            .fold((0usize, 0usize), |(higher, level), neighbor| {
                if neighbor.height() > height {
                    (higher + 1, level)
                } else if neighbor.height() == height {
                    (higher, level + 1)
                } else {
                    (higher, level)
                }
            });

        if higher == 0 || level > 0 {
            trace!(element_id = %element.id(), height, higher, level, "view point");
            view_points.push(ViewPoint::from(element));
            covered[position] = true;
            for other in neighbors {
                covered[other] = true;
            }
        }
    }

    view_points
}

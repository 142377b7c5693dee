use crate::error::Result;
use crate::math::circle_2d::in_circle_sign;
use crate::topology::{HalfEdgeId, MeshStore};

/// Checks that a clockwise half-edge mesh is at the Delaunay fixed point.
pub struct IsDelaunay {
    half_edges: Vec<HalfEdgeId>,
}

impl IsDelaunay {
    /// Creates a new `IsDelaunay` query.
    #[must_use]
    pub fn new(half_edges: Vec<HalfEdgeId>) -> Self {
        Self { half_edges }
    }

    /// Executes the query, returning `true` if every shared edge is locally Delaunay.
    ///
    /// # Errors
    ///
    /// Returns an error if a half-edge reaches an id missing from the store.
    pub fn execute(&self, store: &MeshStore) -> Result<bool> {
        for &he in &self.half_edges {
            if !is_locally_delaunay(store, he)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Returns `true` if the edge under `he` is on the boundary or the apex of the
/// opposite triangle is not strictly inside the circumcircle of `he`'s triangle.
///
/// # Errors
///
/// Returns an error if an id reached from `he` is not in the store.
pub fn is_locally_delaunay(store: &MeshStore, he: HalfEdgeId) -> Result<bool> {
    let data = store.half_edge(he)?;
    let Some(opposite) = data.opposite else {
        return Ok(true);
    };
    let opposite = store.half_edge(opposite)?;
    if opposite.t == data.t {
        return Ok(true);
    }

    let a = store.point(data.v)?;
    let b = store.point(store.half_edge(data.next)?.v)?;
    let c = store.point(store.half_edge(data.prev)?.v)?;
    let d = store.point(store.half_edge(opposite.next)?.v)?;

    Ok(in_circle_sign(&a, &b, &c, &d) >= 0.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::operations::triangulation::{BuildHalfEdges, OppositeMatching, TriangulateIncremental};

    fn sweep_only(points: Vec<Point2>) -> (MeshStore, Vec<HalfEdgeId>) {
        let mut store = MeshStore::new();
        let tris = TriangulateIncremental::new(points).execute(&mut store).unwrap();
        let hes = BuildHalfEdges::new(tris, OppositeMatching::default())
            .execute(&mut store)
            .unwrap();
        (store, hes)
    }

    #[test]
    fn long_diagonal_is_not_delaunay() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 3.0),
            Point2::new(2.0, -3.0),
            Point2::new(4.0, 0.0),
        ];
        let (store, hes) = sweep_only(pts);
        assert!(!IsDelaunay::new(hes).execute(&store).unwrap());
    }

    #[test]
    fn short_diagonal_is_delaunay() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(2.0, -1.0),
            Point2::new(4.0, 0.0),
        ];
        let (store, hes) = sweep_only(pts);
        assert!(IsDelaunay::new(hes).execute(&store).unwrap());
    }

    #[test]
    fn boundary_edges_are_trivially_delaunay() {
        let pts = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 2.0), Point2::new(2.0, 0.0)];
        let (store, hes) = sweep_only(pts);
        for he in hes {
            assert!(is_locally_delaunay(&store, he).unwrap());
        }
    }
}

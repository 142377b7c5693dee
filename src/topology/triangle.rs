use super::half_edge::HalfEdgeId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a triangle in the mesh store.
    pub struct TriangleId;
}

/// Data associated with a mesh triangle.
///
/// Once the half-edge mesh is built the corners are in clockwise order.
#[derive(Debug, Clone)]
pub struct TriangleData {
    pub v1: VertexId,
    pub v2: VertexId,
    pub v3: VertexId,
    /// One of the three half-edges bounding this triangle.
    pub half_edge: Option<HalfEdgeId>,
}

impl TriangleData {
    /// Creates a triangle from three corners, not yet linked to any half-edge.
    #[must_use]
    pub fn new(v1: VertexId, v2: VertexId, v3: VertexId) -> Self {
        Self {
            v1,
            v2,
            v3,
            half_edge: None,
        }
    }

    /// Corners in stored order.
    #[must_use]
    pub fn corners(&self) -> [VertexId; 3] {
        [self.v1, self.v2, self.v3]
    }

    /// Reverses the winding by swapping the first two corners.
    pub fn change_orientation(&mut self) {
        std::mem::swap(&mut self.v1, &mut self.v2);
    }
}

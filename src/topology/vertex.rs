use crate::math::Point2;

use super::half_edge::HalfEdgeId;
use super::triangle::TriangleId;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the mesh store.
    pub struct VertexId;
}

/// Data associated with a mesh vertex.
///
/// One vertex exists per input point, so two vertices may share a position
/// while remaining distinct.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The 2D position of the vertex.
    pub point: Point2,
    /// Position of the point in the caller's input sequence.
    pub index: usize,
    /// One half-edge leaving this vertex, once the half-edge mesh is built.
    pub half_edge: Option<HalfEdgeId>,
    /// One triangle using this vertex as a corner.
    pub triangle: Option<TriangleId>,
}

impl VertexData {
    /// Creates an unlinked vertex at the given point.
    #[must_use]
    pub fn new(point: Point2, index: usize) -> Self {
        Self {
            point,
            index,
            half_edge: None,
            triangle: None,
        }
    }
}

use super::vertex::VertexId;

/// An undirected edge used as bookkeeping during incremental triangulation.
///
/// Edges are not stored in the mesh arena; the half-edge phase never sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub v1: VertexId,
    pub v2: VertexId,
    /// Set while the sight line to this edge's midpoint is found to be blocked.
    pub is_intersecting: bool,
}

impl Edge {
    /// Creates a new edge between two vertices.
    #[must_use]
    pub fn new(v1: VertexId, v2: VertexId) -> Self {
        Self {
            v1,
            v2,
            is_intersecting: false,
        }
    }
}

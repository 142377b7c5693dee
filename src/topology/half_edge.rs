use super::triangle::TriangleId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a half-edge in the mesh store.
    pub struct HalfEdgeId;
}

/// A directed edge owned by one triangle.
///
/// The half-edge runs from `prev.v` to `v`. `next` and `prev` cycle through the
/// three half-edges of `t`; `opposite` is the half-edge of the neighbouring triangle
/// running the other way, or `None` on the mesh boundary.
#[derive(Debug, Clone)]
pub struct HalfEdgeData {
    /// The vertex this half-edge points to.
    pub v: VertexId,
    /// The triangle this half-edge belongs to.
    pub t: TriangleId,
    pub next: HalfEdgeId,
    pub prev: HalfEdgeId,
    pub opposite: Option<HalfEdgeId>,
}

impl HalfEdgeData {
    /// Creates a half-edge targeting `v` inside `t`.
    ///
    /// `next` and `prev` start as null keys and must be wired by the caller.
    #[must_use]
    pub fn new(v: VertexId, t: TriangleId) -> Self {
        Self {
            v,
            t,
            next: HalfEdgeId::default(),
            prev: HalfEdgeId::default(),
            opposite: None,
        }
    }
}

pub mod edge;
pub mod half_edge;
pub mod triangle;
mod validation;
pub mod vertex;

pub use edge::Edge;
pub use half_edge::{HalfEdgeData, HalfEdgeId};
pub use triangle::{TriangleData, TriangleId};
pub use vertex::{VertexData, VertexId};

use crate::error::TopologyError;
use crate::math::Point2;
use slotmap::SlotMap;

/// Central arena that owns the vertices, triangles and half-edges of one triangulation run.
///
/// Entities reference each other via typed IDs (generational indices), so the
/// cyclic vertex/half-edge/triangle graph is a set of plain index fields and a flip
/// is a handful of index writes.
#[derive(Debug, Default)]
pub struct MeshStore {
    vertices: SlotMap<VertexId, VertexData>,
    half_edges: SlotMap<HalfEdgeId, HalfEdgeData>,
    triangles: SlotMap<TriangleId, TriangleData>,
}

impl MeshStore {
    /// Creates a new, empty mesh store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.insert(data)
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, TopologyError> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns the position of a vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn point(&self, id: VertexId) -> Result<Point2, TopologyError> {
        self.vertex(id).map(|v| v.point)
    }

    /// Number of vertices in the store.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // --- Half-edge operations ---

    /// Inserts a half-edge and returns its ID.
    pub fn add_half_edge(&mut self, data: HalfEdgeData) -> HalfEdgeId {
        self.half_edges.insert(data)
    }

    /// Returns a reference to the half-edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn half_edge(&self, id: HalfEdgeId) -> Result<&HalfEdgeData, TopologyError> {
        self.half_edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("half-edge".into()))
    }

    /// Returns a mutable reference to the half-edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn half_edge_mut(&mut self, id: HalfEdgeId) -> Result<&mut HalfEdgeData, TopologyError> {
        self.half_edges
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("half-edge".into()))
    }

    /// The vertex a half-edge starts from, i.e. the target of its predecessor.
    ///
    /// # Errors
    ///
    /// Returns an error if the half-edge or its predecessor is not found.
    pub fn origin(&self, id: HalfEdgeId) -> Result<VertexId, TopologyError> {
        let prev = self.half_edge(id)?.prev;
        Ok(self.half_edge(prev)?.v)
    }

    // --- Triangle operations ---

    /// Inserts a triangle and returns its ID.
    pub fn add_triangle(&mut self, data: TriangleData) -> TriangleId {
        self.triangles.insert(data)
    }

    /// Returns a reference to the triangle data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn triangle(&self, id: TriangleId) -> Result<&TriangleData, TopologyError> {
        self.triangles
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("triangle".into()))
    }

    /// Returns a mutable reference to the triangle data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn triangle_mut(&mut self, id: TriangleId) -> Result<&mut TriangleData, TopologyError> {
        self.triangles
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("triangle".into()))
    }

    /// Corner positions of a triangle in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the triangle or one of its corners is not found.
    pub fn triangle_points(&self, id: TriangleId) -> Result<[Point2; 3], TopologyError> {
        let tri = self.triangle(id)?;
        Ok([
            self.point(tri.v1)?,
            self.point(tri.v2)?,
            self.point(tri.v3)?,
        ])
    }

    /// Number of triangles in the store.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

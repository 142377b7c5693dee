use crate::error::{DegenerateConfigurationWarning, Result};
use crate::math::Point2;
use crate::operations::query::IsDelaunay;
use crate::topology::{HalfEdgeId, MeshStore, TriangleId};

use super::{BuildHalfEdges, DelaunayParams, FlipEdges, FlipReport, Triangle, TriangulateIncremental};

/// Result of a full Delaunay triangulation run.
///
/// Owns the mesh it was computed on; every run builds a fresh store.
#[derive(Debug)]
pub struct DelaunayTriangulation {
    /// Arena holding the vertices, triangles and half-edges.
    pub store: MeshStore,
    /// Triangles in creation order.
    pub triangles: Vec<TriangleId>,
    /// Half-edges in creation order, three per triangle.
    pub half_edges: Vec<HalfEdgeId>,
    /// Outcome of the flip loop.
    pub report: FlipReport,
}

impl DelaunayTriangulation {
    /// Resolves the triangles to clockwise corner positions and input indices.
    ///
    /// # Errors
    ///
    /// Returns an error if the store no longer holds a referenced triangle or vertex.
    pub fn to_triangles(&self) -> Result<Vec<Triangle>> {
        self.triangles
            .iter()
            .map(|&t| -> Result<Triangle> {
                let tri = self.store.triangle(t)?;
                let mut corners = [Point2::origin(); 3];
                let mut indices = [0; 3];
                for (i, v) in tri.corners().into_iter().enumerate() {
                    let vertex = self.store.vertex(v)?;
                    corners[i] = vertex.point;
                    indices[i] = vertex.index;
                }
                Ok(Triangle { corners, indices })
            })
            .collect()
    }

    /// Present when the flip loop stopped at its pass ceiling.
    #[must_use]
    pub fn warning(&self) -> Option<DegenerateConfigurationWarning> {
        self.report.warning()
    }

    /// Checks the Delaunay property on every shared edge.
    ///
    /// # Errors
    ///
    /// Returns an error if a half-edge reaches an id missing from the store.
    pub fn is_delaunay(&self) -> Result<bool> {
        IsDelaunay::new(self.half_edges.clone()).execute(&self.store)
    }
}

/// Triangulates a point set: incremental sweep, half-edge build, then edge flipping.
pub struct TriangulateDelaunay {
    points: Vec<Point2>,
    params: DelaunayParams,
}

impl TriangulateDelaunay {
    /// Creates a new `TriangulateDelaunay` operation.
    #[must_use]
    pub fn new(points: Vec<Point2>, params: DelaunayParams) -> Self {
        Self { points, params }
    }

    /// Executes the pipeline on a fresh mesh store.
    ///
    /// # Errors
    ///
    /// Returns an error for fewer than 3 points or non-finite coordinates. Failing
    /// to converge within the pass ceiling is not an error; see
    /// [`DelaunayTriangulation::warning`].
    pub fn execute(&self) -> Result<DelaunayTriangulation> {
        let mut store = MeshStore::new();

        let triangles = TriangulateIncremental::new(self.points.clone())
            .include_endpoints(self.params.include_endpoints)
            .execute(&mut store)?;
        let half_edges =
            BuildHalfEdges::new(triangles.clone(), self.params.matching).execute(&mut store)?;
        let report = FlipEdges::new(half_edges.clone())
            .max_passes(self.params.max_passes)
            .execute(&mut store)?;

        Ok(DelaunayTriangulation {
            store,
            triangles,
            half_edges,
            report,
        })
    }
}

/// Delaunay-triangulates `points` with default parameters.
///
/// Returned triangles keep the sweep's creation order; corners are clockwise.
///
/// # Errors
///
/// Returns an error for fewer than 3 points or non-finite coordinates.
pub fn triangulate_delaunay(points: &[Point2]) -> Result<Vec<Triangle>> {
    TriangulateDelaunay::new(points.to_vec(), DelaunayParams::default())
        .execute()?
        .to_triangles()
}

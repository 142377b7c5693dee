mod delaunay;
mod flip;
mod half_edge_builder;
mod incremental;

pub use delaunay::{triangulate_delaunay, DelaunayTriangulation, TriangulateDelaunay};
pub use flip::{flip_edge, should_flip, FlipEdges, FlipReport};
pub use half_edge_builder::{orient_triangles_clockwise, BuildHalfEdges};
pub use incremental::TriangulateIncremental;

use crate::math::{Point2, TOLERANCE};
use crate::topology::VertexId;

/// Flip-loop pass ceiling used by [`DelaunayParams::default`].
pub const DEFAULT_MAX_PASSES: usize = 100_000;

/// Rule deciding whether two half-edge endpoints are the same vertex when
/// pairing opposite half-edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OppositeMatching {
    /// Exact floating-point equality of positions.
    #[default]
    ExactPosition,
    /// Positions equal within an absolute per-axis tolerance.
    WithinTolerance(f64),
    /// Same vertex id. Coincident input points are never merged.
    ById,
}

impl OppositeMatching {
    /// Tolerance matching with the crate-wide default tolerance.
    #[must_use]
    pub fn tolerance() -> Self {
        Self::WithinTolerance(TOLERANCE)
    }

    /// Returns `true` if the two endpoints count as the same vertex.
    #[must_use]
    pub fn matches(&self, a: (VertexId, Point2), b: (VertexId, Point2)) -> bool {
        match *self {
            Self::ExactPosition => a.1 == b.1,
            Self::WithinTolerance(tol) => (a.1.x - b.1.x).abs() <= tol && (a.1.y - b.1.y).abs() <= tol,
            Self::ById => a.0 == b.0,
        }
    }
}

/// Parameters controlling a Delaunay triangulation run.
#[derive(Debug, Clone, Copy)]
pub struct DelaunayParams {
    /// Maximum number of full passes over the half-edges before the flip loop gives up.
    pub max_passes: usize,
    /// Whether the incremental sweep's sight-line test counts touching endpoints as blocking.
    pub include_endpoints: bool,
    /// How opposite half-edges are paired.
    pub matching: OppositeMatching,
}

impl Default for DelaunayParams {
    fn default() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
            include_endpoints: false,
            matching: OppositeMatching::default(),
        }
    }
}

/// A triangle of the finished triangulation, corners in clockwise order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Corner positions.
    pub corners: [Point2; 3],
    /// Input-sequence indices of the corners.
    pub indices: [usize; 3],
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn default_params() {
        let params = DelaunayParams::default();
        assert_eq!(params.max_passes, 100_000);
        assert!(!params.include_endpoints);
        assert_eq!(params.matching, OppositeMatching::ExactPosition);
    }

    #[test]
    fn matching_rules() {
        let mut keys: SlotMap<VertexId, ()> = SlotMap::with_key();
        let (k1, k2) = (keys.insert(()), keys.insert(()));
        let here = Point2::new(1.0, 2.0);
        let nudged = Point2::new(1.0 + 1e-12, 2.0);

        assert!(OppositeMatching::ExactPosition.matches((k1, here), (k2, here)));
        assert!(!OppositeMatching::ExactPosition.matches((k1, here), (k1, nudged)));

        assert!(OppositeMatching::tolerance().matches((k1, here), (k2, nudged)));
        assert!(!OppositeMatching::WithinTolerance(1e-14).matches((k1, here), (k2, nudged)));

        assert!(OppositeMatching::ById.matches((k1, here), (k1, nudged)));
        assert!(!OppositeMatching::ById.matches((k1, here), (k2, here)));
    }
}

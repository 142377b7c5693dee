use crate::error::{DegenerateConfigurationWarning, Result, TopologyError};
use crate::math::circle_2d::in_circle_sign;
use crate::math::orientation_2d::is_convex_quad;
use crate::topology::{HalfEdgeId, MeshStore, TriangleId, VertexId};

use super::DEFAULT_MAX_PASSES;

/// Outcome of an edge-flip run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipReport {
    /// Full passes over the half-edge list, including the final flip-free pass.
    pub passes: usize,
    /// Total edge flips performed.
    pub flips: usize,
    /// `true` if a pass completed without flipping, i.e. the mesh is at its fixed point.
    pub converged: bool,
}

impl FlipReport {
    /// The warning to surface when the run stopped at its pass ceiling.
    #[must_use]
    pub fn warning(&self) -> Option<DegenerateConfigurationWarning> {
        (!self.converged).then_some(DegenerateConfigurationWarning {
            passes: self.passes,
            flips: self.flips,
        })
    }
}

/// Flips edges of a clockwise half-edge mesh until it is Delaunay.
///
/// Each pass visits every half-edge in list order and flips any interior edge
/// whose opposite vertex lies strictly inside the circumcircle, provided the
/// surrounding quadrilateral is convex and the flip improves the pair. The run
/// stops after the first pass with no flips, or after `max_passes` passes. Only
/// triangle corners and internal half-edge links change; the number and order of
/// triangles and the opposite links are preserved.
pub struct FlipEdges {
    half_edges: Vec<HalfEdgeId>,
    max_passes: usize,
}

impl FlipEdges {
    /// Creates a new `FlipEdges` operation with the default pass ceiling.
    #[must_use]
    pub fn new(half_edges: Vec<HalfEdgeId>) -> Self {
        Self {
            half_edges,
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    /// Overrides the pass ceiling.
    #[must_use]
    pub fn max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Executes the flip loop in place.
    ///
    /// Hitting the pass ceiling is not an error; it is reported through
    /// [`FlipReport::converged`] and logged as a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if a half-edge, triangle or vertex id is not in the store.
    pub fn execute(&self, store: &mut MeshStore) -> Result<FlipReport> {
        let mut passes = 0;
        let mut flips = 0;

        loop {
            if passes >= self.max_passes {
                let report = FlipReport {
                    passes,
                    flips,
                    converged: false,
                };
                if let Some(warning) = report.warning() {
                    tracing::warn!(%warning, "returning best-effort triangulation");
                }
                return Ok(report);
            }
            passes += 1;

            let mut has_flipped_edge = false;
            for &one in &self.half_edges {
                if should_flip(store, one)? {
                    flip_edge(store, one)?;
                    flips += 1;
                    has_flipped_edge = true;
                }
            }

            if !has_flipped_edge {
                tracing::debug!(passes, flips, "edge flipping converged");
                return Ok(FlipReport {
                    passes,
                    flips,
                    converged: true,
                });
            }
        }
    }
}

/// Decides whether the edge under half-edge `one` should be flipped.
///
/// With `a = one.v`, `b = one.next.v`, `c = one.prev.v` and `d` the apex of the
/// opposite triangle, the edge is flipped when `d` is strictly inside the circle
/// through `a, b, c`, the quad `a, b, c, d` is convex, and `a` is not strictly
/// inside the circle through `b, c, d`. The last condition keeps co-circular quads
/// from flipping back and forth.
///
/// # Errors
///
/// Returns an error if an id reached from `one` is not in the store.
pub fn should_flip(store: &MeshStore, one: HalfEdgeId) -> Result<bool> {
    let he = store.half_edge(one)?;
    let Some(opposite) = he.opposite else {
        return Ok(false);
    };
    let opposite = store.half_edge(opposite)?;
    // Coincident vertices can pair a half-edge with its own triangle.
    if opposite.t == he.t {
        return Ok(false);
    }

    let a = store.point(he.v)?;
    let b = store.point(store.half_edge(he.next)?.v)?;
    let c = store.point(store.half_edge(he.prev)?.v)?;
    let d = store.point(store.half_edge(opposite.next)?.v)?;

    if in_circle_sign(&a, &b, &c, &d) >= 0.0 {
        return Ok(false);
    }
    if !is_convex_quad(&a, &b, &c, &d) {
        return Ok(false);
    }
    Ok(in_circle_sign(&b, &c, &d, &a) >= 0.0)
}

/// Flips the diagonal shared by the triangle of `one` and its opposite.
///
/// Triangles `(a, b, c)` and `(c, d, a)` sharing `a–c` become `(b, c, d)` and
/// `(b, d, a)` sharing `b–d`. The six half-edges keep their opposite links.
///
/// # Errors
///
/// Returns `TopologyError::InvalidTopology` if `one` has no opposite, or an
/// error if any reached id is not in the store.
pub fn flip_edge(store: &mut MeshStore, one: HalfEdgeId) -> Result<()> {
    let (two, three, four, t1) = {
        let he = store.half_edge(one)?;
        let four = he.opposite.ok_or_else(|| {
            TopologyError::InvalidTopology(format!("half-edge {one:?} is on the boundary"))
        })?;
        (he.next, he.prev, four, he.t)
    };
    let (five, six, t2) = {
        let he = store.half_edge(four)?;
        (he.next, he.prev, he.t)
    };

    let a = store.half_edge(one)?.v;
    let b = store.half_edge(two)?.v;
    let c = store.half_edge(three)?.v;
    let d = store.half_edge(five)?.v;

    // a and c each lose one of the two triangles.
    repoint_vertex(store, a, two, t2)?;
    repoint_vertex(store, c, five, t1)?;

    relink(store, one, b, three, five, t1)?;
    relink(store, two, b, four, six, t2)?;
    relink(store, three, c, five, one, t1)?;
    relink(store, four, d, six, two, t2)?;
    relink(store, five, d, one, three, t1)?;
    relink(store, six, a, two, four, t2)?;

    let first = store.triangle_mut(t1)?;
    (first.v1, first.v2, first.v3) = (b, c, d);
    first.half_edge = Some(three);

    let second = store.triangle_mut(t2)?;
    (second.v1, second.v2, second.v3) = (b, d, a);
    second.half_edge = Some(four);

    Ok(())
}

fn repoint_vertex(
    store: &mut MeshStore,
    v: VertexId,
    outgoing: HalfEdgeId,
    t: TriangleId,
) -> Result<()> {
    let vertex = store.vertex_mut(v)?;
    vertex.half_edge = Some(outgoing);
    vertex.triangle = Some(t);
    Ok(())
}

fn relink(
    store: &mut MeshStore,
    he: HalfEdgeId,
    v: VertexId,
    next: HalfEdgeId,
    prev: HalfEdgeId,
    t: TriangleId,
) -> Result<()> {
    let data = store.half_edge_mut(he)?;
    data.v = v;
    data.next = next;
    data.prev = prev;
    data.t = t;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::operations::triangulation::{BuildHalfEdges, OppositeMatching, TriangulateIncremental};

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn mesh(points: Vec<Point2>) -> (MeshStore, Vec<TriangleId>, Vec<HalfEdgeId>) {
        let mut store = MeshStore::new();
        let tris = TriangulateIncremental::new(points).execute(&mut store).unwrap();
        let hes = BuildHalfEdges::new(tris.clone(), OppositeMatching::default())
            .execute(&mut store)
            .unwrap();
        (store, tris, hes)
    }

    fn indices(store: &MeshStore, t: TriangleId) -> [usize; 3] {
        store
            .triangle(t)
            .unwrap()
            .corners()
            .map(|v| store.vertex(v).unwrap().index)
    }

    /// Tall kite: the sweep splits it along the long vertical diagonal.
    fn tall_kite() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(2.0, 3.0), p(2.0, -3.0), p(4.0, 0.0)]
    }

    #[test]
    fn kite_flips_to_the_short_diagonal() {
        let (mut store, tris, hes) = mesh(tall_kite());
        let report = FlipEdges::new(hes.clone()).execute(&mut store).unwrap();

        assert_eq!(
            report,
            FlipReport {
                passes: 2,
                flips: 1,
                converged: true
            }
        );
        for &t in &tris {
            let idx = indices(&store, t);
            assert!(idx.contains(&0) && idx.contains(&3), "{idx:?}");
        }
        store.validate_connectivity(&hes).unwrap();
    }

    #[test]
    fn flip_rewrites_corners_in_clockwise_order() {
        let (mut store, tris, hes) = mesh(tall_kite());
        FlipEdges::new(hes).execute(&mut store).unwrap();

        assert_eq!(indices(&store, tris[0]), [0, 1, 3]);
        assert_eq!(indices(&store, tris[1]), [0, 3, 2]);
    }

    #[test]
    fn delaunay_kite_is_left_alone() {
        let (mut store, _, hes) = mesh(vec![p(0.0, 0.0), p(2.0, 1.0), p(2.0, -1.0), p(4.0, 0.0)]);
        let report = FlipEdges::new(hes).execute(&mut store).unwrap();
        assert_eq!(report.flips, 0);
        assert_eq!(report.passes, 1);
        assert!(report.converged);
    }

    #[test]
    fn cocircular_quad_is_left_alone() {
        let (mut store, _, hes) = mesh(vec![p(-1.0, 0.0), p(0.0, 1.0), p(0.0, -1.0), p(1.0, 0.0)]);
        let report = FlipEdges::new(hes).execute(&mut store).unwrap();
        assert_eq!(report.flips, 0);
        assert!(report.converged);
    }

    #[test]
    fn second_run_performs_no_flips() {
        let (mut store, _, hes) = mesh(tall_kite());
        FlipEdges::new(hes.clone()).execute(&mut store).unwrap();
        let again = FlipEdges::new(hes).execute(&mut store).unwrap();
        assert_eq!(again.flips, 0);
        assert_eq!(again.passes, 1);
    }

    #[test]
    fn pass_ceiling_reports_a_warning() {
        let (mut store, _, hes) = mesh(tall_kite());
        let report = FlipEdges::new(hes.clone()).max_passes(1).execute(&mut store).unwrap();
        assert_eq!(report.flips, 1);
        assert!(!report.converged);
        assert_eq!(
            report.warning(),
            Some(DegenerateConfigurationWarning { passes: 1, flips: 1 })
        );

        let (mut store, _, hes) = mesh(tall_kite());
        let report = FlipEdges::new(hes).max_passes(0).execute(&mut store).unwrap();
        assert_eq!(report.passes, 0);
        assert!(report.warning().is_some());
    }

    #[test]
    fn flip_keeps_opposite_links_and_triangle_count() {
        let (mut store, tris, hes) = mesh(tall_kite());
        let before: Vec<_> = hes
            .iter()
            .map(|&he| store.half_edge(he).unwrap().opposite)
            .collect();

        FlipEdges::new(hes.clone()).execute(&mut store).unwrap();

        let after: Vec<_> = hes
            .iter()
            .map(|&he| store.half_edge(he).unwrap().opposite)
            .collect();
        assert_eq!(before, after);
        assert_eq!(store.triangle_count(), tris.len());
    }

    #[test]
    fn vertex_back_references_follow_the_flip() {
        let (mut store, _, hes) = mesh(tall_kite());
        FlipEdges::new(hes.clone()).execute(&mut store).unwrap();
        // Outgoing half-edges must start at their vertex, triangles must use it.
        store.validate_connectivity(&hes).unwrap();
    }

    #[test]
    fn boundary_edge_cannot_be_flipped() {
        let (mut store, _, hes) = mesh(vec![p(0.0, 0.0), p(1.0, 2.0), p(2.0, 0.0)]);
        assert!(!should_flip(&store, hes[0]).unwrap());
        assert!(flip_edge(&mut store, hes[0]).is_err());
    }
}

use crate::error::Result;
use crate::math::orientation_2d::is_clockwise;
use crate::math::Point2;
use crate::topology::{HalfEdgeData, HalfEdgeId, MeshStore, TriangleId, VertexId};

use super::OppositeMatching;

type Endpoint = (VertexId, Point2);

/// Converts a flat triangle list into a half-edge mesh.
///
/// Opposite half-edges are found by an all-pairs scan, `O(E²)` in the number of
/// half-edges. That is the complexity ceiling of the whole build. The first
/// unpaired matching candidate in list order wins and both sides are linked
/// together, which decides the pairing when more than two half-edges run along
/// the same edge.
pub struct BuildHalfEdges {
    triangles: Vec<TriangleId>,
    matching: OppositeMatching,
}

impl BuildHalfEdges {
    /// Creates a new `BuildHalfEdges` operation.
    #[must_use]
    pub fn new(triangles: Vec<TriangleId>, matching: OppositeMatching) -> Self {
        Self {
            triangles,
            matching,
        }
    }

    /// Orients every triangle clockwise, then creates three half-edges per
    /// triangle and links opposite pairs. Boundary half-edges keep no opposite.
    ///
    /// # Errors
    ///
    /// Returns an error if a triangle or vertex id is not in the store.
    pub fn execute(&self, store: &mut MeshStore) -> Result<Vec<HalfEdgeId>> {
        orient_triangles_clockwise(store, &self.triangles)?;

        let mut half_edges = Vec::with_capacity(self.triangles.len() * 3);

        for &t in &self.triangles {
            let [v1, v2, v3] = store.triangle(t)?.corners();

            let he1 = store.add_half_edge(HalfEdgeData::new(v1, t));
            let he2 = store.add_half_edge(HalfEdgeData::new(v2, t));
            let he3 = store.add_half_edge(HalfEdgeData::new(v3, t));

            link(store, he1, he2, he3)?;
            link(store, he2, he3, he1)?;
            link(store, he3, he1, he2)?;

            // Each vertex records the half-edge leaving it.
            for (v, outgoing) in [(v1, he2), (v2, he3), (v3, he1)] {
                let vertex = store.vertex_mut(v)?;
                vertex.half_edge = Some(outgoing);
                vertex.triangle = Some(t);
            }

            store.triangle_mut(t)?.half_edge = Some(he1);

            half_edges.extend([he1, he2, he3]);
        }

        let directed = half_edges
            .iter()
            .map(|&he| -> Result<(Endpoint, Endpoint)> {
                let from = store.origin(he)?;
                let to = store.half_edge(he)?.v;
                Ok(((from, store.point(from)?), (to, store.point(to)?)))
            })
            .collect::<Result<Vec<_>>>()?;

        // Pairs are set on both sides at once, and a paired half-edge is never
        // matched again, so the links stay symmetric even on overlapping input.
        let mut opposites: Vec<Option<usize>> = vec![None; directed.len()];
        for (i, &(from, to)) in directed.iter().enumerate() {
            if opposites[i].is_some() {
                continue;
            }
            let candidate = directed.iter().enumerate().find_map(|(j, &(other_from, other_to))| {
                (i != j
                    && opposites[j].is_none()
                    && self.matching.matches(from, other_to)
                    && self.matching.matches(to, other_from))
                .then_some(j)
            });
            if let Some(j) = candidate {
                opposites[i] = Some(j);
                opposites[j] = Some(i);
            }
        }

        let mut boundary = 0usize;
        for (&he, opposite) in half_edges.iter().zip(&opposites) {
            if opposite.is_none() {
                boundary += 1;
            }
            store.half_edge_mut(he)?.opposite = opposite.map(|j| half_edges[j]);
        }

        tracing::debug!(
            triangles = self.triangles.len(),
            half_edges = half_edges.len(),
            boundary,
            "half-edge mesh built"
        );

        Ok(half_edges)
    }
}

/// Swaps the first two corners of every triangle that is not clockwise.
///
/// Collinear triangles count as clockwise and are left alone.
///
/// # Errors
///
/// Returns an error if a triangle or vertex id is not in the store.
pub fn orient_triangles_clockwise(store: &mut MeshStore, triangles: &[TriangleId]) -> Result<()> {
    for &t in triangles {
        let [p1, p2, p3] = store.triangle_points(t)?;
        if !is_clockwise(&p1, &p2, &p3) {
            store.triangle_mut(t)?.change_orientation();
        }
    }
    Ok(())
}

fn link(store: &mut MeshStore, he: HalfEdgeId, next: HalfEdgeId, prev: HalfEdgeId) -> Result<()> {
    let data = store.half_edge_mut(he)?;
    data.next = next;
    data.prev = prev;
    Ok(())
}

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::error::{InputError, Result};
use crate::math::intersect_2d::{point_on_segment_interior, segments_intersect};
use crate::math::orientation_2d::signed_area_determinant;
use crate::math::Point2;
use crate::topology::{Edge, MeshStore, TriangleData, TriangleId, VertexData, VertexId};

/// Builds an initial, generally non-Delaunay triangulation by an x-sorted sweep.
///
/// Exactly coincident input points share one vertex, which keeps the index of the
/// first occurrence. Vertices are inserted in ascending `(x, y)` order, so every new
/// point lies outside the hull of the points before it. Each new point is joined to
/// every active edge whose midpoint it can see, where "see" means the segment from
/// the point to the midpoint crosses no other active edge and passes through no
/// other vertex. Edges in line with the new point add no triangle.
///
/// While all points so far are collinear they are only chained by edges, so fully
/// collinear input yields no triangles. The active edge set grows monotonically,
/// holds each vertex pair once and includes interior edges, so the visibility scan
/// is `O(V · E²)`.
pub struct TriangulateIncremental {
    points: Vec<Point2>,
    include_endpoints: bool,
}

impl TriangulateIncremental {
    /// Creates a new `TriangulateIncremental` operation with strict sight-line tests.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self {
            points,
            include_endpoints: false,
        }
    }

    /// Makes the sight-line test treat touching endpoints as blocking.
    #[must_use]
    pub fn include_endpoints(mut self, include: bool) -> Self {
        self.include_endpoints = include;
        self
    }

    /// Executes the sweep, adding one vertex per distinct input point and the
    /// resulting triangles to the store. Triangles are returned in creation order.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InsufficientPoints` for fewer than 3 points and
    /// `InputError::NonFiniteCoordinate` if any coordinate is NaN or infinite.
    pub fn execute(&self, store: &mut MeshStore) -> Result<Vec<TriangleId>> {
        if self.points.len() < 3 {
            return Err(InputError::InsufficientPoints {
                found: self.points.len(),
            }
            .into());
        }
        if let Some((index, p)) = self
            .points
            .iter()
            .enumerate()
            .find(|(_, p)| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(InputError::NonFiniteCoordinate {
                index,
                x: p.x,
                y: p.y,
            }
            .into());
        }

        let vertices = self.add_vertices(store);
        let mut triangles = Vec::new();

        let [first, second, ..] = vertices[..] else {
            tracing::debug!(
                points = self.points.len(),
                "all points coincide, nothing to triangulate"
            );
            return Ok(triangles);
        };
        let mut edges = vec![Edge::new(first, second)];
        let mut active = HashSet::from([edge_key(first, second)]);

        for (i, &vertex) in vertices.iter().enumerate().skip(2) {
            let point = store.point(vertex)?;

            // Edges created for this point join the active set only after its scan.
            let mut new_edges = Vec::new();

            for j in 0..edges.len() {
                let (e1, e2) = endpoints(store, &edges[j])?;
                let midpoint = nalgebra::center(&e1, &e2);

                let placed = &vertices[..i];
                let blocked =
                    self.sight_line_is_blocked(store, &edges, j, placed, &point, &midpoint)?;
                edges[j].is_intersecting = blocked;

                if edges[j].is_intersecting || signed_area_determinant(&e1, &e2, &point) == 0.0 {
                    continue;
                }

                let visible = edges[j];
                triangles.push(store.add_triangle(TriangleData::new(
                    visible.v1, visible.v2, vertex,
                )));
                for edge in [Edge::new(visible.v1, vertex), Edge::new(visible.v2, vertex)] {
                    if active.insert(edge_key(edge.v1, edge.v2)) {
                        new_edges.push(edge);
                    }
                }
            }

            // Every point so far is on one line: extend the chain instead.
            if triangles.is_empty() {
                let previous = vertices[i - 1];
                active.insert(edge_key(previous, vertex));
                new_edges.push(Edge::new(previous, vertex));
            }

            edges.extend(new_edges);
        }

        if triangles.is_empty() {
            tracing::debug!(points = self.points.len(), "input is collinear, no triangles");
        }
        tracing::debug!(
            points = self.points.len(),
            vertices = vertices.len(),
            triangles = triangles.len(),
            edges = edges.len(),
            "incremental sweep finished"
        );

        Ok(triangles)
    }

    /// Adds one vertex per distinct point and returns them in sweep order.
    fn add_vertices(&self, store: &mut MeshStore) -> Vec<VertexId> {
        let mut seen: HashMap<(u64, u64), VertexId> = HashMap::new();
        let mut sorted = Vec::with_capacity(self.points.len());

        for (index, p) in self.points.iter().enumerate() {
            // Adding 0.0 folds -0.0 into 0.0.
            let point = Point2::new(p.x + 0.0, p.y + 0.0);
            if let Entry::Vacant(slot) = seen.entry((point.x.to_bits(), point.y.to_bits())) {
                let id = store.add_vertex(VertexData::new(point, index));
                slot.insert(id);
                sorted.push((id, point));
            }
        }

        sorted.sort_by(|(_, a), (_, b)| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        sorted.into_iter().map(|(id, _)| id).collect()
    }

    /// Returns `true` if the segment `from`-`to` towards edge `target` crosses another
    /// active edge or runs through a placed vertex that is not one of its ends.
    fn sight_line_is_blocked(
        &self,
        store: &MeshStore,
        edges: &[Edge],
        target: usize,
        placed: &[VertexId],
        from: &Point2,
        to: &Point2,
    ) -> Result<bool> {
        for (k, other) in edges.iter().enumerate() {
            if k == target {
                continue;
            }
            let (o1, o2) = endpoints(store, other)?;
            if segments_intersect(from, to, &o1, &o2, self.include_endpoints) {
                return Ok(true);
            }
        }

        let edge = edges[target];
        for &v in placed {
            if v != edge.v1 && v != edge.v2 && point_on_segment_interior(&store.point(v)?, from, to) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

fn endpoints(store: &MeshStore, edge: &Edge) -> Result<(Point2, Point2)> {
    Ok((store.point(edge.v1)?, store.point(edge.v2)?))
}

fn edge_key(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

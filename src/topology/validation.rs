//! Connectivity checks for the half-edge mesh.

use crate::error::TopologyError;

use super::{HalfEdgeId, MeshStore, VertexId};

impl MeshStore {
    /// Validates the half-edge connectivity of a mesh.
    ///
    /// Checks that:
    /// 1. `next`/`prev` are mutual and every cycle has length three
    /// 2. all half-edges of a cycle belong to the same triangle
    /// 3. each triangle's corners are a rotation of its cycle's target vertices
    /// 4. opposite links are symmetric and run between the same two vertices, reversed
    /// 5. vertex back-references point at an outgoing half-edge and an incident triangle
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` describing the first violation found,
    /// or `EntityNotFound` for a dangling id.
    pub fn validate_connectivity(&self, half_edges: &[HalfEdgeId]) -> Result<(), TopologyError> {
        for &id in half_edges {
            let he = self.half_edge(id)?;
            let next = self.half_edge(he.next)?;
            let prev = self.half_edge(he.prev)?;

            if next.prev != id {
                return Err(invalid(format!(
                    "half-edge {id:?}: next.prev = {:?}",
                    next.prev
                )));
            }
            if prev.next != id {
                return Err(invalid(format!(
                    "half-edge {id:?}: prev.next = {:?}",
                    prev.next
                )));
            }
            if next.next != he.prev {
                return Err(invalid(format!("half-edge {id:?}: cycle is not a triangle")));
            }
            if next.t != he.t || prev.t != he.t {
                return Err(invalid(format!(
                    "half-edge {id:?}: cycle spans more than one triangle"
                )));
            }

            if let Some(opposite) = he.opposite {
                if self.half_edge(opposite)?.opposite != Some(id) {
                    return Err(invalid(format!(
                        "half-edge {id:?}: opposite {opposite:?} does not point back"
                    )));
                }
                let from = self.origin(id)?;
                let to = he.v;
                if !self.same_place(from, self.half_edge(opposite)?.v)?
                    || !self.same_place(to, self.origin(opposite)?)?
                {
                    return Err(invalid(format!(
                        "half-edge {id:?}: opposite {opposite:?} is not its reverse"
                    )));
                }
            }

            let tri = self.triangle(he.t)?;
            let cycle = [he.v, next.v, prev.v];
            let corners = tri.corners();
            let is_rotation = (0..3).any(|r| (0..3).all(|i| cycle[(i + r) % 3] == corners[i]));
            if !is_rotation {
                return Err(invalid(format!(
                    "triangle {:?}: corners disagree with half-edge {id:?}",
                    he.t
                )));
            }
            if let Some(anchor) = tri.half_edge {
                if self.half_edge(anchor)?.t != he.t {
                    return Err(invalid(format!(
                        "triangle {:?}: anchor half-edge {anchor:?} belongs elsewhere",
                        he.t
                    )));
                }
            }
        }

        for (vid, vertex) in &self.vertices {
            if let Some(out) = vertex.half_edge {
                if self.origin(out)? != vid {
                    return Err(invalid(format!(
                        "vertex {vid:?}: half-edge {out:?} does not start here"
                    )));
                }
            }
            if let Some(tid) = vertex.triangle {
                if !self.triangle(tid)?.corners().contains(&vid) {
                    return Err(invalid(format!(
                        "vertex {vid:?}: triangle {tid:?} does not use it"
                    )));
                }
            }
        }

        Ok(())
    }
}

impl MeshStore {
    // Coincident input points are distinct vertices but may still be paired.
    fn same_place(&self, a: VertexId, b: VertexId) -> Result<bool, TopologyError> {
        Ok(a == b || self.point(a)? == self.point(b)?)
    }
}

fn invalid(message: String) -> TopologyError {
    TopologyError::InvalidTopology(message)
}

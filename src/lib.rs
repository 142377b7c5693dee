//! Planar Delaunay triangulation by edge flipping.
//!
//! Points are first triangulated by an x-sorted incremental sweep, converted to a
//! half-edge mesh, and then edge-flipped until every shared edge passes the
//! in-circle test. The whole pipeline is synchronous and owns its mesh; build a
//! new one per call.
//!
//! ```
//! use flipmesh::math::Point2;
//! use flipmesh::operations::triangulation::triangulate_delaunay;
//!
//! let points = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 3.0),
//!     Point2::new(2.0, -3.0),
//!     Point2::new(4.0, 0.0),
//! ];
//! let triangles = triangulate_delaunay(&points)?;
//! assert_eq!(triangles.len(), 2);
//! # Ok::<(), flipmesh::FlipmeshError>(())
//! ```

pub mod error;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{DegenerateConfigurationWarning, FlipmeshError, Result};
pub use operations::triangulation::{triangulate_delaunay, DelaunayParams, Triangle};

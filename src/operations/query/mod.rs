mod is_delaunay;

pub use is_delaunay::{is_locally_delaunay, IsDelaunay};

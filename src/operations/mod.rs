pub mod query;
pub mod triangulation;

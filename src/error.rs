use thiserror::Error;

/// Top-level error type for the flipmesh triangulation engine.
#[derive(Debug, Error)]
pub enum FlipmeshError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors caused by the caller-supplied point set.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("triangulation needs at least 3 points, got {found}")]
    InsufficientPoints { found: usize },

    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },
}

/// Errors related to the mesh arena and its connectivity.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Non-fatal outcome of an edge-flip run that hit its pass ceiling.
///
/// The mesh is still structurally valid but may not be Delaunay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("edge flipping did not converge within {passes} passes ({flips} flips performed)")]
pub struct DegenerateConfigurationWarning {
    pub passes: usize,
    pub flips: usize,
}

/// Convenience type alias for results using [`FlipmeshError`].
pub type Result<T> = std::result::Result<T, FlipmeshError>;

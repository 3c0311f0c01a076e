use thiserror::Error;

/// Top-level error type for the Transecta kernel.
#[derive(Debug, Error)]
pub enum TransectaError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Results(#[from] ResultsError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("arc length {value} is out of range [{min}, {max}]")]
    ArcLengthOutOfRange { value: f64, min: f64, max: f64 },

    #[error("cannot build a path from an empty segment sequence")]
    EmptyPath,

    #[error("marker {0} has no point geometry")]
    MissingGeometry(usize),
}

/// Errors related to result-set management.
#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("result set not found: {0}")]
    SetNotFound(String),

    #[error("record does not conform to schema: {0}")]
    SchemaMismatch(String),
}

/// Errors related to generation operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`TransectaError`].
pub type Result<T> = std::result::Result<T, TransectaError>;

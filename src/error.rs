use thiserror::Error;

/// Top-level error type for the lathe geometry kernel.
#[derive(Debug, Error)]
pub enum LatheError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    #[error("contract violation: {0}")]
    ContractViolation(String),
}

/// Errors related to machining operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`LatheError`].
pub type Result<T> = std::result::Result<T, LatheError>;

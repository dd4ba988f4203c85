use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Errors surfaced by configuration and primitive validation.
///
/// Numerical failure (undefined samples, non-converging refinements) is
/// never reported through this type; those cases yield empty results.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to serialize snapshot: {0}")]
    Serialization(#[from] serde_json::Error),
}

use thiserror::Error;

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The endpoint answered 2xx but the body was not valid JSON.
    #[error("failed to decode ticker response body: {0}")]
    Decode(#[from] serde_json::Error),
}

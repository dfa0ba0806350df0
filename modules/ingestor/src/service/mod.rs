pub mod advisory;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The finding violates its input contract and cannot be ingested.
    #[error("invalid finding: {0}")]
    InvalidFinding(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// A persistence or resolver collaborator failed. Propagated uncaught;
    /// retry policy belongs to the caller.
    #[error(transparent)]
    Graph(#[from] anyhow::Error),
}

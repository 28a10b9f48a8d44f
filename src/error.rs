// Error types for the listings admin.
// Covers transport, GraphQL envelope, configuration, and view-level failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("GraphQL transport error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Authentication failed: the API rejected the request")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("GraphQL errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("GraphQL response carried no data")]
    MissingData,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid value for {var}: {value:?}")]
    InvalidConfig { var: &'static str, value: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, AdminError>;

/// Failure of one view operation, kept separate per operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The initial read failed; no data was ever available.
    #[error("loading listings failed: {0}")]
    Read(String),

    /// A refresh after a delete failed; prior data is retained.
    #[error("refreshing listings failed: {0}")]
    Refetch(String),

    #[error("deleting listing {id} failed: {reason}")]
    Delete { id: String, reason: String },
}

impl ViewError {
    pub fn reason(&self) -> &str {
        match self {
            ViewError::Read(reason) | ViewError::Refetch(reason) => reason,
            ViewError::Delete { reason, .. } => reason,
        }
    }
}

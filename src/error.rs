use thiserror::Error;

/// Main error type for Followgraph
#[derive(Error, Debug)]
pub enum FollowgraphError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level HTTP failures (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-success response from the GitHub API
    #[error("GitHub API error {status}: {body}")]
    Api { status: u16, body: String },

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Artifact serialization errors
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl FollowgraphError {
    /// Rate limits (429) and server errors (5xx) are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            FollowgraphError::Api { status, .. } => *status == 429 || (500..600).contains(status),
            _ => false,
        }
    }
}

/// Convenient Result type using FollowgraphError
pub type Result<T> = std::result::Result<T, FollowgraphError>;

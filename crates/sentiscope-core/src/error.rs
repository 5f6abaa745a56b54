//! Error types for Sentiscope

/// Result type alias using Sentiscope's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Sentiscope operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Input rejected at the boundary (empty or whitespace-only text)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Remote scoring errors (transport, status, malformed reply)
    #[error("remote error: {0}")]
    Remote(String),

    /// Chart data export errors
    #[error("chart error: {0}")]
    Chart(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new input rejection error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new remote scoring error
    pub fn remote(msg: impl Into<String>) -> Self {
        Self::Remote(msg.into())
    }

    /// Create a new chart export error
    pub fn chart(msg: impl Into<String>) -> Self {
        Self::Chart(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error is a client-side input rejection
    pub fn is_input_rejected(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

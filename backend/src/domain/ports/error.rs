//! Errors raised by persistence adapters.

/// Document-store failures surfaced by repository adapters.
///
/// Repositories never retry or recover; the failure propagates to the handler
/// boundary where it becomes an internal-error response with the detail
/// logged server-side only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The store connection could not be established.
    #[error("document store connection failed: {message}")]
    Connection { message: String },
    /// A read or write failed during execution.
    #[error("document store operation failed: {message}")]
    Operation { message: String },
}

impl StorageError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create an operation error with the given message.
    pub fn operation(message: impl Into<String>) -> Self {
        Self::Operation {
            message: message.into(),
        }
    }
}

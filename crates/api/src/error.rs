//! Server lifecycle errors.

use thiserror::Error;

/// Errors that stop the server from starting or keep it from running.
///
/// Request handling itself never fails, so there is no HTTP mapping here.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not bind the configured address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop terminated with an I/O error.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Result type for server lifecycle operations.
pub type Result<T> = std::result::Result<T, ServerError>;

//! Custom error types for the catalog client

use thiserror::Error;

/// Custom error type for catalog API calls
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (connection, timeout, decoding)
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-OK response from the API, decoded from its error envelope
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Type alias for client results
pub type ClientResult<T> = Result<T, ClientError>;

//! Client error types

use thiserror::Error;

/// Error surface of the booking API client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response did not match the expected envelope
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required or token rejected
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Hotel or booking not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected by validation, locally or by the API
    #[error("Validation error: {0}")]
    Validation(String),

    /// Payment was declined by the processor
    #[error("Payment declined: {0}")]
    PaymentDeclined(String),

    /// Unexpected API-side failure
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

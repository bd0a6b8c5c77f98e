//! Roost Client - HTTP client for the booking API
//!
//! Provides the network calls behind login, the one-time catalog fetch and
//! booking management. Everything else in the workspace is pure and
//! synchronous; this crate is the only place I/O happens.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::client::{
    CurrentUserResponse, LoginRequest, LoginResponse, RegisterRequest, UserInfo,
};
pub use shared::error::ApiResponse;

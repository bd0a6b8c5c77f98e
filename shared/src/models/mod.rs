//! Data models
//!
//! Shared between the search core and the API client.
//! All IDs are `i64`, issued by the external booking service.

pub mod booking;
pub mod hotel;
pub mod review;
pub mod room;

// Re-exports
pub use booking::*;
pub use hotel::*;
pub use review::*;
pub use room::*;

//! Shared types for the Roost booking front-end
//!
//! Common types used across the search core and the API client:
//! data models, the search query value object, the unified error
//! system, and auth/booking API payloads.

pub mod client;
pub mod error;
pub mod models;
pub mod query;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Booking, BookingCreate, BookingStatus, Hotel, PropertyType};
pub use query::{SearchQuery, SortKey};

//! Common type aliases

/// Millisecond UNIX timestamp
pub type Timestamp = i64;

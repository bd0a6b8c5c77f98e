//! Room Model

use serde::{Deserialize, Serialize};

/// Room sub-record of a hotel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Room type name (e.g. "Deluxe King")
    #[serde(rename = "type")]
    pub room_type: String,
    /// Nightly rate in whole rupees
    pub price: i64,
    /// Maximum guests
    pub capacity: u8,
    /// Floor area in square metres
    pub size_sqm: u16,
    /// Feature tags shown on the detail page
    pub features: Vec<String>,
}

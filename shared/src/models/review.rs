//! Review Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Guest review sub-record of a hotel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub user: String,
    /// Individual review rating, 0-5
    pub rating: f64,
    pub date: NaiveDate,
    pub comment: String,
}

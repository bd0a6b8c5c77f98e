//! Booking Model
//!
//! Records exchanged with the external booking API. Persistence, payment
//! capture, and confirmation-reference issuance all happen server-side;
//! this module carries the wire shapes plus the form-level validation and
//! price math the booking page needs before submitting.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, ErrorCode};
use crate::types::Timestamp;

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// Booking entity as returned by the booking API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    /// Server-issued confirmation reference
    pub reference: String,
    pub hotel_id: i64,
    /// Hotel name snapshot at booking time
    pub hotel_name: String,
    /// Room type snapshot at booking time
    pub room_type: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u8,
    pub children: u8,
    pub rooms: u8,
    pub guest_name: String,
    pub guest_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_phone: Option<String>,
    /// Total charged in whole rupees, taxes included
    pub total: i64,
    pub status: BookingStatus,
    pub created_at: Timestamp,
}

impl Booking {
    /// Whether the account page may offer a cancel action
    pub fn is_cancellable(&self) -> bool {
        matches!(self.status, BookingStatus::Pending | BookingStatus::Confirmed)
    }

    /// Nights between check-in and check-out
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Create booking payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub hotel_id: i64,
    pub room_type: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u8,
    pub children: u8,
    pub rooms: u8,
    pub guest_name: String,
    pub guest_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    /// Client-generated deduplication key; the API client fills a UUID
    /// when absent so retried submissions create one booking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

impl BookingCreate {
    /// Form-level validation run before the payload leaves the client
    pub fn validate(&self) -> AppResult<()> {
        if self.guest_name.trim().is_empty() {
            return Err(AppError::required_field("guest_name"));
        }
        let email = self.guest_email.trim();
        if email.is_empty() {
            return Err(AppError::required_field("guest_email"));
        }
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(AppError::validation("Guest email is not a valid address")
                .with_detail("field", "guest_email"));
        }
        if self.adults == 0 {
            return Err(AppError::new(ErrorCode::InvalidGuestCount));
        }
        if self.rooms == 0 {
            return Err(AppError::new(ErrorCode::InvalidRoomCount));
        }
        if self.check_out <= self.check_in {
            return Err(AppError::invalid_date_range());
        }
        Ok(())
    }
}

/// GST slab boundary: nightly tariffs up to this amount use the standard rate
pub const GST_STANDARD_TARIFF_CEILING: i64 = 7500;
/// Standard GST rate in percent (tariffs up to the slab boundary)
pub const GST_RATE_STANDARD: i64 = 5;
/// Luxury GST rate in percent (tariffs above the slab boundary)
pub const GST_RATE_LUXURY: i64 = 18;

/// GST rate in percent for a nightly tariff
pub fn gst_rate_percent(nightly_rate: i64) -> i64 {
    if nightly_rate <= GST_STANDARD_TARIFF_CEILING {
        GST_RATE_STANDARD
    } else {
        GST_RATE_LUXURY
    }
}

/// Price breakdown shown on the booking form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Nightly rate in whole rupees
    pub nightly_rate: i64,
    pub nights: i64,
    pub rooms: u8,
    /// `nightly_rate * nights * rooms`
    pub subtotal: i64,
    /// GST on the subtotal, rounded to the nearest rupee
    pub taxes: i64,
    pub total: i64,
}

impl PriceQuote {
    /// Quote a stay. Errors with [`ErrorCode::InvalidDateRange`] when the
    /// stay is shorter than one night.
    pub fn for_stay(
        nightly_rate: i64,
        check_in: NaiveDate,
        check_out: NaiveDate,
        rooms: u8,
    ) -> AppResult<Self> {
        let nights = (check_out - check_in).num_days();
        if nights <= 0 {
            return Err(AppError::invalid_date_range());
        }
        let subtotal = nightly_rate * nights * rooms as i64;
        let taxes = (subtotal * gst_rate_percent(nightly_rate) + 50) / 100;
        Ok(Self {
            nightly_rate,
            nights,
            rooms,
            subtotal,
            taxes,
            total: subtotal + taxes,
        })
    }
}

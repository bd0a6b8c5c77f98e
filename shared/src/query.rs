//! Search query value object
//!
//! A [`SearchQuery`] is an immutable snapshot of everything the user has
//! selected in the search form and filter sidebar. The view layer builds a
//! fresh value on every edit and hands it to the search pipeline; nothing
//! mutates a query in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::PropertyType;

/// Price ceiling value meaning "no upper limit"
pub const NO_PRICE_CEILING: i64 = i64::MAX;

/// Result ordering selected in the sort dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Descending by review count (missing counts sort last)
    #[default]
    Popularity,
    /// Ascending by nightly price
    #[serde(alias = "price-asc")]
    PriceLow,
    /// Descending by nightly price
    #[serde(alias = "price-desc")]
    PriceHigh,
    /// Descending by guest rating
    Rating,
    /// Stable pass-through: no hotel record carries a distance metric yet,
    /// so this key leaves the filtered order unchanged
    Distance,
}

impl SortKey {
    /// Wire/display name for this sort key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Popularity => "popularity",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Distance => "distance",
        }
    }
}

/// Search/filter/sort criteria snapshot
///
/// Empty strings and empty sets mean "no filter"; `price_ceiling` defaults
/// to [`NO_PRICE_CEILING`] and `min_rating` to 0 for the same reason. The
/// pipeline applies whatever values are present without validating them
/// (out-of-range values simply produce empty results); [`validate`] is the
/// opt-in form-level check for the view layer.
///
/// [`validate`]: SearchQuery::validate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    /// Destination box contents, matched against location/city/city code
    pub destination: String,
    /// Free-text search box contents, matched against name/location
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveDate>,
    pub adults: u8,
    pub children: u8,
    pub rooms: u8,
    /// Inclusive upper bound on nightly price; the floor is always 0
    pub price_ceiling: i64,
    /// Minimum guest rating; 0 disables the filter
    pub min_rating: f64,
    /// Required property types; empty disables the filter
    pub property_types: Vec<PropertyType>,
    /// Required amenities, all of which must be present; empty disables
    /// the filter
    pub amenities: Vec<String>,
    pub sort: SortKey,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            destination: String::new(),
            text: String::new(),
            check_in: None,
            check_out: None,
            adults: 2,
            children: 0,
            rooms: 1,
            price_ceiling: NO_PRICE_CEILING,
            min_rating: 0.0,
            property_types: Vec::new(),
            amenities: Vec::new(),
            sort: SortKey::default(),
        }
    }
}

impl SearchQuery {
    /// Set the destination text
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    /// Set the free-text search contents
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the stay dates
    pub fn with_dates(mut self, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        self.check_in = Some(check_in);
        self.check_out = Some(check_out);
        self
    }

    /// Set the guest counts
    pub fn with_guests(mut self, adults: u8, children: u8) -> Self {
        self.adults = adults;
        self.children = children;
        self
    }

    /// Set the room count
    pub fn with_rooms(mut self, rooms: u8) -> Self {
        self.rooms = rooms;
        self
    }

    /// Set the price ceiling
    pub fn with_price_ceiling(mut self, ceiling: i64) -> Self {
        self.price_ceiling = ceiling;
        self
    }

    /// Set the minimum guest rating
    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = rating;
        self
    }

    /// Set the required property types
    pub fn with_property_types(mut self, types: Vec<PropertyType>) -> Self {
        self.property_types = types;
        self
    }

    /// Set the required amenities (conjunctive)
    pub fn with_amenities(mut self, amenities: Vec<String>) -> Self {
        self.amenities = amenities;
        self
    }

    /// Set the sort key
    pub fn sort_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Form-level validation for the view layer
    ///
    /// The pipeline never runs this; malformed values degrade to empty
    /// results there instead of raising.
    pub fn validate(&self) -> AppResult<()> {
        if let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) {
            if check_out <= check_in {
                return Err(AppError::invalid_date_range());
            }
        }
        if self.adults == 0 {
            return Err(AppError::new(ErrorCode::InvalidGuestCount));
        }
        if self.rooms == 0 {
            return Err(AppError::new(ErrorCode::InvalidRoomCount));
        }
        if !(0.0..=5.0).contains(&self.min_rating) {
            return Err(AppError::new(ErrorCode::RatingOutOfRange));
        }
        if self.price_ceiling < 0 {
            return Err(AppError::new(ErrorCode::ValueOutOfRange)
                .with_detail("field", "price_ceiling"));
        }
        Ok(())
    }
}

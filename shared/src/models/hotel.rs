//! Hotel Model

use serde::{Deserialize, Serialize};

use super::review::Review;
use super::room::Room;

/// Property category shown as filter chips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    Hotel,
    Resort,
    Villa,
    Boutique,
    Apartment,
    GuestHouse,
    Hostel,
}

impl PropertyType {
    /// Display label for filter chips and cards
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hotel => "Hotel",
            Self::Resort => "Resort",
            Self::Villa => "Villa",
            Self::Boutique => "Boutique",
            Self::Apartment => "Apartment",
            Self::GuestHouse => "Guest House",
            Self::Hostel => "Hostel",
        }
    }
}

/// Check-in/check-out times and cancellation policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policies {
    /// Check-in time string (e.g. "14:00")
    pub check_in: String,
    /// Check-out time string (e.g. "11:00")
    pub check_out: String,
    pub cancellation: String,
}

/// Nearby attraction with its display distance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attraction {
    pub name: String,
    /// Display label (e.g. "1.2 km"), not a sortable metric
    pub distance: String,
}

/// Hotel entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    /// Free-form location string (e.g. "Candolim Beach, Goa")
    pub location: String,
    /// City display name for the destination dropdown
    pub city: String,
    /// Short city code (e.g. "GOI")
    pub city_code: String,
    /// Aggregate guest rating, 0-5 with one decimal
    pub rating: f64,
    /// Missing in source data means no reviews yet
    #[serde(default)]
    pub review_count: u32,
    /// Current nightly rate in whole rupees
    pub price: i64,
    /// Pre-discount nightly rate; `price <= original_price` when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
    /// Advertised discount percentage as stored in the source data;
    /// not guaranteed to match the prices (see [`Hotel::computed_discount_percent`])
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
    pub images: Vec<String>,
    pub description: String,
    /// Amenity labels; membership checks are case-insensitive
    pub amenities: Vec<String>,
    pub property_type: PropertyType,
    /// Official star category, 1-5
    pub star_rating: u8,
    pub rooms: Vec<Room>,
    pub policies: Policies,
    pub attractions: Vec<Attraction>,
    pub reviews: Vec<Review>,
}

impl Hotel {
    /// Case-insensitive amenity membership check
    pub fn has_amenity(&self, label: &str) -> bool {
        self.amenities.iter().any(|a| a.eq_ignore_ascii_case(label))
    }

    /// Discount percentage derived from the prices, rounded to the nearest
    /// whole percent. `None` without an `original_price`, when the prices
    /// are inconsistent (`original_price <= 0` or `price > original_price`),
    /// or when the derived percent overflows `u8`.
    pub fn computed_discount_percent(&self) -> Option<u8> {
        self.original_price
            .filter(|&op| op > 0 && self.price <= op)
            .and_then(|op| u8::try_from(((op - self.price) * 100 + op / 2) / op).ok())
    }

    /// Lowest-priced room, used for "from ₹x" display
    pub fn cheapest_room(&self) -> Option<&Room> {
        self.rooms.iter().min_by_key(|r| r.price)
    }
}

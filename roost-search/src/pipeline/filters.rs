//! Filter Stage Predicates
//!
//! Logic for matching a single hotel against the individual query filters.
//! Every predicate treats the "nothing selected" form of its filter as a
//! pass, so a default query lets the whole catalog through.

use shared::models::{Hotel, PropertyType};
use shared::query::SearchQuery;

/// Check if a hotel matches the destination box contents
///
/// Case-insensitive substring match against the location string, the city
/// name and the city code. An empty destination passes everything.
pub fn matches_destination(hotel: &Hotel, destination: &str) -> bool {
    if destination.is_empty() {
        return true;
    }
    let needle = destination.to_lowercase();
    hotel.location.to_lowercase().contains(&needle)
        || hotel.city.to_lowercase().contains(&needle)
        || hotel.city_code.to_lowercase().contains(&needle)
}

/// Check if a hotel matches the free-text search box
///
/// Case-insensitive substring match against name and location.
pub fn matches_text(hotel: &Hotel, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    let needle = text.to_lowercase();
    hotel.name.to_lowercase().contains(&needle)
        || hotel.location.to_lowercase().contains(&needle)
}

/// Check if a hotel's nightly price is within the ceiling (inclusive)
pub fn within_price_ceiling(hotel: &Hotel, ceiling: i64) -> bool {
    hotel.price <= ceiling
}

/// Check if a hotel meets the minimum guest rating
///
/// A minimum of 0 (the default) disables the filter.
pub fn meets_min_rating(hotel: &Hotel, min_rating: f64) -> bool {
    min_rating <= 0.0 || hotel.rating >= min_rating
}

/// Check if a hotel's property type is among the selected ones
pub fn matches_property_type(hotel: &Hotel, types: &[PropertyType]) -> bool {
    types.is_empty() || types.contains(&hotel.property_type)
}

/// Check if a hotel offers every selected amenity
pub fn has_all_amenities(hotel: &Hotel, amenities: &[String]) -> bool {
    amenities.iter().all(|amenity| hotel.has_amenity(amenity))
}

/// Check a hotel against every filter stage of a query
pub fn matches_query(hotel: &Hotel, query: &SearchQuery) -> bool {
    matches_destination(hotel, &query.destination)
        && matches_text(hotel, &query.text)
        && within_price_ceiling(hotel, query.price_ceiling)
        && meets_min_rating(hotel, query.min_rating)
        && matches_property_type(hotel, &query.property_types)
        && has_all_amenities(hotel, &query.amenities)
}

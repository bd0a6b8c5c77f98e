//! Hotel Catalog
//!
//! Owns the in-memory hotel list and answers the questions the view asks
//! of it: detail lookups, facet values for the filter sidebar, the home
//! carousel and search itself.

use shared::error::{AppError, AppResult};
use shared::models::{Hotel, PropertyType};
use shared::query::{SearchQuery, SortKey};

use crate::fixtures;
use crate::pipeline;

/// In-memory hotel collection, insertion-ordered
///
/// Loaded once (bundled sample or one fetch at startup) and read-only
/// afterwards; every search runs against the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    hotels: Vec<Hotel>,
}

impl Catalog {
    pub fn new(hotels: Vec<Hotel>) -> Self {
        Self { hotels }
    }

    /// Parse a bundled or fetched JSON array of hotel records
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let hotels: Vec<Hotel> = serde_json::from_str(json).map_err(|e| {
            AppError::catalog_corrupted("Invalid catalog JSON")
                .with_detail("parse_error", e.to_string())
        })?;
        tracing::info!(hotels = hotels.len(), "catalog loaded");
        Ok(Self::new(hotels))
    }

    /// The built-in sample catalog
    pub fn sample() -> Self {
        Self::new(fixtures::sample_hotels())
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hotel> {
        self.hotels.iter()
    }

    /// Detail-page lookup
    pub fn get(&self, id: i64) -> Option<&Hotel> {
        self.hotels.iter().find(|hotel| hotel.id == id)
    }

    /// Run a query against the full catalog
    pub fn search(&self, query: &SearchQuery) -> Vec<&Hotel> {
        pipeline::apply(&self.hotels, query)
    }

    /// Unique city names in first-seen order (destination dropdown)
    pub fn cities(&self) -> Vec<String> {
        let mut cities: Vec<String> = Vec::new();
        for hotel in &self.hotels {
            if !cities.iter().any(|city| city == &hotel.city) {
                cities.push(hotel.city.clone());
            }
        }
        cities
    }

    /// Unique amenity labels, alphabetical (filter checkboxes)
    pub fn amenities(&self) -> Vec<String> {
        let mut amenities: Vec<String> = self
            .hotels
            .iter()
            .flat_map(|hotel| hotel.amenities.iter().cloned())
            .collect();
        amenities.sort();
        amenities.dedup();
        amenities
    }

    /// Property types present in the catalog, first-seen order
    pub fn property_types(&self) -> Vec<PropertyType> {
        let mut types: Vec<PropertyType> = Vec::new();
        for hotel in &self.hotels {
            if !types.contains(&hotel.property_type) {
                types.push(hotel.property_type);
            }
        }
        types
    }

    /// Nightly price range across the catalog (price slider bounds)
    pub fn price_bounds(&self) -> Option<(i64, i64)> {
        let min = self.hotels.iter().map(|hotel| hotel.price).min()?;
        let max = self.hotels.iter().map(|hotel| hotel.price).max()?;
        Some((min, max))
    }

    /// Top-n hotels by review count (home page carousel)
    ///
    /// Same ordering rule as the popularity sort key.
    pub fn featured(&self, n: usize) -> Vec<&Hotel> {
        let mut hotels: Vec<&Hotel> = self.hotels.iter().collect();
        pipeline::sort::sort_results(&mut hotels, SortKey::Popularity);
        hotels.truncate(n);
        hotels
    }
}

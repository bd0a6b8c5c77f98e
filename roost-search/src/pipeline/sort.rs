//! Result Ordering
//!
//! Comparators for the sort dropdown. Every ordering runs through a stable
//! sort, so hotels with equal keys keep the order the filters produced.

use std::cmp::Ordering;

use shared::models::Hotel;
use shared::query::SortKey;

/// Sort the filtered sequence in place according to the selected key
pub fn sort_results(hotels: &mut [&Hotel], key: SortKey) {
    match key {
        SortKey::Popularity => hotels.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
        SortKey::PriceLow => hotels.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHigh => hotels.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Rating => hotels.sort_by(|a, b| compare_rating(a, b)),
        // No hotel record carries a distance metric; keep the filtered order.
        SortKey::Distance => {}
    }
}

/// Descending rating comparison, tolerant of malformed (NaN) ratings
fn compare_rating(a: &Hotel, b: &Hotel) -> Ordering {
    b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Policies, PropertyType};

    fn make_hotel(id: i64, price: i64, rating: f64, review_count: u32) -> Hotel {
        Hotel {
            id,
            name: format!("Hotel {id}"),
            location: "Test City".to_string(),
            city: "Test City".to_string(),
            city_code: "TST".to_string(),
            rating,
            review_count,
            price,
            original_price: None,
            discount: None,
            images: vec![],
            description: String::new(),
            amenities: vec![],
            property_type: PropertyType::Hotel,
            star_rating: 3,
            rooms: vec![],
            policies: Policies {
                check_in: "2:00 PM".to_string(),
                check_out: "11:00 AM".to_string(),
                cancellation: "Free cancellation".to_string(),
            },
            attractions: vec![],
            reviews: vec![],
        }
    }

    fn ids(hotels: &[&Hotel]) -> Vec<i64> {
        hotels.iter().map(|h| h.id).collect()
    }

    #[test]
    fn test_popularity_sorts_by_review_count_descending() {
        let hotels = vec![
            make_hotel(1, 4200, 4.8, 1843),
            make_hotel(2, 7800, 4.6, 2756),
            make_hotel(3, 3100, 4.5, 987),
        ];
        let mut refs: Vec<&Hotel> = hotels.iter().collect();

        sort_results(&mut refs, SortKey::Popularity);
        assert_eq!(ids(&refs), vec![2, 1, 3]);
    }

    #[test]
    fn test_price_low_and_high() {
        let hotels = vec![
            make_hotel(1, 4200, 4.8, 1843),
            make_hotel(2, 7800, 4.6, 2756),
            make_hotel(3, 3100, 4.5, 987),
        ];
        let mut refs: Vec<&Hotel> = hotels.iter().collect();

        sort_results(&mut refs, SortKey::PriceLow);
        assert_eq!(ids(&refs), vec![3, 1, 2]);

        sort_results(&mut refs, SortKey::PriceHigh);
        assert_eq!(ids(&refs), vec![2, 1, 3]);
    }

    #[test]
    fn test_rating_descending() {
        let hotels = vec![
            make_hotel(1, 4200, 4.8, 1843),
            make_hotel(2, 7800, 4.6, 2756),
            make_hotel(3, 3100, 4.9, 987),
        ];
        let mut refs: Vec<&Hotel> = hotels.iter().collect();

        sort_results(&mut refs, SortKey::Rating);
        assert_eq!(ids(&refs), vec![3, 1, 2]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let hotels = vec![
            make_hotel(1, 5000, 4.5, 100),
            make_hotel(2, 5000, 4.5, 100),
            make_hotel(3, 5000, 4.5, 100),
        ];
        let mut refs: Vec<&Hotel> = hotels.iter().collect();

        sort_results(&mut refs, SortKey::PriceLow);
        assert_eq!(ids(&refs), vec![1, 2, 3]);

        sort_results(&mut refs, SortKey::Rating);
        assert_eq!(ids(&refs), vec![1, 2, 3]);
    }

    #[test]
    fn test_distance_is_a_stable_pass_through() {
        let hotels = vec![
            make_hotel(2, 7800, 4.6, 2756),
            make_hotel(1, 4200, 4.8, 1843),
            make_hotel(3, 3100, 4.5, 987),
        ];
        let mut refs: Vec<&Hotel> = hotels.iter().collect();

        sort_results(&mut refs, SortKey::Distance);
        assert_eq!(ids(&refs), vec![2, 1, 3]);
    }
}

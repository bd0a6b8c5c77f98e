//! Sample Catalog
//!
//! The six hotels bundled as the static catalog. They double as the data
//! the pipeline and catalog tests run against, so the relationships between
//! their prices, ratings and review counts are load-bearing: keep the
//! ascending price order `[5, 3, 1, 4, 2, 6]`, keep 2 and 6 the only
//! resorts, and keep 1, 4 and 6 the only records rated 4.8 or above.

use chrono::NaiveDate;
use shared::models::{Attraction, Hotel, Policies, PropertyType, Review, Room};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The bundled sample catalog, insertion order is id order
pub fn sample_hotels() -> Vec<Hotel> {
    vec![
        Hotel {
            id: 1,
            name: "The Grand Meridian".to_string(),
            location: "Connaught Place, New Delhi".to_string(),
            city: "New Delhi".to_string(),
            city_code: "DEL".to_string(),
            rating: 4.8,
            review_count: 1843,
            price: 4200,
            original_price: Some(5600),
            discount: Some(25),
            images: vec![
                "https://images.roost.example/hotels/grand-meridian-1.jpg".to_string(),
                "https://images.roost.example/hotels/grand-meridian-2.jpg".to_string(),
                "https://images.roost.example/hotels/grand-meridian-3.jpg".to_string(),
            ],
            description: "A landmark business hotel in the heart of the capital, steps from \
                          the Connaught Place colonnades. Rooftop pool, three restaurants \
                          and a spa spread over two floors."
                .to_string(),
            amenities: vec![
                "Free WiFi".to_string(),
                "Pool".to_string(),
                "Spa".to_string(),
                "Gym".to_string(),
                "Restaurant".to_string(),
                "Bar".to_string(),
                "Room Service".to_string(),
                "Airport Shuttle".to_string(),
            ],
            property_type: PropertyType::Hotel,
            star_rating: 5,
            rooms: vec![
                Room {
                    room_type: "Deluxe Room".to_string(),
                    price: 4200,
                    capacity: 2,
                    size_sqm: 32,
                    features: vec![
                        "King Bed".to_string(),
                        "City View".to_string(),
                        "Work Desk".to_string(),
                    ],
                },
                Room {
                    room_type: "Executive Suite".to_string(),
                    price: 7200,
                    capacity: 3,
                    size_sqm: 58,
                    features: vec![
                        "King Bed".to_string(),
                        "Lounge Access".to_string(),
                        "Bathtub".to_string(),
                    ],
                },
            ],
            policies: Policies {
                check_in: "2:00 PM".to_string(),
                check_out: "12:00 PM".to_string(),
                cancellation: "Free cancellation until 48 hours before check-in".to_string(),
            },
            attractions: vec![
                Attraction {
                    name: "India Gate".to_string(),
                    distance: "3.5 km".to_string(),
                },
                Attraction {
                    name: "Janpath Market".to_string(),
                    distance: "850 m".to_string(),
                },
            ],
            reviews: vec![
                Review {
                    user: "Ananya S.".to_string(),
                    rating: 5.0,
                    date: date(2025, 6, 14),
                    comment: "Impeccable service and the rooftop pool at dusk is worth the \
                              stay alone."
                        .to_string(),
                },
                Review {
                    user: "Rohit M.".to_string(),
                    rating: 4.5,
                    date: date(2025, 4, 2),
                    comment: "Great location for business, breakfast spread could be larger."
                        .to_string(),
                },
            ],
        },
        Hotel {
            id: 2,
            name: "Azure Sands Resort".to_string(),
            location: "Candolim Beach, Goa".to_string(),
            city: "Goa".to_string(),
            city_code: "GOI".to_string(),
            rating: 4.6,
            review_count: 2756,
            price: 7800,
            original_price: Some(9750),
            discount: Some(20),
            images: vec![
                "https://images.roost.example/hotels/azure-sands-1.jpg".to_string(),
                "https://images.roost.example/hotels/azure-sands-2.jpg".to_string(),
                "https://images.roost.example/hotels/azure-sands-3.jpg".to_string(),
            ],
            description: "Beachfront resort on Candolim's quieter stretch, with a palm-lined \
                          pool deck, water-sports desk and a kids club that actually keeps \
                          the kids busy."
                .to_string(),
            amenities: vec![
                "Free WiFi".to_string(),
                "Pool".to_string(),
                "Private Beach".to_string(),
                "Spa".to_string(),
                "Water Sports".to_string(),
                "Restaurant".to_string(),
                "Bar".to_string(),
                "Kids Club".to_string(),
            ],
            property_type: PropertyType::Resort,
            star_rating: 5,
            rooms: vec![
                Room {
                    room_type: "Garden View Room".to_string(),
                    price: 7800,
                    capacity: 2,
                    size_sqm: 40,
                    features: vec![
                        "Queen Bed".to_string(),
                        "Balcony".to_string(),
                        "Garden View".to_string(),
                    ],
                },
                Room {
                    room_type: "Sea View Villa".to_string(),
                    price: 12500,
                    capacity: 4,
                    size_sqm: 85,
                    features: vec![
                        "Two Bedrooms".to_string(),
                        "Private Plunge Pool".to_string(),
                        "Sea View".to_string(),
                    ],
                },
            ],
            policies: Policies {
                check_in: "3:00 PM".to_string(),
                check_out: "11:00 AM".to_string(),
                cancellation: "Free cancellation until 7 days before check-in".to_string(),
            },
            attractions: vec![
                Attraction {
                    name: "Fort Aguada".to_string(),
                    distance: "2.1 km".to_string(),
                },
                Attraction {
                    name: "Calangute Market".to_string(),
                    distance: "4 km".to_string(),
                },
            ],
            reviews: vec![
                Review {
                    user: "Priya K.".to_string(),
                    rating: 5.0,
                    date: date(2025, 1, 9),
                    comment: "The beach access is direct and the staff remembered our names \
                              by day two."
                        .to_string(),
                },
                Review {
                    user: "Daniel F.".to_string(),
                    rating: 4.0,
                    date: date(2024, 12, 28),
                    comment: "Lovely grounds. Book the villa if you can, the standard rooms \
                              face the car park."
                        .to_string(),
                },
            ],
        },
        Hotel {
            id: 3,
            name: "Heritage Haveli".to_string(),
            location: "Old City, Jaipur".to_string(),
            city: "Jaipur".to_string(),
            city_code: "JAI".to_string(),
            rating: 4.5,
            review_count: 987,
            price: 3100,
            original_price: None,
            discount: None,
            images: vec![
                "https://images.roost.example/hotels/heritage-haveli-1.jpg".to_string(),
                "https://images.roost.example/hotels/heritage-haveli-2.jpg".to_string(),
                "https://images.roost.example/hotels/heritage-haveli-3.jpg".to_string(),
            ],
            description: "A restored 19th-century haveli in the walled city, with frescoed \
                          courtyards, a rooftop restaurant facing Hawa Mahal and rooms full \
                          of original woodwork."
                .to_string(),
            amenities: vec![
                "Free WiFi".to_string(),
                "Restaurant".to_string(),
                "Rooftop Terrace".to_string(),
                "Courtyard".to_string(),
                "Airport Shuttle".to_string(),
            ],
            property_type: PropertyType::Boutique,
            star_rating: 4,
            rooms: vec![
                Room {
                    room_type: "Heritage Room".to_string(),
                    price: 3100,
                    capacity: 2,
                    size_sqm: 28,
                    features: vec![
                        "Queen Bed".to_string(),
                        "Courtyard View".to_string(),
                        "Antique Furnishing".to_string(),
                    ],
                },
                Room {
                    room_type: "Maharaja Suite".to_string(),
                    price: 5400,
                    capacity: 3,
                    size_sqm: 52,
                    features: vec![
                        "Four-Poster Bed".to_string(),
                        "Sitting Room".to_string(),
                        "Jharokha Window".to_string(),
                    ],
                },
            ],
            policies: Policies {
                check_in: "1:00 PM".to_string(),
                check_out: "11:00 AM".to_string(),
                cancellation: "Free cancellation until 24 hours before check-in".to_string(),
            },
            attractions: vec![
                Attraction {
                    name: "Hawa Mahal".to_string(),
                    distance: "1.2 km".to_string(),
                },
                Attraction {
                    name: "City Palace".to_string(),
                    distance: "1.8 km".to_string(),
                },
            ],
            reviews: vec![
                Review {
                    user: "Meera J.".to_string(),
                    rating: 4.5,
                    date: date(2025, 3, 21),
                    comment: "Felt like staying inside a museum, in the best way. Rooftop \
                              dinner is a must."
                        .to_string(),
                },
                Review {
                    user: "Tom W.".to_string(),
                    rating: 4.5,
                    date: date(2025, 2, 5),
                    comment: "Characterful and quiet despite the bazaar outside. Stairs \
                              everywhere, no lift."
                        .to_string(),
                },
            ],
        },
        Hotel {
            id: 4,
            name: "Lakeview Palace".to_string(),
            location: "Lake Pichola, Udaipur".to_string(),
            city: "Udaipur".to_string(),
            city_code: "UDR".to_string(),
            rating: 4.9,
            review_count: 1204,
            price: 5500,
            original_price: Some(6875),
            discount: Some(20),
            images: vec![
                "https://images.roost.example/hotels/lakeview-palace-1.jpg".to_string(),
                "https://images.roost.example/hotels/lakeview-palace-2.jpg".to_string(),
                "https://images.roost.example/hotels/lakeview-palace-3.jpg".to_string(),
            ],
            description: "A palace hotel on the eastern shore of Lake Pichola. Every lake \
                          facing room looks across the water to the Jag Mandir, and the \
                          ghat-side jetty runs sunset boat rides."
                .to_string(),
            amenities: vec![
                "Free WiFi".to_string(),
                "Pool".to_string(),
                "Spa".to_string(),
                "Lake View".to_string(),
                "Restaurant".to_string(),
                "Bar".to_string(),
                "Boat Rides".to_string(),
            ],
            property_type: PropertyType::Hotel,
            star_rating: 5,
            rooms: vec![
                Room {
                    room_type: "Lake Facing Room".to_string(),
                    price: 5500,
                    capacity: 2,
                    size_sqm: 36,
                    features: vec![
                        "King Bed".to_string(),
                        "Lake View".to_string(),
                        "Window Seat".to_string(),
                    ],
                },
                Room {
                    room_type: "Royal Suite".to_string(),
                    price: 9800,
                    capacity: 4,
                    size_sqm: 72,
                    features: vec![
                        "Two Bedrooms".to_string(),
                        "Private Terrace".to_string(),
                        "Butler Service".to_string(),
                    ],
                },
            ],
            policies: Policies {
                check_in: "2:00 PM".to_string(),
                check_out: "12:00 PM".to_string(),
                cancellation: "Free cancellation until 72 hours before check-in".to_string(),
            },
            attractions: vec![
                Attraction {
                    name: "City Palace".to_string(),
                    distance: "1.5 km".to_string(),
                },
                Attraction {
                    name: "Jag Mandir".to_string(),
                    distance: "2.3 km".to_string(),
                },
            ],
            reviews: vec![
                Review {
                    user: "Kavita R.".to_string(),
                    rating: 5.0,
                    date: date(2025, 5, 30),
                    comment: "Woke up to the lake every morning. The sunset boat ride from \
                              the hotel jetty was the trip highlight."
                        .to_string(),
                },
                Review {
                    user: "James O.".to_string(),
                    rating: 5.0,
                    date: date(2025, 4, 17),
                    comment: "Service on another level. They arranged a private dinner on \
                              the terrace without fuss."
                        .to_string(),
                },
            ],
        },
        Hotel {
            id: 5,
            name: "Backpacker's Den".to_string(),
            location: "Koregaon Park, Pune".to_string(),
            city: "Pune".to_string(),
            city_code: "PNQ".to_string(),
            rating: 4.2,
            review_count: 654,
            price: 900,
            original_price: None,
            discount: None,
            images: vec![
                "https://images.roost.example/hotels/backpackers-den-1.jpg".to_string(),
                "https://images.roost.example/hotels/backpackers-den-2.jpg".to_string(),
                "https://images.roost.example/hotels/backpackers-den-3.jpg".to_string(),
            ],
            description: "A sociable hostel on a leafy Koregaon Park lane. Big shared \
                          kitchen, weekly film nights on the terrace and lockers large \
                          enough for a trekking pack."
                .to_string(),
            amenities: vec![
                "Free WiFi".to_string(),
                "Shared Kitchen".to_string(),
                "Lounge".to_string(),
                "Laundry".to_string(),
                "Lockers".to_string(),
            ],
            property_type: PropertyType::Hostel,
            star_rating: 2,
            rooms: vec![
                Room {
                    room_type: "Dorm Bed".to_string(),
                    price: 900,
                    capacity: 1,
                    size_sqm: 5,
                    features: vec![
                        "Curtained Bunk".to_string(),
                        "Reading Light".to_string(),
                        "Locker".to_string(),
                    ],
                },
                Room {
                    room_type: "Private Twin".to_string(),
                    price: 2200,
                    capacity: 2,
                    size_sqm: 16,
                    features: vec![
                        "Twin Beds".to_string(),
                        "Ensuite Bathroom".to_string(),
                        "Desk".to_string(),
                    ],
                },
            ],
            policies: Policies {
                check_in: "12:00 PM".to_string(),
                check_out: "10:00 AM".to_string(),
                cancellation: "Free cancellation until 24 hours before check-in".to_string(),
            },
            attractions: vec![
                Attraction {
                    name: "Osho Teerth Garden".to_string(),
                    distance: "600 m".to_string(),
                },
                Attraction {
                    name: "Phoenix Marketcity".to_string(),
                    distance: "3 km".to_string(),
                },
            ],
            reviews: vec![
                Review {
                    user: "Lena B.".to_string(),
                    rating: 4.5,
                    date: date(2025, 2, 19),
                    comment: "Cleanest hostel I've stayed at in India. Met half my travel \
                              group at the film night."
                        .to_string(),
                },
                Review {
                    user: "Arjun P.".to_string(),
                    rating: 4.0,
                    date: date(2025, 1, 7),
                    comment: "Great value. Dorms fill up fast on weekends, book early."
                        .to_string(),
                },
            ],
        },
        Hotel {
            id: 6,
            name: "Emerald Bay Resort & Spa".to_string(),
            location: "Lighthouse Beach, Kovalam".to_string(),
            city: "Kovalam".to_string(),
            city_code: "TRV".to_string(),
            rating: 4.8,
            review_count: 3120,
            price: 9200,
            original_price: Some(11500),
            discount: Some(20),
            images: vec![
                "https://images.roost.example/hotels/emerald-bay-1.jpg".to_string(),
                "https://images.roost.example/hotels/emerald-bay-2.jpg".to_string(),
                "https://images.roost.example/hotels/emerald-bay-3.jpg".to_string(),
            ],
            description: "Clifftop resort above Lighthouse Beach with an infinity pool over \
                          the Arabian Sea, a resident Ayurveda centre and morning yoga on \
                          the deck."
                .to_string(),
            amenities: vec![
                "Free WiFi".to_string(),
                "Infinity Pool".to_string(),
                "Spa".to_string(),
                "Ayurveda Centre".to_string(),
                "Private Beach".to_string(),
                "Restaurant".to_string(),
                "Bar".to_string(),
                "Yoga Deck".to_string(),
            ],
            property_type: PropertyType::Resort,
            star_rating: 5,
            rooms: vec![
                Room {
                    room_type: "Ocean View Room".to_string(),
                    price: 9200,
                    capacity: 2,
                    size_sqm: 45,
                    features: vec![
                        "King Bed".to_string(),
                        "Ocean View".to_string(),
                        "Balcony".to_string(),
                    ],
                },
                Room {
                    room_type: "Beachfront Pool Villa".to_string(),
                    price: 16800,
                    capacity: 4,
                    size_sqm: 110,
                    features: vec![
                        "Two Bedrooms".to_string(),
                        "Private Pool".to_string(),
                        "Direct Beach Access".to_string(),
                    ],
                },
            ],
            policies: Policies {
                check_in: "3:00 PM".to_string(),
                check_out: "12:00 PM".to_string(),
                cancellation: "Free cancellation until 7 days before check-in".to_string(),
            },
            attractions: vec![
                Attraction {
                    name: "Lighthouse Beach".to_string(),
                    distance: "200 m".to_string(),
                },
                Attraction {
                    name: "Vizhinjam Lighthouse".to_string(),
                    distance: "1.1 km".to_string(),
                },
            ],
            reviews: vec![
                Review {
                    user: "Sarah L.".to_string(),
                    rating: 5.0,
                    date: date(2025, 7, 3),
                    comment: "The infinity pool photos don't do it justice. Ayurveda \
                              treatments were superb."
                        .to_string(),
                },
                Review {
                    user: "Vikram N.".to_string(),
                    rating: 4.5,
                    date: date(2025, 6, 11),
                    comment: "Stunning setting. The climb back up from the beach is steep, \
                              but there's a buggy on call."
                        .to_string(),
                },
            ],
        },
    ]
}

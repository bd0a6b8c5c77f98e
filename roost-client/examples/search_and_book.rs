//! Search-to-booking walkthrough
//!
//! Demonstrates the full client-side flow:
//! 1. Search the bundled sample catalog the way the results page does
//! 2. Price a stay for the top result
//! 3. Build and validate a booking payload
//! 4. Talk to a live API, but only when ROOST_API_URL is set
//!
//! Run: cargo run --example search_and_book

use anyhow::Context;
use chrono::NaiveDate;
use roost_client::{ClientConfig, HttpClient};
use roost_search::Catalog;
use shared::models::{BookingCreate, PriceQuote, PropertyType};
use shared::query::{SearchQuery, SortKey};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let catalog = Catalog::sample();
    println!("\n🏨 Roost sample catalog");
    println!("=======================");
    println!(
        "{} hotels across {}\n",
        catalog.len(),
        catalog.cities().join(", ")
    );

    // 1. A typical search: resorts under 8000 a night, cheapest first
    let query = SearchQuery::default()
        .with_property_types(vec![PropertyType::Resort])
        .with_price_ceiling(8000)
        .sort_by(SortKey::PriceLow);
    query.validate().context("search form")?;

    let results = catalog.search(&query);
    println!("🔎 Resorts up to ₹8000/night:");
    for hotel in &results {
        println!(
            "   {} ({}) - ₹{}/night, rated {}",
            hotel.name, hotel.city, hotel.price, hotel.rating
        );
    }

    let pick = results.first().context("no resort within budget")?;

    // 2. Price a three-night stay
    let check_in = NaiveDate::from_ymd_opt(2025, 11, 10).context("check-in date")?;
    let check_out = NaiveDate::from_ymd_opt(2025, 11, 13).context("check-out date")?;
    let quote = PriceQuote::for_stay(pick.price, check_in, check_out, 1)?;
    println!(
        "\n💰 {} nights x ₹{} = ₹{}, GST ₹{}, total ₹{}",
        quote.nights, quote.nightly_rate, quote.subtotal, quote.taxes, quote.total
    );

    // 3. Build the booking payload the form would submit
    let room = pick.cheapest_room().context("hotel has no rooms")?;
    let payload = BookingCreate {
        hotel_id: pick.id,
        room_type: room.room_type.clone(),
        check_in,
        check_out,
        adults: 2,
        children: 0,
        rooms: 1,
        guest_name: "Asha Verma".to_string(),
        guest_email: "asha@example.com".to_string(),
        guest_phone: None,
        special_requests: Some("Late check-in, around 9 PM".to_string()),
        idempotency_key: None,
    };
    payload.validate()?;
    println!("✅ Booking payload for '{}' is valid", pick.name);

    // 4. Only go on the wire when an API is configured
    if std::env::var("ROOST_API_URL").is_ok() {
        let client = HttpClient::new(&ClientConfig::from_env());
        let hotels = client.fetch_hotels().await?;
        println!("🌐 Live API serves {} hotels", hotels.len());

        let booking = client.create_booking(payload).await?;
        println!(
            "🎫 Booked! Reference {} ({:?})",
            booking.reference, booking.status
        );
    } else {
        println!("\n(set ROOST_API_URL to run the live booking step)");
    }

    Ok(())
}

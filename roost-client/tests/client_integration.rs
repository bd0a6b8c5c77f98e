// roost-client/tests/client_integration.rs
// Offline integration tests: no live API required.

use chrono::NaiveDate;
use roost_client::{ClientConfig, ClientError, HttpClient};
use shared::models::BookingCreate;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Payload that passes local validation
fn make_booking_payload() -> BookingCreate {
    BookingCreate {
        hotel_id: 2,
        room_type: "Garden View Room".to_string(),
        check_in: date(2025, 11, 10),
        check_out: date(2025, 11, 13),
        adults: 2,
        children: 0,
        rooms: 1,
        guest_name: "Asha Verma".to_string(),
        guest_email: "asha@example.com".to_string(),
        guest_phone: None,
        special_requests: None,
        idempotency_key: None,
    }
}

/// Client pointed at a port nothing listens on
fn unreachable_client() -> HttpClient {
    let config = ClientConfig::new("http://127.0.0.1:9").with_timeout(2);
    HttpClient::new(&config)
}

/// Serve one canned HTTP response on an ephemeral local port, returning the
/// base URL to point the client at
async fn one_shot_server(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 1024];
        let _ = socket.read(&mut request).await;

        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let _ = socket.write_all(response.as_bytes()).await;
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_client_creation() {
    let client = HttpClient::new(&ClientConfig::default());
    assert!(client.token().is_none());

    let client = HttpClient::new(&ClientConfig::default().with_token("tok-abc"));
    assert_eq!(client.token(), Some("tok-abc"));
}

#[tokio::test]
async fn test_create_booking_rejects_bad_payload_before_any_request() {
    let client = unreachable_client();

    let mut payload = make_booking_payload();
    payload.guest_name = String::new();

    // The unreachable base URL proves validation short-circuits: a network
    // attempt would surface as ClientError::Http instead.
    let err = client.create_booking(payload).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)), "got {err:?}");
}

#[tokio::test]
async fn test_create_booking_rejects_inverted_dates_locally() {
    let client = unreachable_client();

    let mut payload = make_booking_payload();
    payload.check_in = date(2025, 11, 13);
    payload.check_out = date(2025, 11, 10);

    let err = client.create_booking(payload).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)), "got {err:?}");
}

#[tokio::test]
async fn test_connection_failure_surfaces_as_http_error() {
    let client = unreachable_client();

    let err = client.fetch_hotels().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)), "got {err:?}");
}

#[tokio::test]
async fn test_valid_payload_reaches_the_network_layer() {
    let client = unreachable_client();

    // Validation passes, so the failure is the connection, not the payload.
    let err = client.create_booking(make_booking_payload()).await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)), "got {err:?}");
}

#[tokio::test]
async fn test_success_envelope_without_data_is_invalid_response() {
    let base_url = one_shot_server(r#"{"message":"Success"}"#).await;
    let client = HttpClient::new(&ClientConfig::new(base_url).with_timeout(2));

    let err = client.fetch_hotel(1).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)), "got {err:?}");
}

//! HTTP client for the booking API

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use shared::models::{Booking, BookingCreate, Hotel};

use crate::{
    ApiResponse, ClientConfig, ClientError, ClientResult, CurrentUserResponse, LoginRequest,
    LoginResponse, RegisterRequest,
};

/// HTTP client for making requests to the booking API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Join the base URL and a path without doubling the slash
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.endpoint(path);
        tracing::debug!(method = "GET", %url, "api request");
        let mut request = self.client.get(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.endpoint(path);
        tracing::debug!(method = "POST", %url, "api request");
        let mut request = self.client.post(&url).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.endpoint(path);
        tracing::debug!(method = "POST", %url, "api request");
        let mut request = self.client.post(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.endpoint(path);
        tracing::debug!(method = "DELETE", %url, "api request");
        let mut request = self.client.delete(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = error_text(response.text().await?);
            tracing::warn!(status = %status, message = %text, "api request failed");
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST | StatusCode::CONFLICT => {
                    Err(ClientError::Validation(text))
                }
                StatusCode::PAYMENT_REQUIRED => Err(ClientError::PaymentDeclined(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Auth API ==========

    /// Login with email and password, keeping the returned token
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .post::<ApiResponse<LoginResponse>, _>("/api/auth/login", &request)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing login data".to_string()))?;

        self.token = Some(response.token.clone());
        Ok(response)
    }

    /// Register a new account, keeping the returned token
    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> ClientResult<LoginResponse> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .post::<ApiResponse<LoginResponse>, _>("/api/auth/register", &request)
            .await?
            .data
            .ok_or_else(|| {
                ClientError::InvalidResponse("Missing registration data".to_string())
            })?;

        self.token = Some(response.token.clone());
        Ok(response)
    }

    /// Get current user information
    pub async fn me(&self) -> ClientResult<CurrentUserResponse> {
        self.get::<ApiResponse<CurrentUserResponse>>("/api/auth/me")
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing user data".to_string()))
    }

    /// Logout and drop the held token
    pub async fn logout(&mut self) -> ClientResult<()> {
        self.post_empty::<ApiResponse<()>>("/api/auth/logout")
            .await?;
        self.token = None;
        Ok(())
    }

    // ========== Catalog API ==========

    /// Fetch the full hotel catalog (the single startup fetch)
    pub async fn fetch_hotels(&self) -> ClientResult<Vec<Hotel>> {
        self.get::<ApiResponse<Vec<Hotel>>>("/api/hotels")
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing hotel catalog".to_string()))
    }

    /// Fetch a single hotel record
    pub async fn fetch_hotel(&self, id: i64) -> ClientResult<Hotel> {
        self.get::<ApiResponse<Hotel>>(&format!("/api/hotels/{id}"))
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing hotel data".to_string()))
    }

    // ========== Booking API ==========

    /// Create a booking
    ///
    /// Validates the payload locally before anything goes on the wire, and
    /// fills a UUID idempotency key when the caller did not set one so the
    /// API can deduplicate retried submissions.
    pub async fn create_booking(&self, mut payload: BookingCreate) -> ClientResult<Booking> {
        payload
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;

        if payload.idempotency_key.is_none() {
            payload.idempotency_key = Some(Uuid::new_v4().to_string());
        }

        self.post::<ApiResponse<Booking>, _>("/api/bookings", &payload)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing booking data".to_string()))
    }

    /// Fetch one booking
    pub async fn booking(&self, id: i64) -> ClientResult<Booking> {
        self.get::<ApiResponse<Booking>>(&format!("/api/bookings/{id}"))
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing booking data".to_string()))
    }

    /// List the current user's bookings
    pub async fn my_bookings(&self) -> ClientResult<Vec<Booking>> {
        self.get::<ApiResponse<Vec<Booking>>>("/api/bookings")
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing booking list".to_string()))
    }

    /// Cancel a booking, returning the updated record
    pub async fn cancel_booking(&self, id: i64) -> ClientResult<Booking> {
        self.post_empty::<ApiResponse<Booking>>(&format!("/api/bookings/{id}/cancel"))
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing booking data".to_string()))
    }
}

/// Pull the envelope message out of an error body, falling back to the raw
/// text when the body is not an envelope
fn error_text(body: String) -> String {
    serde_json::from_str::<ApiResponse<()>>(&body)
        .ok()
        .map(|envelope| envelope.message)
        .filter(|message| !message.is_empty())
        .unwrap_or(body)
}

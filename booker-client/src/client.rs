use crate::models::{AuthRequest, AuthResponse, Booking, BookingPatch};
use crate::response::ApiResponse;
use crate::Result;
use booker_core::config::{ApiSettings, CredentialSettings};
use booker_core::observability::{TracedClientExt, TracedRequest};
use reqwest::Client;
use secrecy::ExposeSecret;

const JSON: &str = "application/json";

pub struct BookerClient {
    client: Client,
    base_url: String,
}

impl BookerClient {
    pub fn new(settings: &ApiSettings) -> Self {
        Self {
            client: Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /ping`. The service answers 201 Created when healthy.
    pub async fn health_check(&self) -> Result<ApiResponse> {
        let url = self.url("/ping");
        self.execute(self.client.traced_get(&url)).await
    }

    /// Exchange credentials for a token.
    ///
    /// Returns `Ok(None)` when the service does not hand out a token, whatever
    /// the reason. Only transport and decoding failures are errors.
    pub async fn create_auth_token(&self, username: &str, password: &str) -> Result<Option<String>> {
        let url = self.url("/auth");
        let request = self
            .client
            .traced_post(&url)
            .header("Accept", JSON)
            .json(&AuthRequest { username, password });

        let response = self.execute(request).await?;
        if response.status_code() != 200 {
            tracing::warn!(status = response.status_code(), "Authentication rejected");
            return Ok(None);
        }

        let body: AuthResponse = response.json()?;
        if body.token.is_none() {
            tracing::warn!(
                reason = body.reason.as_deref().unwrap_or("unknown"),
                "Authentication returned no token"
            );
        }
        Ok(body.token)
    }

    /// [`Self::create_auth_token`] with configured credentials.
    pub async fn authenticate(&self, credentials: &CredentialSettings) -> Result<Option<String>> {
        self.create_auth_token(&credentials.username, credentials.password.expose_secret())
            .await
    }

    /// `GET /booking`: list of `{bookingid}` objects.
    pub async fn get_all_bookings(&self) -> Result<ApiResponse> {
        let url = self.url("/booking");
        self.execute(self.client.traced_get(&url).header("Accept", JSON))
            .await
    }

    /// `GET /booking/{id}`: 200 with the booking, 404 when absent.
    pub async fn get_booking_by_id(&self, booking_id: i64) -> Result<ApiResponse> {
        let url = self.booking_url(booking_id);
        self.execute(self.client.traced_get(&url).header("Accept", JSON))
            .await
    }

    /// `POST /booking`: 200 with `{bookingid, booking}`.
    pub async fn create_booking(&self, booking: &Booking) -> Result<ApiResponse> {
        let url = self.url("/booking");
        let request = self
            .client
            .traced_post(&url)
            .header("Accept", JSON)
            .json(booking);

        self.execute(request).await
    }

    /// `PUT /booking/{id}`: full replacement. 403 without a valid token.
    pub async fn update_booking(
        &self,
        booking_id: i64,
        token: &str,
        booking: &Booking,
    ) -> Result<ApiResponse> {
        let url = self.booking_url(booking_id);
        let request = self
            .client
            .traced_put(&url)
            .header("Accept", JSON)
            .header("Cookie", &token_cookie(token))
            .json(booking);

        self.execute(request).await
    }

    /// `PATCH /booking/{id}`: only the fields set in `patch` change.
    pub async fn partial_update_booking(
        &self,
        booking_id: i64,
        token: &str,
        patch: &BookingPatch,
    ) -> Result<ApiResponse> {
        let url = self.booking_url(booking_id);
        let request = self
            .client
            .traced_patch(&url)
            .header("Accept", JSON)
            .header("Cookie", &token_cookie(token))
            .json(patch);

        self.execute(request).await
    }

    /// `DELETE /booking/{id}`. The service answers 201 on success.
    pub async fn delete_booking(&self, booking_id: i64, token: &str) -> Result<ApiResponse> {
        let url = self.booking_url(booking_id);
        let request = self
            .client
            .traced_delete(&url)
            .header("Cookie", &token_cookie(token));

        self.execute(request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn booking_url(&self, booking_id: i64) -> String {
        format!("{}/booking/{}", self.base_url, booking_id)
    }

    async fn execute(&self, request: TracedRequest) -> Result<ApiResponse> {
        let (response, elapsed) = request.send_timed().await?;
        ApiResponse::read(response, elapsed).await
    }
}

fn token_cookie(token: &str) -> String {
    format!("token={}", token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = BookerClient::new(&ApiSettings::with_base_url("http://localhost:3001/"));

        assert_eq!(client.base_url(), "http://localhost:3001");
        assert_eq!(client.booking_url(5), "http://localhost:3001/booking/5");
    }

    #[test]
    fn token_travels_as_cookie() {
        assert_eq!(token_cookie("abc123"), "token=abc123");
    }
}

//! Fixtures for the live booking API contract tests.
//!
//! Provides the shared test session: configuration loaded once, an auth token
//! obtained lazily and reused for the rest of the process, and a factory for
//! freshly created bookings.
//!
//! ## Usage
//!
//! ```bash
//! # Run the live suite against the public service
//! cargo test -p booking-tests -- --ignored
//!
//! # Point it at another deployment
//! APP_API__BASE_URL=http://localhost:3001 cargo test -p booking-tests -- --ignored
//! ```

use anyhow::{anyhow, bail, Context, Result};
use booker_client::{Booking, BookerClient, CreatedBooking, Settings};
use chrono::NaiveDate;
use once_cell::sync::OnceCell;

static SESSION: OnceCell<Session> = OnceCell::new();

/// The process-wide session, initialised on first use.
pub fn session() -> Result<&'static Session> {
    SESSION.get_or_try_init(|| {
        let settings = Settings::load().context("Failed to load booking API settings")?;
        booker_core::observability::init_tracing(&settings.log_level);
        tracing::info!(base_url = %settings.api.base_url, "Booking API test session started");
        Ok(Session::new(settings))
    })
}

/// Shared state for one test run.
///
/// The auth token is the only memoized value. Its outcome, success or failure,
/// is fixed by the first caller and never refreshed.
pub struct Session {
    settings: Settings,
    auth_token: tokio::sync::OnceCell<std::result::Result<String, String>>,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            auth_token: tokio::sync::OnceCell::new(),
        }
    }

    /// A fresh client. Connection pools belong to the calling test's runtime,
    /// so clients are not shared between tests.
    pub fn client(&self) -> BookerClient {
        BookerClient::new(&self.settings.api)
    }

    /// The session auth token, created on first call with the configured credentials.
    pub async fn auth_token(&self) -> Result<&str> {
        let outcome = self
            .auth_token
            .get_or_init(|| async {
                let result = self
                    .client()
                    .authenticate(&self.settings.credentials)
                    .await;

                match result {
                    Ok(Some(token)) if !token.is_empty() => {
                        tracing::debug!("Auth token created for session");
                        Ok(token)
                    }
                    Ok(Some(_)) => Err("Failed to create auth token: empty token".to_string()),
                    Ok(None) => {
                        Err("Failed to create auth token: credentials rejected".to_string())
                    }
                    Err(e) => Err(format!("Failed to create auth token: {}", e)),
                }
            })
            .await;

        match outcome {
            Ok(token) => Ok(token.as_str()),
            Err(message) => Err(anyhow!("{}", message)),
        }
    }

    /// Create a booking with the default payload. The booking is not cleaned up.
    pub async fn new_booking(&self, client: &BookerClient) -> Result<BookingFixture> {
        let response = client.create_booking(&default_booking()).await?;
        if response.status_code() != 200 {
            bail!(
                "Failed to create booking: {} {}",
                response.status_code(),
                response.text()
            );
        }

        let created: CreatedBooking = response.json()?;
        tracing::debug!(booking_id = created.bookingid, "Fixture booking created");

        Ok(BookingFixture {
            id: created.bookingid,
            data: created.booking,
        })
    }
}

/// A booking created for a single test.
#[derive(Debug, Clone)]
pub struct BookingFixture {
    pub id: i64,
    pub data: Booking,
}

/// Parse a `YYYY-MM-DD` literal; panics on malformed input.
pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .unwrap_or_else(|e| panic!("invalid date literal {:?}: {}", value, e))
}

/// Payload used by the `new_booking` fixture.
pub fn default_booking() -> Booking {
    Booking::new("Test", "User", 150, true, date("2025-11-01"), date("2025-11-05"))
        .with_additional_needs("Breakfast")
}

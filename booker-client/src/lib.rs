//! Async client for the restful-booker booking API.
//!
//! Each operation performs exactly one HTTP exchange and hands the captured
//! [`ApiResponse`] back unmodified, so callers assert on status codes and
//! payloads themselves. Nothing is cached and nothing is retried.
pub mod client;
pub mod models;
pub mod response;

pub use booker_core::config::{ApiSettings, CredentialSettings, Settings};
pub use booker_core::ClientError;
pub use client::BookerClient;
pub use models::{
    AuthRequest, AuthResponse, Booking, BookingDates, BookingId, BookingPatch, CreatedBooking,
};
pub use response::ApiResponse;

pub type Result<T> = std::result::Result<T, ClientError>;

//! booker-core: Shared infrastructure for the booking API client and suite.
pub mod config;
pub mod error;
pub mod observability;

pub use error::ClientError;

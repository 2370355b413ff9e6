pub mod auth;
pub mod booking;

pub use auth::{AuthRequest, AuthResponse};
pub use booking::{Booking, BookingDates, BookingId, BookingPatch, CreatedBooking};

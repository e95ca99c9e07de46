pub mod booking_log;
pub mod error;
pub mod models;
pub mod workflow;

// Re-export key types for convenience
pub use booking_log::BookingLog;
pub use error::BookingError;
pub use models::booking::Booking;
pub use models::customer::Customer;
pub use models::hotel::{Hotel, RoomFilter};
pub use models::room::Room;
pub use workflow::{create_booking, resolve_discount};

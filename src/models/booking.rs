use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::customer::Customer;
use crate::models::room::Room;

/// Refund fraction applied when no explicit rate is given.
pub const DEFAULT_CANCEL_PERCENT: f64 = 0.8;

/// A confirmed reservation of one room over an inclusive date range.
///
/// Bookings reference their room and guest by id and name, are never
/// mutated after construction, and are only ever created through
/// [`crate::workflow::create_booking`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub room_id: i64,
    pub guest_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub discount: f64,
    pub total_days: i64,
    pub total_price: f64,
}

impl Booking {
    pub(crate) fn new(
        customer: &Customer,
        room: &Room,
        start_date: NaiveDate,
        end_date: NaiveDate,
        discount: f64,
    ) -> Self {
        // Inclusive day count: a same-day stay counts as one day. Inverted
        // ranges are accepted as-is and produce non-positive totals.
        let total_days = (end_date - start_date).num_days() + 1;
        let total_price = room.price * total_days as f64 * (1.0 - discount);
        Self {
            room_id: room.id,
            guest_name: customer.name.clone(),
            start_date,
            end_date,
            discount,
            total_days,
            total_price,
        }
    }

    /// Refund owed for cancelling this booking.
    ///
    /// Purely a price calculation: the booking stays in the hotel's list and
    /// the room's booked dates are not released.
    pub fn cancel_booking(&self, cancel_percent: f64) -> f64 {
        self.total_price * cancel_percent
    }
}

use chrono::NaiveDate;

use crate::booking_log::BookingLog;
use crate::error::BookingError;
use crate::models::booking::Booking;
use crate::models::customer::Customer;
use crate::models::room::Room;

/// Discount fraction granted to VIP customers.
pub const VIP_DISCOUNT: f64 = 0.2;

/// The discount a customer is entitled to. VIP status is the only input;
/// callers cannot supply their own rate.
pub fn resolve_discount(customer: &Customer) -> f64 {
    if customer.is_vip {
        VIP_DISCOUNT
    } else {
        0.0
    }
}

/// The single entry point for creating a booking.
///
/// Checks availability, resolves the discount, logs the booking, and marks
/// the room's dates, in that order. An unavailable room yields `Ok(None)`;
/// a failed log append aborts before the room is touched, so a partial
/// booking is never observable. The caller is responsible for appending the
/// returned booking to its hotel's list.
pub fn create_booking(
    customer: &Customer,
    room: &mut Room,
    start_date: NaiveDate,
    end_date: NaiveDate,
    log: &BookingLog,
) -> Result<Option<Booking>, BookingError> {
    if !room.is_available(start_date, end_date) {
        log::warn!(
            "Room {} is not available from {} to {}",
            room.id,
            start_date,
            end_date
        );
        return Ok(None);
    }

    let discount = resolve_discount(customer);
    let booking = Booking::new(customer, room, start_date, end_date, discount);
    log.append(&booking)?;
    room.mark_booked(start_date, booking.total_days);

    log::info!(
        "{} booked Room {} from {} to {}, total {}",
        booking.guest_name,
        booking.room_id,
        start_date,
        end_date,
        booking.total_price
    );
    Ok(Some(booking))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn temp_log() -> (TempDir, BookingLog) {
        let dir = tempfile::tempdir().unwrap();
        let log = BookingLog::new(dir.path().join("booking_log.txt"));
        (dir, log)
    }

    #[test]
    fn vip_customers_get_twenty_percent() {
        assert_eq!(resolve_discount(&Customer::new("Ali", true)), 0.2);
        assert_eq!(resolve_discount(&Customer::new("Vali", false)), 0.0);
    }

    #[test]
    fn booking_applies_vip_discount_and_marks_dates() {
        let (_dir, log) = temp_log();
        let ali = Customer::new("Ali", true);
        let mut room = Room::new(101, "Standard", 100.0, &["TV", "AC"], "Tashkent");

        let booking = create_booking(&ali, &mut room, date(2025, 5, 10), date(2025, 5, 12), &log)
            .unwrap()
            .expect("room was free");

        assert_eq!(booking.discount, 0.2);
        assert_eq!(booking.total_days, 3);
        assert_eq!(booking.total_price, 240.0);
        assert_eq!(
            room.booked_dates,
            vec![date(2025, 5, 10), date(2025, 5, 11), date(2025, 5, 12)]
        );
        assert!(log
            .read_all()
            .unwrap()
            .contains("Ali booked Room 101 from 2025-05-10 to 2025-05-12"));
    }

    #[test]
    fn non_vip_pays_full_price() {
        let (_dir, log) = temp_log();
        let vali = Customer::new("Vali", false);
        let mut room = Room::new(102, "Deluxe", 200.0, &["TV", "AC", "Mini Bar"], "Tashkent");

        let booking = create_booking(&vali, &mut room, date(2025, 5, 11), date(2025, 5, 12), &log)
            .unwrap()
            .expect("room was free");

        assert_eq!(booking.discount, 0.0);
        assert_eq!(booking.total_price, 400.0);
    }

    #[test]
    fn overlapping_booking_is_refused_without_side_effects() {
        let (_dir, log) = temp_log();
        let ali = Customer::new("Ali", true);
        let vali = Customer::new("Vali", false);
        let mut room = Room::new(101, "Standard", 100.0, &["TV", "AC"], "Tashkent");

        create_booking(&ali, &mut room, date(2025, 5, 10), date(2025, 5, 12), &log)
            .unwrap()
            .expect("room was free");

        let refused =
            create_booking(&vali, &mut room, date(2025, 5, 12), date(2025, 5, 14), &log).unwrap();

        assert!(refused.is_none());
        assert_eq!(room.booked_dates.len(), 3);
        assert_eq!(log.read_all().unwrap().lines().count(), 1);
    }
}

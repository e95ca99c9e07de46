use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::BookingError;
use crate::models::booking::Booking;

pub const DEFAULT_LOG_PATH: &str = "booking_log.txt";

/// Append-only text log of confirmed bookings, one line per booking.
///
/// The file is opened, appended, and closed per call; no handle is held
/// between bookings.
pub struct BookingLog {
    path: PathBuf,
}

impl BookingLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Takes the log location from `BOOKING_LOG_PATH`, falling back to
    /// `booking_log.txt` in the working directory.
    pub fn from_env() -> Self {
        let path = env::var("BOOKING_LOG_PATH").unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string());
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, booking: &Booking) -> Result<(), BookingError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(BookingError::LogWrite)?;

        writeln!(
            file,
            "{}: {} booked Room {} from {} to {}, Total: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
            booking.guest_name,
            booking.room_id,
            booking.start_date,
            booking.end_date,
            booking.total_price,
        )
        .map_err(BookingError::LogWrite)
    }

    /// The whole log as raw text. Errors if no booking was ever logged.
    pub fn read_all(&self) -> Result<String, BookingError> {
        fs::read_to_string(&self.path).map_err(BookingError::LogRead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::customer::Customer;
    use crate::models::room::Room;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_booking() -> Booking {
        let ali = Customer::new("Ali", true);
        let room = Room::new(101, "Standard", 100.0, &["TV", "AC"], "Tashkent");
        Booking::new(&ali, &room, date(2025, 5, 10), date(2025, 5, 12), 0.2)
    }

    #[test]
    fn append_writes_one_line_per_booking() {
        let dir = tempfile::tempdir().unwrap();
        let log = BookingLog::new(dir.path().join("booking_log.txt"));

        log.append(&sample_booking()).unwrap();
        log.append(&sample_booking()).unwrap();

        let text = log.read_all().unwrap();
        assert_eq!(text.lines().count(), 2);
        for line in text.lines() {
            assert!(line.contains("Ali booked Room 101 from 2025-05-10 to 2025-05-12"));
            assert!(line.contains("Total: 240"));
        }
    }

    #[test]
    fn read_all_fails_when_nothing_was_ever_logged() {
        let dir = tempfile::tempdir().unwrap();
        let log = BookingLog::new(dir.path().join("booking_log.txt"));

        assert!(matches!(log.read_all(), Err(BookingError::LogRead(_))));
    }
}

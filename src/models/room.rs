use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub room_type: String,
    pub price: f64,
    pub amenities: Vec<String>,
    pub location: String,
    pub booked_dates: Vec<NaiveDate>,
}

impl Room {
    pub fn new(id: i64, room_type: &str, price: f64, amenities: &[&str], location: &str) -> Self {
        Self {
            id,
            room_type: room_type.to_string(),
            price,
            amenities: amenities.iter().map(|a| a.to_string()).collect(),
            location: location.to_string(),
            booked_dates: Vec::new(),
        }
    }

    /// A room is available when none of its booked dates fall inside the
    /// requested range, both endpoints inclusive.
    pub fn is_available(&self, start_date: NaiveDate, end_date: NaiveDate) -> bool {
        !self
            .booked_dates
            .iter()
            .any(|booked| (start_date..=end_date).contains(booked))
    }

    // Appends every date of the booked range. Duplicates are kept; entries
    // are never removed, not even on cancellation.
    pub(crate) fn mark_booked(&mut self, start_date: NaiveDate, total_days: i64) {
        for i in 0..total_days {
            self.booked_dates.push(start_date + Duration::days(i));
        }
    }
}

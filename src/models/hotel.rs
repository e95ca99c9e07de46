use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::booking::Booking;
use crate::models::room::Room;

/// Optional search criteria for [`Hotel::filter_rooms`]. Absent fields do
/// not constrain the result.
#[derive(Debug, Default, Deserialize)]
pub struct RoomFilter {
    pub max_price: Option<f64>,
    pub amenities: Option<Vec<String>>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    pub rooms: Vec<Room>,
    pub bookings: Vec<Booking>,
}

impl Hotel {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rooms: Vec::new(),
            bookings: Vec::new(),
        }
    }

    // No duplicate-id check; the inventory is whatever was added.
    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    pub fn room_mut(&mut self, id: i64) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id == id)
    }

    /// Applies the given criteria as successive AND filters, preserving the
    /// inventory order. A room passes the amenity filter when it carries
    /// every requested amenity.
    pub fn filter_rooms(&self, filter: &RoomFilter) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|r| filter.max_price.map_or(true, |max| r.price <= max))
            .filter(|r| {
                filter
                    .amenities
                    .as_ref()
                    .map_or(true, |wanted| wanted.iter().all(|a| r.amenities.contains(a)))
            })
            .filter(|r| {
                filter
                    .location
                    .as_ref()
                    .map_or(true, |loc| r.location == *loc)
            })
            .collect()
    }

    /// Total booked price per start date, keyed by `"YYYY-MM-DD"`. Dates
    /// with no bookings are absent from the report.
    pub fn revenue_report(&self) -> BTreeMap<String, f64> {
        let mut report = BTreeMap::new();
        for booking in &self.bookings {
            let key = booking.start_date.format("%Y-%m-%d").to_string();
            *report.entry(key).or_insert(0.0) += booking.total_price;
        }
        report
    }
}

use chrono::NaiveDate;
use dotenv::dotenv;
use env_logger::Env;

use hotel_booking::models::booking::DEFAULT_CANCEL_PERCENT;
use hotel_booking::{create_booking, BookingLog, Customer, Hotel, Room, RoomFilter};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger and environment
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let booking_log = BookingLog::from_env();

    let mut hotel = Hotel::new("Hilton");
    hotel.add_room(Room::new(101, "Standard", 100.0, &["TV", "AC"], "Tashkent"));
    hotel.add_room(Room::new(102, "Deluxe", 200.0, &["TV", "AC", "Mini Bar"], "Tashkent"));

    let ali = Customer::new("Ali", true);
    let vali = Customer::new("Vali", false);

    let room = hotel.room_mut(101).expect("room 101 exists");
    if let Some(booking) = create_booking(&ali, room, date(2025, 5, 10), date(2025, 5, 12), &booking_log)? {
        hotel.bookings.push(booking);
    }

    let room = hotel.room_mut(102).expect("room 102 exists");
    if let Some(booking) = create_booking(&vali, room, date(2025, 5, 11), date(2025, 5, 12), &booking_log)? {
        hotel.bookings.push(booking);
    }

    if let Some(first) = hotel.bookings.first() {
        println!("Refund on cancel: {}", first.cancel_booking(DEFAULT_CANCEL_PERCENT));
    }

    println!(
        "Revenue Report: {}",
        serde_json::to_string_pretty(&hotel.revenue_report())?
    );

    let filter = RoomFilter {
        max_price: Some(150.0),
        amenities: Some(vec!["AC".to_string()]),
        ..Default::default()
    };
    println!(
        "Filtered Rooms: {}",
        serde_json::to_string_pretty(&hotel.filter_rooms(&filter))?
    );

    print!("{}", booking_log.read_all()?);
    Ok(())
}

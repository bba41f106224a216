//! Tests for the booking flow through the front desk
//!
//! These tests confirm, cancel and export bookings the way the command line session
//! does, and check that occupancy derived from the ledger feeds every later request.

use hotel_room_allocator::booking::{booking_to_json, export_file_name, write_csv};
use hotel_room_allocator::*;
use std::fs;
use tempfile::tempdir;

fn guest(name: &str) -> GuestInfo {
    GuestInfo::new(name, "555-0100").with_email("guest@example.com").with_nights(3)
}

#[test]
fn test_floor_fills_before_moving_up() {
    let mut desk = FrontDesk::new(build_inventory());

    let first = desk.book(guest("Ada"), 5).unwrap().room_numbers();
    let second = desk.book(guest("Grace"), 5).unwrap().room_numbers();
    let third = desk.book(guest("Linus"), 2).unwrap().room_numbers();

    assert_eq!(first, vec![101, 102, 103, 104, 105]);
    assert_eq!(second, vec![106, 107, 108, 109, 110]);
    assert_eq!(third, vec![201, 202]);

    let stats = desk.statistics();
    assert_eq!(stats.booked_rooms, 12);
    assert_eq!(stats.available_by_floor[&1], 0);
    assert_eq!(stats.available_by_floor[&2], 8);
}

#[test]
fn test_cancelled_rooms_are_offered_again() {
    let mut desk = FrontDesk::new(build_inventory());

    let booking_id = desk.book(guest("Ada"), 3).unwrap().id;
    desk.book(guest("Grace"), 3).unwrap();

    let cancelled = desk.cancel(booking_id).unwrap();
    assert_eq!(cancelled.room_numbers(), vec![101, 102, 103]);

    let rebooked = desk.book(guest("Linus"), 3).unwrap();
    assert_eq!(rebooked.room_numbers(), vec![101, 102, 103]);

    let err = desk.cancel(booking_id).unwrap_err();
    assert!(matches!(err, HotelError::BookingNotFound(id) if id == booking_id));
    assert_eq!(err.category(), "Booking");
}

#[test]
fn test_booking_records_guest_and_cost() {
    let mut desk = FrontDesk::new(build_inventory());
    let booking = desk.book(guest("Ada Lovelace"), 4).unwrap();

    assert_eq!(booking.guest.name, "Ada Lovelace");
    assert_eq!(booking.guest.nights, 3);
    assert_eq!(booking.cost, 3);
    assert_eq!(booking.strategy, AllocationStrategy::SameFloor);
    assert!(booking.contains_room(RoomId::from_number(104)));
    assert!(!booking.contains_room(RoomId::from_number(105)));
}

#[test]
fn test_failed_request_leaves_state_untouched() {
    let mut desk = FrontDesk::new(build_inventory());
    desk.book(guest("Ada"), 2).unwrap();

    let before = desk.occupied_rooms();
    assert!(desk.book(GuestInfo::new("Grace", "  "), 2).is_err());
    assert!(desk.book(guest("Grace"), 9).is_err());

    assert_eq!(desk.occupied_rooms(), before);
    assert_eq!(desk.statistics().requests.failed, 2);
    assert_eq!(desk.statistics().requests.confirmed, 1);
}

#[test]
fn test_seeded_randomization_is_reproducible() {
    let mut first = FrontDesk::new(build_inventory());
    let mut second = FrontDesk::new(build_inventory());

    first.randomize_occupancy(&mut OccupancyGenerator::with_seed(0.3, 42));
    second.randomize_occupancy(&mut OccupancyGenerator::with_seed(0.3, 42));

    assert_eq!(first.blocked_rooms(), second.blocked_rooms());
    assert_eq!(first.quote(3).unwrap(), second.quote(3).unwrap());

    let quote = first.quote(3).unwrap();
    assert!(quote.room_ids().iter().all(|id| !first.blocked_rooms().contains(id)));
}

#[test]
fn test_export_writes_guest_csv() {
    let mut desk = FrontDesk::new(build_inventory());
    let booking = desk.book(guest("Ada Lovelace"), 2).unwrap().clone();

    let dir = tempdir().unwrap();
    let path = write_csv(&booking, dir.path().join("exports")).unwrap();

    assert_eq!(path.file_name().unwrap(), export_file_name("Ada Lovelace").as_str());
    assert_eq!(export_file_name("Ada Lovelace"), "booking_Ada_Lovelace.csv");

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "Guest Name,Phone,Email,Duration (Days),Rooms,Total Travel Time (mins)"
    );
    assert_eq!(
        lines[1],
        "\"Ada Lovelace\",\"555-0100\",\"guest@example.com\",\"3\",\"101; 102\",\"1\""
    );
}

#[test]
fn test_json_export_round_trips_rooms() {
    let mut desk = FrontDesk::new(build_inventory());
    let booking = desk.book(guest("Ada"), 2).unwrap().clone();

    let json = booking_to_json(&booking).unwrap();
    let parsed: Booking = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.id, booking.id);
    assert_eq!(parsed.room_numbers(), vec![101, 102]);
    assert!(json.contains("ROOM_101"));
}

// Integration tests test your crate's public API. They only have access to items
// in your crate that are marked pub. See the Cargo Targets page of the Cargo Book
// for more information.
//
//   https://doc.rust-lang.org/cargo/reference/cargo-targets.html#integration-tests
//

use hotel_room_allocator::*;
use std::collections::HashSet;

mod booking_flow_tests;
mod travel_cost_property_tests;

#[test]
fn test_core_id_types() {
    let room_id = RoomId::from_floor_position(10, 7);
    assert_eq!(room_id.number(), 1007);
    assert_eq!(room_id.to_string(), "ROOM_1007");
    assert_eq!("ROOM_1007".parse::<RoomId>().unwrap(), room_id);
    assert_eq!("305".parse::<RoomId>().unwrap(), RoomId::from_number(305));

    let booking_id = BookingId::new();
    assert_ne!(booking_id, BookingId::new());
    assert!(booking_id.to_string().starts_with("BKG_"));
}

#[test]
fn test_enum_types() {
    assert_eq!(AllocationStrategy::SameFloor.to_string(), "Same Floor");
    assert_eq!(AllocationStrategy::CrossFloor.to_string(), "Cross Floor");

    for format in [OutputFormat::Json, OutputFormat::Csv, OutputFormat::Text] {
        assert!(!format.to_string().is_empty());
    }
}

#[test]
fn test_id_json_output_has_prefixes() {
    let room_json = serde_json::to_string(&RoomId::from_number(101)).unwrap();
    let booking_json = serde_json::to_string(&BookingId::new()).unwrap();

    assert_eq!(room_json, "\"ROOM_101\"");
    assert!(booking_json.contains("BKG_"));

    let booking_id: BookingId = serde_json::from_str(&booking_json).unwrap();
    assert_eq!(serde_json::to_string(&booking_id).unwrap(), booking_json);
}

#[test]
fn test_allocation_serialization() {
    let allocation = allocate(2, &build_inventory(), &HashSet::new()).unwrap();
    let json = serde_json::to_string(&allocation).unwrap();
    let parsed: Allocation = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, allocation);
}

#[test]
fn test_error_messages() {
    let err = AllocationError::Infeasible { requested: 4, available: 1 };
    assert_eq!(err.to_string(), "Cannot allocate 4 rooms: only 1 available");

    let err: HotelError = err.into();
    assert!(err.is_infeasible());
    assert!(err.is_recoverable());
}

//! Rooms and the travel-time metric
//!
//! A [`Room`] is pure topology: its floor and its distance from the lift. Whether a
//! room is taken is never stored here; callers pass occupancy separately.

use crate::hotel::layout::LIFT_TIME_PER_FLOOR;
use crate::types::RoomId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A hotel room at a fixed floor and position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    /// Identifier derived from the room number
    pub id: RoomId,
    /// Room number shown to guests (`floor * 100 + position`)
    pub number: u32,
    /// Floor index, starting at 1
    pub floor: u8,
    /// Distance from the lift along the corridor, starting at 1
    pub position: u8,
}

impl Room {
    /// Create the room at a floor and position
    pub fn new(floor: u8, position: u8) -> Self {
        let id = RoomId::from_floor_position(floor, position);
        Self { id, number: id.number(), floor, position }
    }

    /// Sort key giving the linear floor-then-position order of the hotel
    pub fn sort_key(&self) -> (u8, u8) {
        (self.floor, self.position)
    }

    /// Check whether two rooms share a floor
    pub fn is_same_floor(&self, other: &Room) -> bool {
        self.floor == other.floor
    }

    /// Travel time from this room to another, see [`travel_time`]
    pub fn travel_time_to(&self, other: &Room) -> u32 {
        travel_time(self, other)
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}

/// Travel time between two rooms
///
/// On one floor this is the corridor distance between the two positions. Across
/// floors the guest walks to the lift (position 0), rides it at
/// [`LIFT_TIME_PER_FLOOR`] per floor, and walks out to the destination.
pub fn travel_time(from: &Room, to: &Room) -> u32 {
    let from_pos = u32::from(from.position);
    let to_pos = u32::from(to.position);

    if from.floor == to.floor {
        return from_pos.abs_diff(to_pos);
    }

    let floors = u32::from(from.floor.abs_diff(to.floor));
    from_pos + LIFT_TIME_PER_FLOOR * floors + to_pos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_creation() {
        let room = Room::new(4, 7);

        assert_eq!(room.number, 407);
        assert_eq!(room.id, RoomId::from_number(407));
        assert_eq!(room.floor, 4);
        assert_eq!(room.position, 7);
        assert_eq!(room.to_string(), "407");
    }

    #[test]
    fn test_same_floor_travel_time() {
        let a = Room::new(3, 2);
        let b = Room::new(3, 9);

        assert!(a.is_same_floor(&b));
        assert_eq!(travel_time(&a, &b), 7);
        assert_eq!(travel_time(&b, &a), 7);
    }

    #[test]
    fn test_cross_floor_travel_time() {
        let a = Room::new(1, 2);
        let b = Room::new(4, 5);

        // 2 to the lift, 3 floors at 2 each, 5 from the lift
        assert_eq!(travel_time(&a, &b), 13);
        assert_eq!(b.travel_time_to(&a), 13);
    }

    #[test]
    fn test_travel_time_zero_only_for_same_room() {
        let a = Room::new(2, 1);
        assert_eq!(travel_time(&a, &a), 0);

        // Adjacent floors, both next to the lift
        let b = Room::new(3, 1);
        assert_eq!(travel_time(&a, &b), 4);
    }

    #[test]
    fn test_sort_key_orders_floor_first() {
        let mut rooms = [Room::new(2, 1), Room::new(1, 10), Room::new(1, 3)];
        rooms.sort_by_key(Room::sort_key);

        let numbers: Vec<u32> = rooms.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![103, 110, 201]);
    }

    #[test]
    fn test_room_serialization() {
        let room = Room::new(10, 7);
        let json = serde_json::to_string(&room).unwrap();
        assert!(json.contains("\"ROOM_1007\""));

        let back: Room = serde_json::from_str(&json).unwrap();
        assert_eq!(back, room);
    }
}

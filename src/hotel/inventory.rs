//! Room inventory and lookup
//!
//! The [`Inventory`] holds every room in the hotel in floor-then-position order with
//! an index for lookups by room ID. It is built once and never changes; occupancy is
//! applied on the way out through [`Inventory::available`].

use crate::hotel::layout::{self, FLOOR_COUNT};
use crate::hotel::room::Room;
use crate::types::RoomId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// The fixed set of rooms in the hotel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    /// All rooms, in inventory order
    rooms: Vec<Room>,
    /// Quick lookup map from room ID to index in `rooms`
    #[serde(skip)]
    room_index: HashMap<RoomId, usize>,
}

/// Build the standard hotel inventory
///
/// Floors 1 to 9 hold rooms X01 to X10; the top floor holds 1001 to 1007.
pub fn build_inventory() -> Inventory {
    let rooms: Vec<Room> = (1..=FLOOR_COUNT)
        .flat_map(|floor| {
            (1..=layout::rooms_on_floor(floor)).map(move |position| Room::new(floor, position))
        })
        .collect();

    debug!("Built inventory with {} rooms across {} floors", rooms.len(), FLOOR_COUNT);
    Inventory::index(rooms)
}

impl Inventory {
    /// Build the standard hotel inventory
    pub fn new() -> Self {
        build_inventory()
    }

    /// Create an inventory from an explicit room list
    ///
    /// Rooms keep the order they are given in. Fails when two rooms share an ID or
    /// a floor/position pair, or when a position is zero.
    pub fn from_rooms(rooms: Vec<Room>) -> Result<Self, String> {
        let inventory = Self::index(rooms);
        inventory.validate()?;
        Ok(inventory)
    }

    fn index(rooms: Vec<Room>) -> Self {
        let room_index = rooms.iter().enumerate().map(|(idx, room)| (room.id, idx)).collect();
        Self { rooms, room_index }
    }

    /// Rebuild the lookup index (needed after deserialization)
    pub fn rebuild_index(&mut self) {
        self.room_index =
            self.rooms.iter().enumerate().map(|(idx, room)| (room.id, idx)).collect();
    }

    /// Validate identity and placement invariants
    pub fn validate(&self) -> Result<(), String> {
        let mut ids = HashSet::with_capacity(self.rooms.len());
        let mut slots = HashSet::with_capacity(self.rooms.len());

        for room in &self.rooms {
            if room.position == 0 {
                return Err(format!("Room {} has position 0, which is the lift", room.number));
            }
            if !ids.insert(room.id) {
                return Err(format!("Duplicate room id {}", room.id));
            }
            if !slots.insert(room.sort_key()) {
                return Err(format!(
                    "Duplicate placement floor {} position {}",
                    room.floor, room.position
                ));
            }
        }

        Ok(())
    }

    /// Get all rooms in inventory order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Get a room by ID
    pub fn get_room(&self, room_id: RoomId) -> Option<&Room> {
        self.room_index.get(&room_id).and_then(|&idx| self.rooms.get(idx))
    }

    /// Check if a room exists in the hotel
    pub fn contains_room(&self, room_id: RoomId) -> bool {
        self.room_index.contains_key(&room_id)
    }

    /// Get the total number of rooms
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Check whether the inventory holds no rooms
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Get the distinct floors, ascending
    pub fn floors(&self) -> Vec<u8> {
        let mut floors: Vec<u8> = self.rooms.iter().map(|r| r.floor).collect();
        floors.sort_unstable();
        floors.dedup();
        floors
    }

    /// Get all rooms on a floor
    pub fn rooms_on_floor(&self, floor: u8) -> Vec<&Room> {
        self.rooms.iter().filter(|r| r.floor == floor).collect()
    }

    /// Get the rooms not present in the occupied set, in inventory order
    pub fn available(&self, occupied: &HashSet<RoomId>) -> Vec<Room> {
        self.rooms.iter().filter(|r| !occupied.contains(&r.id)).copied().collect()
    }

    /// Count the rooms not present in the occupied set
    pub fn available_count(&self, occupied: &HashSet<RoomId>) -> usize {
        self.rooms.iter().filter(|r| !occupied.contains(&r.id)).count()
    }

    /// Count available rooms per floor
    pub fn available_by_floor(&self, occupied: &HashSet<RoomId>) -> BTreeMap<u8, usize> {
        let mut counts = BTreeMap::new();
        for room in &self.rooms {
            let entry = counts.entry(room.floor).or_insert(0);
            if !occupied.contains(&room.id) {
                *entry += 1;
            }
        }
        counts
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Room;
    type IntoIter = std::slice::Iter<'a, Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.iter()
    }
}

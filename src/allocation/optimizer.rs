//! Two-phase room group search
//!
//! Phase one looks for a contiguous window of free rooms on a single floor. Phase
//! two, reached only when no floor has enough free rooms, grows a group around every
//! free room from its nearest neighbours and keeps the cheapest. A same-floor result
//! is returned as soon as one exists, even when a cross-floor group would cost less.

use crate::allocation::cost::travel_cost;
use crate::allocation::error::{AllocationError, AllocationResult};
use crate::hotel::{travel_time, Inventory, Room};
use crate::types::{AllocationStrategy, RoomId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument, trace};

/// A group of free rooms chosen for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Rooms in the order the search produced them
    pub rooms: Vec<Room>,
    /// Travel cost of the group
    pub cost: u32,
    /// Search phase that produced the group
    pub strategy: AllocationStrategy,
}

impl Allocation {
    /// Number of rooms in the group
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the group is empty (never true for a successful allocation)
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// IDs of the rooms in the group
    pub fn room_ids(&self) -> Vec<RoomId> {
        self.rooms.iter().map(|r| r.id).collect()
    }

    /// Room numbers in the group, in search order
    pub fn room_numbers(&self) -> Vec<u32> {
        self.rooms.iter().map(|r| r.number).collect()
    }

    /// Distinct floors touched by the group, ascending
    pub fn floors(&self) -> Vec<u8> {
        let mut floors: Vec<u8> = self.rooms.iter().map(|r| r.floor).collect();
        floors.sort_unstable();
        floors.dedup();
        floors
    }

    /// Whether all rooms share one floor
    pub fn is_single_floor(&self) -> bool {
        self.floors().len() <= 1
    }
}

/// Find the cheapest group of `n` rooms among the available ones
///
/// `available` must already exclude occupied rooms; its order decides ties. Rooms
/// repeating a floor and position are considered once. Fails when `n` is zero or fewer than `n` distinct rooms
/// are available.
#[instrument(level = "debug", skip(available), fields(available = available.len()))]
pub fn find_allocation(n: usize, available: &[Room]) -> AllocationResult<Allocation> {
    if n == 0 {
        return Err(AllocationError::InvalidRequest(n));
    }

    let available = distinct_rooms(available);
    if available.len() < n {
        debug!("Only {} rooms available for a group of {}", available.len(), n);
        return Err(AllocationError::Infeasible { requested: n, available: available.len() });
    }

    if let Some(allocation) = best_same_floor_window(n, &available) {
        debug!("Same-floor window {:?} with cost {}", allocation.room_numbers(), allocation.cost);
        return Ok(allocation);
    }

    debug!("No floor has {} free rooms, searching across floors", n);
    match best_cross_floor_group(n, &available) {
        Some(allocation) => {
            debug!("Cross-floor group {:?} with cost {}", allocation.room_numbers(), allocation.cost);
            Ok(allocation)
        }
        None => Err(AllocationError::Infeasible { requested: n, available: available.len() }),
    }
}

/// Find the cheapest group of `n` rooms given the inventory and an occupied set
pub fn allocate(
    n: usize,
    inventory: &Inventory,
    occupied: &HashSet<RoomId>,
) -> AllocationResult<Allocation> {
    let available = inventory.available(occupied);
    find_allocation(n, &available)
}

/// Drop repeated rooms, keyed on the physical `(floor, position)` slot
fn distinct_rooms(rooms: &[Room]) -> Vec<Room> {
    let mut seen = HashSet::with_capacity(rooms.len());
    rooms.iter().filter(|r| seen.insert(r.sort_key())).copied().collect()
}

/// Group rooms by floor, floors in order of first appearance
fn rooms_by_floor(rooms: &[Room]) -> Vec<(u8, Vec<Room>)> {
    let mut floors: Vec<(u8, Vec<Room>)> = Vec::new();
    for room in rooms {
        match floors.iter_mut().find(|(floor, _)| *floor == room.floor) {
            Some((_, floor_rooms)) => floor_rooms.push(*room),
            None => floors.push((room.floor, vec![*room])),
        }
    }
    floors
}

/// Phase one: narrowest window of `n` free rooms on any single floor
fn best_same_floor_window(n: usize, available: &[Room]) -> Option<Allocation> {
    let mut best: Option<(u32, Vec<Room>)> = None;

    for (floor, mut floor_rooms) in rooms_by_floor(available) {
        if floor_rooms.len() < n {
            continue;
        }

        floor_rooms.sort_by_key(|r| r.position);
        trace!("Floor {} has {} free rooms", floor, floor_rooms.len());

        for window in floor_rooms.windows(n) {
            let cost = u32::from(window[n - 1].position - window[0].position);
            if best.as_ref().map_or(true, |(best_cost, _)| cost < *best_cost) {
                best = Some((cost, window.to_vec()));
            }
        }
    }

    best.map(|(cost, rooms)| Allocation { rooms, cost, strategy: AllocationStrategy::SameFloor })
}

/// Phase two: each room plus its `n - 1` nearest neighbours, cheapest group wins
fn best_cross_floor_group(n: usize, available: &[Room]) -> Option<Allocation> {
    let mut best: Option<(u32, Vec<Room>)> = None;

    for pivot in available {
        let mut others: Vec<(u32, Room)> = available
            .iter()
            .filter(|r| r.id != pivot.id)
            .map(|r| (travel_time(pivot, r), *r))
            .collect();

        if others.len() < n - 1 {
            continue;
        }

        // Stable, so equally distant rooms keep their inventory order
        others.sort_by_key(|(distance, _)| *distance);

        let mut candidate = Vec::with_capacity(n);
        candidate.push(*pivot);
        candidate.extend(others.iter().take(n - 1).map(|(_, room)| *room));

        let cost = travel_cost(&candidate);
        trace!("Pivot {} gives cost {}", pivot.number, cost);

        if best.as_ref().map_or(true, |(best_cost, _)| cost < *best_cost) {
            best = Some((cost, candidate));
        }
    }

    best.map(|(cost, rooms)| Allocation { rooms, cost, strategy: AllocationStrategy::CrossFloor })
}

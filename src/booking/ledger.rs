//! Confirmed bookings and the occupancy they imply
//!
//! The ledger is the caller-owned state the allocator never sees directly: it hands
//! out the occupied-room set before each request and records the group that was
//! chosen afterwards.

use crate::allocation::Allocation;
use crate::booking::guest::GuestInfo;
use crate::desk::error::{HotelError, HotelResult};
use crate::hotel::Room;
use crate::types::{AllocationStrategy, BookingId, RoomId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A confirmed booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier for the booking
    pub id: BookingId,
    /// Guest holding the booking
    pub guest: GuestInfo,
    /// Rooms held by the booking
    pub rooms: Vec<Room>,
    /// Travel cost of the room group
    pub cost: u32,
    /// Search phase that produced the room group
    pub strategy: AllocationStrategy,
    /// When the booking was confirmed
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Create a booking for a guest from an allocation
    pub fn new(guest: GuestInfo, allocation: Allocation) -> Self {
        Self {
            id: BookingId::new(),
            guest,
            rooms: allocation.rooms,
            cost: allocation.cost,
            strategy: allocation.strategy,
            created_at: Utc::now(),
        }
    }

    /// Room numbers held by the booking
    pub fn room_numbers(&self) -> Vec<u32> {
        self.rooms.iter().map(|r| r.number).collect()
    }

    /// Check if the booking holds a room
    pub fn contains_room(&self, room_id: RoomId) -> bool {
        self.rooms.iter().any(|r| r.id == room_id)
    }
}

/// All active bookings
#[derive(Debug, Clone, Default)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
    /// Which booking holds each room
    room_owner: HashMap<RoomId, BookingId>,
}

impl BookingLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a booking for the allocated rooms
    ///
    /// Fails without changing the ledger if any room is already held.
    pub fn confirm(&mut self, guest: GuestInfo, allocation: Allocation) -> HotelResult<&Booking> {
        if let Some(room) = allocation.rooms.iter().find(|r| self.room_owner.contains_key(&r.id)) {
            return Err(HotelError::RoomUnavailable(room.id));
        }

        let booking = Booking::new(guest, allocation);
        for room in &booking.rooms {
            self.room_owner.insert(room.id, booking.id);
        }
        self.bookings.push(booking);

        let index = self.bookings.len() - 1;
        Ok(&self.bookings[index])
    }

    /// Remove a booking and release its rooms
    pub fn cancel(&mut self, booking_id: BookingId) -> HotelResult<Booking> {
        let index = self
            .bookings
            .iter()
            .position(|b| b.id == booking_id)
            .ok_or(HotelError::BookingNotFound(booking_id))?;

        let booking = self.bookings.remove(index);
        for room in &booking.rooms {
            self.room_owner.remove(&room.id);
        }
        Ok(booking)
    }

    /// Get a booking by ID
    pub fn get_booking(&self, booking_id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == booking_id)
    }

    /// Get the booking holding a room
    pub fn booking_for_room(&self, room_id: RoomId) -> Option<&Booking> {
        self.room_owner.get(&room_id).and_then(|&id| self.get_booking(id))
    }

    /// Rooms held by any booking
    pub fn occupied_rooms(&self) -> HashSet<RoomId> {
        self.room_owner.keys().copied().collect()
    }

    /// Number of rooms held by bookings
    pub fn booked_room_count(&self) -> usize {
        self.room_owner.len()
    }

    /// Sum of travel costs over all bookings
    pub fn total_travel_cost(&self) -> u64 {
        self.bookings.iter().map(|b| u64::from(b.cost)).sum()
    }

    /// All bookings in confirmation order
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Number of bookings
    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    /// Whether the ledger holds no bookings
    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Drop every booking
    pub fn clear(&mut self) {
        self.bookings.clear();
        self.room_owner.clear();
    }
}

//! Front desk: one booking request at a time
//!
//! The front desk owns the inventory, the booking ledger and any occupancy blocked
//! outside the ledger. Each request reads the current occupancy, runs the allocator
//! over that snapshot and commits the result, all under `&mut self`, so two requests
//! can never be handed the same room.

use crate::allocation::{allocate, Allocation};
use crate::booking::{Booking, BookingLedger, GuestInfo};
use crate::desk::error::{HotelError, HotelResult};
use crate::desk::statistics::{OccupancyStatistics, RequestCounters};
use crate::hotel::{Inventory, OccupancyGenerator, Room};
use crate::types::{config::limits, BookingId, HotelConfig, RoomId};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// Coordinates inventory, bookings and the allocator
#[derive(Debug, Clone)]
pub struct FrontDesk {
    inventory: Inventory,
    ledger: BookingLedger,
    /// Rooms taken outside the ledger
    blocked: HashSet<RoomId>,
    max_rooms_per_booking: usize,
    counters: RequestCounters,
}

impl FrontDesk {
    /// Open a front desk over an inventory with the default booking limit
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory,
            ledger: BookingLedger::new(),
            blocked: HashSet::new(),
            max_rooms_per_booking: limits::MAX_ROOMS_PER_BOOKING,
            counters: RequestCounters::default(),
        }
    }

    /// Open a front desk over the standard hotel using session configuration
    pub fn from_config(config: &HotelConfig) -> Self {
        Self::new(Inventory::new()).with_max_rooms_per_booking(config.max_rooms_per_booking)
    }

    /// Set the largest group a single booking may request
    pub fn with_max_rooms_per_booking(mut self, limit: usize) -> Self {
        self.max_rooms_per_booking = limit;
        self
    }

    /// Get the inventory
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Get the booking ledger
    pub fn ledger(&self) -> &BookingLedger {
        &self.ledger
    }

    /// Get the rooms blocked outside the ledger
    pub fn blocked_rooms(&self) -> &HashSet<RoomId> {
        &self.blocked
    }

    /// Get the booking limit
    pub fn max_rooms_per_booking(&self) -> usize {
        self.max_rooms_per_booking
    }

    /// Every room currently unavailable: booked or blocked
    pub fn occupied_rooms(&self) -> HashSet<RoomId> {
        let mut occupied = self.ledger.occupied_rooms();
        occupied.extend(self.blocked.iter().copied());
        occupied
    }

    /// Rooms free for the next request, in inventory order
    pub fn available_rooms(&self) -> Vec<Room> {
        self.inventory.available(&self.occupied_rooms())
    }

    /// Find the best room group for `rooms` without booking it
    pub fn quote(&self, rooms: usize) -> HotelResult<Allocation> {
        if rooms == 0 || rooms > self.max_rooms_per_booking {
            return Err(HotelError::validation_error(format!(
                "Requests must be for 1 to {} rooms, got {}",
                self.max_rooms_per_booking, rooms
            )));
        }

        Ok(allocate(rooms, &self.inventory, &self.occupied_rooms())?)
    }

    /// Allocate and confirm a room group for a guest
    #[instrument(skip(self, guest), fields(guest = %guest.name))]
    pub fn book(&mut self, guest: GuestInfo, rooms: usize) -> HotelResult<&Booking> {
        let allocation = match guest
            .validate()
            .map_err(HotelError::validation_error)
            .and_then(|_| self.quote(rooms))
        {
            Ok(allocation) => allocation,
            Err(error) => {
                self.counters.failed += 1;
                warn!("Booking request for {} rooms rejected: {}", rooms, error);
                return Err(error);
            }
        };

        debug!(
            "Allocated rooms {:?} ({}) with cost {}",
            allocation.room_numbers(),
            allocation.strategy,
            allocation.cost
        );

        let booking = self.ledger.confirm(guest, allocation)?;
        self.counters.confirmed += 1;
        info!(
            "Confirmed booking {} for {}: rooms {:?}, travel time {}",
            booking.id,
            booking.guest.name,
            booking.room_numbers(),
            booking.cost
        );
        Ok(booking)
    }

    /// Cancel a booking and release its rooms
    #[instrument(skip(self))]
    pub fn cancel(&mut self, booking_id: BookingId) -> HotelResult<Booking> {
        let booking = self.ledger.cancel(booking_id)?;
        self.counters.cancelled += 1;
        info!("Cancelled booking {} for {}", booking.id, booking.guest.name);
        Ok(booking)
    }

    /// Cancel whichever booking holds a room
    pub fn cancel_room(&mut self, room_id: RoomId) -> HotelResult<Booking> {
        if !self.inventory.contains_room(room_id) {
            return Err(HotelError::RoomNotFound(room_id));
        }

        let booking_id = self
            .ledger
            .booking_for_room(room_id)
            .map(|b| b.id)
            .ok_or(HotelError::NoBookingForRoom(room_id))?;

        self.cancel(booking_id)
    }

    /// Mark rooms as taken outside the ledger, replacing any previous block
    pub fn block_rooms(&mut self, rooms: HashSet<RoomId>) -> HotelResult<()> {
        if let Some(unknown) = rooms.iter().find(|id| !self.inventory.contains_room(**id)) {
            return Err(HotelError::RoomNotFound(*unknown));
        }
        self.blocked = rooms;
        Ok(())
    }

    /// Drop all bookings and draw a fresh random occupancy
    pub fn randomize_occupancy(&mut self, generator: &mut OccupancyGenerator) {
        self.ledger.clear();
        self.blocked = generator.generate(&self.inventory);
        info!(
            "Randomized occupancy: {} of {} rooms taken",
            self.blocked.len(),
            self.inventory.room_count()
        );
    }

    /// Drop all bookings and blocked rooms
    pub fn reset(&mut self) {
        self.ledger.clear();
        self.blocked.clear();
        info!("Front desk reset, all {} rooms available", self.inventory.room_count());
    }

    /// Current occupancy snapshot
    pub fn statistics(&self) -> OccupancyStatistics {
        let occupied = self.occupied_rooms();
        let booked = self.ledger.occupied_rooms();

        OccupancyStatistics {
            total_rooms: self.inventory.room_count(),
            booked_rooms: booked.len(),
            blocked_rooms: self.blocked.difference(&booked).count(),
            available_rooms: self.inventory.available_count(&occupied),
            available_by_floor: self.inventory.available_by_floor(&occupied),
            active_bookings: self.ledger.len(),
            total_travel_cost: self.ledger.total_travel_cost(),
            requests: self.counters,
        }
    }
}

//! Hotel Room Allocator
//!
//! Finds the room group that minimizes guest travel time for a booking request in a
//! fixed ten-floor hotel, then records the booking so later requests see the rooms
//! as taken.
//!
//! # Overview
//!
//! The hotel has 97 rooms: floors 1 to 9 hold rooms 1 to 10 and the top floor holds
//! rooms 1 to 7. Position 1 on every floor is nearest the lift and stairs. Moving one
//! room along a corridor costs one minute and moving one floor costs two.
//!
//! A request for `n` rooms is served in two phases:
//!
//! - **Same floor**: every floor with at least `n` free rooms is scanned with a
//!   window of `n` consecutive free rooms, and the tightest window wins
//! - **Cross floor**: only when no floor can host the group, each free room is tried
//!   as a pivot together with its `n - 1` nearest neighbours
//!
//! A same-floor group is always preferred over any cross-floor group.
//!
//! ## Quick Start
//!
//! ```rust
//! use hotel_room_allocator::*;
//! use std::collections::HashSet;
//!
//! let inventory = build_inventory();
//! let allocation = allocate(4, &inventory, &HashSet::new())?;
//!
//! assert_eq!(allocation.room_numbers(), vec![101, 102, 103, 104]);
//! assert_eq!(allocation.cost, 3);
//! assert_eq!(allocation.strategy, AllocationStrategy::SameFloor);
//! # Ok::<(), AllocationError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, enums and session configuration
//! - [`hotel`]: Room topology, travel time and the room inventory
//! - [`allocation`]: Group travel cost and the two-phase optimizer
//! - [`booking`]: Guests, the booking ledger and booking export
//! - [`desk`]: Front desk orchestration, statistics, errors and logging
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │   Hotel     │    │ Allocation  │
//! │             │    │             │    │             │
//! │ Identifiers │◄───┤ Rooms       │◄───┤ Travel Cost │
//! │ Enums       │    │ Inventory   │    │ Optimizer   │
//! │ Config      │    │ Occupancy   │    │             │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!                            ▲                   ▲
//!                            │                   │
//!                    ┌─────────────┐    ┌─────────────┐
//!                    │  Booking    │    │    Desk     │
//!                    │             │    │             │
//!                    │ Ledger      │◄───┤ Front Desk  │
//!                    │ Export      │    │ Statistics  │
//!                    └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod allocation;
pub mod booking;
pub mod desk;
pub mod hotel;
pub mod types;

// Core types and identifiers
pub use types::{
    AllocationStrategy, BookingId, ConfigValidationError, HotelConfig, OutputFormat, RoomId,
};

// Topology and inventory
pub use hotel::{build_inventory, travel_time, Inventory, OccupancyGenerator, Room};

// Allocation
pub use allocation::{
    allocate, find_allocation, travel_cost, Allocation, AllocationError, AllocationResult,
};

// Bookings
pub use booking::{Booking, BookingLedger, GuestInfo};

// Front desk
pub use desk::{FrontDesk, HotelError, HotelResult, LoggingConfig, OccupancyStatistics};

//! Front desk orchestration and control
//!
//! This module contains the front desk that serves booking requests, its error type,
//! occupancy statistics and logging setup.
//!
//! # Overview
//!
//! - **FrontDesk**: validates a request, snapshots occupancy, runs the allocator and
//!   records the booking
//! - **OccupancyStatistics**: availability per floor and request counters
//! - **HotelError**: error type for every front desk operation
//! - **LoggingConfig**: tracing subscriber setup for the binary
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_room_allocator::booking::GuestInfo;
//! use hotel_room_allocator::desk::*;
//! use hotel_room_allocator::hotel::Inventory;
//!
//! let mut desk = FrontDesk::new(Inventory::new());
//! let booking = desk.book(GuestInfo::new("Ada Lovelace", "555-0100"), 2)?;
//! assert_eq!(booking.room_numbers(), vec![101, 102]);
//!
//! let stats = desk.statistics();
//! assert_eq!(stats.available_rooms, 95);
//! # Ok::<(), HotelError>(())
//! ```

pub mod error;
pub mod front_desk;
pub mod logging;
pub mod statistics;

// Re-export all public types for convenience
pub use error::*;
pub use front_desk::*;
pub use logging::*;
pub use statistics::*;

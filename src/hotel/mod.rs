//! Hotel topology model
//!
//! This module defines the room layout and the travel-time metric used to score
//! room groups.
//!
//! # Overview
//!
//! - **Room**: a floor and a position measured from the lift
//! - **Inventory**: every room in the hotel, built once and read-only afterwards
//! - **Layout**: floor counts, the reduced top floor, and the lift cost
//! - **OccupancyGenerator**: random occupied sets for demonstrations
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_room_allocator::hotel::*;
//!
//! let inventory = build_inventory();
//! assert_eq!(inventory.room_count(), 97);
//!
//! let a = Room::new(1, 3);
//! let b = Room::new(2, 1);
//! // 3 to the lift, one floor at 2, 1 from the lift
//! assert_eq!(travel_time(&a, &b), 6);
//! ```

pub mod inventory;
pub mod layout;
pub mod occupancy;
pub mod room;

// Re-export all public types for convenience
pub use inventory::{build_inventory, Inventory};
pub use occupancy::OccupancyGenerator;
pub use room::{travel_time, Room};

//! Room group allocation
//!
//! Given the free rooms and a requested group size, finds the group with the lowest
//! travel cost. The search is a pure function of its inputs and keeps no state
//! between calls.
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_room_allocator::allocation::*;
//! use hotel_room_allocator::hotel::build_inventory;
//! use std::collections::HashSet;
//!
//! let inventory = build_inventory();
//! let allocation = allocate(3, &inventory, &HashSet::new()).unwrap();
//!
//! assert_eq!(allocation.room_numbers(), vec![101, 102, 103]);
//! assert_eq!(allocation.cost, 2);
//! assert_eq!(travel_cost(&allocation.rooms), 2);
//! ```

pub mod cost;
pub mod error;
pub mod optimizer;

// Re-export all public types for convenience
pub use cost::{endpoints, travel_cost};
pub use error::{AllocationError, AllocationResult};
pub use optimizer::{allocate, find_allocation, Allocation};

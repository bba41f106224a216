//! Core types and identifiers for the hotel room allocator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the crate.
//!
//! # Overview
//!
//! - **Identifiers**: room IDs derived from room numbers, UUID-based booking IDs
//! - **Enums**: allocation strategy and output format
//! - **Configuration**: booking session configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_room_allocator::types::*;
//!
//! let room_id = RoomId::from_floor_position(3, 4);
//! assert_eq!(room_id.number(), 304);
//!
//! let config = HotelConfig {
//!     rooms: 3,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;

//! Booking records and export
//!
//! This module holds the state that sits around the allocator: guest details, the
//! ledger of confirmed bookings from which occupancy is derived, and the CSV/JSON
//! export of a single booking.

pub mod export;
pub mod guest;
pub mod ledger;

// Re-export all public types for convenience
pub use export::{booking_to_csv, booking_to_json, export_file_name, write_csv, CSV_HEADERS};
pub use guest::GuestInfo;
pub use ledger::{Booking, BookingLedger};

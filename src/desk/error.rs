//! Error types and handling
//!
//! This module contains the error type returned by the front desk and the booking
//! ledger.

use crate::allocation::AllocationError;
use crate::types::{BookingId, ConfigError, ConfigValidationError, RoomId};
use thiserror::Error;

/// Errors that can occur while handling booking requests
#[derive(Debug, Error)]
pub enum HotelError {
    /// No room group could be found for the request
    #[error("Allocation failed: {0}")]
    Allocation(#[from] AllocationError),

    /// Request or guest details failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Booking does not exist
    #[error("Booking not found: {0}")]
    BookingNotFound(BookingId),

    /// Room does not exist in the inventory
    #[error("Room not found: {0}")]
    RoomNotFound(RoomId),

    /// Room is already held by another booking
    #[error("Room {0} is already booked")]
    RoomUnavailable(RoomId),

    /// Room exists but no booking holds it
    #[error("Room {0} has no booking")]
    NoBookingForRoom(RoomId),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<ConfigError> for HotelError {
    fn from(error: ConfigError) -> Self {
        HotelError::Configuration(error.to_string())
    }
}

impl From<ConfigValidationError> for HotelError {
    fn from(error: ConfigValidationError) -> Self {
        HotelError::Configuration(error.to_string())
    }
}

impl HotelError {
    /// Create a validation error
    pub fn validation_error(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Whether the caller can retry with different parameters
    pub fn is_recoverable(&self) -> bool {
        match self {
            HotelError::Allocation(_) => true,
            HotelError::Validation(_) => true,
            HotelError::BookingNotFound(_) => true,
            HotelError::RoomNotFound(_) => true,
            HotelError::RoomUnavailable(_) => true,
            HotelError::NoBookingForRoom(_) => true,
            HotelError::Configuration(_) => false,
            HotelError::Io(_) => false,
            HotelError::Serialization(_) => false,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            HotelError::Allocation(_) => "Allocation",
            HotelError::Validation(_) => "Validation",
            HotelError::BookingNotFound(_) | HotelError::NoBookingForRoom(_) => "Booking",
            HotelError::RoomNotFound(_) | HotelError::RoomUnavailable(_) => "Room",
            HotelError::Configuration(_) => "Configuration",
            HotelError::Io(_) => "IO",
            HotelError::Serialization(_) => "Serialization",
        }
    }

    /// Whether this error means no room group exists for the request
    pub fn is_infeasible(&self) -> bool {
        matches!(self, HotelError::Allocation(e) if e.is_infeasible())
    }
}

/// Result type for front desk operations
pub type HotelResult<T> = Result<T, HotelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_error_conversion() {
        let err: HotelError = AllocationError::Infeasible { requested: 5, available: 2 }.into();

        assert!(err.is_infeasible());
        assert!(err.is_recoverable());
        assert_eq!(err.category(), "Allocation");
        assert_eq!(err.to_string(), "Allocation failed: Cannot allocate 5 rooms: only 2 available");
    }

    #[test]
    fn test_config_errors_are_fatal() {
        let err: HotelError = ConfigValidationError::InvalidRoomCount(0).into();

        assert!(!err.is_recoverable());
        assert!(!err.is_infeasible());
        assert_eq!(err.category(), "Configuration");
    }

    #[test]
    fn test_categories() {
        let room = RoomId::from_number(101);
        assert_eq!(HotelError::RoomUnavailable(room).category(), "Room");
        assert_eq!(HotelError::NoBookingForRoom(room).category(), "Booking");
        assert_eq!(HotelError::validation_error("bad").category(), "Validation");
        assert_eq!(HotelError::configuration_error("bad").to_string(), "Configuration error: bad");
    }
}

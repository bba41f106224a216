//! Occupancy and request statistics
//!
//! Snapshot of how full the hotel is plus running counters of booking requests.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Running counters of requests handled by the front desk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestCounters {
    /// Bookings confirmed
    pub confirmed: usize,
    /// Bookings cancelled
    pub cancelled: usize,
    /// Requests that could not be allocated or failed validation
    pub failed: usize,
}

/// Occupancy snapshot of the hotel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyStatistics {
    /// Rooms in the inventory
    pub total_rooms: usize,
    /// Rooms held by confirmed bookings
    pub booked_rooms: usize,
    /// Rooms taken outside the ledger (random or externally blocked occupancy)
    pub blocked_rooms: usize,
    /// Rooms free for the next request
    pub available_rooms: usize,
    /// Free rooms per floor
    pub available_by_floor: BTreeMap<u8, usize>,
    /// Bookings currently held
    pub active_bookings: usize,
    /// Sum of travel costs over active bookings
    pub total_travel_cost: u64,
    /// Request counters since the desk opened
    pub requests: RequestCounters,
}

impl OccupancyStatistics {
    /// Share of rooms that are not available, in percent
    pub fn occupancy_percentage(&self) -> f64 {
        if self.total_rooms == 0 {
            return 0.0;
        }
        (self.total_rooms - self.available_rooms) as f64 / self.total_rooms as f64 * 100.0
    }

    /// Average travel cost per active booking
    pub fn average_travel_cost(&self) -> f64 {
        if self.active_bookings == 0 {
            return 0.0;
        }
        self.total_travel_cost as f64 / self.active_bookings as f64
    }

    /// Largest group any single floor could still host
    pub fn largest_single_floor_group(&self) -> usize {
        self.available_by_floor.values().copied().max().unwrap_or(0)
    }
}

impl fmt::Display for OccupancyStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Occupancy:")?;
        writeln!(f, "  Total Rooms: {}", self.total_rooms)?;
        writeln!(f, "  Booked Rooms: {}", self.booked_rooms)?;
        writeln!(f, "  Blocked Rooms: {}", self.blocked_rooms)?;
        writeln!(
            f,
            "  Available Rooms: {} ({:.1}% occupied)",
            self.available_rooms,
            self.occupancy_percentage()
        )?;

        let floors = self
            .available_by_floor
            .iter()
            .map(|(floor, free)| format!("{}:{}", floor, free))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(f, "  Free by Floor: {}", floors)?;

        writeln!(f, "Bookings:")?;
        writeln!(f, "  Active: {}", self.active_bookings)?;
        writeln!(f, "  Average Travel Time: {:.1}", self.average_travel_cost())?;
        write!(
            f,
            "  Requests: {} confirmed, {} cancelled, {} failed",
            self.requests.confirmed, self.requests.cancelled, self.requests.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OccupancyStatistics {
        OccupancyStatistics {
            total_rooms: 20,
            booked_rooms: 3,
            blocked_rooms: 2,
            available_rooms: 15,
            available_by_floor: [(1, 7), (2, 8)].into_iter().collect(),
            active_bookings: 2,
            total_travel_cost: 9,
            requests: RequestCounters { confirmed: 3, cancelled: 1, failed: 1 },
        }
    }

    #[test]
    fn test_percentages() {
        let stats = sample();
        assert!((stats.occupancy_percentage() - 25.0).abs() < f64::EPSILON);
        assert!((stats.average_travel_cost() - 4.5).abs() < f64::EPSILON);
        assert_eq!(stats.largest_single_floor_group(), 8);
    }

    #[test]
    fn test_empty_statistics() {
        let stats = OccupancyStatistics {
            total_rooms: 0,
            booked_rooms: 0,
            blocked_rooms: 0,
            available_rooms: 0,
            available_by_floor: BTreeMap::new(),
            active_bookings: 0,
            total_travel_cost: 0,
            requests: RequestCounters::default(),
        };
        assert_eq!(stats.occupancy_percentage(), 0.0);
        assert_eq!(stats.average_travel_cost(), 0.0);
        assert_eq!(stats.largest_single_floor_group(), 0);
    }

    #[test]
    fn test_display() {
        let text = sample().to_string();
        assert!(text.contains("Available Rooms: 15 (25.0% occupied)"));
        assert!(text.contains("Free by Floor: 1:7 2:8"));
        assert!(text.contains("Requests: 3 confirmed, 1 cancelled, 1 failed"));
    }
}

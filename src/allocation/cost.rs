//! Group cost
//!
//! The cost of a room group is the travel time between its first and last room in
//! floor-then-position order. It is not a sum over pairs and not the geometric
//! extremes of the group.

use crate::hotel::{travel_time, Room};

/// Travel cost of a room group
///
/// Groups of zero or one room cost nothing. Otherwise the rooms are ordered by
/// `(floor, position)` and the cost is the travel time from the first to the last.
pub fn travel_cost(rooms: &[Room]) -> u32 {
    if rooms.len() <= 1 {
        return 0;
    }

    endpoints(rooms).map_or(0, |(first, last)| travel_time(first, last))
}

/// First and last room of a group in floor-then-position order
pub fn endpoints(rooms: &[Room]) -> Option<(&Room, &Room)> {
    let first = rooms.iter().min_by_key(|r| r.sort_key())?;
    let last = rooms.iter().max_by_key(|r| r.sort_key())?;
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single_groups_cost_nothing() {
        assert_eq!(travel_cost(&[]), 0);
        assert_eq!(travel_cost(&[Room::new(7, 9)]), 0);
    }

    #[test]
    fn test_same_floor_group() {
        let rooms = [Room::new(2, 4), Room::new(2, 1), Room::new(2, 3)];
        assert_eq!(travel_cost(&rooms), 3);
    }

    #[test]
    fn test_cross_floor_group_uses_sorted_extremes() {
        // Sorted: 110, 201, 301. Cost is 110 -> 301 = 10 + 2*2 + 1
        let rooms = [Room::new(3, 1), Room::new(1, 10), Room::new(2, 1)];
        assert_eq!(travel_cost(&rooms), 15);
    }

    #[test]
    fn test_cost_ignores_interior_rooms() {
        // The far end of floor 2 sits between the endpoints in sorted order
        let with_interior = [Room::new(1, 1), Room::new(2, 10), Room::new(3, 1)];
        let without = [Room::new(1, 1), Room::new(3, 1)];
        assert_eq!(travel_cost(&with_interior), travel_cost(&without));
        assert_eq!(travel_cost(&without), 6);
    }

    #[test]
    fn test_endpoints() {
        let rooms = [Room::new(4, 2), Room::new(1, 5), Room::new(4, 1)];
        let (first, last) = endpoints(&rooms).unwrap();
        assert_eq!(first.number, 105);
        assert_eq!(last.number, 402);
        assert!(endpoints(&[]).is_none());
    }
}

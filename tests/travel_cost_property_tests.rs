//! Property tests for the travel-time metric and the optimizer
//!
//! Occupancy is drawn as one flag per room of the standard hotel, so every
//! property is checked against arbitrary occupancy sets.

use hotel_room_allocator::hotel::layout::rooms_on_floor;
use hotel_room_allocator::*;
use proptest::prelude::*;
use std::collections::HashSet;

fn any_room() -> impl Strategy<Value = Room> {
    (1u8..=10)
        .prop_flat_map(|floor| (Just(floor), 1u8..=rooms_on_floor(floor)))
        .prop_map(|(floor, position)| Room::new(floor, position))
}

fn occupancy_from_flags(inventory: &Inventory, flags: &[bool]) -> HashSet<RoomId> {
    inventory
        .rooms()
        .iter()
        .zip(flags)
        .filter(|(_, taken)| **taken)
        .map(|(room, _)| room.id)
        .collect()
}

proptest! {
    #[test]
    fn travel_time_is_symmetric(a in any_room(), b in any_room()) {
        prop_assert_eq!(travel_time(&a, &b), travel_time(&b, &a));
        prop_assert_eq!(travel_time(&a, &b) == 0, a == b);
    }

    #[test]
    fn group_cost_ignores_input_order(
        rooms in prop::sample::subsequence(build_inventory().rooms().to_vec(), 0..=8)
            .prop_shuffle()
    ) {
        let mut sorted = rooms.clone();
        sorted.sort_by_key(|r| r.sort_key());
        prop_assert_eq!(travel_cost(&rooms), travel_cost(&sorted));
    }

    #[test]
    fn allocation_respects_occupancy(
        flags in prop::collection::vec(any::<bool>(), 97),
        n in 1usize..=10,
    ) {
        let inventory = build_inventory();
        let occupied = occupancy_from_flags(&inventory, &flags);
        let available = inventory.available_count(&occupied);

        match allocate(n, &inventory, &occupied) {
            Ok(allocation) => {
                prop_assert!(available >= n);
                prop_assert_eq!(allocation.len(), n);

                let ids: HashSet<RoomId> = allocation.room_ids().into_iter().collect();
                prop_assert_eq!(ids.len(), n);
                prop_assert!(ids.iter().all(|id| !occupied.contains(id)));
                prop_assert!(ids.iter().all(|id| inventory.contains_room(*id)));
                prop_assert_eq!(allocation.cost, travel_cost(&allocation.rooms));
            }
            Err(err) => {
                prop_assert!(available < n);
                prop_assert_eq!(err, AllocationError::Infeasible { requested: n, available });
            }
        }
    }

    #[test]
    fn single_floor_group_is_preferred(
        flags in prop::collection::vec(any::<bool>(), 97),
        n in 1usize..=7,
    ) {
        let inventory = build_inventory();
        let occupied = occupancy_from_flags(&inventory, &flags);
        let by_floor = inventory.available_by_floor(&occupied);
        let floor_can_host = by_floor.values().any(|&free| free >= n);

        if let Ok(allocation) = allocate(n, &inventory, &occupied) {
            prop_assert_eq!(allocation.is_single_floor(), floor_can_host);
            if floor_can_host {
                prop_assert_eq!(allocation.strategy, AllocationStrategy::SameFloor);
                prop_assert!(allocation.cost < 10);
            }
        }
    }

    #[test]
    fn allocation_is_deterministic(flags in prop::collection::vec(any::<bool>(), 97)) {
        let inventory = build_inventory();
        let occupied = occupancy_from_flags(&inventory, &flags);

        prop_assert_eq!(
            allocate(3, &inventory, &occupied),
            allocate(3, &inventory, &occupied)
        );
    }
}

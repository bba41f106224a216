//! Fixed dimensions of the hotel

/// Number of floors, numbered from 1
pub const FLOOR_COUNT: u8 = 10;

/// Rooms on every floor below the top floor
pub const ROOMS_PER_FLOOR: u8 = 10;

/// Rooms on the top floor
pub const TOP_FLOOR_ROOMS: u8 = 7;

/// Lift travel time per floor moved
pub const LIFT_TIME_PER_FLOOR: u32 = 2;

/// Number of rooms on a floor, zero for floors outside the building
pub fn rooms_on_floor(floor: u8) -> u8 {
    match floor {
        FLOOR_COUNT => TOP_FLOOR_ROOMS,
        f if (1..FLOOR_COUNT).contains(&f) => ROOMS_PER_FLOOR,
        _ => 0,
    }
}

/// Total number of rooms in the hotel
pub fn total_rooms() -> usize {
    (1..=FLOOR_COUNT).map(|floor| usize::from(rooms_on_floor(floor))).sum()
}

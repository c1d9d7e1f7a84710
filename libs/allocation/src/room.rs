//! Room model and the fixed hotel catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of floors in the hotel.
pub const FLOORS: u32 = 10;

/// Total number of rooms in the catalog: 10 on each of floors 1-9, 7 on
/// floor 10.
pub const TOTAL_ROOMS: usize = 97;

/// A single hotel room.
///
/// Room numbers encode the coordinates: floors 1-9 use `floor * 100 +
/// position` (101-110, ..., 901-910); floor 10 is numbered 1001-1007.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room number.
    pub room_number: u32,

    /// Floor, 1-10.
    pub floor: u32,

    /// Position along the corridor: 1-10 on floors 1-9, 1-7 on floor 10.
    pub position: u32,

    /// Whether the room is currently booked.
    pub is_booked: bool,

    /// When the room was booked, if it is.
    pub booked_at: Option<DateTime<Utc>>,
}

impl Room {
    /// Create a free room at the given coordinates.
    pub fn new(floor: u32, position: u32) -> Self {
        let room_number = if floor < FLOORS {
            floor * 100 + position
        } else {
            1000 + position
        };
        Self {
            room_number,
            floor,
            position,
            is_booked: false,
            booked_at: None,
        }
    }
}

/// Generate the full 97-room catalog in ascending room-number order.
pub fn full_catalog() -> Vec<Room> {
    let mut rooms = Vec::with_capacity(TOTAL_ROOMS);
    for floor in 1..FLOORS {
        for position in 1..=10 {
            rooms.push(Room::new(floor, position));
        }
    }
    for position in 1..=7 {
        rooms.push(Room::new(FLOORS, position));
    }
    rooms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_97_rooms() {
        let rooms = full_catalog();
        assert_eq!(rooms.len(), TOTAL_ROOMS);
    }

    #[test]
    fn catalog_room_numbers_follow_the_numbering_scheme() {
        let rooms = full_catalog();
        for room in &rooms {
            if room.floor < 10 {
                assert_eq!(room.room_number, room.floor * 100 + room.position);
                assert!((1..=10).contains(&room.position));
            } else {
                assert_eq!(room.room_number, 1000 + room.position);
                assert!((1..=7).contains(&room.position));
            }
        }
    }

    #[test]
    fn catalog_is_sorted_and_starts_free() {
        let rooms = full_catalog();
        assert!(rooms.windows(2).all(|w| w[0].room_number < w[1].room_number));
        assert!(rooms.iter().all(|r| !r.is_booked && r.booked_at.is_none()));
    }

    #[test]
    fn catalog_floor_sizes() {
        let rooms = full_catalog();
        for floor in 1..=10u32 {
            let on_floor = rooms.iter().filter(|r| r.floor == floor).count();
            assert_eq!(on_floor, if floor == 10 { 7 } else { 10 });
        }
    }

    #[test]
    fn room_serializes_with_null_booked_at_when_free() {
        let room = Room::new(3, 5);
        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["room_number"], 305);
        assert_eq!(json["is_booked"], false);
        assert!(json["booked_at"].is_null());
    }
}

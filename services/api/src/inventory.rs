//! In-memory inventory store: authoritative room state plus the append-only
//! booking history.
//!
//! Persistence is deliberately out of scope; the store is seeded with the
//! full 97-room catalog at construction and lives for the process lifetime.
//! All access goes through the orchestrator's lock (see [`crate::booking`]),
//! so the methods here are plain synchronous mutations.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use roomplan_allocation::{full_catalog, Room};
use serde::{Deserialize, Serialize};

/// An immutable record of one successful allocation. Append-only: bookings
/// are never mutated or deleted, and a reset does not clear the history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Unique id, `BK` + millisecond timestamp, monotonic in creation order.
    pub booking_id: String,

    /// Allocated room numbers, in (floor, position) order.
    pub rooms: Vec<u32>,

    /// Total travel time of the allocated sequence.
    pub total_travel_time: f64,

    /// When the booking was created.
    pub created_at: DateTime<Utc>,
}

/// Room state and booking history.
///
/// Rooms are keyed by room number, so every listing is already in the
/// ascending order the API contract requires.
pub struct Inventory {
    rooms: BTreeMap<u32, Room>,
    bookings: Vec<Booking>,
    last_booking_ms: i64,
}

impl Inventory {
    /// Create an inventory seeded with the full room catalog.
    pub fn new() -> Self {
        let rooms = full_catalog()
            .into_iter()
            .map(|room| (room.room_number, room))
            .collect();
        Self {
            rooms,
            bookings: Vec::new(),
            last_booking_ms: 0,
        }
    }

    /// All rooms, ascending by room number.
    pub fn rooms(&self) -> Vec<Room> {
        self.rooms.values().cloned().collect()
    }

    /// All currently free rooms, ascending by room number.
    pub fn free_rooms(&self) -> Vec<Room> {
        self.rooms
            .values()
            .filter(|room| !room.is_booked)
            .cloned()
            .collect()
    }

    /// Total number of rooms in the catalog.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Mark the given rooms booked with a single timestamp. Room numbers not
    /// present in the catalog are silently skipped. Returns the number of
    /// rooms updated.
    pub fn mark_booked(&mut self, room_numbers: &[u32], at: DateTime<Utc>) -> usize {
        let mut updated = 0;
        for number in room_numbers {
            if let Some(room) = self.rooms.get_mut(number) {
                room.is_booked = true;
                room.booked_at = Some(at);
                updated += 1;
            }
        }
        updated
    }

    /// Clear every booked flag. Returns the number of rooms that actually
    /// changed, so a second consecutive reset returns 0. The booking history
    /// is untouched.
    pub fn reset_all(&mut self) -> usize {
        let mut reset = 0;
        for room in self.rooms.values_mut() {
            if room.is_booked {
                room.is_booked = false;
                room.booked_at = None;
                reset += 1;
            }
        }
        reset
    }

    /// Issue the next booking id for a booking created at `now`.
    ///
    /// Ids embed the creation time in milliseconds but are bumped past the
    /// previously issued id, so two bookings inside the same millisecond
    /// still get unique, monotonically increasing ids.
    pub fn next_booking_id(&mut self, now: DateTime<Utc>) -> String {
        let ms = now.timestamp_millis().max(self.last_booking_ms + 1);
        self.last_booking_ms = ms;
        format!("BK{ms}")
    }

    /// Append a booking to the history.
    pub fn push_booking(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }

    /// The most recent `limit` bookings, newest first.
    pub fn recent_bookings(&self, limit: usize) -> Vec<Booking> {
        self.bookings.iter().rev().take(limit).cloned().collect()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use roomplan_allocation::TOTAL_ROOMS;

    use super::*;

    #[test]
    fn seeds_the_full_catalog() {
        let inventory = Inventory::new();
        assert_eq!(inventory.room_count(), TOTAL_ROOMS);
        assert_eq!(inventory.free_rooms().len(), TOTAL_ROOMS);
    }

    #[test]
    fn mark_booked_skips_unknown_rooms() {
        let mut inventory = Inventory::new();
        let updated = inventory.mark_booked(&[101, 9999], Utc::now());
        assert_eq!(updated, 1);
        assert_eq!(inventory.free_rooms().len(), TOTAL_ROOMS - 1);
    }

    #[test]
    fn reset_counts_only_changed_rooms() {
        let mut inventory = Inventory::new();
        inventory.mark_booked(&[101, 102, 305], Utc::now());
        assert_eq!(inventory.reset_all(), 3);
        assert_eq!(inventory.reset_all(), 0);
    }

    #[test]
    fn reset_preserves_history() {
        let mut inventory = Inventory::new();
        let id = inventory.next_booking_id(Utc::now());
        inventory.push_booking(Booking {
            booking_id: id,
            rooms: vec![101],
            total_travel_time: 0.0,
            created_at: Utc::now(),
        });
        inventory.reset_all();
        assert_eq!(inventory.recent_bookings(50).len(), 1);
    }

    #[test]
    fn booking_ids_are_unique_within_one_millisecond() {
        let mut inventory = Inventory::new();
        let now = Utc::now();
        let a = inventory.next_booking_id(now);
        let b = inventory.next_booking_id(now);
        assert_ne!(a, b);
        assert!(a < b, "ids must sort by creation order");
        assert!(a.starts_with("BK") && b.starts_with("BK"));
    }

    #[test]
    fn recent_bookings_are_newest_first() {
        let mut inventory = Inventory::new();
        for rooms in [vec![101], vec![102], vec![103]] {
            let now = Utc::now();
            let id = inventory.next_booking_id(now);
            inventory.push_booking(Booking {
                booking_id: id,
                rooms,
                total_travel_time: 0.0,
                created_at: now,
            });
        }
        let recent = inventory.recent_bookings(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].rooms, vec![103]);
        assert_eq!(recent[1].rooms, vec![102]);
    }
}

//! The booking orchestrator.
//!
//! Applies engine selections to the inventory and records history. The
//! inventory sits behind a single async mutex and every operation runs
//! under one lock acquisition, so the read-select-write booking flow is
//! serialized: two concurrent requests can never observe the same free-room
//! snapshot and double-book. Reset and random occupancy hold the same lock
//! and are therefore exclusive with in-flight bookings.

use chrono::Utc;
use rand::Rng;
use roomplan_allocation::{select_rooms, AllocationError, Room};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

use crate::inventory::{Booking, Inventory};

/// Errors surfaced by the orchestrator.
///
/// Today every failure originates in the allocation engine (invalid count,
/// insufficient inventory); the wrapper keeps the orchestrator's error
/// surface its own.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// The allocation engine rejected the request.
    #[error(transparent)]
    Allocation(#[from] AllocationError),
}

/// Default number of bookings returned by a history listing.
pub const DEFAULT_BOOKINGS_LIMIT: usize = 50;

/// Lower and upper bound (inclusive) on rooms booked by random occupancy.
const RANDOM_OCCUPANCY_MIN: usize = 30;
const RANDOM_OCCUPANCY_MAX: usize = 58;

/// Orchestrates bookings over a single shared inventory.
pub struct BookingService {
    inventory: Mutex<Inventory>,
}

impl BookingService {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory: Mutex::new(inventory),
        }
    }

    /// Book `count` rooms: snapshot the free rooms, run the allocation
    /// engine, mark the winners booked, and append a history record.
    ///
    /// Fails with [`AllocationError::InsufficientInventory`] when fewer
    /// rooms are free than requested; nothing is mutated on failure.
    pub async fn book(&self, count: usize) -> Result<Booking, BookingError> {
        let mut inventory = self.inventory.lock().await;

        let free = inventory.free_rooms();
        let selection = select_rooms(&free, count)?;

        let created_at = Utc::now();
        let room_numbers: Vec<u32> = selection.rooms.iter().map(|r| r.room_number).collect();
        inventory.mark_booked(&room_numbers, created_at);

        let booking = Booking {
            booking_id: inventory.next_booking_id(created_at),
            rooms: room_numbers,
            total_travel_time: selection.total_travel_time,
            created_at,
        };
        inventory.push_booking(booking.clone());

        info!(
            booking_id = %booking.booking_id,
            rooms = ?booking.rooms,
            total_travel_time = booking.total_travel_time,
            "Rooms booked"
        );

        Ok(booking)
    }

    /// All rooms, ascending by room number.
    pub async fn list_rooms(&self) -> Vec<Room> {
        self.inventory.lock().await.rooms()
    }

    /// The most recent `limit` bookings, newest first.
    pub async fn list_bookings(&self, limit: usize) -> Vec<Booking> {
        self.inventory.lock().await.recent_bookings(limit)
    }

    /// Free every room. Returns the number of rooms that changed state.
    pub async fn reset_all(&self) -> usize {
        let reset = self.inventory.lock().await.reset_all();
        info!(rooms_reset = reset, "Inventory reset");
        reset
    }

    /// Reset the inventory, then book a random 30-58 rooms directly.
    ///
    /// Bypasses the allocation engine: no travel time is computed and no
    /// history record is written. Returns the number of rooms booked.
    pub async fn random_occupancy(&self) -> usize {
        let mut inventory = self.inventory.lock().await;
        inventory.reset_all();

        let rooms = inventory.rooms();
        let mut rng = rand::rng();
        let to_book = rng.random_range(RANDOM_OCCUPANCY_MIN..=RANDOM_OCCUPANCY_MAX);
        let room_numbers: Vec<u32> = rand::seq::index::sample(&mut rng, rooms.len(), to_book)
            .into_iter()
            .map(|i| rooms[i].room_number)
            .collect();

        let booked = inventory.mark_booked(&room_numbers, Utc::now());
        info!(rooms_booked = booked, "Random occupancy generated");
        booked
    }
}

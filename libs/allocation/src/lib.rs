//! # roomplan-allocation
//!
//! Room catalog, travel-time metric, and the allocation engine for the
//! roomplan booking service.
//!
//! ## Design Principles
//!
//! - The engine is a pure function over an in-memory snapshot of free rooms;
//!   it knows nothing about storage or transport
//! - Same-floor allocations are always preferred over cross-floor ones
//! - Cross-floor search is exhaustive for small inventories and falls back
//!   to bounded random sampling for large ones (best-effort, documented as
//!   non-deterministic)
//! - The engine never partially allocates: it returns the full requested
//!   count or an error

mod error;
mod room;
mod select;
mod travel;

pub use error::AllocationError;
pub use room::{full_catalog, Room, FLOORS, TOTAL_ROOMS};
pub use select::{select_rooms, select_rooms_with_rng, Selection, MAX_ROOMS_PER_BOOKING};
pub use travel::{total_travel_time, travel_time};

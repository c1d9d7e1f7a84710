//! Room inventory endpoints.
//!
//! Listing, full reset, and random occupancy generation.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use roomplan_allocation::Room;
use serde::Serialize;

use crate::state::AppState;

/// Create room routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(list_rooms))
        .route("/reset", post(reset))
        .route("/random", post(random_occupancy))
}

/// Response for listing rooms.
#[derive(Debug, Serialize)]
pub struct RoomsResponse {
    /// The full catalog, ascending by room number.
    pub rooms: Vec<Room>,
}

/// Response for a reset.
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub message: String,

    /// Number of rooms that were actually freed.
    pub rooms_reset: usize,
}

/// Response for random occupancy generation.
#[derive(Debug, Serialize)]
pub struct RandomResponse {
    pub message: String,

    /// Number of rooms booked by the random pass.
    pub rooms_booked: usize,
}

/// GET /api/rooms - the full 97-room catalog.
async fn list_rooms(State(state): State<AppState>) -> Json<RoomsResponse> {
    let rooms = state.bookings().list_rooms().await;
    Json(RoomsResponse { rooms })
}

/// POST /api/reset - free every room. Booking history is preserved.
async fn reset(State(state): State<AppState>) -> Json<ResetResponse> {
    let rooms_reset = state.bookings().reset_all().await;
    Json(ResetResponse {
        message: "All bookings cleared".to_string(),
        rooms_reset,
    })
}

/// POST /api/random - reset, then book a random subset of rooms directly.
async fn random_occupancy(State(state): State<AppState>) -> Json<RandomResponse> {
    let rooms_booked = state.bookings().random_occupancy().await;
    Json(RandomResponse {
        message: "Random occupancy generated".to_string(),
        rooms_booked,
    })
}

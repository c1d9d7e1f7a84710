//! Booking endpoints.
//!
//! Creating a booking runs the allocation engine; the history listing
//! returns the most recent records first.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use roomplan_allocation::{AllocationError, MAX_ROOMS_PER_BOOKING};
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, FieldError};
use crate::booking::{BookingError, DEFAULT_BOOKINGS_LIMIT};
use crate::inventory::Booking;
use crate::state::AppState;

/// Create booking routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/book", post(book))
        .route("/bookings", get(list_bookings))
}

/// Request to book rooms.
#[derive(Debug, Deserialize)]
pub struct BookRequest {
    /// Number of rooms to allocate, 1-5.
    pub num_rooms: i64,
}

/// Response for a successful booking.
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub booking_id: String,
    pub rooms: Vec<u32>,
    pub total_travel_time: f64,
    pub created_at: DateTime<Utc>,
    pub message: String,
}

/// Response for the booking history listing.
#[derive(Debug, Serialize)]
pub struct BookingsResponse {
    /// Most recent bookings, newest first.
    pub bookings: Vec<Booking>,
}

/// POST /api/book - allocate rooms and record the booking.
async fn book(
    State(state): State<AppState>,
    Json(request): Json<BookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    // Validate before the engine runs.
    if request.num_rooms < 1 || request.num_rooms > MAX_ROOMS_PER_BOOKING as i64 {
        return Err(ApiError::unprocessable(
            "invalid_num_rooms",
            format!(
                "num_rooms must be between 1 and {MAX_ROOMS_PER_BOOKING}, got {}",
                request.num_rooms
            ),
        )
        .with_details(vec![FieldError {
            field: "num_rooms".to_string(),
            message: format!("must be between 1 and {MAX_ROOMS_PER_BOOKING}"),
        }]));
    }

    let booking = state
        .bookings()
        .book(request.num_rooms as usize)
        .await
        .map_err(|e| match e {
            BookingError::Allocation(AllocationError::InsufficientInventory { .. }) => {
                ApiError::bad_request("insufficient_inventory", e.to_string())
            }
            BookingError::Allocation(AllocationError::InvalidCount { .. }) => {
                ApiError::unprocessable("invalid_num_rooms", e.to_string())
            }
        })?;

    Ok(Json(BookResponse {
        booking_id: booking.booking_id,
        rooms: booking.rooms,
        total_travel_time: booking.total_travel_time,
        created_at: booking.created_at,
        message: "Rooms booked successfully".to_string(),
    }))
}

/// GET /api/bookings - the latest 50 bookings, newest first.
async fn list_bookings(State(state): State<AppState>) -> Json<BookingsResponse> {
    let bookings = state.bookings().list_bookings(DEFAULT_BOOKINGS_LIMIT).await;
    Json(BookingsResponse { bookings })
}

//! HTTP API handlers and routing.

pub mod error;
mod bookings;
mod health;
mod rooms;

use axum::{
    http::{header, Method},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Create the main API router with all routes and middleware.
///
/// `cors_origins` comes from configuration; a `*` entry allows any origin.
pub fn create_router(state: AppState, cors_origins: &[String]) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(cors_layer_origin(cors_origins));

    Router::new()
        // Health endpoints
        .merge(health::routes())
        // Booking API
        .nest("/api", rooms::routes().merge(bookings::routes()))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Application state
        .with_state(state)
}

fn cors_layer_origin(origins: &[String]) -> AllowOrigin {
    if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins.iter().filter_map(|o| o.parse().ok()))
    }
}

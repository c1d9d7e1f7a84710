//! Application state shared across request handlers.

use std::sync::Arc;

use crate::booking::BookingService;

/// Shared application state.
///
/// This is passed to all request handlers via Axum's state extractor.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    bookings: BookingService,
}

impl AppState {
    /// Create a new application state.
    pub fn new(bookings: BookingService) -> Self {
        Self {
            inner: Arc::new(AppStateInner { bookings }),
        }
    }

    /// Get a reference to the booking service.
    pub fn bookings(&self) -> &BookingService {
        &self.inner.bookings
    }
}

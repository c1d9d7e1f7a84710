//! Error types for the allocation engine.

use thiserror::Error;

/// Errors that can occur when selecting rooms.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// The requested room count is outside the supported range.
    #[error("requested room count {requested} is outside the supported range 1-{max}")]
    InvalidCount { requested: usize, max: usize },

    /// Fewer free rooms exist than were requested.
    #[error("only {available} rooms available, {requested} requested")]
    InsufficientInventory { requested: usize, available: usize },
}

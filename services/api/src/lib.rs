//! roomplan booking API library.
//!
//! This crate primarily ships the `roomplan-api` binary, but we expose a
//! small library surface to enable integration testing and reuse.

pub mod api;
pub mod booking;
pub mod config;
pub mod inventory;
pub mod state;

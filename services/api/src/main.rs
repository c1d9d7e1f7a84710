//! roomplan booking API.
//!
//! Allocates hotel rooms to booking requests so as to minimize inter-room
//! travel time, and tracks booking history. The inventory is seeded with
//! the full 97-room catalog at startup.

use anyhow::Result;
use roomplan_api::{api, booking::BookingService, config, inventory::Inventory, state::AppState};
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = config::Config::from_env()?;

    // Initialize tracing (prefer RUST_LOG, fallback to ROOMPLAN_LOG_LEVEL)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Starting roomplan booking API");
    info!(listen_addr = %config.listen_addr, "Configuration loaded");

    // Seed the inventory and build the orchestrator
    let inventory = Inventory::new();
    info!(rooms = inventory.room_count(), "Inventory seeded");
    let state = AppState::new(BookingService::new(inventory));

    // Build and run the server
    let app = api::create_router(state, &config.cors_origins);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!(addr = %config.listen_addr, "Listening for connections");

    // Create shutdown channel for graceful shutdown
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let mut shutdown_rx = shutdown_rx;
                loop {
                    if *shutdown_rx.borrow() {
                        break;
                    }
                    if shutdown_rx.changed().await.is_err() {
                        break;
                    }
                }
                info!("HTTP server shutting down");
            })
            .await
    });

    // Wait for shutdown signal (Ctrl+C)
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
        result = server_handle => {
            match result {
                Ok(Ok(())) => info!("Server exited normally"),
                Ok(Err(e)) => error!(error = %e, "Server error"),
                Err(e) => error!(error = %e, "Server task panicked"),
            }
        }
    }

    let _ = shutdown_tx.send(true);

    info!("Booking API shutdown complete");
    Ok(())
}

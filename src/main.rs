//! Zombie Domain - a domain server for the multi-server adventure game
//!
//! The server is driven entirely by a hub:
//! - /newhub connects this domain to a hub server
//! - /arrive and /dropped track users and items the hub sends our way
//! - /command answers relayed player commands

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zombie_domain::infrastructure::http;
use zombie_domain::{AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zombie_domain=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Zombie Domain");

    // Initialize application state
    let state = Arc::new(AppState::new(config)?);
    tracing::info!("Application state initialized");

    // Build the router
    let app = http::create_router(state.clone());

    // Start the server
    let listener =
        tokio::net::TcpListener::bind((state.config.host.as_str(), state.config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    // Tell the operator where to point the game's web prompt
    println!(
        "URL to type into web prompt:\n\t{}",
        state.config.announced_base_url()
    );
    println!();

    // Run server with graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received, stopping");
        }
    }

    Ok(())
}

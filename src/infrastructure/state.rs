//! Shared application state

use anyhow::Result;
use tokio::sync::RwLock;

use crate::domain::commands::CommandDispatcher;
use crate::domain::world::WorldState;
use crate::infrastructure::config::ServerConfig;
use crate::infrastructure::hub::HubClient;

/// Shared application state
///
/// One instance per process, handed to every handler behind an `Arc`.
pub struct AppState {
    pub config: ServerConfig,
    /// Outbound client for the hub handshake
    pub hub: HubClient,
    /// Verb routing for relayed player commands
    pub dispatcher: CommandDispatcher,
    /// All mutable domain state, behind a single lock
    pub world: RwLock<WorldState>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self> {
        let hub = HubClient::new(config.announced_base_url())?;

        Ok(Self {
            config,
            hub,
            dispatcher: CommandDispatcher::new(),
            world: RwLock::new(WorldState::new()),
        })
    }
}

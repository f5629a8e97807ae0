//! Domain layer - world state and command logic with no transport concerns
//!
//! This layer contains:
//! - World: users, item placements, and the hub registration
//! - Commands: verb dispatch for relayed player commands
//! - Content: the shipped Zombie Domain world data

pub mod commands;
pub mod content;
pub mod world;

pub use commands::{CommandContext, CommandDispatcher, CommandReply};
pub use world::{HubRegistration, ItemState, UserState, WorldState};

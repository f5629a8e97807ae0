//! Zombie Domain - a domain server for the multi-server adventure game
//!
//! A hub server routes players between independently run domains. This
//! crate implements one such domain: it registers itself with a hub,
//! then serves the hub's calls for user arrivals, item drops, and
//! relayed player commands.

pub mod domain;
pub mod infrastructure;

pub use infrastructure::config::ServerConfig;
pub use infrastructure::state::AppState;

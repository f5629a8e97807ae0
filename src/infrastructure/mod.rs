//! Infrastructure layer - transport adapters around the domain
//!
//! This layer contains:
//! - HTTP: routes the hub calls on this domain
//! - Hub: outbound client for the registration handshake
//! - Config: command line options
//! - State: shared application state

pub mod config;
pub mod http;
pub mod hub;
pub mod state;

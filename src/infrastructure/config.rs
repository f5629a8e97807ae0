//! Server configuration from the command line

use clap::Parser;

/// Command line options for the domain server
#[derive(Debug, Clone, Parser)]
#[command(name = "zombie-domain")]
#[command(about = "Hub-connected domain server for the Zombie Domain")]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3400)]
    pub port: u16,
}

impl ServerConfig {
    /// Base URL a browser on another machine can reach this server at.
    ///
    /// Announced to hubs at registration and printed at startup. A host
    /// without a fully qualified name falls back to localhost.
    pub fn announced_base_url(&self) -> String {
        let hostname = gethostname::gethostname().to_string_lossy().into_owned();
        base_url_for(&hostname, self.port)
    }
}

fn base_url_for(hostname: &str, port: u16) -> String {
    let host = if hostname.contains('.') {
        hostname
    } else {
        "localhost"
    };
    format!("http://{}:{}", host, port)
}

//! Outbound client for the hub registration handshake

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::content::{self, CatalogItem};

/// How long one outbound hub call may take before it is abandoned
const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

/// Client for a hub server's registration API
pub struct HubClient {
    client: Client,
    /// Externally reachable base URL this domain announces to the hub
    public_url: String,
}

impl HubClient {
    pub fn new(public_url: String) -> Result<Self, HubError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, public_url })
    }

    /// Announce this domain to the hub at `hub_url`.
    ///
    /// One call, no retry. A reply whose body carries an `error` field is
    /// a rejection, whatever its status code, and is handed back for
    /// verbatim forwarding.
    pub async fn register(&self, hub_url: &str) -> Result<RegisterOutcome, HubError> {
        let request = RegisterRequest {
            url: self.public_url.clone(),
            name: content::DOMAIN_NAME,
            description: content::DOMAIN_DESCRIPTION,
            items: content::catalog(),
        };

        let response = self
            .client
            .post(format!("{}/register", hub_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body: serde_json::Value = response.json().await?;

        if body.get("error").is_some() {
            tracing::warn!("Hub {} rejected registration ({}): {}", hub_url, status, body);
            return Ok(RegisterOutcome::Rejected { status, body });
        }

        let grant: HubGrant = serde_json::from_value(body)?;
        tracing::info!("Hub {} granted domain id {}", hub_url, grant.id);
        Ok(RegisterOutcome::Granted(grant))
    }
}

/// How the hub answered a registration attempt
#[derive(Debug)]
pub enum RegisterOutcome {
    /// The hub accepted and issued identifiers
    Granted(HubGrant),
    /// The hub refused; status and body go back to the caller untouched
    Rejected { status: u16, body: serde_json::Value },
}

/// Identifiers the hub assigns on a successful registration
#[derive(Debug, Deserialize)]
pub struct HubGrant {
    pub id: String,
    pub secret: String,
    /// Per-item identifier echo, kept opaque
    pub items: serde_json::Value,
}

#[derive(Debug, thiserror::Error)]
pub enum HubError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("unusable grant from hub: {0}")]
    GrantError(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct RegisterRequest {
    url: String,
    name: &'static str,
    description: &'static str,
    items: Vec<CatalogItem>,
}

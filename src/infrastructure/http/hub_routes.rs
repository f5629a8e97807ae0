//! Hub handshake routes

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::domain::content;
use crate::domain::world::HubRegistration;
use crate::infrastructure::hub::RegisterOutcome;
use crate::infrastructure::state::AppState;

/// Connect this domain to a hub server.
///
/// The request body is the hub's base URL as plain text. The domain
/// announces itself to that hub and stores the identifiers the hub
/// assigns. A rejection from the hub is forwarded to the caller with the
/// hub's own status and body, and nothing is stored.
pub async fn register_with_hub(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<(StatusCode, Json<serde_json::Value>), (StatusCode, String)> {
    let hub_url = body.trim().trim_end_matches('/').to_string();

    let outcome = state
        .hub
        .register(&hub_url)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    match outcome {
        RegisterOutcome::Rejected { status, body } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Ok((status, Json(body)))
        }
        RegisterOutcome::Granted(grant) => {
            let mut world = state.world.write().await;
            world.install_registration(HubRegistration {
                hub_url,
                domain_id: grant.id,
                secret: grant.secret,
                items: grant.items,
            });

            Ok((
                StatusCode::OK,
                Json(json!({ "ok": content::REGISTERED_MESSAGE })),
            ))
        }
    }
}

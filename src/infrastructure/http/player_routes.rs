//! Player lifecycle routes, called by the hub on behalf of players

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::domain::commands::CommandReply;
use crate::domain::content;
use crate::infrastructure::state::AppState;

/// A hub's reference to an item.
///
/// Only the id matters to this domain. Hubs attach arbitrary extra
/// fields, including location tokens this domain minted earlier, and
/// those are accepted and ignored.
#[derive(Debug, Deserialize)]
pub struct ItemRef {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct ArriveRequest {
    pub user: String,
    pub from: Option<String>,
    #[serde(default)]
    pub carried: Vec<ItemRef>,
}

#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub ok: &'static str,
}

/// A user entered or re-entered this domain, possibly carrying items
pub async fn arrive(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ArriveRequest>,
) -> Json<AckResponse> {
    let mut world = state.world.write().await;

    world.record_arrival(&req.user, req.from.as_deref());
    for item in &req.carried {
        world.claim_item(&item.id, &req.user);
    }

    Json(AckResponse {
        ok: content::ARRIVAL_GREETING,
    })
}

#[derive(Debug, Deserialize)]
pub struct DroppedRequest {
    pub user: String,
    pub item: ItemRef,
}

/// A user dropped an item here.
///
/// The reply is the location as a bare JSON string. The hub hands the
/// same value back inside `carried` entries on later arrivals.
pub async fn dropped(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DroppedRequest>,
) -> Json<String> {
    let location = content::random_drop_location();

    let mut world = state.world.write().await;
    world.place_dropped_item(&req.item.id, location, &req.user);

    Json(location.to_string())
}

#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    pub user: String,
    #[serde(default)]
    pub command: Vec<String>,
}

/// A free-text player command relayed by the hub
pub async fn command(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CommandRequest>,
) -> Json<CommandReply> {
    let world = state.world.read().await;
    Json(state.dispatcher.dispatch(&req.user, &req.command, &world))
}

//! In-memory state for users, items, and the hub registration
//!
//! This module tracks everything the domain knows between requests:
//! which users are here, where every known item sits, and the identity
//! the hub assigned at registration. State lives for the process
//! lifetime only; a restart forgets everything.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::content;

/// Where a user currently stands in this domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserState {
    pub location: String,
    /// Domain the user came from, as reported by the hub
    pub from: String,
}

/// Where an item currently is
///
/// An item is in exactly one of these states at a time. The hub may hold
/// a different opinion; the last write here wins and no reconciliation
/// is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemState {
    /// In some user's inventory
    CarriedBy { user: String },
    /// On the ground somewhere in the domain
    PlacedAt {
        location: String,
        /// Who left it there, when known
        dropped_by: Option<String>,
    },
}

/// Identity the hub assigned to this domain at registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubRegistration {
    pub hub_url: String,
    pub domain_id: String,
    pub secret: String,
    /// The hub's per-item identifier echo, kept verbatim
    pub items: serde_json::Value,
}

/// All mutable state owned by the server process
#[derive(Debug, Default)]
pub struct WorldState {
    users: HashMap<String, UserState>,
    items: HashMap<String, ItemState>,
    registration: Option<HubRegistration>,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a user at the entrance, replacing any previous state.
    ///
    /// Re-arrival resets the location unconditionally; a missing origin
    /// is recorded as unknown.
    pub fn record_arrival(&mut self, user: &str, from: Option<&str>) {
        let state = UserState {
            location: content::ENTRANCE.to_string(),
            from: from.unwrap_or(content::UNKNOWN_ORIGIN).to_string(),
        };
        tracing::info!("User {} arrived from {}", user, state.from);
        self.users.insert(user.to_string(), state);
    }

    /// Mark an item as carried by a user.
    ///
    /// Overwrites any prior placement without cross-checking; the hub's
    /// word on who carries what is taken at face value.
    pub fn claim_item(&mut self, item_id: &str, user: &str) {
        tracing::debug!("Item {} is now carried by {}", item_id, user);
        self.items.insert(
            item_id.to_string(),
            ItemState::CarriedBy {
                user: user.to_string(),
            },
        );
    }

    /// Put a dropped item on the ground at a location
    pub fn place_dropped_item(&mut self, item_id: &str, location: &str, dropped_by: &str) {
        tracing::info!("Item {} dropped at {} by {}", item_id, location, dropped_by);
        self.items.insert(
            item_id.to_string(),
            ItemState::PlacedAt {
                location: location.to_string(),
                dropped_by: Some(dropped_by.to_string()),
            },
        );
    }

    /// Ids of every item the user is carrying, in no particular order
    pub fn inventory_of(&self, user: &str) -> Vec<String> {
        self.items
            .iter()
            .filter_map(|(id, state)| match state {
                ItemState::CarriedBy { user: carrier } if carrier == user => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    /// Store the hub's registration grant, replacing any previous one
    pub fn install_registration(&mut self, registration: HubRegistration) {
        if let Some(previous) = &self.registration {
            tracing::warn!(
                "Replacing registration with hub {} (domain id {})",
                previous.hub_url,
                previous.domain_id
            );
        }
        tracing::info!(
            "Registered with hub {} as domain {}",
            registration.hub_url,
            registration.domain_id
        );
        self.registration = Some(registration);
    }

    pub fn registration(&self) -> Option<&HubRegistration> {
        self.registration.as_ref()
    }

    pub fn user(&self, user: &str) -> Option<&UserState> {
        self.users.get(user)
    }

    pub fn item(&self, item_id: &str) -> Option<&ItemState> {
        self.items.get(item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_registration(hub_url: &str, domain_id: &str) -> HubRegistration {
        HubRegistration {
            hub_url: hub_url.to_string(),
            domain_id: domain_id.to_string(),
            secret: "s3cret".to_string(),
            items: serde_json::json!([{ "id": "item-1" }]),
        }
    }

    #[test]
    fn test_arrival_places_user_at_entrance() {
        let mut world = WorldState::new();

        world.record_arrival("alice", Some("forest_domain"));

        let user = world.user("alice").unwrap();
        assert_eq!(user.location, "entrance");
        assert_eq!(user.from, "forest_domain");
    }

    #[test]
    fn test_arrival_without_origin_records_unknown() {
        let mut world = WorldState::new();

        world.record_arrival("alice", None);

        assert_eq!(world.user("alice").unwrap().from, "unknown");
    }

    #[test]
    fn test_rearrival_overwrites_previous_state() {
        let mut world = WorldState::new();

        world.record_arrival("alice", Some("forest_domain"));
        world.record_arrival("alice", None);

        let user = world.user("alice").unwrap();
        assert_eq!(user.location, "entrance");
        assert_eq!(user.from, "unknown");
    }

    #[test]
    fn test_claimed_item_shows_in_inventory() {
        let mut world = WorldState::new();

        world.claim_item("rusty_key", "alice");

        assert_eq!(world.inventory_of("alice"), vec!["rusty_key".to_string()]);
    }

    #[test]
    fn test_inventory_only_lists_own_items() {
        let mut world = WorldState::new();

        world.claim_item("rusty_key", "alice");
        world.claim_item("antidote", "bob");

        assert_eq!(world.inventory_of("alice"), vec!["rusty_key".to_string()]);
        assert_eq!(world.inventory_of("bob"), vec!["antidote".to_string()]);
        assert!(world.inventory_of("carol").is_empty());
    }

    #[test]
    fn test_dropped_item_leaves_inventory() {
        let mut world = WorldState::new();

        world.claim_item("rusty_key", "alice");
        world.place_dropped_item("rusty_key", "in_corner", "alice");

        assert!(world.inventory_of("alice").is_empty());
        assert_eq!(
            world.item("rusty_key"),
            Some(&ItemState::PlacedAt {
                location: "in_corner".to_string(),
                dropped_by: Some("alice".to_string()),
            })
        );
    }

    #[test]
    fn test_claiming_a_placed_item_picks_it_up() {
        let mut world = WorldState::new();

        world.place_dropped_item("rusty_key", "by_window", "alice");
        world.claim_item("rusty_key", "bob");

        assert_eq!(world.inventory_of("bob"), vec!["rusty_key".to_string()]);
    }

    #[test]
    fn test_registration_starts_unset() {
        let world = WorldState::new();
        assert!(world.registration().is_none());
    }

    #[test]
    fn test_reregistration_overwrites() {
        let mut world = WorldState::new();

        world.install_registration(create_test_registration("http://hub-a", "dom-1"));
        world.install_registration(create_test_registration("http://hub-b", "dom-2"));

        let registration = world.registration().unwrap();
        assert_eq!(registration.hub_url, "http://hub-b");
        assert_eq!(registration.domain_id, "dom-2");
    }
}

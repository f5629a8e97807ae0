//! Shipped world content for the Zombie Domain
//!
//! Everything a hub learns about this domain, and every piece of flavor
//! text a player sees, lives here. The surrounding machinery is content
//! agnostic, so a different world swaps this module and nothing else.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use serde::Serialize;

pub const DOMAIN_NAME: &str = "Zombie Domain";
pub const DOMAIN_DESCRIPTION: &str = "A spooky domain filled with zombies and mysteries";

/// Where every arriving user starts out
pub const ENTRANCE: &str = "entrance";
/// Origin recorded when the hub does not say where a user came from
pub const UNKNOWN_ORIGIN: &str = "unknown";

pub const ARRIVAL_GREETING: &str = "Welcome to the Zombie Domain";
pub const REGISTERED_MESSAGE: &str = "Domain registered successfully";
pub const LOOK_MESSAGE: &str = "You see zombies shuffling around in the darkness.";
pub const NO_COMMAND_MESSAGE: &str = "No command provided";

/// Spots where a dropped item can end up
pub const DROP_LOCATIONS: [&str; 4] = ["near_entrance", "in_corner", "by_window", "under_table"];

/// One entry in the catalog announced to the hub at registration
#[derive(Debug, Clone, Serialize)]
pub struct CatalogItem {
    pub name: &'static str,
    pub description: &'static str,
    /// Verb name to flavor text, applied by the hub when a player uses the item
    pub verb: BTreeMap<&'static str, &'static str>,
    /// How deep into the domain the item is hidden
    pub depth: u32,
}

/// The items this domain offers
pub fn catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            name: "Rusty Key",
            description: "An old rusty key that might unlock something important",
            verb: BTreeMap::from([
                ("use", "You try the key in various locks..."),
                ("examine", "The key looks very old"),
            ]),
            depth: 1,
        },
        CatalogItem {
            name: "Zombie Antidote",
            description: "A mysterious vial containing what appears to be a cure",
            verb: BTreeMap::from([
                ("drink", "You feel stronger..."),
                ("examine", "The liquid glows with an eerie green light"),
            ]),
            depth: 2,
        },
    ]
}

/// Pick a spot for a dropped item
pub fn random_drop_location() -> &'static str {
    DROP_LOCATIONS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(DROP_LOCATIONS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_location_is_advertised() {
        for _ in 0..20 {
            let location = random_drop_location();
            assert!(DROP_LOCATIONS.contains(&location));
        }
    }

    #[test]
    fn test_catalog_lists_both_items() {
        let items = catalog();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Rusty Key");
        assert_eq!(items[1].name, "Zombie Antidote");
    }

    #[test]
    fn test_catalog_serializes_verb_maps() {
        let value = serde_json::to_value(catalog()).unwrap();
        assert_eq!(value[0]["verb"]["use"], "You try the key in various locks...");
        assert_eq!(value[1]["verb"]["drink"], "You feel stronger...");
        assert_eq!(value[1]["depth"], 2);
    }
}

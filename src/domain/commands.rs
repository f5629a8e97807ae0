//! Verb dispatch for player commands relayed by the hub
//!
//! The hub sends commands as a token list; the first token names the
//! verb. Verbs the domain does not know fall through to a catch-all
//! reply instead of an error, so players can type freely.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::content;
use crate::domain::world::WorldState;

/// What a command handler sends back to the hub
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandReply {
    Message { message: String },
    Inventory { items: Vec<String> },
    Error { error: String },
}

/// What a verb handler gets to look at: the issuing user and a read-only
/// view of the world
pub struct CommandContext<'a> {
    pub user: &'a str,
    pub world: &'a WorldState,
}

type VerbHandler = fn(&CommandContext) -> CommandReply;

/// Routes the first command token to its verb handler
pub struct CommandDispatcher {
    verbs: HashMap<&'static str, VerbHandler>,
    fallback: fn(&str) -> CommandReply,
}

impl CommandDispatcher {
    pub fn new() -> Self {
        let mut verbs: HashMap<&'static str, VerbHandler> = HashMap::new();
        verbs.insert("look", look);
        verbs.insert("inventory", inventory);

        Self {
            verbs,
            fallback: unknown_verb,
        }
    }

    /// Run the verb named by the first token, case-folded.
    ///
    /// An empty command is a user mistake, not a fault, so it comes back
    /// as an error reply rather than a transport failure.
    pub fn dispatch(&self, user: &str, command: &[String], world: &WorldState) -> CommandReply {
        let first = match command.first() {
            Some(token) => token,
            None => {
                return CommandReply::Error {
                    error: content::NO_COMMAND_MESSAGE.to_string(),
                }
            }
        };

        let action = first.to_lowercase();
        let context = CommandContext { user, world };

        match self.verbs.get(action.as_str()) {
            Some(handler) => handler(&context),
            None => (self.fallback)(&action),
        }
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn look(_context: &CommandContext) -> CommandReply {
    CommandReply::Message {
        message: content::LOOK_MESSAGE.to_string(),
    }
}

fn inventory(context: &CommandContext) -> CommandReply {
    CommandReply::Inventory {
        items: context.world.inventory_of(context.user),
    }
}

fn unknown_verb(action: &str) -> CommandReply {
    CommandReply::Message {
        message: format!("You try to {}, but nothing happens.", action),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_empty_command_reports_error() {
        let dispatcher = CommandDispatcher::new();
        let world = WorldState::new();

        let reply = dispatcher.dispatch("alice", &[], &world);

        assert_eq!(
            reply,
            CommandReply::Error {
                error: "No command provided".to_string()
            }
        );
    }

    #[test]
    fn test_look_describes_the_room() {
        let dispatcher = CommandDispatcher::new();
        let world = WorldState::new();

        let reply = dispatcher.dispatch("alice", &command(&["look"]), &world);

        assert_eq!(
            reply,
            CommandReply::Message {
                message: "You see zombies shuffling around in the darkness.".to_string()
            }
        );
    }

    #[test]
    fn test_verbs_fold_case() {
        let dispatcher = CommandDispatcher::new();
        let world = WorldState::new();

        let shouted = dispatcher.dispatch("alice", &command(&["LOOK"]), &world);
        let spoken = dispatcher.dispatch("alice", &command(&["look"]), &world);

        assert_eq!(shouted, spoken);
    }

    #[test]
    fn test_inventory_reads_the_world() {
        let dispatcher = CommandDispatcher::new();
        let mut world = WorldState::new();
        world.claim_item("rusty_key", "alice");
        world.claim_item("antidote", "bob");

        let reply = dispatcher.dispatch("alice", &command(&["Inventory"]), &world);

        assert_eq!(
            reply,
            CommandReply::Inventory {
                items: vec!["rusty_key".to_string()]
            }
        );
    }

    #[test]
    fn test_unknown_verb_echoes_action_lowercased() {
        let dispatcher = CommandDispatcher::new();
        let world = WorldState::new();

        let reply = dispatcher.dispatch("alice", &command(&["DANCE", "wildly"]), &world);

        assert_eq!(
            reply,
            CommandReply::Message {
                message: "You try to dance, but nothing happens.".to_string()
            }
        );
    }

    #[test]
    fn test_extra_tokens_are_ignored_by_known_verbs() {
        let dispatcher = CommandDispatcher::new();
        let world = WorldState::new();

        let reply = dispatcher.dispatch("alice", &command(&["look", "around", "carefully"]), &world);

        assert_eq!(
            reply,
            CommandReply::Message {
                message: "You see zombies shuffling around in the darkness.".to_string()
            }
        );
    }

    #[test]
    fn test_reply_wire_shapes() {
        let message = serde_json::to_value(CommandReply::Message {
            message: "hi".to_string(),
        })
        .unwrap();
        let inventory = serde_json::to_value(CommandReply::Inventory {
            items: vec!["a".to_string()],
        })
        .unwrap();
        let error = serde_json::to_value(CommandReply::Error {
            error: "nope".to_string(),
        })
        .unwrap();

        assert_eq!(message, serde_json::json!({ "message": "hi" }));
        assert_eq!(inventory, serde_json::json!({ "items": ["a"] }));
        assert_eq!(error, serde_json::json!({ "error": "nope" }));
    }
}

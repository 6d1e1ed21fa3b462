//! Wire types for Discord interactions.
//!
//! An interaction is immutable once received; its lifetime is one
//! request/response cycle, extended only by the deferred image task which
//! keeps the continuation token alive until completion.

use serde::Deserialize;
use serde_json::Value;

/// Interaction type `1`: liveness ping from Discord.
pub const INTERACTION_TYPE_PING: u8 = 1;
/// Interaction type `2`: a slash command invocation.
pub const INTERACTION_TYPE_APPLICATION_COMMAND: u8 = 2;

/// An inbound interaction payload, as posted by Discord.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub application_id: String,
    /// Continuation token authorizing one later edit of the deferred response.
    #[serde(default)]
    pub token: String,
    pub data: Option<InteractionData>,
    pub member: Option<GuildMember>,
    pub user: Option<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InteractionData {
    pub name: String,
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

/// A named option value; Discord sends strings for string options and
/// booleans for boolean options, so the value stays a `serde_json::Value`
/// until the typed parameter structs pick it apart.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandOption {
    pub name: String,
    pub value: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuildMember {
    pub user: Option<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    #[serde(default)]
    pub username: String,
    pub global_name: Option<String>,
}

impl Interaction {
    /// Parse an interaction from the raw request body.
    pub fn from_json(body: &str) -> Result<Self, crate::BotError> {
        serde_json::from_str(body)
            .map_err(|e| crate::BotError::ParseError(format!("Invalid interaction JSON: {}", e)))
    }

    /// Display name of the invoking user, falling back to the username.
    pub fn invoker_name(&self) -> &str {
        let user = self
            .member
            .as_ref()
            .and_then(|m| m.user.as_ref())
            .or(self.user.as_ref());

        match user {
            Some(u) => u.global_name.as_deref().unwrap_or_else(|| {
                if u.username.is_empty() {
                    "user"
                } else {
                    &u.username
                }
            }),
            None => "user",
        }
    }

    pub fn command_name(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.name.as_str())
    }

    /// The (application id, continuation token) pair authorizing exactly one
    /// later PATCH of the deferred response.
    pub fn deferred_handle(&self) -> DeferredHandle {
        DeferredHandle {
            application_id: self.application_id.clone(),
            token: self.token.clone(),
        }
    }
}

impl InteractionData {
    pub fn option_str(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.name == name)
            .and_then(|o| o.value.as_str())
    }

    pub fn option_bool(&self, name: &str) -> Option<bool> {
        self.options
            .iter()
            .find(|o| o.name == name)
            .and_then(|o| o.value.as_bool())
    }
}

/// Authorization to complete a previously-deferred interaction.
///
/// Valid only for the platform-enforced window (~15 minutes) after the
/// deferred acknowledgment; no local expiry tracking is done, the PATCH
/// simply fails once the token has lapsed.
#[derive(Debug, Clone)]
pub struct DeferredHandle {
    pub application_id: String,
    pub token: String,
}

/// A single binary attachment for a completion payload.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub bytes: Vec<u8>,
    pub media_type: String,
    pub filename: Option<String>,
}

impl Attachment {
    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            media_type: "image/png".to_string(),
            filename: None,
        }
    }
}

//! Chat message types for the conversation transcript.
//!
//! A transcript is an append-only sequence of [`ChatMessage`]s attributed to
//! either the user or the bot. Messages are immutable once created and are
//! never deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Who produced a transcript message.
///
/// Matches the `sender` field the upstream API uses ('user' or 'bot').
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Sender::User),
            "bot" => Ok(Sender::Bot),
            other => Err(format!("invalid sender: '{other}'")),
        }
    }
}

/// A single message in the conversation transcript.
///
/// Created on send (optimistic local echo) or on receipt of a bot reply.
/// The `is_error` flag marks locally generated error bubbles; such messages
/// are attributed to the bot but never came from the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub is_error: bool,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new transcript message stamped with the current time.
    pub fn new(sender: Sender, text: impl Into<String>, is_error: bool) -> Self {
        Self {
            id: Uuid::now_v7(),
            sender,
            text: text.into(),
            is_error,
            created_at: Utc::now(),
        }
    }
}

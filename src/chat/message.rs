//! Chat message types.

use serde::{Deserialize, Serialize};

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single `(role, content)` chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// An ordered conversation sent to the model in one request.
///
/// The shape is fixed at construction:
///
/// - zero-shot: `[system, user]`
/// - one-shot: `[system, user, assistant]`
/// - few-shot with follow-up: `[system, user, assistant, user]`
///
/// A follow-up user message is only accepted together with an example reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageSequence {
    messages: Vec<ChatMessage>,
}

impl MessageSequence {
    /// Build a sequence from its parts.
    ///
    /// `follow_up` is dropped when `example_reply` is `None`.
    pub fn new(
        system: impl Into<String>,
        user: impl Into<String>,
        example_reply: Option<String>,
        follow_up: Option<String>,
    ) -> Self {
        let mut messages = vec![ChatMessage::system(system), ChatMessage::user(user)];

        if let Some(reply) = example_reply {
            messages.push(ChatMessage::assistant(reply));
            if let Some(next) = follow_up {
                messages.push(ChatMessage::user(next));
            }
        }

        Self { messages }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false; a sequence holds at least a system and a user message.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn system(&self) -> &ChatMessage {
        &self.messages[0]
    }

    pub fn user(&self) -> &ChatMessage {
        &self.messages[1]
    }

    pub fn roles(&self) -> Vec<Role> {
        self.messages.iter().map(|m| m.role).collect()
    }
}

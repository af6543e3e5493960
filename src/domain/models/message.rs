use chrono::{Local, NaiveTime};
use serde::{Deserialize, Serialize};

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Sender label shown in front of the message body
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "Вы",
            Role::Assistant => "Steppy",
        }
    }

    /// Font Awesome icon class for the sender badge
    pub fn icon(&self) -> &'static str {
        match self {
            Role::User => "fa-user",
            Role::Assistant => "fa-robot",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Role::User => "user-message",
            Role::Assistant => "assistant-message",
        }
    }
}

/// A rendered chat message.
///
/// Messages are never mutated once appended to a transcript. The timestamp is the
/// wall-clock time at which the client rendered it, not anything the server reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub timestamp: NaiveTime,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self::at(role, content, Local::now().time())
    }

    pub fn at(role: Role, content: impl Into<String>, timestamp: NaiveTime) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// `HH:MM:SS`
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    /// Content split on newlines; the view puts a line break between consecutive items.
    pub fn content_lines(&self) -> Vec<&str> {
        self.content.split('\n').collect()
    }
}

/// A history entry as stored by the server session (`/export_chat` → `messages`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryEntry {
    pub role: Role,
    pub content: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HistoryEntry {
    /// Convert into a transcript message, keeping the server's `HH:MM:SS` when it parses.
    pub fn into_message(self) -> Message {
        let timestamp = self
            .timestamp
            .as_deref()
            .and_then(|t| NaiveTime::parse_from_str(t, "%H:%M:%S").ok());

        match timestamp {
            Some(ts) => Message::at(self.role, self.content, ts),
            None => Message::new(self.role, self.content),
        }
    }
}

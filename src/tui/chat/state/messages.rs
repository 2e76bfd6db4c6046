// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Message state for the chat TUI
//!
//! Holds the append-only transcript and the transient typing-indicator entry.

use std::time::SystemTime;

use uuid::Uuid;

/// Safely truncate a string at a character boundary, appending "..." if truncated.
/// This avoids panics when slicing multi-byte UTF-8 characters.
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// Role of a message participant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Bot,
}

impl MessageRole {
    pub fn label(&self) -> &'static str {
        match self {
            MessageRole::User => "you",
            MessageRole::Bot => "assistant",
        }
    }

    /// Parse a role string from the backend's history transcript
    pub fn from_wire(role: &str) -> Self {
        match role {
            "user" => MessageRole::User,
            _ => MessageRole::Bot,
        }
    }
}

/// A message for display in the chat
#[derive(Debug, Clone)]
pub struct DisplayMessage {
    /// Unique ID
    pub id: Uuid,
    /// Role (user, bot)
    pub role: MessageRole,
    /// Text content
    pub content: String,
    /// Timestamp
    pub timestamp: SystemTime,
    /// Whether this entry is the typing-indicator placeholder
    pub is_typing_indicator: bool,
}

impl DisplayMessage {
    /// Create a new user message
    pub fn user(content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: MessageRole::User,
            content,
            timestamp: SystemTime::now(),
            is_typing_indicator: false,
        }
    }

    /// Create a new bot message
    pub fn bot(content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: MessageRole::Bot,
            content,
            timestamp: SystemTime::now(),
            is_typing_indicator: false,
        }
    }

    /// Create the typing-indicator placeholder
    pub fn typing_indicator() -> Self {
        Self {
            id: Uuid::new_v4(),
            role: MessageRole::Bot,
            content: String::new(),
            timestamp: SystemTime::now(),
            is_typing_indicator: true,
        }
    }
}

/// The ordered, append-only message transcript.
///
/// Entries are never edited or removed except the typing-indicator
/// placeholder, which is tracked by id so hide removes exactly the entry that
/// show appended.
#[derive(Debug, Clone, Default)]
pub struct MessageList {
    entries: Vec<DisplayMessage>,
    typing_id: Option<Uuid>,
}

impl MessageList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.entries.push(DisplayMessage::user(content.into()));
    }

    /// Append a bot message
    pub fn push_bot(&mut self, content: impl Into<String>) {
        self.entries.push(DisplayMessage::bot(content.into()));
    }

    /// Append the typing indicator. Idempotent: a second show without an
    /// intervening hide is a no-op. Returns whether an entry was appended.
    pub fn show_typing(&mut self) -> bool {
        if self.typing_id.is_some() {
            return false;
        }
        let indicator = DisplayMessage::typing_indicator();
        self.typing_id = Some(indicator.id);
        self.entries.push(indicator);
        true
    }

    /// Remove the typing indicator by identity; no-op when absent.
    /// Returns whether an entry was removed.
    pub fn hide_typing(&mut self) -> bool {
        let Some(id) = self.typing_id.take() else {
            return false;
        };
        if let Some(pos) = self.entries.iter().position(|m| m.id == id) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    /// Whether the typing indicator is currently shown
    pub fn typing_visible(&self) -> bool {
        self.typing_id.is_some()
    }

    pub fn entries(&self) -> &[DisplayMessage] {
        &self.entries
    }

    pub fn last(&self) -> Option<&DisplayMessage> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop the whole transcript, including any typing indicator
    pub fn clear(&mut self) {
        self.entries.clear();
        self.typing_id = None;
    }
}

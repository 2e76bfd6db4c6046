// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Event system for the chat TUI
//!
//! Events allow async operations (session creation, FAQ loading, ask
//! requests) to communicate with the UI without blocking. Uses tokio mpsc
//! channels for thread-safe messaging.

use tokio::sync::mpsc;

use crate::api::{ConversationHistory, FaqEntry};

use super::app::controller::AskOutcome;

/// Events for async communication between network tasks and the UI
#[derive(Debug, Clone)]
pub enum ChatEvent {
    // === Startup ===
    /// The backend issued a new session id
    SessionCreated(String),
    /// Session creation failed; the session stays unset
    SessionFailed(String),
    /// FAQ list arrived
    FaqsLoaded(Vec<FaqEntry>),
    /// FAQ fetch failed; the panel stays empty
    FaqsFailed(String),

    // === Ask lifecycle ===
    /// An in-flight ask request settled (answer or failure)
    AskSettled(AskOutcome),

    // === History ===
    /// Stored transcript arrived
    HistoryLoaded(ConversationHistory),
    /// History fetch failed
    HistoryFailed(String),

    // === System events ===
    /// An error occurred
    Error(String),
    /// Status message to display
    Status(String),
    /// Request to refresh the UI
    Refresh,
}

/// Type alias for the event sender
pub type EventSender = mpsc::UnboundedSender<ChatEvent>;

/// Type alias for the event receiver
pub type EventReceiver = mpsc::UnboundedReceiver<ChatEvent>;

/// Create a new event channel
pub fn create_event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

/// Helper for sending events, ignoring errors if receiver is dropped
pub fn send_event(tx: &EventSender, event: ChatEvent) {
    let _ = tx.send(event);
}

/// Wrapper that can be cloned and passed to async tasks
#[derive(Clone)]
pub struct EventEmitter {
    tx: EventSender,
}

impl EventEmitter {
    pub fn new(tx: EventSender) -> Self {
        Self { tx }
    }

    pub fn emit(&self, event: ChatEvent) {
        send_event(&self.tx, event);
    }

    pub fn session_created(&self, id: impl Into<String>) {
        self.emit(ChatEvent::SessionCreated(id.into()));
    }

    pub fn session_failed(&self, error: &str) {
        self.emit(ChatEvent::SessionFailed(error.to_string()));
    }

    pub fn faqs_loaded(&self, faqs: Vec<FaqEntry>) {
        self.emit(ChatEvent::FaqsLoaded(faqs));
    }

    pub fn faqs_failed(&self, error: &str) {
        self.emit(ChatEvent::FaqsFailed(error.to_string()));
    }

    pub fn ask_settled(&self, outcome: AskOutcome) {
        self.emit(ChatEvent::AskSettled(outcome));
    }

    pub fn history_loaded(&self, history: ConversationHistory) {
        self.emit(ChatEvent::HistoryLoaded(history));
    }

    pub fn history_failed(&self, error: &str) {
        self.emit(ChatEvent::HistoryFailed(error.to_string()));
    }

    pub fn error(&self, msg: &str) {
        self.emit(ChatEvent::Error(msg.to_string()));
    }

    pub fn status(&self, msg: &str) {
        self.emit(ChatEvent::Status(msg.to_string()));
    }
}

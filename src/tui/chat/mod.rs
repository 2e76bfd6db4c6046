// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat TUI module
//!
//! The terminal interface for the support chat:
//! - message transcript with a typing indicator while a request is in flight
//! - FAQ quick-reply panel
//! - interactive input with history navigation
//! - permanent escalation notice once the backend hands off to a human

pub mod app;
pub mod events;
pub mod runner;
pub mod state;
pub mod ui;
pub mod widgets;

pub use app::{ChatApp, ChatMode};
pub use events::{ChatEvent, EventEmitter, EventSender};
pub use runner::run_chat_tui;

/// Configuration for the chat TUI
#[derive(Debug, Clone)]
pub struct ChatTuiConfig {
    /// Server label shown in the status bar (the backend base URL)
    pub server_label: String,
    /// Whether the FAQ pane starts visible
    pub faq_pane_visible: bool,
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat application state machine
//!
//! The main state container for the chat TUI: session and escalation state,
//! the transcript, the FAQ panel, input handling, and mode transitions.
//! Network calls run in spawned tasks and report back through the event
//! channel; their outcomes are mapped to render actions by `controller`.

pub mod controller;


use std::sync::Arc;

use crate::api::SupportBackend;

use super::events::{ChatEvent, EventEmitter, EventSender};
use super::state::{FaqState, InputState, MessageList, MessageRole};
use super::widgets::message::message_height;
use super::ChatTuiConfig;
use controller::{plan_ask_render, AskOutcome, RenderAction};

/// Current mode of the chat UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMode {
    /// Viewing chat, can scroll
    Normal,
    /// Typing in input area
    Input,
    /// Navigating the FAQ panel
    FaqFocus,
    /// Showing help overlay
    Help,
}

/// Main application state for the chat TUI
pub struct ChatApp {
    // === Configuration ===
    pub config: ChatTuiConfig,

    // === Conversation state ===
    /// Backend-issued session id; None when creation failed
    pub session_id: Option<String>,
    /// Latched once the backend hands the conversation to a human
    pub escalated: bool,
    /// Whether the escalation notice is shown
    pub notice_visible: bool,
    /// True while an ask request is in flight; gates further sends
    pub is_waiting: bool,

    // === Content ===
    pub messages: MessageList,
    pub faqs: FaqState,
    pub input: InputState,

    // === UI state ===
    pub mode: ChatMode,
    pub faq_pane_visible: bool,
    pub scroll_offset: usize,
    pub chat_area_height: u16,
    pub status_message: Option<String>,
    pub status_is_error: bool,
    pub should_quit: bool,
    /// Animation frame counter for the typing indicator
    pub animation_frame: u8,

    // === Resources ===
    backend: Arc<dyn SupportBackend>,
    event_tx: EventSender,
}

impl ChatApp {
    /// Create a new chat application
    pub fn new(
        config: ChatTuiConfig,
        backend: Arc<dyn SupportBackend>,
        event_tx: EventSender,
    ) -> Self {
        let faq_pane_visible = config.faq_pane_visible;
        Self {
            config,
            session_id: None,
            escalated: false,
            notice_visible: false,
            is_waiting: false,
            messages: MessageList::new(),
            faqs: FaqState::new(),
            input: InputState::new(),
            mode: ChatMode::Input,
            faq_pane_visible,
            scroll_offset: 0,
            chat_area_height: 20, // Updated on first render
            status_message: None,
            status_is_error: false,
            should_quit: false,
            animation_frame: 0,
            backend,
            event_tx,
        }
    }

    /// Event emitter for spawned tasks
    pub fn emitter(&self) -> EventEmitter {
        EventEmitter::new(self.event_tx.clone())
    }

    // === Startup ===

    /// Kick off the two independent startup requests: session creation and
    /// the FAQ fetch. Failures are logged; neither shows a user-facing error.
    pub fn spawn_init(&self) {
        self.spawn_session();
        self.spawn_faqs();
    }

    fn spawn_session(&self) {
        let backend = Arc::clone(&self.backend);
        let emitter = self.emitter();
        tokio::spawn(async move {
            match backend.new_session().await {
                Ok(id) => emitter.session_created(id),
                Err(e) => emitter.session_failed(&e.to_string()),
            }
        });
    }

    fn spawn_faqs(&self) {
        let backend = Arc::clone(&self.backend);
        let emitter = self.emitter();
        tokio::spawn(async move {
            match backend.faqs().await {
                Ok(faqs) => emitter.faqs_loaded(faqs),
                Err(e) => emitter.faqs_failed(&e.to_string()),
            }
        });
    }

    fn spawn_ask(&self, query: String) {
        let backend = Arc::clone(&self.backend);
        let emitter = self.emitter();
        let session_id = self.session_id.clone();
        tokio::spawn(async move {
            let result = backend.ask(session_id.as_deref(), &query).await;
            if let Err(e) = &result {
                tracing::warn!(error = %e, "ask request failed");
            }
            emitter.ask_settled(AskOutcome::classify(result));
        });
    }

    fn spawn_history(&self, session_id: String) {
        let backend = Arc::clone(&self.backend);
        let emitter = self.emitter();
        tokio::spawn(async move {
            match backend.history(&session_id).await {
                Ok(history) => emitter.history_loaded(history),
                Err(e) => emitter.history_failed(&e.to_string()),
            }
        });
    }

    // === Send path ===

    /// Send whatever is in the input field through the ask path.
    ///
    /// No-op when the trimmed text is empty or the conversation is escalated;
    /// while a request is in flight only a status hint is shown. Otherwise:
    /// append the user bubble, clear the input, disable input, show the
    /// typing indicator, and issue one request.
    pub fn send_current_input(&mut self) {
        let text = self.input.text().trim().to_string();
        if text.is_empty() || self.escalated {
            return;
        }
        if self.is_waiting {
            self.set_status("Still waiting for the assistant...");
            return;
        }

        self.input.submit();
        self.messages.push_user(text.clone());
        self.is_waiting = true;
        self.messages.show_typing();
        self.auto_scroll();
        self.spawn_ask(text);
    }

    /// Activate the highlighted FAQ entry: populate the input with its
    /// question and trigger the same send path as manual input. No-op once
    /// escalated.
    pub fn activate_selected_faq(&mut self) {
        if self.escalated {
            return;
        }
        let Some(question) = self.faqs.selected_entry().map(|f| f.question.clone()) else {
            return;
        };
        self.input.set_buffer(question);
        self.mode = ChatMode::Input;
        self.send_current_input();
    }

    /// Handle Enter in input mode: commands run immediately, exit words quit,
    /// everything else goes through the send path.
    fn submit_input(&mut self) {
        let trimmed = self.input.text().trim().to_string();
        if trimmed.is_empty() {
            return;
        }

        if trimmed.starts_with('/') {
            self.input.submit();
            self.handle_command(&trimmed);
            return;
        }

        let lower = trimmed.to_lowercase();
        if lower == "exit" || lower == "quit" {
            self.should_quit = true;
            return;
        }

        self.send_current_input();
    }

    // === Events ===

    /// Handle a chat event
    pub fn handle_event(&mut self, event: ChatEvent) {
        match event {
            ChatEvent::SessionCreated(id) => {
                tracing::info!(session = %id, "new session created");
                self.set_status(&format!("Connected (session {})", short_id(&id)));
                self.session_id = Some(id);
            }

            ChatEvent::SessionFailed(error) => {
                // Logged only; subsequent asks carry a null session id
                tracing::warn!(error = %error, "failed to create session");
            }

            ChatEvent::FaqsLoaded(faqs) => {
                self.faqs.replace(faqs);
            }

            ChatEvent::FaqsFailed(error) => {
                // Logged only; the panel just stays empty
                tracing::warn!(error = %error, "failed to load FAQs");
            }

            ChatEvent::AskSettled(outcome) => {
                self.apply(plan_ask_render(outcome));
                self.auto_scroll();
            }

            ChatEvent::HistoryLoaded(history) => {
                self.messages.clear();
                for message in &history.messages {
                    match MessageRole::from_wire(&message.role) {
                        MessageRole::User => self.messages.push_user(message.content.clone()),
                        MessageRole::Bot => self.messages.push_bot(message.content.clone()),
                    }
                }
                self.set_status(&format!(
                    "History restored ({} messages)",
                    history.messages.len()
                ));
                self.auto_scroll();
            }

            ChatEvent::HistoryFailed(error) => {
                self.set_error(&format!("Could not load history: {}", error));
            }

            ChatEvent::Error(msg) => {
                self.set_error(&msg);
            }

            ChatEvent::Status(msg) => {
                self.set_status(&msg);
            }

            ChatEvent::Refresh => {
                // Just triggers a redraw
            }
        }
    }

    /// Apply render actions produced by the pure controller
    pub fn apply(&mut self, actions: Vec<RenderAction>) {
        for action in actions {
            match action {
                RenderAction::HideTyping => {
                    self.messages.hide_typing();
                }
                RenderAction::AppendBot(text) => {
                    self.messages.push_bot(text);
                }
                RenderAction::AppendError(text) => {
                    self.messages.push_bot(text.to_string());
                }
                RenderAction::SetEscalated => {
                    self.escalated = true;
                }
                RenderAction::RevealNotice => {
                    self.notice_visible = true;
                }
                RenderAction::RestoreInput => {
                    self.is_waiting = false;
                    self.mode = ChatMode::Input;
                }
            }
        }
    }

    // === Commands ===

    /// Handle a slash command
    pub fn handle_command(&mut self, command: &str) {
        let name = command.split_whitespace().next().unwrap_or(command);
        match name {
            "/help" => {
                self.mode = ChatMode::Help;
            }
            "/quit" | "/exit" => {
                self.should_quit = true;
            }
            "/clear" => {
                self.messages.clear();
                self.set_status("Chat cleared");
            }
            "/faqs" => {
                self.toggle_faq_pane();
            }
            "/new" => {
                self.reinit_session();
            }
            "/history" => match self.session_id.clone() {
                Some(id) => self.spawn_history(id),
                None => self.set_error("No active session"),
            },
            "/session" => match &self.session_id {
                Some(id) => self.set_status(&format!("Session {}", id)),
                None => self.set_status("No active session"),
            },
            _ => {
                self.set_error(&format!("Unknown command: {}", name));
            }
        }
    }

    /// Start over: new session, empty transcript, escalation reset.
    /// The old session id is discarded, never mutated.
    fn reinit_session(&mut self) {
        self.session_id = None;
        self.escalated = false;
        self.notice_visible = false;
        self.is_waiting = false;
        self.messages.clear();
        self.set_status("Starting a new session...");
        self.spawn_session();
    }

    // === Keyboard ===

    /// Handle a keyboard event
    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        use crossterm::event::{KeyCode, KeyModifiers};

        // Global keys that work in any mode
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.mode {
            ChatMode::Input => self.handle_input_key(key),
            ChatMode::Normal => self.handle_normal_key(key),
            ChatMode::FaqFocus => self.handle_faq_key(key),
            ChatMode::Help => self.handle_help_key(key),
        }
    }

    /// Handle keys in input mode
    fn handle_input_key(&mut self, key: crossterm::event::KeyEvent) {
        use crossterm::event::{KeyCode, KeyModifiers};

        match (key.modifiers, key.code) {
            // Submit
            (KeyModifiers::NONE, KeyCode::Enter) => {
                self.submit_input();
            }
            // Escape to scroll mode
            (KeyModifiers::NONE, KeyCode::Esc) => {
                self.mode = ChatMode::Normal;
            }
            // FAQ pane
            (KeyModifiers::NONE, KeyCode::Tab) => {
                self.toggle_faq_pane();
            }
            (KeyModifiers::CONTROL, KeyCode::Char('f')) => {
                if !self.faqs.is_empty() {
                    self.faq_pane_visible = true;
                    self.mode = ChatMode::FaqFocus;
                }
            }
            // Scrolling stays available while typing
            (KeyModifiers::NONE, KeyCode::PageUp) => {
                self.scroll_up(self.chat_area_height as usize / 2);
            }
            (KeyModifiers::NONE, KeyCode::PageDown) => {
                self.scroll_down(self.chat_area_height as usize / 2);
            }
            _ => {
                // Editing keys are inert while a request is in flight
                if self.is_waiting {
                    return;
                }
                self.handle_edit_key(key);
            }
        }
    }

    /// Editing keys for the input buffer
    fn handle_edit_key(&mut self, key: crossterm::event::KeyEvent) {
        use crossterm::event::{KeyCode, KeyModifiers};

        match (key.modifiers, key.code) {
            // History navigation
            (KeyModifiers::NONE, KeyCode::Up) => {
                self.input.history_prev();
            }
            (KeyModifiers::NONE, KeyCode::Down) => {
                self.input.history_next();
            }
            // Cursor movement
            (KeyModifiers::NONE, KeyCode::Left) => {
                self.input.move_left();
            }
            (KeyModifiers::NONE, KeyCode::Right) => {
                self.input.move_right();
            }
            (KeyModifiers::NONE, KeyCode::Home) | (KeyModifiers::CONTROL, KeyCode::Char('a')) => {
                self.input.move_home();
            }
            (KeyModifiers::NONE, KeyCode::End) | (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
                self.input.move_end();
            }
            // Deletion
            (KeyModifiers::NONE, KeyCode::Backspace) => {
                self.input.backspace();
            }
            (KeyModifiers::NONE, KeyCode::Delete) => {
                self.input.delete();
            }
            (KeyModifiers::CONTROL, KeyCode::Char('w')) => {
                self.input.delete_word();
            }
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                self.input.clear();
            }
            // Character input
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.input.insert_char(c);
            }
            _ => {}
        }
    }

    /// Handle keys in normal mode (scrolling)
    fn handle_normal_key(&mut self, key: crossterm::event::KeyEvent) {
        use crossterm::event::{KeyCode, KeyModifiers};

        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Enter)
            | (KeyModifiers::NONE, KeyCode::Char('i'))
            | (KeyModifiers::NONE, KeyCode::Esc) => {
                self.mode = ChatMode::Input;
            }
            (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                self.scroll_up(1);
            }
            (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                self.scroll_down(1);
            }
            (KeyModifiers::NONE, KeyCode::PageUp) => {
                self.scroll_up(self.chat_area_height as usize / 2);
            }
            (KeyModifiers::NONE, KeyCode::PageDown) => {
                self.scroll_down(self.chat_area_height as usize / 2);
            }
            (KeyModifiers::NONE, KeyCode::Char('g')) => {
                self.scroll_offset = 0;
            }
            (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
                self.auto_scroll();
            }
            (KeyModifiers::NONE, KeyCode::Tab) => {
                self.toggle_faq_pane();
            }
            (KeyModifiers::NONE, KeyCode::Char('?')) => {
                self.mode = ChatMode::Help;
            }
            (KeyModifiers::NONE, KeyCode::Char('q')) => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    /// Handle keys in FAQ focus mode
    fn handle_faq_key(&mut self, key: crossterm::event::KeyEvent) {
        use crossterm::event::KeyCode;

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.faqs.select_prev();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.faqs.select_next();
            }
            KeyCode::Enter => {
                self.activate_selected_faq();
            }
            KeyCode::Esc | KeyCode::Tab => {
                self.mode = ChatMode::Input;
            }
            _ => {}
        }
    }

    /// Handle keys in help mode
    fn handle_help_key(&mut self, key: crossterm::event::KeyEvent) {
        use crossterm::event::KeyCode;

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                self.mode = ChatMode::Input;
            }
            _ => {}
        }
    }

    // === UI helpers ===

    pub fn toggle_faq_pane(&mut self) {
        self.faq_pane_visible = !self.faq_pane_visible;
        if !self.faq_pane_visible && self.mode == ChatMode::FaqFocus {
            self.mode = ChatMode::Input;
        }
    }

    /// Height the FAQ pane needs in the current state
    pub fn faq_pane_height(&self) -> u16 {
        if !self.faq_pane_visible || self.faqs.is_empty() {
            0
        } else {
            (self.faqs.len() as u16 + 2).min(8)
        }
    }

    pub fn set_status(&mut self, msg: &str) {
        self.status_message = Some(msg.to_string());
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, msg: &str) {
        self.status_message = Some(msg.to_string());
        self.status_is_error = true;
    }

    /// Advance the animation frame (called on each render tick)
    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    /// Current typing indicator dots
    pub fn typing_frame(&self) -> &'static str {
        // Cycle through dot patterns every ~200ms (4 frames at 50ms poll)
        match (self.animation_frame / 4) % 4 {
            0 => "●○○",
            1 => "○●○",
            2 => "○○●",
            _ => "○●○",
        }
    }

    // === Scrolling ===

    /// Total height of all messages in lines at the given width
    pub fn total_messages_height(&self, width: u16) -> usize {
        self.messages
            .entries()
            .iter()
            .map(|m| message_height(m, width) as usize)
            .sum()
    }

    /// Update chat area height based on terminal size
    pub fn update_chat_height(&mut self, terminal_height: u16) {
        let title_height: u16 = 1;
        let input_height: u16 = 3;
        self.chat_area_height = terminal_height
            .saturating_sub(title_height)
            .saturating_sub(input_height)
            .saturating_sub(self.faq_pane_height());
    }

    /// Scroll so the latest content is visible
    pub fn auto_scroll(&mut self) {
        let total = self.total_messages_height(80);
        self.scroll_offset = total.saturating_sub(self.chat_area_height as usize);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let total = self.total_messages_height(80);
        let max_offset = total.saturating_sub(self.chat_area_height as usize);
        self.scroll_offset = (self.scroll_offset + lines).min(max_offset);
    }
}

/// Short form of a session id for status lines
pub fn short_id(id: &str) -> &str {
    &id[..8.min(id.len())]
}

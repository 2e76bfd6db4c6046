// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! SupportBackend trait
//!
//! Defines the abstraction layer over the customer-support backend so the
//! chat controller can be driven by the HTTP implementation or by a mock.

use async_trait::async_trait;

use crate::api::types::{AskResponse, ConversationHistory, FaqEntry};
use crate::error::Result;

/// Main trait for support backends
#[async_trait]
pub trait SupportBackend: Send + Sync {
    /// Backend name for display (e.g., "http", "mock")
    fn name(&self) -> &str;

    /// Create a new conversation session, returning its id
    async fn new_session(&self) -> Result<String>;

    /// Send a question; `session_id` is `None` when session creation failed
    async fn ask(&self, session_id: Option<&str>, query: &str) -> Result<AskResponse>;

    /// Fetch the FAQ list
    async fn faqs(&self) -> Result<Vec<FaqEntry>>;

    /// Fetch the stored transcript for a session
    async fn history(&self, session_id: &str) -> Result<ConversationHistory>;

    /// Check whether the backend is up
    async fn health(&self) -> Result<bool>;
}

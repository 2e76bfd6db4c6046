// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Mock support backend for testing
//!
//! Provides a configurable mock implementation of the SupportBackend trait
//! that can be used in unit tests without a real server.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::api::backend::SupportBackend;
use crate::api::types::{AskResponse, ConversationHistory, FaqEntry};
use crate::error::{ApiError, DeskmateError, Result};

/// Failure mode for a mocked endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    /// Backend answers with this HTTP status
    Server(u16),
    /// Transport-level failure (connection refused, DNS, ...)
    Network,
}

impl MockFailure {
    fn into_error(self) -> DeskmateError {
        match self {
            MockFailure::Server(status) => DeskmateError::Api(ApiError::ServerError {
                status,
                message: "mock server error".to_string(),
            }),
            MockFailure::Network => {
                DeskmateError::Api(ApiError::Network("mock network error".to_string()))
            }
        }
    }
}

/// A mock support backend for testing
#[derive(Clone)]
pub struct MockBackend {
    /// Session id handed out by new_session; None makes creation fail
    session_id: Arc<Mutex<Option<String>>>,
    /// Queued ask replies, returned in order (last one repeats)
    replies: Arc<Mutex<Vec<AskResponse>>>,
    /// Forced failure for ask
    ask_failure: Arc<Mutex<Option<MockFailure>>>,
    /// FAQ list; None makes the fetch fail
    faq_entries: Arc<Mutex<Option<Vec<FaqEntry>>>>,
    /// Stored transcript for history()
    history: Arc<Mutex<Option<ConversationHistory>>>,
    /// Health probe result
    healthy: Arc<Mutex<bool>>,
    /// Number of ask calls made
    ask_calls: Arc<AtomicUsize>,
    /// Recorded (session_id, query) pairs
    recorded_queries: Arc<Mutex<Vec<(Option<String>, String)>>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Create a mock backend with one canned reply and an empty FAQ list
    pub fn new() -> Self {
        Self {
            session_id: Arc::new(Mutex::new(Some("mock-session".to_string()))),
            replies: Arc::new(Mutex::new(vec![AskResponse {
                response: "Mock reply".to_string(),
                escalated: false,
            }])),
            ask_failure: Arc::new(Mutex::new(None)),
            faq_entries: Arc::new(Mutex::new(Some(Vec::new()))),
            history: Arc::new(Mutex::new(None)),
            healthy: Arc::new(Mutex::new(true)),
            ask_calls: Arc::new(AtomicUsize::new(0)),
            recorded_queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        match mutex.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("mock backend lock was poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }

    /// Set the session id returned by new_session
    pub fn with_session_id(self, id: impl Into<String>) -> Self {
        *Self::lock(&self.session_id) = Some(id.into());
        self
    }

    /// Make new_session fail
    pub fn failing_session(self) -> Self {
        *Self::lock(&self.session_id) = None;
        self
    }

    /// Replace the reply queue with a single text reply
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        *Self::lock(&self.replies) = vec![AskResponse {
            response: text.into(),
            escalated: false,
        }];
        self
    }

    /// Queue multiple full replies (returned in order, last one repeats)
    pub fn with_replies(self, replies: Vec<AskResponse>) -> Self {
        *Self::lock(&self.replies) = replies;
        self
    }

    /// Queue a single escalating reply
    pub fn with_escalation(self, text: impl Into<String>) -> Self {
        *Self::lock(&self.replies) = vec![AskResponse {
            response: text.into(),
            escalated: true,
        }];
        self
    }

    /// Force ask to fail with the given mode
    pub fn with_ask_failure(self, failure: MockFailure) -> Self {
        *Self::lock(&self.ask_failure) = Some(failure);
        self
    }

    /// Set the FAQ list
    pub fn with_faqs(self, faqs: Vec<FaqEntry>) -> Self {
        *Self::lock(&self.faq_entries) = Some(faqs);
        self
    }

    /// Make the FAQ fetch fail
    pub fn failing_faqs(self) -> Self {
        *Self::lock(&self.faq_entries) = None;
        self
    }

    /// Set the transcript returned by history()
    pub fn with_history(self, history: ConversationHistory) -> Self {
        *Self::lock(&self.history) = Some(history);
        self
    }

    /// Set the health probe result
    pub fn with_health(self, healthy: bool) -> Self {
        *Self::lock(&self.healthy) = healthy;
        self
    }

    /// Number of ask calls made so far
    pub fn ask_count(&self) -> usize {
        self.ask_calls.load(Ordering::SeqCst)
    }

    /// Recorded (session_id, query) pairs, in call order
    pub fn recorded_queries(&self) -> Vec<(Option<String>, String)> {
        Self::lock(&self.recorded_queries).clone()
    }
}

#[async_trait]
impl SupportBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn new_session(&self) -> Result<String> {
        match Self::lock(&self.session_id).clone() {
            Some(id) => Ok(id),
            None => Err(DeskmateError::Api(ApiError::ServerError {
                status: 500,
                message: "Failed to create session".to_string(),
            })),
        }
    }

    async fn ask(&self, session_id: Option<&str>, query: &str) -> Result<AskResponse> {
        self.ask_calls.fetch_add(1, Ordering::SeqCst);
        Self::lock(&self.recorded_queries)
            .push((session_id.map(str::to_string), query.to_string()));

        if let Some(failure) = *Self::lock(&self.ask_failure) {
            return Err(failure.into_error());
        }

        let mut replies = Self::lock(&self.replies);
        if replies.len() > 1 {
            Ok(replies.remove(0))
        } else {
            replies
                .first()
                .cloned()
                .ok_or_else(|| DeskmateError::Api(ApiError::InvalidResponse(
                    "mock has no replies configured".to_string(),
                )))
        }
    }

    async fn faqs(&self) -> Result<Vec<FaqEntry>> {
        match Self::lock(&self.faq_entries).clone() {
            Some(faqs) => Ok(faqs),
            None => Err(DeskmateError::Api(ApiError::Network(
                "mock FAQ failure".to_string(),
            ))),
        }
    }

    async fn history(&self, session_id: &str) -> Result<ConversationHistory> {
        match Self::lock(&self.history).clone() {
            Some(history) => Ok(history),
            None => Err(DeskmateError::Api(ApiError::SessionNotFound(
                session_id.to_string(),
            ))),
        }
    }

    async fn health(&self) -> Result<bool> {
        Ok(*Self::lock(&self.healthy))
    }
}

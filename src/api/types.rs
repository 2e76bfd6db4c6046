// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Wire types for the support backend API
//!
//! Mirrors the backend's JSON contract: `/new_session`, `/ask`, `/faqs`,
//! `/get_history/{session_id}`, and `/health`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response from `POST /new_session`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSessionResponse {
    pub session_id: String,
}

/// Request body for `POST /ask`
///
/// The session id is `null` when session creation failed at startup; the
/// backend is responsible for rejecting it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub session_id: Option<String>,
    pub query: String,
}

/// Response from `POST /ask`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    /// Assistant reply text
    pub response: String,
    /// True when the backend hands the conversation to a human
    pub escalated: bool,
}

/// One entry from `GET /faqs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Numeric id assigned by the backend (absent in older deployments)
    #[serde(default)]
    pub id: Option<i64>,
    pub question: String,
    pub answer: String,
    pub category: String,
}

/// One stored message from `GET /get_history/{session_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryMessage {
    pub id: i64,
    /// `"user"` or `"bot"`
    pub role: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Response from `GET /get_history/{session_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationHistory {
    pub session_id: String,
    pub messages: Vec<HistoryMessage>,
}

/// Response from `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

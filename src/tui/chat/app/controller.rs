// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Pure response-to-render mapping
//!
//! Converts the outcome of an `/ask` request into an ordered list of render
//! actions, with no access to the UI. `ChatApp::apply` performs the actual
//! mutations, so these mappings are testable without a terminal.

use crate::api::AskResponse;
use crate::error::{ApiError, DeskmateError};

/// Fixed reply shown for an HTTP-level failure
pub const ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Fixed reply shown for a transport-level failure
pub const NETWORK_ERROR_REPLY: &str =
    "Sorry, I encountered a network error. Please check your connection and try again.";

/// How an `/ask` request settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskOutcome {
    /// The backend answered
    Answer { response: String, escalated: bool },
    /// The backend answered with a non-OK status
    HttpFailure,
    /// The request never completed (connection refused, DNS, ...)
    NetworkFailure,
}

impl AskOutcome {
    /// Classify an ask result. Transport problems become `NetworkFailure`;
    /// every other error is an HTTP-level failure.
    pub fn classify(result: Result<AskResponse, DeskmateError>) -> Self {
        match result {
            Ok(reply) => AskOutcome::Answer {
                response: reply.response,
                escalated: reply.escalated,
            },
            Err(DeskmateError::Api(ApiError::Network(_))) => AskOutcome::NetworkFailure,
            Err(DeskmateError::Http(e)) if e.is_connect() || e.is_timeout() => {
                AskOutcome::NetworkFailure
            }
            Err(_) => AskOutcome::HttpFailure,
        }
    }
}

/// One render instruction produced by the mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderAction {
    /// Remove the typing indicator
    HideTyping,
    /// Append a bot reply bubble
    AppendBot(String),
    /// Append a fixed-text error bubble (bot-styled)
    AppendError(&'static str),
    /// Latch the escalation flag
    SetEscalated,
    /// Reveal the escalation notice
    RevealNotice,
    /// Re-enable input controls and return focus to the input field
    RestoreInput,
}

/// Map an ask outcome to render actions.
///
/// Every sequence hides the typing indicator first and ends with
/// `RestoreInput`: interactivity is restored no matter how the request
/// settled.
pub fn plan_ask_render(outcome: AskOutcome) -> Vec<RenderAction> {
    let mut actions = vec![RenderAction::HideTyping];

    match outcome {
        AskOutcome::Answer {
            response,
            escalated,
        } => {
            actions.push(RenderAction::AppendBot(response));
            if escalated {
                actions.push(RenderAction::SetEscalated);
                actions.push(RenderAction::RevealNotice);
            }
        }
        AskOutcome::HttpFailure => {
            actions.push(RenderAction::AppendError(ERROR_REPLY));
        }
        AskOutcome::NetworkFailure => {
            actions.push(RenderAction::AppendError(NETWORK_ERROR_REPLY));
        }
    }

    actions.push(RenderAction::RestoreInput);
    actions
}

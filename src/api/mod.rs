// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Support backend abstraction
//!
//! Defines the trait for the customer-support backend, the wire types for its
//! HTTP API, the reqwest implementation, and a configurable mock for tests.

pub mod backend;
pub mod http;
pub mod mock;
pub mod types;

pub use backend::SupportBackend;
pub use http::HttpBackend;
pub use mock::MockBackend;
pub use types::{AskRequest, AskResponse, ConversationHistory, FaqEntry, HistoryMessage};

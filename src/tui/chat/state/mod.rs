// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! State management for the chat TUI

pub mod faqs;
pub mod input;
pub mod messages;

pub use faqs::FaqState;
pub use input::InputState;
pub use messages::{truncate_string, DisplayMessage, MessageList, MessageRole};

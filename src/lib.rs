// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Deskmate - customer support chat client for your terminal.
//!
//! This crate exposes the shared runtime used by:
//! - the `deskmate` CLI (`src/main.rs`)
//! - the interactive TUI chat runtime
//!
//! Architecture highlights:
//! - `api`: support-backend abstraction (sessions, questions, FAQs) and the
//!   HTTP implementation
//! - `tui`: the chat controller, state containers, and ratatui widgets
//! - `config`: user settings stored under `~/.deskmate/`
//! - `cli`: command-line argument definitions

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod tui;

pub use error::{DeskmateError, Result};

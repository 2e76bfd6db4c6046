// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for Deskmate.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Deskmate - customer support chat in your terminal
#[derive(Parser, Debug)]
#[command(name = "deskmate")]
#[command(version, about = "Customer support chat in your terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Support backend base URL (overrides settings)
    #[arg(short, long, global = true)]
    pub server: Option<String>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start interactive chat session (default when no command given)
    Chat(ChatArgs),

    /// Ask a single question (non-interactive)
    Ask(AskArgs),

    /// Print the FAQ list
    Faqs,

    /// Check whether the backend is up
    Health,
}

/// Arguments for the chat subcommand
#[derive(clap::Args, Debug, Default)]
pub struct ChatArgs {
    /// Hide the FAQ pane on startup
    #[arg(long)]
    pub no_faqs: bool,
}

/// Arguments for the ask subcommand
#[derive(clap::Args, Debug)]
pub struct AskArgs {
    /// The question to ask
    pub question: String,
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Deskmate - customer support chat in your terminal
//!
//! Entry point for the Deskmate CLI application.

use std::sync::Arc;

use clap::Parser;

use deskmate::api::{HttpBackend, SupportBackend};
use deskmate::cli::{Cli, Commands};
use deskmate::config::Settings;
use deskmate::error::Result;
use deskmate::tui::chat::{run_chat_tui, ChatTuiConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // Practical debug toggle: `-v` enables chat diagnostics without requiring
    // users to know target names up front. `RUST_LOG` still takes precedence.
    if cli.verbose > 0 {
        for directive in ["deskmate=debug"] {
            if let Ok(parsed) = directive.parse() {
                env_filter = env_filter.add_directive(parsed);
            }
        }
    }

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load settings
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    let base_url = resolve_base_url(cli.server.as_deref(), &settings);
    let backend: Arc<dyn SupportBackend> = Arc::new(HttpBackend::with_base_url(&base_url));

    match cli.command {
        Some(Commands::Ask(args)) => run_ask(backend, &args.question).await,
        Some(Commands::Faqs) => run_faqs(backend).await,
        Some(Commands::Health) => run_health(backend, &base_url).await,
        Some(Commands::Chat(args)) => {
            let config = ChatTuiConfig {
                server_label: base_url,
                faq_pane_visible: !args.no_faqs && settings.ui.faq_pane_visible,
            };
            run_chat_tui(config, backend).await
        }
        None => {
            let config = ChatTuiConfig {
                server_label: base_url,
                faq_pane_visible: settings.ui.faq_pane_visible,
            };
            run_chat_tui(config, backend).await
        }
    }
}

/// CLI flag wins over the settings file
fn resolve_base_url(cli_server: Option<&str>, settings: &Settings) -> String {
    cli_server
        .map(str::to_string)
        .unwrap_or_else(|| settings.server.base_url.clone())
}

/// One-shot question: create a session, ask once, print the answer
async fn run_ask(backend: Arc<dyn SupportBackend>, question: &str) -> Result<()> {
    let question = question.trim();
    if question.is_empty() {
        return Err(deskmate::DeskmateError::InvalidInput(
            "question is empty".to_string(),
        ));
    }

    let session_id = match backend.new_session().await {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::warn!(error = %e, "failed to create session");
            None
        }
    };

    let reply = backend.ask(session_id.as_deref(), question).await?;
    println!("{}", reply.response);
    if reply.escalated {
        println!();
        println!("This conversation has been escalated to a human agent.");
    }
    Ok(())
}

/// Print the FAQ list
async fn run_faqs(backend: Arc<dyn SupportBackend>) -> Result<()> {
    let faqs = backend.faqs().await?;
    if faqs.is_empty() {
        println!("No FAQs available.");
        return Ok(());
    }

    for faq in &faqs {
        println!("[{}] {}", faq.category, faq.question);
        println!("    {}", faq.answer);
        println!();
    }
    Ok(())
}

/// Check whether the backend is up
async fn run_health(backend: Arc<dyn SupportBackend>, base_url: &str) -> Result<()> {
    match backend.health().await {
        Ok(true) => {
            println!("{} is healthy", base_url);
            Ok(())
        }
        Ok(false) => {
            println!("{} is unhealthy", base_url);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{} is unreachable: {}", base_url, e);
            std::process::exit(1);
        }
    }
}

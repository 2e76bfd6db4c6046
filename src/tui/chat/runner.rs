// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat TUI runner
//!
//! Sets up the terminal, kicks off the startup requests, and drives the main
//! loop: draw, drain backend events, poll the keyboard.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::Event as TermEvent,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::api::SupportBackend;
use crate::error::{DeskmateError, Result};

use super::app::ChatApp;
use super::events::{create_event_channel, EventReceiver};
use super::{ui, ChatTuiConfig};

/// Run the chat TUI with the given configuration
pub async fn run_chat_tui(config: ChatTuiConfig, backend: Arc<dyn SupportBackend>) -> Result<()> {
    // Setup terminal with panic hook to restore terminal on crash
    let original_panic_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_panic_hook(panic_info);
    }));

    enable_raw_mode().map_err(|e| DeskmateError::Tui(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| DeskmateError::Tui(e.to_string()))?;
    let backend_term = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend_term).map_err(|e| DeskmateError::Tui(e.to_string()))?;

    let (event_tx, mut event_rx) = create_event_channel();
    let mut app = ChatApp::new(config, backend, event_tx);

    // Session creation and FAQ load run as two independent requests
    app.spawn_init();

    let result = run_loop(&mut terminal, &mut app, &mut event_rx).await;

    // Restore terminal
    let _ = std::panic::take_hook();
    disable_raw_mode().map_err(|e| DeskmateError::Tui(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| DeskmateError::Tui(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| DeskmateError::Tui(e.to_string()))?;

    result
}

/// Main application loop
async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut ChatApp,
    event_rx: &mut EventReceiver,
) -> Result<()> {
    loop {
        // Update chat height based on terminal size before render
        let terminal_height = terminal.size().map(|s| s.height).unwrap_or(24);
        app.update_chat_height(terminal_height);

        // Tick animation (for the typing indicator)
        app.tick_animation();

        // Render UI
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| DeskmateError::Tui(e.to_string()))?;

        // Drain events from spawned network tasks
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        // Poll for keyboard input with timeout
        let has_event = crossterm::event::poll(Duration::from_millis(50))
            .map_err(|e| DeskmateError::Tui(e.to_string()))?;

        if has_event {
            let event =
                crossterm::event::read().map_err(|e| DeskmateError::Tui(e.to_string()))?;
            match event {
                TermEvent::Key(key) => {
                    app.handle_key(key);
                }
                TermEvent::Resize(_, _) => {
                    // Terminal resized, will re-render automatically
                }
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }

        // Yield so spawned tasks make progress even under constant input
        tokio::task::yield_now().await;
    }
}

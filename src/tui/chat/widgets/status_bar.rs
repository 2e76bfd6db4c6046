// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Status bar widget for the chat TUI

use ratatui::prelude::*;

use crate::tui::chat::state::truncate_string;

/// Text of the escalation notice shown in the status bar
pub const ESCALATION_NOTICE: &str = "⚠ Escalated to a human agent";

/// Widget for rendering the title/status bar
pub struct StatusBar<'a> {
    title: &'a str,
    server: &'a str,
    session_id: Option<&'a str>,
    status_message: Option<&'a str>,
    status_is_error: bool,
    escalated: bool,
    is_waiting: bool,
}

impl<'a> StatusBar<'a> {
    pub fn new(title: &'a str, server: &'a str) -> Self {
        Self {
            title,
            server,
            session_id: None,
            status_message: None,
            status_is_error: false,
            escalated: false,
            is_waiting: false,
        }
    }

    pub fn session(mut self, session_id: Option<&'a str>) -> Self {
        self.session_id = session_id;
        self
    }

    pub fn status(mut self, message: Option<&'a str>, is_error: bool) -> Self {
        self.status_message = message;
        self.status_is_error = is_error;
        self
    }

    pub fn escalated(mut self, escalated: bool) -> Self {
        self.escalated = escalated;
        self
    }

    pub fn waiting(mut self, is_waiting: bool) -> Self {
        self.is_waiting = is_waiting;
        self
    }
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        // Clear the line with dark background
        let bg_style = Style::default().bg(Color::DarkGray);
        for x in area.x..area.x + area.width {
            buf.set_string(x, area.y, " ", bg_style);
        }

        let mut x = area.x + 1;

        // Title
        let title_style = Style::default().fg(Color::White).bold().bg(Color::DarkGray);
        buf.set_string(x, area.y, self.title, title_style);
        x += self.title.len() as u16 + 1;

        // Separator
        buf.set_string(
            x,
            area.y,
            "─",
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        );
        x += 2;

        // Server
        buf.set_string(
            x,
            area.y,
            self.server,
            Style::default().fg(Color::Cyan).bg(Color::DarkGray),
        );
        x += self.server.chars().count() as u16 + 2;

        // Session id (short) or placeholder
        let session_short = match self.session_id {
            Some(id) => id[..8.min(id.len())].to_string(),
            None => "no session".to_string(),
        };
        buf.set_string(
            x,
            area.y,
            &session_short,
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        );
        x += session_short.chars().count() as u16 + 2;

        // Right-aligned: escalation notice beats waiting beats status
        if self.escalated {
            let notice_x = (area.x + area.width)
                .saturating_sub(ESCALATION_NOTICE.chars().count() as u16 + 1);
            if notice_x > x {
                buf.set_string(
                    notice_x,
                    area.y,
                    ESCALATION_NOTICE,
                    Style::default().fg(Color::Red).bold().bg(Color::DarkGray),
                );
            }
        } else if self.is_waiting {
            let indicator = "● Waiting...";
            let indicator_x =
                (area.x + area.width).saturating_sub(indicator.chars().count() as u16 + 1);
            if indicator_x > x {
                buf.set_string(
                    indicator_x,
                    area.y,
                    indicator,
                    Style::default().fg(Color::Green).bg(Color::DarkGray),
                );
            }
        } else if let Some(status) = self.status_message {
            let status_style = if self.status_is_error {
                Style::default().fg(Color::Red).bg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Yellow).bg(Color::DarkGray)
            };

            let status_truncated = truncate_string(status, 40);
            let status_x = (area.x + area.width)
                .saturating_sub(status_truncated.chars().count() as u16 + 1);
            if status_x > x {
                buf.set_string(status_x, area.y, &status_truncated, status_style);
            }
        }
    }
}

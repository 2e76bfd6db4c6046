// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Message rendering widget

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::tui::chat::state::{DisplayMessage, MessageRole};

/// Widget for rendering a single message
pub struct MessageWidget<'a> {
    message: &'a DisplayMessage,
    /// Dots for the typing indicator animation
    typing_frame: &'a str,
}

impl<'a> MessageWidget<'a> {
    pub fn new(message: &'a DisplayMessage) -> Self {
        Self {
            message,
            typing_frame: "●○○",
        }
    }

    pub fn typing_frame(mut self, frame: &'a str) -> Self {
        self.typing_frame = frame;
        self
    }
}

/// Calculate the height a message needs at the given width, accounting for
/// text wrapping. Header (1) + content + spacing (1).
pub fn message_height(message: &DisplayMessage, width: u16) -> u16 {
    if message.is_typing_indicator {
        // Header + indicator line + spacing
        return 3;
    }

    let content_width = width.saturating_sub(4).max(1);

    let content_height = if message.content.is_empty() {
        1
    } else {
        message
            .content
            .lines()
            .map(|line| {
                let chars = line.chars().count();
                if chars == 0 {
                    1
                } else {
                    ((chars - 1) / content_width as usize) + 1
                }
            })
            .sum::<usize>()
            .max(1)
    };

    (1 + content_height + 1) as u16
}

impl<'a> Widget for MessageWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 {
            return;
        }

        let (role_style, role_label) = match self.message.role {
            MessageRole::User => (Style::default().fg(Color::Cyan).bold(), "you"),
            MessageRole::Bot => (Style::default().fg(Color::White).bold(), "assistant"),
        };

        let header = Line::from(Span::styled(format!("  {}", role_label), role_style));
        buf.set_line(area.x, area.y, &header, area.width);

        let content_area = Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: area.height.saturating_sub(2),
        };

        if self.message.is_typing_indicator {
            let indicator = Line::from(Span::styled(
                format!("is typing {}", self.typing_frame),
                Style::default().fg(Color::DarkGray).italic(),
            ));
            buf.set_line(content_area.x, content_area.y, &indicator, content_area.width);
            return;
        }

        let content_style = match self.message.role {
            MessageRole::User => Style::default().fg(Color::Cyan),
            MessageRole::Bot => Style::default().fg(Color::White),
        };

        let content = Paragraph::new(self.message.content.as_str())
            .style(content_style)
            .wrap(Wrap { trim: false });

        content.render(content_area, buf);
    }
}

/// Render the message list with scrolling support
pub fn render_messages(
    messages: &[DisplayMessage],
    area: Rect,
    buf: &mut Buffer,
    scroll_offset: usize,
    typing_frame: &str,
) {
    if messages.is_empty() {
        return;
    }

    let mut current_y = area.y;
    let mut lines_skipped = 0;
    let viewport_end = area.y + area.height;

    for message in messages.iter() {
        if current_y >= viewport_end {
            break;
        }

        let msg_height = message_height(message, area.width);

        // Skip messages entirely above the viewport
        if lines_skipped + msg_height as usize <= scroll_offset {
            lines_skipped += msg_height as usize;
            continue;
        }

        let lines_to_skip_in_message = scroll_offset.saturating_sub(lines_skipped);
        lines_skipped += msg_height as usize;

        let remaining_height = viewport_end.saturating_sub(current_y);
        let render_height = msg_height
            .saturating_sub(lines_to_skip_in_message as u16)
            .min(remaining_height);
        if render_height == 0 {
            continue;
        }

        let msg_area = Rect {
            x: area.x,
            y: current_y,
            width: area.width,
            height: render_height,
        };

        MessageWidget::new(message)
            .typing_frame(typing_frame)
            .render(msg_area, buf);
        current_y += render_height;
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Input area widget for the chat TUI

use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

use crate::tui::chat::state::InputState;

/// Widget for rendering the input area
pub struct InputArea<'a> {
    input: &'a InputState,
    focused: bool,
    placeholder: Option<&'a str>,
    waiting: bool,
    waiting_title: Option<String>,
    locked: bool,
}

impl<'a> InputArea<'a> {
    pub fn new(input: &'a InputState) -> Self {
        Self {
            input,
            focused: true,
            placeholder: None,
            waiting: false,
            waiting_title: None,
            locked: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, text: &'a str) -> Self {
        self.placeholder = Some(text);
        self
    }

    /// Set waiting mode with a title (e.g., " Waiting for reply ")
    pub fn waiting(mut self, is_waiting: bool, title: &str) -> Self {
        self.waiting = is_waiting;
        if is_waiting {
            self.waiting_title = Some(title.to_string());
        }
        self
    }

    /// Lock the input (escalated conversation)
    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Calculate cursor position in screen coordinates
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // Account for border (1) and prompt "> " (2)
        let x = area.x + 1 + 2 + self.input.cursor as u16;
        let y = area.y + 1;
        (
            x.min(area.x + area.width.saturating_sub(1)),
            y.min(area.y + area.height.saturating_sub(1)),
        )
    }
}

impl<'a> Widget for InputArea<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_style, title_style) = if self.locked {
            (
                Style::default().fg(Color::Red),
                Style::default().fg(Color::Red).bold(),
            )
        } else if self.waiting {
            // Yellow border while a request is in flight
            (
                Style::default().fg(Color::Yellow),
                Style::default().fg(Color::Yellow).bold(),
            )
        } else if self.focused {
            (
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Cyan),
            )
        } else {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
            )
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        if self.locked {
            block = block
                .title(" Escalated ─ input disabled ")
                .title_style(title_style);
        } else if let Some(ref title) = self.waiting_title {
            block = block.title(title.as_str()).title_style(title_style);
        }

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        // Render prompt
        buf.set_string(
            inner.x,
            inner.y,
            "> ",
            Style::default().fg(Color::Cyan).bold(),
        );

        let text_x = inner.x + 2;
        let text_width = inner.width.saturating_sub(2) as usize;

        if self.input.is_empty() {
            if let Some(placeholder) = self.placeholder {
                buf.set_string(
                    text_x,
                    inner.y,
                    placeholder,
                    Style::default().fg(Color::DarkGray).italic(),
                );
            }
        } else {
            let display: String = self.input.text().chars().take(text_width).collect();
            buf.set_string(text_x, inner.y, display, Style::default().fg(Color::White));
        }

        // Render cursor if focused and editable
        if self.focused && !self.locked && !self.waiting {
            let (cursor_x, cursor_y) = self.cursor_position(area);
            if cursor_x < area.x + area.width && cursor_y < area.y + area.height {
                if let Some(cell) = buf.cell_mut(Position::new(cursor_x, cursor_y)) {
                    cell.set_style(Style::default().bg(Color::White).fg(Color::Black));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_input_area_builders() {
        let input = InputState::new();
        let widget = InputArea::new(&input)
            .focused(false)
            .placeholder("Type here...")
            .locked(true);

        assert!(!widget.focused);
        assert_eq!(widget.placeholder, Some("Type here..."));
        assert!(widget.locked);
    }

    #[test]
    fn test_input_area_waiting_builder() {
        let input = InputState::new();
        let widget = InputArea::new(&input).waiting(true, " Waiting for reply ");
        assert!(widget.waiting);
        assert_eq!(widget.waiting_title, Some(" Waiting for reply ".to_string()));

        let widget = InputArea::new(&input).waiting(false, "ignored");
        assert!(!widget.waiting);
        assert!(widget.waiting_title.is_none());
    }

    #[test]
    fn test_input_area_cursor_position() {
        let mut input = InputState::new();
        input.set_buffer("Hello".to_string());

        let area = Rect::new(0, 0, 80, 3);
        let widget = InputArea::new(&input);

        let (x, y) = widget.cursor_position(area);
        // x = border(1) + prompt(2) + cursor(5) = 8
        assert_eq!(x, 8);
        assert_eq!(y, 1);
    }

    #[test]
    fn test_input_area_cursor_clamped() {
        let mut input = InputState::new();
        input.set_buffer("a very long line of text".to_string());

        let area = Rect::new(0, 0, 6, 2);
        let widget = InputArea::new(&input);

        let (x, y) = widget.cursor_position(area);
        assert!(x < area.x + area.width);
        assert!(y < area.y + area.height);
    }

    #[test]
    fn test_input_area_render_placeholder() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let input = InputState::new();

        terminal
            .draw(|f| {
                let widget = InputArea::new(&input).placeholder("Ask a question...");
                f.render_widget(widget, f.area());
            })
            .unwrap();

        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("Ask a question..."));
    }

    #[test]
    fn test_input_area_render_text() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = InputState::new();
        input.set_buffer("Hello world".to_string());

        terminal
            .draw(|f| {
                let widget = InputArea::new(&input);
                f.render_widget(widget, f.area());
            })
            .unwrap();

        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("Hello world"));
    }

    #[test]
    fn test_input_area_render_locked() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let input = InputState::new();

        terminal
            .draw(|f| {
                let widget = InputArea::new(&input).locked(true);
                f.render_widget(widget, f.area());
            })
            .unwrap();

        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("Escalated"));
    }

    #[test]
    fn test_input_area_render_waiting() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let input = InputState::new();

        terminal
            .draw(|f| {
                let widget = InputArea::new(&input).waiting(true, " Waiting for reply ");
                f.render_widget(widget, f.area());
            })
            .unwrap();

        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("Waiting for reply"));
    }

    #[test]
    fn test_input_area_render_tiny_area() {
        let backend = TestBackend::new(5, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let input = InputState::new();

        terminal
            .draw(|f| {
                let widget = InputArea::new(&input);
                f.render_widget(widget, f.area());
            })
            .unwrap();
        // Should not panic
    }
}

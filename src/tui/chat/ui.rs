// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Frame layout and drawing for the chat TUI

use ratatui::{
    layout::{Constraint, Layout},
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::app::{ChatApp, ChatMode};
use super::widgets::message::render_messages;
use super::widgets::{FaqPane, InputArea, StatusBar};

/// Draw one frame
pub fn draw(frame: &mut Frame, app: &ChatApp) {
    let area = frame.area();

    let [title_area, chat_area, faq_area, input_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(app.faq_pane_height()),
        Constraint::Length(3),
    ])
    .areas(area);

    draw_title(frame, app, title_area);
    draw_chat_area(frame, app, chat_area);
    draw_faq_pane(frame, app, faq_area);
    draw_input_area(frame, app, input_area);

    if app.mode == ChatMode::Help {
        draw_help_overlay(frame, area);
    }
}

fn draw_title(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let bar = StatusBar::new("deskmate", &app.config.server_label)
        .session(app.session_id.as_deref())
        .status(app.status_message.as_deref(), app.status_is_error)
        .escalated(app.notice_visible)
        .waiting(app.is_waiting);

    frame.render_widget(bar, area);
}

fn draw_chat_area(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let typing_frame = app.typing_frame();
    let buf = frame.buffer_mut();
    render_messages(
        app.messages.entries(),
        area,
        buf,
        app.scroll_offset,
        typing_frame,
    );

    // Welcome message if no messages
    if app.messages.is_empty() {
        let welcome = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Welcome to Deskmate!",
                Style::default().fg(Color::Cyan).bold(),
            )),
            Line::from(""),
            Line::from("Ask a question and press Enter."),
            Line::from("Pick a FAQ with Ctrl+F, or /help for commands."),
        ])
        .alignment(Alignment::Center);

        let welcome_area = Rect {
            x: area.x + area.width / 4,
            y: area.y + area.height / 3,
            width: area.width / 2,
            height: 6.min(area.height),
        };
        frame.render_widget(welcome, welcome_area);
    }
}

fn draw_faq_pane(frame: &mut Frame, app: &ChatApp, area: Rect) {
    if area.height == 0 {
        return;
    }

    let pane = FaqPane::new(&app.faqs).focused(app.mode == ChatMode::FaqFocus);
    frame.render_widget(pane, area);
}

fn draw_input_area(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let focused = app.mode == ChatMode::Input;

    let placeholder = if app.escalated {
        "This conversation has been handed to a human.".to_string()
    } else if app.is_waiting {
        format!("{} Waiting for the assistant...", app.typing_frame())
    } else {
        "Ask a question or /help for commands...".to_string()
    };

    let widget = InputArea::new(&app.input)
        .focused(focused)
        .placeholder(&placeholder)
        .waiting(app.is_waiting, " Waiting for reply ")
        .locked(app.escalated);

    let cursor_pos = if focused && !app.is_waiting && !app.escalated {
        Some(widget.cursor_position(area))
    } else {
        None
    };

    frame.render_widget(widget, area);

    if let Some(pos) = cursor_pos {
        frame.set_cursor_position(pos);
    }
}

fn draw_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_width = (area.width * 60 / 100).max(30).min(area.width);
    let popup_height = (area.height * 80 / 100).max(10).min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    };

    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            " Deskmate Help ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled("Input Mode:", Style::default().bold())),
        Line::from("  Enter       Send question"),
        Line::from("  ↑/↓         History navigation"),
        Line::from("  PgUp/PgDn   Scroll chat"),
        Line::from("  Tab         Toggle FAQ pane"),
        Line::from("  Ctrl+F      Focus FAQ pane"),
        Line::from("  Ctrl+C      Quit"),
        Line::from(""),
        Line::from(Span::styled("FAQ Pane:", Style::default().bold())),
        Line::from("  j/k or ↑/↓  Move selection"),
        Line::from("  Enter       Ask the selected question"),
        Line::from("  Esc/Tab     Back to input"),
        Line::from(""),
        Line::from(Span::styled("Scroll Mode (Esc):", Style::default().bold())),
        Line::from("  j/k or ↑/↓  Scroll one line"),
        Line::from("  g/G         Jump to top/bottom"),
        Line::from("  Esc/i/Enter Back to input"),
        Line::from(""),
        Line::from(Span::styled("Commands:", Style::default().bold())),
        Line::from("  /help       Show this help"),
        Line::from("  /faqs       Toggle FAQ pane"),
        Line::from("  /history    Reload transcript from the server"),
        Line::from("  /new        Start a new session"),
        Line::from("  /session    Show the session id"),
        Line::from("  /clear      Clear chat"),
        Line::from("  /quit       Exit Deskmate"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(Style::default().fg(Color::White).bold()),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FaqEntry, MockBackend};
    use crate::tui::chat::events::create_event_channel;
    use crate::tui::chat::ChatTuiConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::Arc;

    fn test_app() -> ChatApp {
        let (tx, _rx) = create_event_channel();
        ChatApp::new(
            ChatTuiConfig {
                server_label: "http://localhost:8000".to_string(),
                faq_pane_visible: true,
            },
            Arc::new(MockBackend::new()),
            tx,
        )
    }

    fn draw_to_string(app: &ChatApp) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        format!("{:?}", terminal.backend().buffer())
    }

    #[test]
    fn test_draw_welcome_screen() {
        let app = test_app();
        let rendered = draw_to_string(&app);
        assert!(rendered.contains("Welcome to Deskmate!"));
    }

    #[test]
    fn test_draw_messages() {
        let mut app = test_app();
        app.messages.push_user("What are your hours?");
        app.messages.push_bot("9-5");

        let rendered = draw_to_string(&app);
        assert!(rendered.contains("What are your hours?"));
        assert!(rendered.contains("9-5"));
    }

    #[test]
    fn test_draw_typing_indicator_while_waiting() {
        let mut app = test_app();
        app.messages.push_user("hi");
        app.messages.show_typing();
        app.is_waiting = true;

        let rendered = draw_to_string(&app);
        assert!(rendered.contains("is typing"));
    }

    #[test]
    fn test_draw_faq_pane() {
        let mut app = test_app();
        app.faqs.replace(vec![FaqEntry {
            id: None,
            question: "How do I reset my password?".to_string(),
            answer: "Click forgot password".to_string(),
            category: "Account".to_string(),
        }]);

        let rendered = draw_to_string(&app);
        assert!(rendered.contains("How do I reset my password?"));
    }

    #[test]
    fn test_draw_escalation_notice() {
        let mut app = test_app();
        app.escalated = true;
        app.notice_visible = true;

        let rendered = draw_to_string(&app);
        assert!(rendered.contains("Escalated to a human agent"));
        assert!(rendered.contains("input disabled"));
    }

    #[test]
    fn test_draw_help_overlay() {
        let mut app = test_app();
        app.mode = ChatMode::Help;

        let rendered = draw_to_string(&app);
        assert!(rendered.contains("Deskmate Help"));
        assert!(rendered.contains("/history"));
    }

    #[test]
    fn test_draw_small_terminal() {
        let app = test_app();
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
        // Should not panic
    }
}

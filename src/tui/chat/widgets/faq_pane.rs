// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! FAQ pane widget for quick-reply shortcuts

use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

use crate::api::FaqEntry;
use crate::tui::chat::state::{truncate_string, FaqState};

/// Widget for rendering the FAQ quick-reply pane
pub struct FaqPane<'a> {
    faqs: &'a FaqState,
    focused: bool,
}

impl<'a> FaqPane<'a> {
    pub fn new(faqs: &'a FaqState) -> Self {
        Self {
            faqs,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl<'a> Widget for FaqPane<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 || self.faqs.is_empty() {
            return;
        }

        let title = format!(" FAQ ─ {} entries ", self.faqs.len());
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(border_style)
            .title(title)
            .title_style(Style::default().fg(Color::White));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        // Keep the selection in view when the list is taller than the pane
        let visible = inner.height as usize;
        let first = if self.faqs.selected >= visible {
            self.faqs.selected + 1 - visible
        } else {
            0
        };

        for (row, (i, faq)) in self
            .faqs
            .entries()
            .iter()
            .enumerate()
            .skip(first)
            .take(visible)
            .enumerate()
        {
            let y = inner.y + row as u16;
            let is_selected = self.focused && i == self.faqs.selected;
            render_faq_line(faq, inner.x, y, inner.width, is_selected, buf);
        }
    }
}

/// Render a single FAQ entry line
fn render_faq_line(faq: &FaqEntry, x: u16, y: u16, width: u16, selected: bool, buf: &mut Buffer) {
    let base_style = if selected {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };

    let marker = if selected { "▸" } else { " " };
    let category = format!("[{}]", faq.category);

    let question_max = (width as usize)
        .saturating_sub(category.chars().count() + 5)
        .max(4);
    let question = truncate_string(&faq.question, question_max);

    let line = Line::from(vec![
        Span::styled(format!(" {} ", marker), base_style.fg(Color::Cyan)),
        Span::styled(question, base_style.fg(Color::White)),
        Span::raw(" "),
        Span::styled(category, base_style.fg(Color::DarkGray)),
    ]);
    buf.set_line(x, y, &line, width);
}

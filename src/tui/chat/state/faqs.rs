// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! FAQ panel state
//!
//! Read-only list of quick-reply shortcuts fetched once from the backend.
//! The list is replaced wholesale on load; selection is clamped to bounds.

use crate::api::FaqEntry;

/// State for the FAQ quick-reply panel
#[derive(Debug, Clone, Default)]
pub struct FaqState {
    entries: Vec<FaqEntry>,
    /// Currently highlighted entry
    pub selected: usize,
    loaded: bool,
}

impl FaqState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the panel contents wholesale
    pub fn replace(&mut self, entries: Vec<FaqEntry>) {
        self.entries = entries;
        self.selected = 0;
        self.loaded = true;
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a load has completed (even if it returned no entries)
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if !self.entries.is_empty() && self.selected < self.entries.len() - 1 {
            self.selected += 1;
        }
    }

    /// The highlighted entry, if any
    pub fn selected_entry(&self) -> Option<&FaqEntry> {
        self.entries.get(self.selected)
    }
}

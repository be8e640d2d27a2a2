// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of win96-help and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Per-window state shared by every help page.
//!
//! A page only supplies its identity and content table; tab/url synchronization and the
//! minimize record come from here.

use crate::model::{HelpPage, MinimizedTaskRecord, TabContent, TabId};
use crate::query::{document_title, Location, TabSync};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpWindow {
    rev: u64,
    page: &'static HelpPage,
    tabs: TabSync,
    location: Location,
}

impl HelpWindow {
    /// Opens `page` at `location`.
    ///
    /// The second value is the location the caller should swap into history (replace, not push)
    /// when the `tab` parameter was missing or invalid.
    pub fn open(page: &'static HelpPage, location: Location) -> (Self, Option<Location>) {
        let tabs = TabSync::from_location(&location);
        let replace = tabs.sync_location(&location);
        let window = Self {
            rev: 0,
            page,
            tabs,
            location: replace.clone().unwrap_or(location),
        };
        (window, replace)
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn page(&self) -> &'static HelpPage {
        self.page
    }

    pub fn active_tab(&self) -> TabId {
        self.tabs.active()
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn url(&self) -> String {
        self.location.to_url()
    }

    /// Document title, e.g. `SQL (Examples)`.
    pub fn title(&self) -> String {
        document_title(self.page.name, self.active_tab().label())
    }

    pub fn content(&self) -> &'static TabContent {
        self.page.content(self.active_tab())
    }

    pub fn toc(&self) -> Vec<&'static str> {
        self.content().headings().collect()
    }

    /// Selects `tab`. Returns the location to replace in history, `None` when nothing changed.
    pub fn select_tab(&mut self, tab: TabId) -> Option<Location> {
        if !self.tabs.select(tab) {
            return None;
        }
        let replace = self.tabs.sync_location(&self.location)?;
        self.location = replace.clone();
        self.rev = self.rev.wrapping_add(1);
        Some(replace)
    }

    /// Registry record describing this window right now.
    pub fn task_record(&self) -> MinimizedTaskRecord {
        MinimizedTaskRecord::help(self.page.path, self.page.name, self.url())
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of win96-help and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::TabId;

/// A block of static help content, rendered verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Heading(&'static str),
    Paragraph(&'static str),
    Bullets(&'static [&'static str]),
    Code {
        lang: &'static str,
        source: &'static str,
    },
    Table {
        headers: &'static [&'static str],
        rows: &'static [&'static [&'static str]],
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabContent {
    pub tab: TabId,
    pub blocks: &'static [Block],
}

impl TabContent {
    /// Headings of this tab, in order. These make up the table of contents.
    pub fn headings(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.blocks.iter().filter_map(|block| match block {
            Block::Heading(text) => Some(*text),
            _ => None,
        })
    }
}

/// A help page: identity, display name and one content table per tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpPage {
    pub path: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub tabs: [TabContent; 4],
}

impl HelpPage {
    pub fn content(&self, tab: TabId) -> &TabContent {
        // `tabs` is laid out in `TabId::ALL` order.
        &self.tabs[tab.index()]
    }
}

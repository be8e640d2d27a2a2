// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of win96-help and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::query::Location;

use super::NavigationIntent;

/// In-app navigation stack.
///
/// `depth()` is the index of the current entry, which is what the minimize fallback inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<Location>,
    index: usize,
}

impl History {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    pub fn depth(&self) -> usize {
        self.index
    }

    /// Entries on the stack, forward entries included. Never zero.
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Adds a new entry after the current one, discarding any forward entries.
    pub fn push(&mut self, location: Location) {
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index = self.entries.len() - 1;
    }

    /// Swaps the current entry without adding to the stack.
    pub fn replace(&mut self, location: Location) {
        self.entries[self.index] = location;
    }

    /// Steps back one entry. Returns `false` at the start of the stack.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Carries out a navigation intent. `Back` at the bottom of the stack falls through to home.
    pub fn apply(&mut self, intent: NavigationIntent, home_route: &str) {
        match intent {
            NavigationIntent::Back if self.back() => {}
            NavigationIntent::Back | NavigationIntent::Home => {
                self.push(Location::parse(home_route));
            }
        }
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of win96-help and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Navigation after a window is minimized, and the in-app history it reads from.

pub mod history;

pub use history::History;

/// Catalog route used when there is nothing meaningful to go back to.
pub const DEFAULT_HOME_ROUTE: &str = "/algoViz";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    Back,
    Home,
}

/// Goes back when the window was reached through in-app navigation (positive history index),
/// otherwise home. A deep link has index 0.
pub fn navigate_after_minimize(history_depth: Option<usize>) -> NavigationIntent {
    match history_depth {
        Some(depth) if depth > 0 => NavigationIntent::Back,
        _ => NavigationIntent::Home,
    }
}

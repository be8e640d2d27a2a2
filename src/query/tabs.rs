// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of win96-help and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Active-tab state kept in step with the `tab` query parameter.

use crate::model::TabId;

use super::{Location, QueryParams};

/// Query parameter holding the active tab.
pub const TAB_PARAM: &str = "tab";

/// Resolves the raw `tab` query value. Unknown or missing values resolve to the default tab.
pub fn initial_tab(query_value: Option<&str>) -> TabId {
    query_value
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

/// Returns `current` with the tab parameter set to `active`. Applying it twice is a no-op.
pub fn synchronize_query_param(active: TabId, current: &QueryParams) -> QueryParams {
    let mut next = current.clone();
    next.set(TAB_PARAM, active.as_str());
    next
}

/// `"<page name> (<tab label>)"`.
pub fn document_title(page_name: &str, tab_label: &str) -> String {
    format!("{page_name} ({tab_label})")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabSync {
    active: TabId,
}

impl TabSync {
    pub fn from_location(location: &Location) -> Self {
        Self {
            active: initial_tab(location.query().get(TAB_PARAM)),
        }
    }

    pub fn active(&self) -> TabId {
        self.active
    }

    /// Returns whether the active tab changed.
    pub fn select(&mut self, tab: TabId) -> bool {
        if self.active == tab {
            return false;
        }
        self.active = tab;
        true
    }

    /// Location to swap in (history replace) so the url reflects the active tab, or `None`
    /// when it already does.
    pub fn sync_location(&self, location: &Location) -> Option<Location> {
        let synced = synchronize_query_param(self.active, location.query());
        if &synced == location.query() {
            return None;
        }
        Some(location.clone().with_query(synced))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{document_title, initial_tab, synchronize_query_param, TabSync};
    use crate::model::TabId;
    use crate::query::{Location, QueryParams};

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("not-a-real-tab"))]
    #[case(Some("GLOSSARY"))]
    #[case(Some("examples "))]
    fn invalid_values_fall_back_to_default(#[case] raw: Option<&str>) {
        assert_eq!(initial_tab(raw), TabId::BigPicture);
    }

    #[test]
    fn valid_values_are_kept() {
        for tab in TabId::ALL {
            assert_eq!(initial_tab(Some(tab.as_str())), tab);
        }
    }

    #[test]
    fn synchronize_sets_tab_and_keeps_other_params() {
        let params = QueryParams::parse("a=1&tab=glossary&b=2");
        let synced = synchronize_query_param(TabId::Examples, &params);
        assert_eq!(synced.to_string(), "a=1&tab=examples&b=2");
    }

    #[test]
    fn synchronize_is_idempotent() {
        let params = QueryParams::parse("a=1");
        for tab in TabId::ALL {
            let once = synchronize_query_param(tab, &params);
            let twice = synchronize_query_param(tab, &once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn document_title_format() {
        assert_eq!(document_title("SQL", "Core Concepts"), "SQL (Core Concepts)");
    }

    #[test]
    fn sync_location_rewrites_invalid_param() {
        let location = Location::parse("/x?tab=not-a-real-tab#h");
        let sync = TabSync::from_location(&location);
        assert_eq!(sync.active(), TabId::BigPicture);

        let replaced = sync.sync_location(&location).expect("needs replace");
        assert_eq!(replaced.to_url(), "/x?tab=big-picture#h");
        assert_eq!(sync.sync_location(&replaced), None);
    }

    #[test]
    fn sync_location_is_noop_when_already_synced() {
        let location = Location::parse("/x?tab=examples");
        let sync = TabSync::from_location(&location);
        assert_eq!(sync.active(), TabId::Examples);
        assert_eq!(sync.sync_location(&location), None);
    }

    #[test]
    fn select_reports_changes_only() {
        let mut sync = TabSync::default();
        assert!(!sync.select(TabId::BigPicture));
        assert!(sync.select(TabId::Glossary));
        assert!(!sync.select(TabId::Glossary));
        assert_eq!(sync.active(), TabId::Glossary);
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of win96-help and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Content section of a help window.
///
/// The set is closed: values coming from outside (the `tab` query parameter) are validated
/// against it and anything else falls back to [`TabId::default`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabId {
    #[default]
    BigPicture,
    CoreConcepts,
    Examples,
    Glossary,
}

impl TabId {
    /// All tabs in display order. The first one is the default.
    pub const ALL: [TabId; 4] = [
        TabId::BigPicture,
        TabId::CoreConcepts,
        TabId::Examples,
        TabId::Glossary,
    ];

    /// Wire name used in the query string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BigPicture => "big-picture",
            Self::CoreConcepts => "core-concepts",
            Self::Examples => "examples",
            Self::Glossary => "glossary",
        }
    }

    /// Human-readable label used in the tab strip and the document title.
    pub const fn label(self) -> &'static str {
        match self {
            Self::BigPicture => "Big Picture",
            Self::CoreConcepts => "Core Concepts",
            Self::Examples => "Examples",
            Self::Glossary => "Glossary",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::BigPicture => 0,
            Self::CoreConcepts => 1,
            Self::Examples => 2,
            Self::Glossary => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TabId {
    type Err = ParseTabIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| ParseTabIdError {
                value: s.to_owned(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTabIdError {
    value: String,
}

impl ParseTabIdError {
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseTabIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tab {:?}", self.value)
    }
}

impl std::error::Error for ParseTabIdError {}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::TabId;

    #[rstest]
    #[case("big-picture", TabId::BigPicture)]
    #[case("core-concepts", TabId::CoreConcepts)]
    #[case("examples", TabId::Examples)]
    #[case("glossary", TabId::Glossary)]
    fn parses_wire_names(#[case] raw: &str, #[case] expected: TabId) {
        assert_eq!(raw.parse::<TabId>(), Ok(expected));
        assert_eq!(expected.as_str(), raw);
    }

    #[rstest]
    #[case("")]
    #[case("Examples")]
    #[case("big_picture")]
    #[case(" glossary")]
    fn rejects_everything_else(#[case] raw: &str) {
        let err = raw.parse::<TabId>().unwrap_err();
        assert_eq!(err.value(), raw);
    }

    #[test]
    fn default_is_first_member() {
        assert_eq!(TabId::default(), TabId::ALL[0]);
        assert_eq!(TabId::default(), TabId::BigPicture);
    }

    #[test]
    fn next_and_prev_wrap_around() {
        assert_eq!(TabId::Glossary.next(), TabId::BigPicture);
        assert_eq!(TabId::BigPicture.prev(), TabId::Glossary);
        assert_eq!(TabId::CoreConcepts.next(), TabId::Examples);
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&TabId::CoreConcepts).expect("serialize");
        assert_eq!(json, "\"core-concepts\"");
    }
}

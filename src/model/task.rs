// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of win96-help and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::TaskId;

/// Category tag of a minimized task.
///
/// Only help windows are produced here. Unknown kinds read from storage are kept as-is so they
/// are written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Help,
    Other(String),
}

impl TaskKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Help => "help",
            Self::Other(kind) => kind,
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TaskKind {
    fn from(value: &str) -> Self {
        match value {
            "help" => Self::Help,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl Serialize for TaskKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// One entry of the minimized-task registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimizedTaskRecord {
    pub id: TaskId,
    pub title: String,
    /// Relative url (path + query + hash) captured at minimize time.
    pub url: String,
    pub kind: TaskKind,
}

impl MinimizedTaskRecord {
    pub fn help(page_path: &str, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: TaskId::help(page_path),
            title: title.into(),
            url: url.into(),
            kind: TaskKind::Help,
        }
    }
}

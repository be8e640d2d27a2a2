// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of win96-help and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::QueryParams;

/// A relative url split into path, query and hash.
///
/// The query string is kept as written until the parameters are replaced, so an untouched
/// location formats back to the exact url it was parsed from. Equality compares the parsed
/// parameters.
#[derive(Debug, Clone)]
pub struct Location {
    path: String,
    query: QueryParams,
    raw_query: Option<String>,
    hash: Option<String>,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            path: if path.is_empty() { "/".to_owned() } else { path },
            query: QueryParams::default(),
            raw_query: None,
            hash: None,
        }
    }

    /// Parses `/path?query#hash`. Missing parts are empty; an empty path becomes `/`.
    pub fn parse(url: &str) -> Self {
        let (rest, hash) = match url.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_owned())),
            None => (url, None),
        };
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

        let mut location = Self::new(path);
        location.query = QueryParams::parse(query);
        location.raw_query = (!query.is_empty()).then(|| query.to_owned());
        location.hash = hash;
        location
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self.raw_query = None;
        self
    }

    /// Path, query and hash joined back into a relative url.
    pub fn to_url(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.query == other.query && self.hash == other.hash
    }
}

impl Eq for Location {}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        match &self.raw_query {
            Some(raw) => write!(f, "?{raw}")?,
            None if !self.query.is_empty() => write!(f, "?{}", self.query)?,
            None => {}
        }
        if let Some(hash) = &self.hash {
            write!(f, "#{hash}")?;
        }
        Ok(())
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of win96-help and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::{debug, warn};

use crate::model::{MinimizedTaskRecord, TaskId};

use super::{KeyValueStore, StoreError};

/// Storage key holding the JSON array of minimized help windows.
pub const MINIMIZED_HELP_TASKS_KEY: &str = "win96:minimized-help-tasks";

/// Returns `registry` without any record sharing `record.id`, with `record` appended last.
pub fn upsert(
    registry: &[MinimizedTaskRecord],
    record: MinimizedTaskRecord,
) -> Vec<MinimizedTaskRecord> {
    let mut next = Vec::with_capacity(registry.len() + 1);
    next.extend(registry.iter().filter(|existing| existing.id != record.id).cloned());
    next.push(record);
    next
}

/// Returns `registry` without the record keyed by `id`. Order is preserved.
pub fn remove_by_id(registry: &[MinimizedTaskRecord], id: &TaskId) -> Vec<MinimizedTaskRecord> {
    registry
        .iter()
        .filter(|existing| &existing.id != id)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizeOutcome {
    pub record: MinimizedTaskRecord,
    pub registry: Vec<MinimizedTaskRecord>,
    /// `false` when the read or write failed and the stored registry was left as it was.
    pub persisted: bool,
}

/// The minimized-task registry on top of a key-value store.
#[derive(Debug, Clone)]
pub struct TaskRegistryStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> TaskRegistryStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: MINIMIZED_HELP_TASKS_KEY.to_owned(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Reads the registry. An absent key is an empty registry; malformed JSON is an error.
    ///
    /// Duplicate ids (only possible when a foreign writer touched the key) are folded with the
    /// upsert rule, so the last occurrence wins.
    pub fn load_strict(&self) -> Result<Vec<MinimizedTaskRecord>, StoreError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };
        let records: Vec<MinimizedTaskRecord> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Json {
                key: self.key.clone(),
                source,
            })?;

        if !has_duplicate_ids(&records) {
            return Ok(records);
        }
        Ok(records
            .into_iter()
            .fold(Vec::new(), |acc, record| upsert(&acc, record)))
    }

    /// Reads the registry, treating any failure as empty. The next save overwrites bad data.
    pub fn load(&self) -> Vec<MinimizedTaskRecord> {
        match self.load_strict() {
            Ok(records) => records,
            Err(err) => {
                warn!(key = %self.key, error = %err, "ignoring unreadable minimized-task registry");
                Vec::new()
            }
        }
    }

    /// Reads the registry ahead of a write. Malformed JSON counts as empty so the write replaces
    /// it; any other read failure is returned so stored records are never overwritten blind.
    fn load_for_update(&self) -> Result<Vec<MinimizedTaskRecord>, StoreError> {
        match self.load_strict() {
            Err(err @ StoreError::Json { .. }) => {
                warn!(key = %self.key, error = %err, "replacing malformed minimized-task registry");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Overwrites the stored registry.
    pub fn save(&mut self, registry: &[MinimizedTaskRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string(registry).map_err(|source| StoreError::Json {
            key: self.key.clone(),
            source,
        })?;
        self.store.set(&self.key, &json)
    }

    /// Records the help window at `page_path` as minimized.
    ///
    /// A failed read or write is logged and reported through [`MinimizeOutcome::persisted`] so the
    /// caller can still navigate away. When the read failed nothing is written and the outcome's
    /// registry holds only the new record.
    pub fn minimize(
        &mut self,
        page_path: &str,
        page_title: &str,
        current_url: &str,
    ) -> MinimizeOutcome {
        let record = MinimizedTaskRecord::help(page_path, page_title, current_url);
        let existing = match self.load_for_update() {
            Ok(existing) => existing,
            Err(err) => {
                warn!(
                    id = %record.id,
                    error = %err,
                    "could not read minimized-task registry; skipping write"
                );
                return MinimizeOutcome {
                    registry: vec![record.clone()],
                    record,
                    persisted: false,
                };
            }
        };
        let registry = upsert(&existing, record.clone());

        let persisted = match self.save(&registry) {
            Ok(()) => {
                debug!(
                    id = %record.id,
                    url = %record.url,
                    tasks = registry.len(),
                    "minimized help window"
                );
                true
            }
            Err(err) => {
                warn!(id = %record.id, error = %err, "could not persist minimized help window");
                false
            }
        };

        MinimizeOutcome {
            record,
            registry,
            persisted,
        }
    }

    /// Drops the record keyed by `id`. Nothing is written when no record matched or the stored
    /// registry could not be read.
    pub fn remove(&mut self, id: &TaskId) -> Result<Option<MinimizedTaskRecord>, StoreError> {
        let registry = self.load_for_update()?;
        let Some(removed) = registry.iter().find(|record| &record.id == id).cloned() else {
            return Ok(None);
        };

        self.save(&remove_by_id(&registry, id))?;
        debug!(id = %id, "removed minimized task");
        Ok(Some(removed))
    }
}

fn has_duplicate_ids(records: &[MinimizedTaskRecord]) -> bool {
    let mut seen = std::collections::HashSet::with_capacity(records.len());
    records.iter().any(|record| !seen.insert(record.id.as_str()))
}

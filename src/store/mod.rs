// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of win96-help and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence.
//!
//! A small key-value abstraction (in memory or one file per key on disk) and the
//! minimized-task registry stored under a single key of it.

pub mod error;
pub mod kv;
pub mod registry;

pub use error::StoreError;
pub use kv::{FolderStore, KeyValueStore, MemoryStore, WriteDurability};
pub use registry::{
    remove_by_id, upsert, MinimizeOutcome, TaskRegistryStore, MINIMIZED_HELP_TASKS_KEY,
};

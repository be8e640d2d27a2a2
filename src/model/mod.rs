// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of win96-help and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Tabs, minimized-task records and the static content tables of the help pages.

pub mod catalog;
pub mod ids;
pub mod page;
pub mod tab;
pub mod task;

pub use catalog::{catalog, find_page};
pub use ids::{IdError, TaskId};
pub use page::{Block, HelpPage, TabContent};
pub use tab::{ParseTabIdError, TabId};
pub use task::{MinimizedTaskRecord, TaskKind};

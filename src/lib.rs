// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of win96-help and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! win96-help: retro desktop help pages.
//!
//! Help pages show one of four tabs, mirrored into the `tab` query parameter, and can be
//! minimized to a taskbar whose contents persist under a single storage key.

pub mod model;
pub mod nav;
pub mod query;
pub mod store;
pub mod tui;
pub mod ui;

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of win96-help and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Locations, query strings and the tab synchronizer.
//!
//! Help windows read their active tab from the `tab` query parameter and write it back with a
//! history replace whenever the selection changes.

pub mod location;
pub mod params;
pub mod tabs;

pub use location::Location;
pub use params::QueryParams;
pub use tabs::{document_title, initial_tab, synchronize_query_param, TabSync, TAB_PARAM};

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of win96-help and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use win96_help::model::{MinimizedTaskRecord, TabId};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("win96_help_bench_{prefix}_{pid}_{nanos}_{counter}"));
        std::fs::create_dir_all(&path).expect("create temp dir");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Large,
}

impl Case {
    pub fn len(self) -> usize {
        match self {
            Self::Small => 8,
            Self::Large => 512,
        }
    }
}

/// `n` distinct help records with tab-bearing urls, oldest first.
pub fn registry(case: Case) -> Vec<MinimizedTaskRecord> {
    (0..case.len())
        .map(|idx| {
            let path = format!("/algoViz/page-{idx:04}");
            let tab = TabId::ALL[idx % TabId::ALL.len()];
            let url = format!("{path}?tab={tab}");
            MinimizedTaskRecord::help(&path, format!("Page {idx}"), url)
        })
        .collect()
}

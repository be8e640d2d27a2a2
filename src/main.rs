// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of win96-help and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! win96-help CLI entrypoint.
//!
//! Runs the desktop TUI against a folder-backed store. `--list` prints the persisted taskbar
//! as JSON instead.

use std::error::Error;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::info;
use tracing_subscriber::EnvFilter;
use win96_help::nav::DEFAULT_HOME_ROUTE;
use win96_help::store::{FolderStore, TaskRegistryStore, WriteDurability};
use win96_help::tui::TuiOptions;

const STORE_ENV: &str = "WIN96_HELP_STORE";
const LOG_ENV: &str = "WIN96_HELP_LOG";
const DEFAULT_STORE_DIR: &str = ".win96-help";
const LOG_FILE_NAME: &str = "win96-help.log";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--store <dir>] [--durable-writes] [--home <route>] [--open <url>] [--log-file <path>]\n  {program} --list [--store <dir>]\n\nThe store defaults to ${STORE_ENV}, then ./{DEFAULT_STORE_DIR}.\n--home sets the catalog route and minimize fallback (default {DEFAULT_HOME_ROUTE}).\n--open starts on a page url, e.g. /algoViz/sql?tab=examples.\n--list prints the minimized windows as JSON and exits.\n\nLogs go to <store>/{LOG_FILE_NAME} (or --log-file); filter with ${LOG_ENV} (default info).\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    list: bool,
    store_dir: Option<String>,
    durable_writes: bool,
    home_route: Option<String>,
    open_url: Option<String>,
    log_file: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--list" => {
                if options.list {
                    return Err(());
                }
                options.list = true;
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            "--store" => set_once(&mut options.store_dir, args.next())?,
            "--home" => {
                let route = args.next().ok_or(())?;
                if !route.starts_with('/') {
                    return Err(());
                }
                set_once(&mut options.home_route, Some(route))?;
            }
            "--open" => set_once(&mut options.open_url, args.next())?,
            "--log-file" => set_once(&mut options.log_file, args.next())?,
            _ => return Err(()),
        }
    }

    if options.list
        && (options.home_route.is_some() || options.open_url.is_some() || options.log_file.is_some())
    {
        return Err(());
    }

    Ok(options)
}

fn set_once(slot: &mut Option<String>, value: Option<String>) -> Result<(), ()> {
    if slot.is_some() {
        return Err(());
    }
    *slot = Some(value.ok_or(())?);
    Ok(())
}

fn resolve_store_dir(flag: Option<&str>, env_value: Option<String>) -> PathBuf {
    flag.map(PathBuf::from)
        .or_else(|| env_value.filter(|value| !value.trim().is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIR))
}

fn init_logging(options: &CliOptions, store_dir: &Path) -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    if options.list {
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
        return Ok(());
    }

    // The TUI owns the terminal, so logs go to a file.
    let path = options
        .log_file
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| store_dir.join(LOG_FILE_NAME));
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "win96-help".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let store_dir = resolve_store_dir(options.store_dir.as_deref(), std::env::var(STORE_ENV).ok());
        init_logging(&options, &store_dir)?;

        let durability = if options.durable_writes {
            WriteDurability::Durable
        } else {
            WriteDurability::BestEffort
        };
        let store = FolderStore::new(&store_dir).with_durability(durability);
        let registry = TaskRegistryStore::new(store);

        if options.list {
            let tasks = registry.load_strict()?;
            println!("{}", serde_json::to_string_pretty(&tasks)?);
            return Ok(());
        }

        info!(store = %store_dir.display(), "opening store");
        let tui_options = TuiOptions {
            home_route: options.home_route.unwrap_or_else(|| DEFAULT_HOME_ROUTE.to_owned()),
            start_url: options.open_url,
        };
        win96_help::tui::run(registry, tui_options)
    })();

    if let Err(err) = result {
        eprintln!("win96-help: {err}");
        std::process::exit(1);
    }
}

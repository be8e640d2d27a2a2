// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of win96-help and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{
    block_lines, centered_rect, inset, status_line, tab_strip_line, table_lines, App, Focus,
    SearchMode, TuiOptions, View,
};
use crate::model::{Block as ContentBlock, TabId, TaskId};
use crate::store::{MemoryStore, TaskRegistryStore};
use crate::tui::theme::TuiTheme;
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use rstest::rstest;

fn line_to_string(line: &ratatui::text::Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect::<String>()
}

fn app_at(start: Option<&str>) -> App<MemoryStore> {
    app_with_store(MemoryStore::new(), start)
}

fn app_with_store(store: MemoryStore, start: Option<&str>) -> App<MemoryStore> {
    let options = TuiOptions {
        start_url: start.map(str::to_owned),
        ..TuiOptions::default()
    };
    App::new(TaskRegistryStore::new(store), options, TuiTheme::default())
}

fn press(app: &mut App<MemoryStore>, codes: &[KeyCode]) {
    for code in codes {
        assert!(!app.handle_key_code(*code), "unexpected quit on {code:?}");
    }
}

fn window_title(app: &App<MemoryStore>) -> Option<String> {
    app.active_window().map(|window| window.title())
}

fn current_url(app: &App<MemoryStore>) -> String {
    app.history.current().to_url()
}

#[test]
fn starts_on_catalog_at_home_route() {
    let app = app_at(None);
    assert!(matches!(app.view, View::Catalog));
    assert_eq!(current_url(&app), "/algoViz");
    assert!(app.tasks.is_empty());
}

#[test]
fn opening_page_without_tab_replaces_history_entry() {
    let app = app_at(Some("/algoViz/sql"));
    assert_eq!(window_title(&app).as_deref(), Some("SQL (Big Picture)"));
    assert_eq!(current_url(&app), "/algoViz/sql?tab=big-picture");
    assert_eq!(app.history.len(), 1);
}

#[test]
fn invalid_tab_falls_back_to_big_picture() {
    let app = app_at(Some("/algoViz/sql?tab=bogus&x=1"));
    assert_eq!(window_title(&app).as_deref(), Some("SQL (Big Picture)"));
    assert_eq!(current_url(&app), "/algoViz/sql?tab=big-picture&x=1");
}

#[test]
fn unknown_route_goes_home_with_error_toast() {
    let app = app_at(Some("/algoViz/nope"));
    assert!(matches!(app.view, View::Catalog));
    assert_eq!(current_url(&app), "/algoViz");
    let toast = app.toast.as_ref().expect("toast");
    assert!(toast.error);
    assert!(toast.message.contains("/algoViz/nope"));
}

#[rstest]
#[case(KeyCode::Char('1'), TabId::BigPicture)]
#[case(KeyCode::Char('2'), TabId::CoreConcepts)]
#[case(KeyCode::Char('3'), TabId::Examples)]
#[case(KeyCode::Char('4'), TabId::Glossary)]
#[case(KeyCode::Tab, TabId::CoreConcepts)]
#[case(KeyCode::BackTab, TabId::Glossary)]
fn tab_keys_select_tab_and_rewrite_url(#[case] code: KeyCode, #[case] expected: TabId) {
    let mut app = app_at(Some("/algoViz/sql#joins"));
    press(&mut app, &[code]);

    let window = app.active_window().expect("window");
    assert_eq!(window.active_tab(), expected);
    assert_eq!(current_url(&app), format!("/algoViz/sql?tab={}#joins", expected.as_str()));
    assert_eq!(app.history.len(), 1);
}

#[test]
fn minimize_at_history_bottom_goes_home_and_persists() {
    let mut app = app_at(Some("/algoViz/sql?tab=examples"));
    press(&mut app, &[KeyCode::Char('m')]);

    assert!(matches!(app.view, View::Catalog));
    assert_eq!(current_url(&app), "/algoViz");
    assert_eq!(app.history.depth(), 1);

    assert_eq!(app.tasks.len(), 1);
    assert_eq!(app.tasks[0].id, TaskId::help("/algoViz/sql"));
    assert_eq!(app.tasks[0].url, "/algoViz/sql?tab=examples");
    assert_eq!(app.registry.load(), app.tasks);
}

#[test]
fn minimize_after_opening_from_catalog_goes_back() {
    let mut app = app_at(None);
    press(&mut app, &[KeyCode::Char('j'), KeyCode::Enter]);
    assert_eq!(window_title(&app).as_deref(), Some("Dijkstra's Algorithm (Big Picture)"));
    assert_eq!(app.history.depth(), 1);

    press(&mut app, &[KeyCode::Char('m')]);
    assert!(matches!(app.view, View::Catalog));
    assert_eq!(app.history.depth(), 0);
    assert_eq!(app.tasks.len(), 1);
}

#[test]
fn minimize_twice_keeps_one_entry_with_latest_url() {
    let mut app = app_at(Some("/algoViz/sql"));
    press(&mut app, &[KeyCode::Char('m')]);
    app.open_url("/algoViz/sql?tab=glossary");
    press(&mut app, &[KeyCode::Char('m')]);

    assert_eq!(app.tasks.len(), 1);
    assert_eq!(app.tasks[0].url, "/algoViz/sql?tab=glossary");
}

#[test]
fn restoring_from_taskbar_navigates_and_removes_record() {
    let mut app = app_at(Some("/algoViz/sql?tab=core-concepts"));
    press(&mut app, &[KeyCode::Char('m'), KeyCode::Char('t')]);
    assert_eq!(app.focus, Focus::Taskbar);

    press(&mut app, &[KeyCode::Enter]);
    assert_eq!(app.focus, Focus::Main);
    assert_eq!(window_title(&app).as_deref(), Some("SQL (Core Concepts)"));
    assert_eq!(current_url(&app), "/algoViz/sql?tab=core-concepts");
    assert!(app.tasks.is_empty());
    assert!(app.registry.load().is_empty());
}

#[test]
fn closing_taskbar_entry_does_not_navigate() {
    let mut app = app_at(Some("/algoViz/bfs"));
    press(&mut app, &[KeyCode::Char('m')]);
    app.open_url("/algoViz/sql");
    press(&mut app, &[KeyCode::Char('m'), KeyCode::Char('t')]);
    assert_eq!(app.taskbar_selected, 1);

    press(&mut app, &[KeyCode::Left, KeyCode::Char('x')]);
    assert_eq!(app.tasks.len(), 1);
    assert_eq!(app.tasks[0].id, TaskId::help("/algoViz/sql"));
    assert!(matches!(app.view, View::Catalog));
    assert_eq!(app.focus, Focus::Taskbar);

    press(&mut app, &[KeyCode::Char('x')]);
    assert!(app.tasks.is_empty());
    assert_eq!(app.focus, Focus::Main);
}

#[test]
fn empty_taskbar_cannot_take_focus() {
    let mut app = app_at(None);
    press(&mut app, &[KeyCode::Char('t')]);
    assert_eq!(app.focus, Focus::Main);
    assert!(app.toast.is_some());
}

#[test]
fn tasks_are_loaded_from_existing_store() {
    let mut registry = TaskRegistryStore::new(MemoryStore::new());
    registry.minimize("/algoViz/bfs", "Breadth-First Search", "/algoViz/bfs?tab=glossary");

    let app = app_with_store(registry.store().clone(), None);
    assert_eq!(app.tasks.len(), 1);
    assert_eq!(app.tasks[0].title, "Breadth-First Search");
}

#[test]
fn failed_write_still_leaves_window_with_error_toast() {
    let mut app = app_with_store(MemoryStore::new().with_quota(8), Some("/algoViz/sql"));
    press(&mut app, &[KeyCode::Char('m')]);

    assert!(matches!(app.view, View::Catalog));
    assert!(app.toast.as_ref().is_some_and(|toast| toast.error));
    assert!(app.registry.load().is_empty());
    assert_eq!(app.tasks.len(), 1);
}

#[test]
fn back_and_home_keys_walk_history() {
    let mut app = app_at(None);
    press(&mut app, &[KeyCode::Enter]);
    app.open_url("/algoViz/sql");
    assert_eq!(app.history.depth(), 2);

    press(&mut app, &[KeyCode::Char('b')]);
    assert_eq!(window_title(&app).as_deref(), Some("Breadth-First Search (Big Picture)"));

    press(&mut app, &[KeyCode::Char('h')]);
    assert!(matches!(app.view, View::Catalog));
    assert_eq!(app.history.depth(), 2);
}

#[test]
fn back_at_start_of_history_only_toasts() {
    let mut app = app_at(None);
    press(&mut app, &[KeyCode::Char('b')]);
    assert_eq!(app.history.depth(), 0);
    assert!(app.toast.is_some());
}

#[test]
fn regex_search_filters_catalog_and_opens_match() {
    let mut app = app_at(None);
    press(&mut app, &[KeyCode::Char('/')]);
    assert_eq!(app.search_mode, SearchMode::Editing);

    press(&mut app, &[KeyCode::Char('s'), KeyCode::Char('e'), KeyCode::Char('g')]);
    assert_eq!(app.visible_pages()[0].name, "Segment Tree");

    press(&mut app, &[KeyCode::Enter]);
    assert_eq!(app.search_mode, SearchMode::Results);

    press(&mut app, &[KeyCode::Enter]);
    assert_eq!(app.search_mode, SearchMode::Inactive);
    assert_eq!(window_title(&app).as_deref(), Some("Segment Tree (Big Picture)"));
}

#[test]
fn search_keys_are_not_shortcuts_while_editing() {
    let mut app = app_at(None);
    press(&mut app, &[KeyCode::Char('\\'), KeyCode::Char('q'), KeyCode::Char('t')]);
    assert_eq!(app.search_query, "qt");
    assert_eq!(app.focus, Focus::Main);

    press(&mut app, &[KeyCode::Esc]);
    assert_eq!(app.search_mode, SearchMode::Inactive);
    assert!(app.search_query.is_empty());
}

#[test]
fn quit_and_help_overlay() {
    let mut app = app_at(None);
    press(&mut app, &[KeyCode::Char('?')]);
    assert!(app.show_help);
    press(&mut app, &[KeyCode::Esc]);
    assert!(!app.show_help);
    assert!(app.handle_key_code(KeyCode::Char('q')));
}

#[test]
fn status_line_shows_window_hints() {
    let app = app_at(Some("/algoViz/sql"));
    let text = line_to_string(&status_line(&app));
    assert!(text.contains("m minimize"), "{text}");
}

#[test]
fn tab_strip_numbers_every_tab() {
    let line = tab_strip_line(TabId::Examples, &TuiTheme::default());
    assert_eq!(
        line_to_string(&line),
        " 1 Big Picture │ 2 Core Concepts │ 3 Examples │ 4 Glossary "
    );
}

#[test]
fn table_lines_pad_columns() {
    const ROWS: &[&[&str]] = &[&["ccc", "d"]];
    let lines = table_lines(&["A", "Bb"], ROWS, &TuiTheme::default());
    let text: Vec<String> = lines.iter().map(line_to_string).collect();
    assert_eq!(text, vec!["A   │ Bb", "────┼───", "ccc │ d"]);
}

#[test]
fn code_block_is_framed_line_by_line() {
    let block = ContentBlock::Code {
        lang: "sql",
        source: "SELECT 1\nFROM t",
    };
    let text: Vec<String> =
        block_lines(&block, &TuiTheme::default()).iter().map(line_to_string).collect();
    assert_eq!(text, vec!["  ┌ sql", "  │ SELECT 1", "  │ FROM t"]);
}

#[test]
fn rect_helpers_stay_inside_area() {
    let area = Rect::new(0, 0, 10, 4);
    assert_eq!(inset(area, 2, 1), Rect::new(2, 1, 6, 2));
    assert_eq!(inset(Rect::new(0, 0, 3, 1), 2, 1), Rect::new(1, 0, 1, 1));
    assert_eq!(centered_rect(48, 20, area), area);
    assert_eq!(centered_rect(4, 2, area), Rect::new(3, 1, 4, 2));
}

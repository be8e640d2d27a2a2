// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of win96-help and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! A retro desktop in the terminal (ratatui + crossterm): the help catalog lives at the home
//! route, one help window is open at a time, and minimized windows sit on the taskbar.

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use tracing::{debug, info, warn};

use crate::model::{self, Block as ContentBlock, HelpPage, MinimizedTaskRecord, TabContent, TabId};
use crate::nav::{navigate_after_minimize, History, DEFAULT_HOME_ROUTE};
use crate::query::Location;
use crate::store::{upsert, KeyValueStore, TaskRegistryStore};
use crate::ui::HelpWindow;

mod search;
mod theme;

use search::{ranked_pages, SearchKind};
use theme::TuiTheme;

const TOC_WIDTH: u16 = 26;
const TOAST_TTL: Duration = Duration::from_secs(2);
const START_LABEL: &str = " ⊞ Start ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuiOptions {
    /// Route of the catalog and the minimize fallback target.
    pub home_route: String,
    /// First url to open; defaults to the home route.
    pub start_url: Option<String>,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            home_route: DEFAULT_HOME_ROUTE.to_owned(),
            start_url: None,
        }
    }
}

pub fn run<S: KeyValueStore>(
    registry: TaskRegistryStore<S>,
    options: TuiOptions,
) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env().unwrap_or_else(|err| {
        warn!(error = %err, "falling back to the classic palette");
        TuiTheme::default()
    });

    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(registry, options, theme);
    info!(url = %app.history.current(), tasks = app.tasks.len(), "desktop started");

    while !app.should_quit {
        app.expire_toast(Instant::now());
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    info!("desktop closed");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Main,
    Taskbar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchMode {
    Inactive,
    Editing,
    Results,
}

#[derive(Debug)]
enum View {
    Catalog,
    Window(HelpWindow),
}

#[derive(Debug)]
struct Toast {
    message: String,
    expires_at: Instant,
    error: bool,
}

struct App<S> {
    registry: TaskRegistryStore<S>,
    /// Taskbar contents as last read from (or written to) the registry.
    tasks: Vec<MinimizedTaskRecord>,
    history: History,
    home_route: String,
    view: View,
    focus: Focus,
    catalog_selected: usize,
    search_mode: SearchMode,
    search_kind: SearchKind,
    search_query: String,
    taskbar_selected: usize,
    content_scroll: u16,
    content_viewport_height: u16,
    show_help: bool,
    toast: Option<Toast>,
    should_quit: bool,
    theme: TuiTheme,
}

impl<S: KeyValueStore> App<S> {
    fn new(registry: TaskRegistryStore<S>, options: TuiOptions, theme: TuiTheme) -> Self {
        let start = options.start_url.as_deref().unwrap_or(&options.home_route);
        let history = History::new(Location::parse(start));
        let tasks = registry.load();

        let mut app = Self {
            registry,
            tasks,
            history,
            home_route: options.home_route,
            view: View::Catalog,
            focus: Focus::Main,
            catalog_selected: 0,
            search_mode: SearchMode::Inactive,
            search_kind: SearchKind::Regular,
            search_query: String::new(),
            taskbar_selected: 0,
            content_scroll: 0,
            content_viewport_height: 0,
            show_help: false,
            toast: None,
            should_quit: false,
            theme,
        };
        app.route();
        app
    }

    fn is_home(&self, location: &Location) -> bool {
        location.path() == Location::parse(&self.home_route).path()
    }

    /// Rebuilds the view from the current history entry.
    fn route(&mut self) {
        self.content_scroll = 0;
        let current = self.history.current().clone();
        if self.is_home(&current) {
            self.view = View::Catalog;
            return;
        }

        match model::find_page(current.path()) {
            Some(page) => {
                let (window, replace) = HelpWindow::open(page, current);
                if let Some(replace) = replace {
                    debug!(url = %replace, "normalized tab parameter");
                    self.history.replace(replace);
                }
                self.view = View::Window(window);
            }
            None => {
                warn!(path = current.path(), "no help page at route");
                self.set_error(format!("Page not found: {}", current.path()));
                self.history.replace(Location::parse(&self.home_route));
                self.view = View::Catalog;
            }
        }
    }

    fn open_url(&mut self, url: &str) {
        self.history.push(Location::parse(url));
        debug!(url, depth = self.history.depth(), entries = self.history.len(), "navigated");
        self.route();
    }

    fn go_back(&mut self) {
        if self.history.back() {
            self.route();
        } else {
            self.set_toast("Nothing to go back to");
        }
    }

    fn go_home(&mut self) {
        if !self.is_home(self.history.current()) {
            let home = self.home_route.clone();
            self.open_url(&home);
        }
    }

    fn select_tab(&mut self, tab: TabId) {
        let View::Window(window) = &mut self.view else {
            return;
        };
        if let Some(replace) = window.select_tab(tab) {
            self.history.replace(replace);
            self.content_scroll = 0;
        }
    }

    fn cycle_tab(&mut self, forward: bool) {
        let View::Window(window) = &self.view else {
            return;
        };
        let active = window.active_tab();
        self.select_tab(if forward { active.next() } else { active.prev() });
    }

    fn active_window(&self) -> Option<&HelpWindow> {
        match &self.view {
            View::Window(window) => Some(window),
            View::Catalog => None,
        }
    }

    /// Records the open window on the taskbar, then leaves it.
    fn minimize_window(&mut self) {
        let Some((page, url)) = self.active_window().map(|window| (window.page(), window.url()))
        else {
            return;
        };

        let outcome = self.registry.minimize(page.path, page.name, &url);
        if outcome.persisted {
            self.set_toast(format!("Minimized {}", page.name));
            self.tasks = outcome.registry;
        } else {
            self.set_error("Could not save the taskbar; this window will not survive a restart");
            self.tasks = upsert(&self.tasks, outcome.record);
        }
        self.taskbar_selected = self.tasks.len().saturating_sub(1);

        let intent = navigate_after_minimize(Some(self.history.depth()));
        debug!(?intent, depth = self.history.depth(), "leaving minimized window");
        let home = self.home_route.clone();
        self.history.apply(intent, &home);
        self.route();
    }

    fn refresh_tasks(&mut self) {
        self.tasks = self.registry.load();
        self.taskbar_selected = self.taskbar_selected.min(self.tasks.len().saturating_sub(1));
        if self.tasks.is_empty() {
            self.focus = Focus::Main;
        }
    }

    fn remove_task(&mut self, task: &MinimizedTaskRecord) {
        if let Err(err) = self.registry.remove(&task.id) {
            warn!(id = %task.id, error = %err, "failed to remove minimized task");
            self.set_error(format!("Could not update the taskbar: {err}"));
        }
        self.refresh_tasks();
    }

    /// Restores the selected taskbar entry: navigate to its url and drop the record.
    fn reopen_selected_task(&mut self) {
        let Some(task) = self.tasks.get(self.taskbar_selected).cloned() else {
            return;
        };
        info!(id = %task.id, url = %task.url, "restoring minimized window");
        self.focus = Focus::Main;
        self.open_url(&task.url);
        self.remove_task(&task);
    }

    fn close_selected_task(&mut self) {
        let Some(task) = self.tasks.get(self.taskbar_selected).cloned() else {
            return;
        };
        self.remove_task(&task);
        self.set_toast(format!("Closed {}", task.title));
    }

    fn toggle_taskbar_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Main if !self.tasks.is_empty() => Focus::Taskbar,
            Focus::Main => {
                self.set_toast("Taskbar is empty");
                Focus::Main
            }
            Focus::Taskbar => Focus::Main,
        };
    }

    fn visible_pages(&self) -> Vec<&'static HelpPage> {
        match self.search_mode {
            SearchMode::Inactive => model::catalog().iter().collect(),
            SearchMode::Editing | SearchMode::Results => {
                ranked_pages(model::catalog(), &self.search_query, self.search_kind)
            }
        }
    }

    fn move_catalog_selection(&mut self, delta: isize) {
        let len = self.visible_pages().len();
        if len == 0 {
            self.catalog_selected = 0;
            return;
        }
        let next = self.catalog_selected as isize + delta;
        self.catalog_selected = next.clamp(0, len as isize - 1) as usize;
    }

    fn open_selected_page(&mut self) {
        let Some(page) = self.visible_pages().get(self.catalog_selected).copied() else {
            self.set_toast("No matching page");
            return;
        };
        self.clear_search();
        self.open_url(page.path);
    }

    fn start_search(&mut self, kind: SearchKind) {
        self.search_mode = SearchMode::Editing;
        self.search_kind = kind;
        self.search_query.clear();
        self.catalog_selected = 0;
    }

    fn clear_search(&mut self) {
        self.search_mode = SearchMode::Inactive;
        self.search_query.clear();
        self.catalog_selected = 0;
    }

    fn scroll_content(&mut self, delta: i32) {
        let next = i32::from(self.content_scroll) + delta;
        self.content_scroll = next.clamp(0, i32::from(u16::MAX)) as u16;
    }

    fn page_step(&self) -> i32 {
        i32::from(self.content_viewport_height.saturating_sub(1).max(1))
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
            error: false,
        });
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL * 2,
            error: true,
        });
    }

    fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|toast| toast.expires_at <= now) {
            self.toast = None;
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    /// Returns `true` when the key asks to quit.
    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            match code {
                KeyCode::Char('q') => return true,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter => self.show_help = false,
                _ => {}
            }
            return false;
        }

        if self.search_mode == SearchMode::Editing {
            self.handle_search_edit_key(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('t') => self.toggle_taskbar_focus(),
            _ if self.focus == Focus::Taskbar => self.handle_taskbar_key(code),
            _ if matches!(self.view, View::Catalog) => self.handle_catalog_key(code),
            _ => self.handle_window_key(code),
        }
        false
    }

    fn handle_search_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.clear_search(),
            KeyCode::Enter => {
                if self.search_query.trim().is_empty() {
                    self.clear_search();
                } else {
                    self.search_mode = SearchMode::Results;
                }
            }
            KeyCode::Backspace => {
                self.search_query.pop();
                self.catalog_selected = 0;
            }
            KeyCode::Char(ch) => {
                self.search_query.push(ch);
                self.catalog_selected = 0;
            }
            _ => {}
        }
    }

    fn handle_catalog_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.move_catalog_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_catalog_selection(1),
            KeyCode::Home | KeyCode::Char('g') => self.catalog_selected = 0,
            KeyCode::End | KeyCode::Char('G') => self.move_catalog_selection(isize::MAX / 2),
            KeyCode::Enter => self.open_selected_page(),
            KeyCode::Char('/') => self.start_search(SearchKind::Regular),
            KeyCode::Char('\\') => self.start_search(SearchKind::Fuzzy),
            KeyCode::Esc if self.search_mode != SearchMode::Inactive => self.clear_search(),
            KeyCode::Char('b') | KeyCode::Backspace => self.go_back(),
            _ => {}
        }
    }

    fn handle_window_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(ch @ '1'..='4') => {
                let index = ch as usize - '1' as usize;
                if let Some(tab) = TabId::from_index(index) {
                    self.select_tab(tab);
                }
            }
            KeyCode::Tab | KeyCode::Right => self.cycle_tab(true),
            KeyCode::BackTab | KeyCode::Left => self.cycle_tab(false),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_content(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_content(-1),
            KeyCode::PageDown => self.scroll_content(self.page_step()),
            KeyCode::PageUp => self.scroll_content(-self.page_step()),
            KeyCode::Char('m') => self.minimize_window(),
            KeyCode::Char('b') | KeyCode::Backspace => self.go_back(),
            KeyCode::Char('h') | KeyCode::Esc => self.go_home(),
            _ => {}
        }
    }

    fn handle_taskbar_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.taskbar_selected = self.taskbar_selected.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let last = self.tasks.len().saturating_sub(1);
                self.taskbar_selected = (self.taskbar_selected + 1).min(last);
            }
            KeyCode::Enter => self.reopen_selected_task(),
            KeyCode::Char('x') | KeyCode::Delete => self.close_selected_task(),
            KeyCode::Esc => self.focus = Focus::Main,
            _ => {}
        }
    }
}

fn draw<S: KeyValueStore>(frame: &mut Frame<'_>, app: &mut App<S>) {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    frame.render_widget(Block::default().style(app.theme.desktop_style()), rows[0]);
    let window_area = inset(rows[0], 2, 1);

    let viewport_height = match &app.view {
        View::Catalog => {
            draw_catalog(frame, app, window_area);
            None
        }
        View::Window(window) => Some(draw_window(
            frame,
            window,
            &app.theme,
            app.focus == Focus::Main,
            app.content_scroll,
            window_area,
        )),
    };
    if let Some(height) = viewport_height {
        app.content_viewport_height = height;
    }

    frame.render_widget(Paragraph::new(taskbar_line(app)), rows[1]);
    frame.render_widget(
        Paragraph::new(status_line(app)).style(app.theme.taskbar_style()),
        rows[2],
    );

    if app.show_help {
        draw_help(frame, &app.theme, area);
    }
}

fn draw_catalog<S: KeyValueStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.window_style())
        .style(app.theme.window_style())
        .title(Span::styled(" AlgoViz Help ", app.theme.title_style(app.focus == Focus::Main)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let searching = app.search_mode != SearchMode::Inactive;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(u16::from(searching))])
        .split(inner);

    let pages = app.visible_pages();
    let items: Vec<ListItem<'static>> = pages
        .iter()
        .map(|page| {
            ListItem::new(Line::from(vec![
                Span::styled(page.name, app.theme.heading_style()),
                Span::raw(" ─ "),
                Span::raw(page.summary),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if !pages.is_empty() {
        state.select(Some(app.catalog_selected.min(pages.len() - 1)));
    }
    let list = List::new(items)
        .style(app.theme.window_style())
        .highlight_style(app.theme.selection_style())
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(list, rows[0], &mut state);

    if searching {
        frame.render_widget(Paragraph::new(search_line(app, pages.len())), rows[1]);
    }
}

fn search_line<S>(app: &App<S>, matches: usize) -> Line<'static> {
    let cursor = if app.search_mode == SearchMode::Editing { "▏" } else { "" };
    Line::from(vec![
        Span::styled(
            format!("{}{}{cursor}", app.search_kind.prompt(), app.search_query),
            app.theme.heading_style(),
        ),
        Span::styled(format!("  ({matches} matches)"), app.theme.window_style()),
    ])
}

/// Draws the open help window and returns the height of its content viewport.
fn draw_window(
    frame: &mut Frame<'_>,
    window: &HelpWindow,
    theme: &TuiTheme,
    focused: bool,
    scroll: u16,
    area: Rect,
) -> u16 {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.window_style())
        .style(theme.window_style())
        .title(Span::styled(format!(" {} ", window.title()), theme.title_style(focused)))
        .title_bottom(Span::styled(" [m] _ ", theme.title_style(focused)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);
    frame.render_widget(Paragraph::new(tab_strip_line(window.active_tab(), theme)), rows[0]);

    let toc_width = TOC_WIDTH.min(rows[2].width / 3);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(toc_width), Constraint::Min(0)])
        .split(rows[2]);

    let toc = Paragraph::new(toc_lines(&window.toc(), theme))
        .block(Block::default().borders(Borders::RIGHT).border_style(theme.window_style()))
        .style(theme.window_style())
        .wrap(Wrap { trim: true });
    frame.render_widget(toc, columns[0]);

    let content_area = inset(columns[1], 1, 0);
    let content = Paragraph::new(content_lines(window.content(), theme))
        .style(theme.window_style())
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(content, content_area);

    content_area.height
}

fn tab_strip_line(active: TabId, theme: &TuiTheme) -> Line<'static> {
    let mut spans = Vec::with_capacity(TabId::ALL.len() * 2);
    for (idx, tab) in TabId::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("│", theme.window_style()));
        }
        spans.push(Span::styled(
            format!(" {} {} ", idx + 1, tab.label()),
            theme.tab_style(*tab == active),
        ));
    }
    Line::from(spans)
}

fn toc_lines(headings: &[&'static str], theme: &TuiTheme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled("Contents", theme.heading_style())];
    if headings.is_empty() {
        lines.push(Line::raw("  (none)"));
    }
    lines.extend(headings.iter().map(|heading| Line::raw(format!("• {heading}"))));
    lines
}

fn content_lines(content: &TabContent, theme: &TuiTheme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for block in content.blocks {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.extend(block_lines(block, theme));
    }
    lines
}

fn block_lines(block: &ContentBlock, theme: &TuiTheme) -> Vec<Line<'static>> {
    match *block {
        ContentBlock::Heading(text) => vec![Line::styled(text, theme.heading_style())],
        ContentBlock::Paragraph(text) => vec![Line::raw(text)],
        ContentBlock::Bullets(items) => {
            items.iter().map(|item| Line::raw(format!("  • {item}"))).collect()
        }
        ContentBlock::Code { lang, source } => {
            let mut lines = vec![Line::styled(
                format!("  ┌ {lang}"),
                theme.window_style().add_modifier(Modifier::ITALIC),
            )];
            lines.extend(
                source
                    .lines()
                    .map(|line| Line::styled(format!("  │ {line}"), theme.code_style())),
            );
            lines
        }
        ContentBlock::Table { headers, rows } => table_lines(headers, rows, theme),
    }
}

fn table_lines(
    headers: &'static [&'static str],
    rows: &'static [&'static [&'static str]],
    theme: &TuiTheme,
) -> Vec<Line<'static>> {
    let columns = rows.iter().map(|row| row.len()).fold(headers.len(), usize::max);
    let mut widths = vec![0usize; columns];
    for row in std::iter::once(headers).chain(rows.iter().copied()) {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }

    let format_row = |row: &[&str]| -> String {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(idx, &width)| format!("{:<width$}", row.get(idx).copied().unwrap_or("")))
            .collect();
        cells.join(" │ ").trim_end().to_owned()
    };

    let rule: Vec<String> = widths.iter().map(|&width| "─".repeat(width)).collect();
    let mut lines = vec![
        Line::styled(format_row(headers), theme.heading_style()),
        Line::raw(rule.join("─┼─")),
    ];
    lines.extend(rows.iter().map(|row| Line::raw(format_row(row))));
    lines
}

fn taskbar_line<S>(app: &App<S>) -> Line<'static> {
    let focused = app.focus == Focus::Taskbar;
    let mut spans = vec![
        Span::styled(START_LABEL, app.theme.title_style(true)),
        Span::styled(" ", app.theme.taskbar_style()),
    ];
    if app.tasks.is_empty() {
        spans.push(Span::styled(
            "no minimized windows",
            app.theme.taskbar_style().add_modifier(Modifier::DIM),
        ));
    }
    for (idx, task) in app.tasks.iter().enumerate() {
        spans.push(Span::styled(
            format!("[ {} ]", task.title),
            app.theme.taskbar_item_style(idx == app.taskbar_selected, focused),
        ));
        spans.push(Span::styled(" ", app.theme.taskbar_style()));
    }
    Line::from(spans).style(app.theme.taskbar_style())
}

fn status_line<S>(app: &App<S>) -> Line<'static> {
    if let Some(toast) = &app.toast {
        let style = if toast.error { app.theme.error_style() } else { app.theme.taskbar_style() };
        return Line::styled(format!(" {}", toast.message), style);
    }

    let hints = match (app.focus, &app.view) {
        (Focus::Taskbar, _) => "←/→ select  Enter restore  x close  Esc back  ? help",
        (Focus::Main, _) if app.search_mode == SearchMode::Editing => {
            "type to filter  Enter keep results  Esc cancel"
        }
        (Focus::Main, View::Catalog) => "j/k move  Enter open  / search  \\ fuzzy  t taskbar  q quit",
        (Focus::Main, View::Window(_)) => {
            "1-4 tabs  j/k scroll  m minimize  b back  h home  t taskbar  q quit"
        }
    };
    Line::raw(format!(" {hints}"))
}

fn help_lines() -> Vec<Line<'static>> {
    [
        ("Catalog", ""),
        ("  j / k, ↑ / ↓", "move selection"),
        ("  Enter", "open page"),
        ("  /", "regex search"),
        ("  \\", "fuzzy search"),
        ("Window", ""),
        ("  1-4, Tab, ← / →", "switch tab"),
        ("  j / k, PgUp / PgDn", "scroll"),
        ("  m", "minimize to taskbar"),
        ("  b", "back"),
        ("  h, Esc", "home"),
        ("Taskbar", ""),
        ("  t", "focus taskbar"),
        ("  Enter", "restore window"),
        ("  x", "close entry"),
        ("", ""),
        ("  q", "quit"),
    ]
    .into_iter()
    .map(|(keys, label)| {
        if label.is_empty() {
            Line::from(Span::styled(keys, Style::default().add_modifier(Modifier::BOLD)))
        } else {
            Line::from(vec![Span::raw(format!("{keys:<22}")), Span::raw(label)])
        }
    })
    .collect()
}

fn draw_help(frame: &mut Frame<'_>, theme: &TuiTheme, area: Rect) {
    let lines = help_lines();
    let height = (lines.len() as u16).saturating_add(2);
    let popup = centered_rect(48, height, area);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.window_style())
        .style(theme.window_style())
        .title(Span::styled(" Help ", theme.title_style(true)));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn inset(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    let dx = horizontal.min(area.width / 2);
    let dy = vertical.min(area.height / 2);
    Rect {
        x: area.x + dx,
        y: area.y + dy,
        width: area.width - dx * 2,
        height: area.height - dy * 2,
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

#[cfg(test)]
mod tests;

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use pinata_app::{AppCommand, AppEvent, AppState, Catalog, DetailPanel, ItemId};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

const STATUS_CLEAR_AFTER: Duration = Duration::from_secs(4);
const CURSOR_MARK: &str = "▸";
const SELECTED_MARK: &str = "●";
const COST_MARK: &str = "◉";
const INPUT_CARET: &str = "▏";
const DETAIL_SCROLL_STEP: isize = 5;

pub const EXTERNAL_LINKS: [(&str, &str); 3] = [
    ("twitch", "https://www.twitch.tv/MisterStealYourGil"),
    (
        "youtube",
        "https://www.youtube.com/channel/UCnpj6ufdf5FjJWxVCm29rug",
    ),
    ("github", "https://github.com/NTumminaro/VP-TiP-Quick-Search"),
];

pub trait AppRuntime {
    fn load_catalog(&mut self) -> Result<Catalog>;
    fn source_label(&self) -> String;
    /// Deliver the load result through `tx`. The default loads on the
    /// calling thread; runtimes with slow sources should override this.
    fn spawn_catalog_load(&mut self, tx: Sender<InternalEvent>) -> Result<()> {
        tx.send(InternalEvent::from_load(self.load_catalog()))
            .map_err(|_| anyhow::anyhow!("catalog event channel closed"))?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
    CatalogLoaded(Catalog),
    CatalogFailed { error: String },
}

impl InternalEvent {
    pub fn from_load(result: Result<Catalog>) -> Self {
        match result {
            Ok(catalog) => Self::CatalogLoaded(catalog),
            Err(error) => Self::CatalogFailed {
                error: format!("{error:#}"),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Focus {
    #[default]
    Search,
    Items,
    Related,
}

impl Focus {
    const fn label(self) -> &'static str {
        match self {
            Self::Search => "SEARCH",
            Self::Items => "LIST",
            Self::Related => "RELATED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingRow {
    Tricks,
    Notes,
}

impl SettingRow {
    const ALL: [Self; 2] = [Self::Tricks, Self::Notes];

    const fn label(self) -> &'static str {
        match self {
            Self::Tricks => "show tricks",
            Self::Notes => "show notes",
        }
    }

    fn command(self) -> AppCommand {
        match self {
            Self::Tricks => AppCommand::ToggleTricks,
            Self::Notes => AppCommand::ToggleNotes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct SettingsUiState {
    visible: bool,
    cursor: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ViewData {
    focus: Focus,
    item_cursor: usize,
    related_cursor: usize,
    detail_scroll: usize,
    settings: SettingsUiState,
    help_visible: bool,
    load: LoadState,
    source_label: String,
    status_token: u64,
}

pub fn run_app<R: AppRuntime>(state: &mut AppState, runtime: &mut R) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData {
        source_label: runtime.source_label(),
        ..ViewData::default()
    };
    let (internal_tx, internal_rx) = mpsc::channel();

    if let Err(error) = runtime.spawn_catalog_load(internal_tx.clone()) {
        tracing::error!(error = %format!("{error:#}"), "catalog load did not start");
        view_data.load = LoadState::Failed(error.to_string());
        emit_status(state, &mut view_data, &internal_tx, format!("load failed: {error}"));
    }

    let mut result = Ok(());
    loop {
        process_internal_events(state, &mut view_data, &internal_tx, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if handle_key_event(state, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
            InternalEvent::CatalogLoaded(catalog) => {
                let count = catalog.len();
                tracing::info!(items = count, source = %view_data.source_label, "catalog ready");
                view_data.load = LoadState::Loaded;
                apply_command(state, view_data, tx, AppCommand::ReplaceCatalog(catalog));
                emit_status(state, view_data, tx, format!("loaded {count} pinatas"));
            }
            InternalEvent::CatalogFailed { error } => {
                tracing::error!(%error, source = %view_data.source_label, "catalog load failed");
                view_data.load = LoadState::Failed(error.clone());
                emit_status(state, view_data, tx, format!("load failed: {error}"));
            }
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(STATUS_CLEAR_AFTER);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    apply_command(
        state,
        view_data,
        internal_tx,
        AppCommand::SetStatus(message.into()),
    );
}

fn apply_command(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    command: AppCommand,
) {
    let events = state.dispatch(command);
    for event in &events {
        match event {
            AppEvent::StatusUpdated(_) => {
                view_data.status_token = view_data.status_token.saturating_add(1);
                schedule_status_clear(internal_tx, view_data.status_token);
            }
            AppEvent::SelectionChanged(selected) => {
                view_data.related_cursor = 0;
                view_data.detail_scroll = 0;
                if let Some(row) = selected
                    .and_then(|id| state.visible().iter().position(|visible| *visible == id))
                {
                    view_data.item_cursor = row;
                }
            }
            _ => {}
        }
    }
    clamp_cursors(state, view_data);
}

fn clamp_cursors(state: &AppState, view_data: &mut ViewData) {
    view_data.item_cursor = view_data
        .item_cursor
        .min(state.visible().len().saturating_sub(1));

    let related = selected_related(state);
    view_data.related_cursor = view_data
        .related_cursor
        .min(related.len().saturating_sub(1));
    if related.is_empty() && view_data.focus == Focus::Related {
        view_data.focus = Focus::Items;
    }
}

fn selected_related(state: &AppState) -> Vec<String> {
    state
        .selected_item()
        .map(|item| item.related())
        .unwrap_or_default()
}

fn handle_key_event(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('t') => {
                apply_command(state, view_data, internal_tx, AppCommand::ToggleTricks);
                return false;
            }
            KeyCode::Char('n') => {
                apply_command(state, view_data, internal_tx, AppCommand::ToggleNotes);
                return false;
            }
            KeyCode::Char('s') => {
                open_settings(view_data);
                return false;
            }
            _ => {}
        }
    }

    if view_data.help_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            view_data.help_visible = false;
        }
        return false;
    }

    if view_data.settings.visible {
        handle_settings_key(state, view_data, internal_tx, key);
        return false;
    }

    match key.code {
        KeyCode::PageDown => {
            scroll_detail(state, view_data, DETAIL_SCROLL_STEP);
            return false;
        }
        KeyCode::PageUp => {
            scroll_detail(state, view_data, -DETAIL_SCROLL_STEP);
            return false;
        }
        _ => {}
    }

    match view_data.focus {
        Focus::Search => handle_search_key(state, view_data, internal_tx, key),
        Focus::Items => return handle_items_key(state, view_data, internal_tx, key),
        Focus::Related => return handle_related_key(state, view_data, internal_tx, key),
    }
    false
}

/// Moves the detail body. The upper bound is the last text line; rendering
/// tightens it to the panel height.
fn scroll_detail(state: &AppState, view_data: &mut ViewData, delta: isize) {
    let Some(panel) = state.detail_panel() else {
        view_data.detail_scroll = 0;
        return;
    };
    let last_line = render_detail_text(&panel).lines().count().saturating_sub(1);
    view_data.detail_scroll = view_data
        .detail_scroll
        .saturating_add_signed(delta)
        .min(last_line);
}

fn open_settings(view_data: &mut ViewData) {
    view_data.help_visible = false;
    view_data.settings = SettingsUiState {
        visible: true,
        cursor: 0,
    };
}

fn handle_settings_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let rows = SettingRow::ALL.len();
    match key.code {
        KeyCode::Esc | KeyCode::Char('s') => view_data.settings.visible = false,
        KeyCode::Char('j') | KeyCode::Down => {
            view_data.settings.cursor = (view_data.settings.cursor + 1) % rows;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            view_data.settings.cursor = (view_data.settings.cursor + rows - 1) % rows;
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let row = SettingRow::ALL[view_data.settings.cursor.min(rows - 1)];
            apply_command(state, view_data, internal_tx, row.command());
        }
        KeyCode::Char('t') => {
            apply_command(state, view_data, internal_tx, AppCommand::ToggleTricks);
        }
        KeyCode::Char('n') => {
            apply_command(state, view_data, internal_tx, AppCommand::ToggleNotes);
        }
        _ => {}
    }
}

fn handle_search_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('u') if ctrl => {
            apply_command(state, view_data, internal_tx, AppCommand::ClearQuery);
        }
        KeyCode::Char(ch) if !ctrl => {
            apply_command(state, view_data, internal_tx, AppCommand::PushQueryChar(ch));
        }
        KeyCode::Backspace => {
            apply_command(state, view_data, internal_tx, AppCommand::PopQueryChar);
        }
        KeyCode::Esc => {
            if state.search_query().is_empty() {
                view_data.focus = Focus::Items;
            } else {
                apply_command(state, view_data, internal_tx, AppCommand::ClearQuery);
            }
        }
        KeyCode::Down | KeyCode::Enter | KeyCode::Tab => {
            view_data.focus = Focus::Items;
        }
        KeyCode::BackTab => {
            view_data.focus = if selected_related(state).is_empty() {
                Focus::Items
            } else {
                Focus::Related
            };
        }
        _ => {}
    }
}

fn handle_items_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    let last = state.visible().len().saturating_sub(1);
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('j') | KeyCode::Down => {
            view_data.item_cursor = (view_data.item_cursor + 1).min(last);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            view_data.item_cursor = view_data.item_cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => view_data.item_cursor = 0,
        KeyCode::Char('G') | KeyCode::End => view_data.item_cursor = last,
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(id) = item_under_cursor(state, view_data) {
                apply_command(state, view_data, internal_tx, AppCommand::Select(id));
            }
        }
        KeyCode::Esc => {
            apply_command(state, view_data, internal_tx, AppCommand::ClearSelection);
        }
        KeyCode::Tab | KeyCode::Char('r') => {
            view_data.focus = if selected_related(state).is_empty() {
                Focus::Search
            } else {
                Focus::Related
            };
        }
        KeyCode::BackTab | KeyCode::Char('/') => view_data.focus = Focus::Search,
        KeyCode::Char('s') => open_settings(view_data),
        KeyCode::Char('?') => view_data.help_visible = true,
        _ => {}
    }
    false
}

fn handle_related_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    let related = selected_related(state);
    let last = related.len().saturating_sub(1);
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('l') | KeyCode::Char('j') | KeyCode::Right | KeyCode::Down => {
            view_data.related_cursor = (view_data.related_cursor + 1).min(last);
        }
        KeyCode::Char('h') | KeyCode::Char('k') | KeyCode::Left | KeyCode::Up => {
            view_data.related_cursor = view_data.related_cursor.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(name) = related.get(view_data.related_cursor) {
                apply_command(
                    state,
                    view_data,
                    internal_tx,
                    AppCommand::FollowRelated(name.clone()),
                );
            }
        }
        KeyCode::Esc | KeyCode::BackTab => view_data.focus = Focus::Items,
        KeyCode::Tab | KeyCode::Char('/') => view_data.focus = Focus::Search,
        KeyCode::Char('s') => open_settings(view_data),
        KeyCode::Char('?') => view_data.help_visible = true,
        _ => {}
    }
    false
}

fn item_under_cursor(state: &AppState, view_data: &ViewData) -> Option<ItemId> {
    state.visible().get(view_data.item_cursor).copied()
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let search = Paragraph::new(render_search_text(state, view_data)).block(
        Block::default()
            .title(search_title(view_data))
            .borders(Borders::ALL)
            .border_style(focus_border(view_data, Focus::Search)),
    );
    frame.render_widget(search, layout[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .split(layout[1]);

    render_item_list(frame, body[0], state, view_data);
    render_detail(frame, body[1], state, view_data);

    let status_widget = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_widget, layout[2]);

    if view_data.settings.visible {
        let area = centered_rect(40, 30, frame.area());
        frame.render_widget(Clear, area);
        let settings = Paragraph::new(render_settings_overlay_text(state, view_data)).block(
            Block::default()
                .title("settings")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(settings, area);
    }

    if view_data.help_visible {
        let area = centered_rect(80, 60, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn search_title(view_data: &ViewData) -> String {
    if view_data.source_label.is_empty() {
        "pinata".to_owned()
    } else {
        format!("pinata | {}", view_data.source_label)
    }
}

fn focus_border(view_data: &ViewData, focus: Focus) -> Style {
    if view_data.focus == focus {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn render_search_text(state: &AppState, view_data: &ViewData) -> String {
    let query = state.search_query();
    if view_data.focus == Focus::Search {
        format!("search pinatas: {query}{INPUT_CARET}")
    } else if query.is_empty() {
        "search pinatas (/ to type)".to_owned()
    } else {
        format!("search pinatas: {query}")
    }
}

fn render_item_list(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view_data: &ViewData,
) {
    let title = format!(
        "pinatas {}/{}",
        state.visible().len(),
        state.catalog().len()
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(focus_border(view_data, Focus::Items));

    if state.visible().is_empty() {
        let empty = Paragraph::new(empty_list_text(state, view_data))
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let lines = item_list_lines(state, view_data);
    let inner_height = usize::from(area.height.saturating_sub(2));
    let offset = list_scroll_offset(view_data.item_cursor, inner_height);
    let list = Paragraph::new(lines)
        .block(block)
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
    frame.render_widget(list, area);
}

fn item_list_lines(state: &AppState, view_data: &ViewData) -> Vec<Line<'static>> {
    let selected = state.selected();
    state
        .visible_items()
        .enumerate()
        .map(|(row, (id, item))| {
            let at_cursor = row == view_data.item_cursor;
            let cursor = if at_cursor { CURSOR_MARK } else { " " };
            let marker = if selected == Some(id) {
                SELECTED_MARK
            } else {
                " "
            };
            let mut style = Style::default();
            if selected == Some(id) {
                style = style.add_modifier(Modifier::BOLD);
            }
            if at_cursor && view_data.focus == Focus::Items {
                style = style.fg(Color::Cyan).add_modifier(Modifier::REVERSED);
            }
            Line::from(vec![
                Span::raw(format!("{cursor}{marker} ")),
                Span::styled(format!("[ {} ]", item.label()), style),
            ])
        })
        .collect()
}

fn list_scroll_offset(cursor: usize, height: usize) -> usize {
    if height == 0 || cursor < height {
        0
    } else {
        cursor + 1 - height
    }
}

fn empty_list_text(state: &AppState, view_data: &ViewData) -> String {
    match &view_data.load {
        LoadState::Loading => "loading catalog…".to_owned(),
        LoadState::Failed(error) => format!("no pinatas loaded\n\n{error}"),
        LoadState::Loaded if state.catalog().is_empty() => "catalog is empty".to_owned(),
        LoadState::Loaded => format!("no pinatas match {:?}", state.search_query()),
    }
}

fn render_detail(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view_data: &ViewData,
) {
    let Some(panel) = state.detail_panel() else {
        let hint = Paragraph::new("select a pinata to see its details")
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: false })
            .block(Block::default().title("details").borders(Borders::ALL));
        frame.render_widget(hint, area);
        return;
    };

    let related_height = if panel.has_related() {
        let rows = u16::try_from(panel.related.len()).unwrap_or(u16::MAX);
        rows.saturating_add(2).min(area.height / 2)
    } else {
        0
    };
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(related_height)])
        .split(area);

    let text = render_detail_text(&panel);
    let inner_width = usize::from(split[0].width.saturating_sub(2));
    let inner_height = usize::from(split[0].height.saturating_sub(2));
    let max_scroll = wrapped_line_count(&text, inner_width).saturating_sub(inner_height);
    let scroll = view_data.detail_scroll.min(max_scroll);
    let title = if max_scroll > 0 {
        format!("{} ({}/{})", panel.title, scroll, max_scroll)
    } else {
        panel.title.clone()
    };
    let detail = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(detail, split[0]);

    if panel.has_related() {
        let related_inner = usize::from(split[1].height.saturating_sub(2));
        let offset = list_scroll_offset(view_data.related_cursor, related_inner);
        let related = Paragraph::new(related_lines(&panel, view_data))
            .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0))
            .block(
                Block::default()
                    .title("related pinatas")
                    .borders(Borders::ALL)
                    .border_style(focus_border(view_data, Focus::Related)),
            );
        frame.render_widget(related, split[1]);
    }
}

/// Rows `text` occupies when word-wrapped at `width` columns, counting one
/// column per char.
fn wrapped_line_count(text: &str, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    text.lines().map(|line| wrapped_rows(line, width)).sum()
}

fn wrapped_rows(line: &str, width: usize) -> usize {
    let mut rows = 1;
    let mut used = 0;
    for word in line.split(' ') {
        let len = word.chars().count();
        let needed = if used == 0 { len } else { used + 1 + len };
        if needed <= width {
            used = needed;
            continue;
        }
        if used > 0 {
            rows += 1;
        }
        rows += len.saturating_sub(1) / width;
        used = match len % width {
            0 => width,
            rest => rest,
        };
    }
    rows
}

fn render_detail_text(panel: &DetailPanel) -> String {
    let mut out = vec![format!(
        "{COST_MARK} {}",
        panel.cost.as_deref().unwrap_or("-")
    )];
    for section in &panel.sections {
        out.push(String::new());
        out.push(section.heading.to_uppercase());
        out.extend(section.lines.iter().map(|line| format!("  {line}")));
    }
    out.join("\n")
}

fn related_lines(panel: &DetailPanel, view_data: &ViewData) -> Vec<Line<'static>> {
    panel
        .related
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let at_cursor = index == view_data.related_cursor;
            let style = if at_cursor && view_data.focus == Focus::Related {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            let cursor = if at_cursor { CURSOR_MARK } else { " " };
            Line::from(vec![
                Span::raw(format!("{cursor} ")),
                Span::styled(format!("[ {name} ]"), style),
            ])
        })
        .collect()
}

fn render_settings_overlay_text(state: &AppState, view_data: &ViewData) -> String {
    let visibility = state.visibility();
    let mut lines = SettingRow::ALL
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let checked = match row {
                SettingRow::Tricks => visibility.show_tricks,
                SettingRow::Notes => visibility.show_notes,
            };
            let cursor = if index == view_data.settings.cursor {
                CURSOR_MARK
            } else {
                " "
            };
            let mark = if checked { "x" } else { " " };
            format!("{cursor} [{mark}] {}", row.label())
        })
        .collect::<Vec<_>>();
    lines.push(String::new());
    lines.push("j/k move | enter toggle | t/n flip | esc close".to_owned());
    lines.join("\n")
}

fn help_overlay_text() -> String {
    let mut text = String::from(
        "global: ctrl+q quit | ctrl+s settings | ctrl+t tricks | ctrl+n notes\n\
search: type to filter | backspace delete | ctrl+u clear | esc clear/leave | enter/tab list\n\
list: j/k move | g/G first/last | enter select | esc deselect | tab/r related | / search\n\
related: h/l move | enter open | esc list | tab search\n\
details: pgdn/pgup scroll the selected pinata\n\
overlays: s settings | ? help | q quit (outside search)\n\
\n\
links:",
    );
    for (label, url) in EXTERNAL_LINKS {
        text.push_str(&format!("\n  {label}: {url}"));
    }
    text
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if view_data.settings.visible || view_data.help_visible {
        return String::new();
    }

    let hints = match view_data.focus {
        Focus::Search => "type to filter | enter list | ctrl+u clear | ctrl+s settings | ctrl+q",
        Focus::Items => "j/k move | enter select | pgdn/pgup details | tab related | / | s | ? | q",
        Focus::Related => "h/l move | enter open | esc list | / search | ? | q",
    };
    let mode = view_data.focus.label();
    match &state.status_line {
        Some(status) => format!("{mode} | {status} | {hints}"),
        None => format!("{mode} | {hints}"),
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

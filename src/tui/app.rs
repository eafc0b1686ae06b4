use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::engine::Engine;
use crate::model::{Config, Direction, ItemDraft, ItemId, ItemPatch};
use crate::store::file_store::TASKS_FILE;
use crate::store::state::{UiState, read_ui_state, write_ui_state};
use crate::store::{FileStore, InflightTracker, SourceAdapter, StoreWatcher, errlog};

use super::input;
use super::render;
use super::theme::Theme;

/// Minimum time a notice stays visible before a keypress may clear it.
const NOTICE_MIN_VISIBLE: Duration = Duration::from_secs(3);

/// Main application state: the engine plus everything TUI-local (store
/// handle, fast-entry buffer, transient notice, scroll).
pub struct App {
    pub engine: Engine,
    pub store: FileStore,
    pub inflight: InflightTracker,
    pub theme: Theme,
    pub should_quit: bool,
    /// List scroll offset (first visible row) — view-local, not engine state
    pub scroll_offset: usize,
    /// Fast-entry buffer; editing is append + grapheme-aware backspace
    pub entry_buffer: String,
    /// Transient adapter-error / info notice for the status row
    pub notice: Option<String>,
    pub notice_at: Option<Instant>,
}

impl App {
    pub fn new(engine: Engine, store: FileStore, theme: Theme) -> App {
        App {
            engine,
            store,
            inflight: InflightTracker::new(),
            theme,
            should_quit: false,
            scroll_offset: 0,
            entry_buffer: String::new(),
            notice: None,
            notice_at: None,
        }
    }

    /// Show a transient notice in the status row.
    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
        self.notice_at = Some(Instant::now());
    }

    /// Clear the notice on interaction once it has been visible long
    /// enough. Notices are non-blocking; they never gate input.
    pub fn clear_stale_notice(&mut self) {
        if let Some(at) = self.notice_at
            && at.elapsed() >= NOTICE_MIN_VISIBLE
        {
            self.notice = None;
            self.notice_at = None;
        }
    }

    /// Report an adapter failure: notice for the user, line in the error
    /// log. Never touches focus/selection/overlay state.
    pub fn report_store_error(&mut self, context: &str, error: &dyn std::fmt::Display) {
        errlog::log_error(self.store.dir(), context, error);
        self.set_notice(format!("{context} failed: {error}"));
    }

    /// Fetch the store and replace the engine's snapshot.
    pub fn refresh_from_store(&mut self) {
        match self.store.fetch_all() {
            Ok(snapshot) => self.engine.replace_snapshot(snapshot),
            Err(e) => self.report_store_error("refresh", &e),
        }
    }

    /// Submit the fast-entry buffer as a new item.
    pub fn submit_fast_entry(&mut self) {
        let title = self.entry_buffer.trim().to_string();
        if title.is_empty() {
            return;
        }
        match self.store.create(ItemDraft::titled(title)) {
            Ok(item) => {
                self.entry_buffer.clear();
                self.engine.set_text_entry(false);
                self.engine.item_created(item);
            }
            Err(e) => self.report_store_error("create", &e),
        }
    }

    /// Delete the focused item through the adapter, then reconcile from
    /// store truth.
    pub fn delete_focused(&mut self) {
        let Some(id) = self.engine.focused().cloned() else {
            return;
        };
        let request = self.inflight.issue(&id);
        let result = self.store.delete(&id);
        if !self.inflight.is_current(&id, request) {
            return; // superseded while in flight
        }
        match result {
            Ok(()) => {
                self.inflight.forget(&id);
                self.refresh_from_store();
            }
            Err(e) => self.report_store_error("delete", &e),
        }
    }

    /// Cycle the focused item's status through the adapter.
    pub fn cycle_focused_status(&mut self) {
        let Some(id) = self.engine.focused().cloned() else {
            return;
        };
        let Some(status) = self.engine.snapshot().get(&id).map(|i| i.status) else {
            return;
        };
        let request = self.inflight.issue(&id);
        let result = self.store.update(&id, ItemPatch::status(status.cycled()));
        if !self.inflight.is_current(&id, request) {
            return;
        }
        match result {
            Ok(_) => self.refresh_from_store(),
            Err(e) => self.report_store_error("update", &e),
        }
    }

    /// Move the focused item one step: optimistic order first, then
    /// persistence. On failure the optimistic order stays — the next
    /// snapshot refresh reconciles to store truth.
    pub fn move_focused(&mut self, direction: Direction) {
        let Some(positions) = self.engine.move_focused(direction) else {
            return;
        };
        let requests: Vec<(ItemId, crate::store::RequestId)> = positions
            .iter()
            .map(|(id, _)| (id.clone(), self.inflight.issue(id)))
            .collect();
        let result = self.store.reorder(&positions);
        let current = requests
            .iter()
            .any(|(id, req)| self.inflight.is_current(id, *req));
        if !current {
            return;
        }
        if let Err(e) = result {
            self.report_store_error("reorder", &e);
        }
    }

    /// Keep the focused row inside the visible window.
    pub fn ensure_focus_visible(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        let Some(focused) = self.engine.focused() else {
            return;
        };
        let Some(idx) = self.engine.snapshot().index_of(focused) else {
            return;
        };
        if idx < self.scroll_offset {
            self.scroll_offset = idx;
        } else if idx >= self.scroll_offset + visible_height {
            self.scroll_offset = idx.saturating_sub(visible_height - 1);
        }
    }
}

/// Resolve the store directory: the given path, or the current directory
/// if it holds a task store.
fn resolve_store_dir(store_dir: Option<&str>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let dir = match store_dir {
        Some(d) => PathBuf::from(d),
        None => std::env::current_dir()?,
    };
    if !dir.join(TASKS_FILE).exists() {
        return Err(format!(
            "no task store in {} (run `day init` first)",
            dir.display()
        )
        .into());
    }
    Ok(dir)
}

/// Load config.toml from the store directory, falling back to defaults.
pub fn load_config(store_dir: &Path) -> Config {
    let path = store_dir.join("config.toml");
    let Ok(content) = std::fs::read_to_string(&path) else {
        return Config::default();
    };
    toml::from_str(&content).unwrap_or_default()
}

/// Restore persisted UI state into the app against the first snapshot.
fn restore_ui_state(app: &mut App, state: UiState, store_dir: &Path) {
    let snapshot = match app.store.fetch_all() {
        Ok(s) => s,
        Err(e) => {
            errlog::log_error(store_dir, "initial fetch", &e);
            return;
        }
    };
    app.engine.restore(
        snapshot,
        state.focused.map(ItemId),
        state.selected.into_iter().map(ItemId),
        state.side_panel,
    );
    app.scroll_offset = state.scroll_offset;
}

/// Save UI state to .state.json
pub fn save_ui_state(app: &App) {
    let state = UiState {
        focused: app.engine.focused().map(|id| id.0.clone()),
        selected: app
            .engine
            .selection()
            .ids()
            .map(|id| id.0.clone())
            .collect(),
        side_panel: app.engine.side_panel_open(),
        scroll_offset: app.scroll_offset,
    };
    let _ = write_ui_state(app.store.dir(), &state);
}

/// Run the TUI application
pub fn run(store_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = resolve_store_dir(store_dir)?;
    let config = load_config(&dir);
    let theme = Theme::from_config(&config.ui);

    let engine = Engine::new(&config.keys);
    let store = FileStore::open(&dir);
    let mut app = App::new(engine, store, theme);

    let saved = read_ui_state(&dir).unwrap_or_default();
    restore_ui_state(&mut app, saved, &dir);

    let watcher = StoreWatcher::start(&dir)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, &watcher);

    save_ui_state(&app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: &StoreWatcher,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut save_counter = 0u32;
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
            // Debounced state save: every ~5 key presses
            save_counter += 1;
            if save_counter >= 5 {
                save_ui_state(app);
                save_counter = 0;
            }
        }

        // External store edits arrive as snapshot replacements
        if !watcher.poll().is_empty() {
            app.refresh_from_store();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::{config_io, store_io};
use crate::model::config::Config;
use crate::model::store::TaskStore;
use crate::model::task::Task;

use super::input::{self, LineBuffer};
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving around the list
    Navigate,
    /// Typing a new task into the entry row
    Entry,
    /// Editing the task under the cursor in place
    Edit,
}

/// In-progress edit of one task row: the task's identity plus its draft.
/// Dropped without effect on cancel; re-seeded from the task on re-entry.
#[derive(Debug, Clone)]
pub struct RowEdit {
    pub id: u64,
    pub buffer: LineBuffer,
}

/// Main application state
pub struct App {
    /// Sole owner of the task list
    pub store: TaskStore,
    pub mode: Mode,
    /// Cursor index into the task list
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Help overlay visible
    pub show_help: bool,
    /// Entry form draft; survives leaving entry mode, cleared by submit
    pub entry: LineBuffer,
    /// Row currently being edited, if any
    pub edit: Option<RowEdit>,
    /// Transient one-line feedback (cleared on the next keypress)
    pub status_message: Option<String>,
}

impl App {
    pub fn new(store: TaskStore, config: &Config) -> Self {
        App {
            store,
            mode: Mode::Navigate,
            cursor: 0,
            scroll_offset: 0,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            show_help: false,
            entry: LineBuffer::new(),
            edit: None,
            status_message: None,
        }
    }

    /// The task under the cursor, if the list is non-empty
    pub fn cursor_task(&self) -> Option<&Task> {
        self.store.tasks().get(self.cursor)
    }

    pub fn cursor_task_id(&self) -> Option<u64> {
        self.cursor_task().map(|t| t.id)
    }

    /// Move the cursor by `delta` rows, clamped to the list
    pub fn move_cursor(&mut self, delta: i32) {
        let len = self.store.len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let max = len - 1;
        let next = self.cursor as i64 + delta as i64;
        self.cursor = next.clamp(0, max as i64) as usize;
    }

    /// Test fixture: an app over an empty store in a temp directory
    #[cfg(test)]
    pub fn for_tests() -> (tempfile::TempDir, App) {
        let dir = tempfile::TempDir::new().unwrap();
        let store = TaskStore::load(dir.path().join("tasks.json"));
        let app = App::new(store, &Config::default());
        (dir, app)
    }
}

/// Run the TUI application
pub fn run(file_override: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let path = store_io::resolve_store_path(file_override)?;
    let config = config_io::read_config(path.parent().unwrap_or(Path::new(".")));
    let store = TaskStore::load(path);
    let mut app = App::new(store, &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

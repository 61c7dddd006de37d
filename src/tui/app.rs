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
use tracing::info;

use crate::io::config_io::{data_dir, read_config, resolve_store_path};
use crate::io::logging::{LogTarget, init_logging};
use crate::io::store::{FileStore, KeyValueStore};
use crate::model::{Config, Todo};
use crate::screen::{TodoError, TodoScreen};

use super::input;
use super::render;
use super::theme::Theme;

/// Which input region receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The new-todo field
    NewTodo,
    /// The search field
    Search,
    /// The todo list
    List,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::NewTodo => Focus::Search,
            Focus::Search => Focus::List,
            Focus::List => Focus::NewTodo,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::NewTodo => Focus::List,
            Focus::Search => Focus::NewTodo,
            Focus::List => Focus::Search,
        }
    }
}

/// Main application state
pub struct App {
    pub screen: TodoScreen<Box<dyn KeyValueStore>>,
    pub focus: Focus,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Cursor index into the filtered list
    pub list_cursor: usize,
    /// Byte offsets of the text cursors in each field
    pub new_todo_cursor: usize,
    pub search_cursor: usize,
    pub edit_cursor: usize,
    /// Last persistence error, shown on the status row until the next
    /// successful mutation
    pub status_error: Option<String>,
}

impl App {
    pub fn new(screen: TodoScreen<Box<dyn KeyValueStore>>, config: &Config) -> Self {
        App {
            screen,
            focus: Focus::NewTodo,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            list_cursor: 0,
            new_todo_cursor: 0,
            search_cursor: 0,
            edit_cursor: 0,
            status_error: None,
        }
    }

    /// The todo under the list cursor, if any
    pub fn selected(&self) -> Option<&Todo> {
        self.screen.filtered().get(self.list_cursor).copied()
    }

    /// Keep the list cursor inside the filtered view
    pub fn clamp_cursor(&mut self) {
        let len = self.screen.filtered().len();
        if len == 0 {
            self.list_cursor = 0;
        } else if self.list_cursor >= len {
            self.list_cursor = len - 1;
        }
    }

    /// Record the outcome of a mutation for the status row
    pub fn note_result<T>(&mut self, result: Result<T, TodoError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.status_error = None;
                Some(value)
            }
            Err(e) => {
                self.status_error = Some(e.to_string());
                None
            }
        }
    }
}

/// Run the TUI application
pub fn run(store_override: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = read_config()?;
    init_logging(LogTarget::File(data_dir().join("jot.log")));

    let store_path = resolve_store_path(&config, store_override);
    info!(path = %store_path.display(), "opening store");
    let store: Box<dyn KeyValueStore> = Box::new(FileStore::open(store_path));
    let mut app = App::new(TodoScreen::load(store), &config);

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
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
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

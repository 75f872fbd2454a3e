//! TUI application state and logic

use crate::dictionary::{AddOutcome, Dictionary, RemoveOutcome};
use crate::output::formatters::format_word_list;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::VecDeque;
use std::io;
use tracing::warn;

const MAX_MESSAGES: usize = 6;
const MAX_REBALANCES: usize = 12;

/// Application state
pub struct App {
    pub dict: Dictionary,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    /// Most recent rebalances, newest last
    pub rebalances: VecDeque<String>,
    pub should_quit: bool,
}

/// What the keyboard is currently driving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Waiting for an operation key
    Command,
    /// Typing the argument for an operation
    Editing(Operation),
}

/// A dictionary operation that takes one argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Find,
    Delete,
    Similar,
    Save,
}

impl Operation {
    /// Map an operation key to its operation
    #[must_use]
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            'a' => Some(Self::Add),
            'f' => Some(Self::Find),
            'd' => Some(Self::Delete),
            's' => Some(Self::Similar),
            'w' => Some(Self::Save),
            _ => None,
        }
    }

    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Add => " Word to add | Enter to submit, ESC to cancel ",
            Self::Find => " Word to find | Enter to submit, ESC to cancel ",
            Self::Delete => " Word to delete | Enter to submit, ESC to cancel ",
            Self::Similar => " Find words similar to | Enter to submit, ESC to cancel ",
            Self::Save => " Save to file | Enter to submit, ESC to cancel ",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(mut dict: Dictionary) -> Self {
        // Rebalances from the initial load are not shown
        dict.drain_rebalances();
        let words = dict.len();

        Self {
            dict,
            input_mode: InputMode::Command,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!("Dictionary loaded with {words} words."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "a: add  f: find  d: delete  s: similar  w: save  q: quit".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            rebalances: VecDeque::new(),
            should_quit: false,
        }
    }

    /// Start typing the argument for `operation`
    pub fn begin(&mut self, operation: Operation) {
        self.input_mode = InputMode::Editing(operation);
        self.input_buffer.clear();
    }

    pub fn cancel(&mut self) {
        self.input_mode = InputMode::Command;
        self.input_buffer.clear();
    }

    /// Run the pending operation on the typed argument
    pub fn submit(&mut self) {
        let InputMode::Editing(operation) = self.input_mode else {
            return;
        };
        let argument = self.input_buffer.trim().to_string();
        if argument.is_empty() {
            self.add_message("Type a word first, or ESC to cancel", MessageStyle::Error);
            return;
        }

        self.apply(operation, &argument);
        self.cancel();
    }

    /// Perform `operation` and record its result and any rebalances
    pub fn apply(&mut self, operation: Operation, argument: &str) {
        match operation {
            Operation::Add => match self.dict.add(argument) {
                AddOutcome::Inserted => {
                    self.add_message(&format!("Added '{argument}'"), MessageStyle::Success);
                }
                AddOutcome::AlreadyPresent => self.add_message(
                    &format!("'{argument}' already exists in the dictionary"),
                    MessageStyle::Error,
                ),
            },
            Operation::Find => {
                if self.dict.contains(argument) {
                    self.add_message(&format!("'{argument}' found"), MessageStyle::Success);
                } else {
                    self.add_message(&format!("'{argument}' not found"), MessageStyle::Error);
                }
            }
            Operation::Delete => match self.dict.remove(argument) {
                RemoveOutcome::Removed => {
                    self.add_message(&format!("Deleted '{argument}'"), MessageStyle::Success);
                }
                RemoveOutcome::NotFound => {
                    self.add_message(&format!("'{argument}' not found"), MessageStyle::Error);
                }
                RemoveOutcome::EmptyDictionary => self.add_message(
                    "The dictionary is empty. Cannot delete.",
                    MessageStyle::Error,
                ),
            },
            Operation::Similar => {
                let similar = self.dict.find_similar(argument);
                self.add_message(
                    &format!("Similar to '{argument}': {}", format_word_list(&similar)),
                    MessageStyle::Info,
                );
            }
            Operation::Save => self.save(argument),
        }

        for record in self.dict.drain_rebalances() {
            self.rebalances.push_back(record.to_string());
            if self.rebalances.len() > MAX_REBALANCES {
                self.rebalances.pop_front();
            }
        }
    }

    fn save(&mut self, filename: &str) {
        if self.dict.is_empty() {
            self.add_message("Dictionary is empty. Nothing to save.", MessageStyle::Error);
            return;
        }
        match self.dict.save(filename) {
            Ok(count) => self.add_message(
                &format!("Saved {count} words to {filename}"),
                MessageStyle::Success,
            ),
            Err(err) => {
                warn!(error = %err, "save failed");
                self.add_message(&format!("Could not save: {err}"), MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Command => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => {
                    if let Some(operation) = Operation::from_key(c) {
                        self.begin(operation);
                    }
                }
                _ => {}
            },
            InputMode::Editing(_) => match code {
                KeyCode::Esc => self.cancel(),
                KeyCode::Enter => self.submit(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only key presses; Windows also reports releases
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

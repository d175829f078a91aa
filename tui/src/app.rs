//! UI state machine for the todo list screen.
//!
//! `App` owns what the user is looking at: which pane has focus, which
//! row is selected, the entry field buffer, and the status line. It
//! performs no I/O and never touches crossterm directly — keys arrive
//! as the crate-local [`Key`] enum (mapped at the edge in
//! [`crate::tui`]) and come back out as [`AppAction`]s for the runner
//! to execute.

use crate::input::InputLine;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A keyboard event, decoupled from the backend event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Tab,
    Other,
}

// ---------------------------------------------------------------------------
// Focus / AppAction
// ---------------------------------------------------------------------------

/// Which pane receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The todo list: navigation and per-row actions.
    List,
    /// The text-entry field for adding a new todo.
    Entry,
}

/// An action the runner should execute against the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    /// Submit the entry field (add intent).
    Submit,
    /// Toggle the selected row's completion flag.
    ToggleSelected,
    /// Edit the selected row via a modal prompt.
    EditSelected,
    /// Delete the selected row.
    DeleteSelected,
    /// Clear the whole list (confirmation required).
    ClearAll,
    SelectNext,
    SelectPrev,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Top-level UI state: focus, selection, entry buffer, status line.
pub struct App {
    pub focus: Focus,
    /// Selected row index; kept in range by [`App::clamp_selection`].
    pub selected: usize,
    /// The add-entry field.
    pub input: InputLine,
    /// One-line status message shown in the footer, if any.
    pub status: Option<String>,
    /// Whether the current status message reports a failure.
    pub status_is_error: bool,
}

impl App {
    pub fn new() -> Self {
        App {
            focus: Focus::Entry,
            selected: 0,
            input: InputLine::new(),
            status: None,
            status_is_error: false,
        }
    }

    /// Route a key according to the current focus.
    ///
    /// Navigation and text editing are applied directly to `self`;
    /// anything that must touch the controller is returned as an
    /// [`AppAction`].
    pub fn handle_key(&mut self, key: Key) -> Option<AppAction> {
        self.status = None;
        self.status_is_error = false;
        match self.focus {
            Focus::Entry => self.handle_entry_key(key),
            Focus::List => self.handle_list_key(key),
        }
    }

    fn handle_entry_key(&mut self, key: Key) -> Option<AppAction> {
        match key {
            Key::Enter => Some(AppAction::Submit),
            Key::Esc | Key::Tab | Key::Up | Key::Down => {
                self.focus = Focus::List;
                None
            }
            Key::Char(ch) => {
                self.input.insert(ch);
                None
            }
            Key::Backspace => {
                self.input.delete_back();
                None
            }
            Key::Delete => {
                self.input.delete_forward();
                None
            }
            Key::Left => {
                self.input.move_left();
                None
            }
            Key::Right => {
                self.input.move_right();
                None
            }
            Key::Home => {
                self.input.move_home();
                None
            }
            Key::End => {
                self.input.move_end();
                None
            }
            Key::Other => None,
        }
    }

    fn handle_list_key(&mut self, key: Key) -> Option<AppAction> {
        match key {
            Key::Char('q') => Some(AppAction::Quit),
            Key::Char('a') | Key::Char('i') | Key::Tab => {
                self.focus = Focus::Entry;
                None
            }
            Key::Char('j') | Key::Down => Some(AppAction::SelectNext),
            Key::Char('k') | Key::Up => Some(AppAction::SelectPrev),
            Key::Char(' ') | Key::Char('x') | Key::Enter => Some(AppAction::ToggleSelected),
            Key::Char('e') => Some(AppAction::EditSelected),
            Key::Char('d') | Key::Delete | Key::Backspace => Some(AppAction::DeleteSelected),
            Key::Char('C') => Some(AppAction::ClearAll),
            _ => None,
        }
    }

    // -------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------

    /// Move the selection down, stopping at the last row.
    pub fn select_next(&mut self, row_count: usize) {
        if row_count > 0 && self.selected + 1 < row_count {
            self.selected += 1;
        }
    }

    /// Move the selection up, stopping at the first row.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Pull the selection back in range after rows were removed.
    pub fn clamp_selection(&mut self, row_count: usize) {
        if row_count == 0 {
            self.selected = 0;
        } else if self.selected >= row_count {
            self.selected = row_count - 1;
        }
    }

    /// Set the footer status message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
        self.status_is_error = false;
    }

    /// Set the footer status message to a failure report.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
        self.status_is_error = true;
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

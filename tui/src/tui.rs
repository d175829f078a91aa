//! TUI runner — terminal setup, event loop, and frame rendering.
//!
//! [`Tui`] owns the ratatui terminal, the UI state machine
//! ([`App`]), and the core [`ListController`] bound to the file-backed
//! storage slot. The loop is fully blocking: draw a frame, wait for a
//! key, route it through the state machine, execute the resulting
//! action against the controller.

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use ratatui::Terminal;

use tick_core::controller::{ListController, Row};
use tick_core::storage::FileSlot;

use crate::app::{App, AppAction, Focus, Key};
use crate::prompt::ModalPrompter;
use crate::theme::Theme;

/// Snapshot of all state needed for rendering a single frame.
///
/// Extracted from `Tui` so that `terminal.draw()` can borrow its
/// closure argument without conflicting with the `&mut self` borrow on
/// the terminal.
struct RenderState<'a> {
    app: &'a App,
    rows: &'a [Row],
    clear_enabled: bool,
    theme: &'a Theme,
}

/// The main TUI application runner.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
    controller: ListController<FileSlot>,
    theme: Theme,
}

impl Tui {
    /// Create a new TUI, entering raw mode and the alternate screen,
    /// and load the todo list from `data_dir`.
    pub fn new(data_dir: &Path) -> Result<Self, io::Error> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Tui {
            terminal,
            app: App::new(),
            controller: ListController::new(FileSlot::new(data_dir)),
            theme: Theme::default(),
        })
    }

    /// Run the event loop until quit is requested.
    pub fn run(&mut self) -> Result<(), io::Error> {
        loop {
            let state = RenderState {
                app: &self.app,
                rows: self.controller.rows(),
                clear_enabled: self.controller.clear_enabled(),
                theme: &self.theme,
            };
            self.terminal.draw(|frame| render_frame(frame, &state))?;

            if let Event::Key(key_event) = event::read()? {
                // Ctrl-C always quits immediately.
                if key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                let key = crossterm_to_key(key_event.code);
                if let Some(action) = self.app.handle_key(key) {
                    if self.handle_action(action) {
                        break;
                    }
                }
            }
        }

        self.shutdown()
    }

    // -------------------------------------------------------------------
    // Action handling
    // -------------------------------------------------------------------

    /// Execute an [`AppAction`] against the controller.
    ///
    /// Returns `true` if the application should quit.
    fn handle_action(&mut self, action: AppAction) -> bool {
        match action {
            AppAction::Quit => return true,
            AppAction::Submit => {
                let entry = self.app.input.text();
                match self.controller.add(&entry) {
                    Ok(true) => self.app.input.clear(),
                    Ok(false) => {}
                    Err(e) => self.app.set_error(format!("save failed: {}", e)),
                }
            }
            AppAction::ToggleSelected => {
                if let Err(e) = self.controller.toggle(self.app.selected) {
                    self.app.set_error(format!("save failed: {}", e));
                }
            }
            AppAction::EditSelected => {
                let mut prompter = ModalPrompter::new(&mut self.terminal, &self.theme);
                if let Err(e) = self.controller.edit(self.app.selected, &mut prompter) {
                    self.app.set_error(format!("save failed: {}", e));
                }
            }
            AppAction::DeleteSelected => {
                if let Err(e) = self.controller.delete(self.app.selected) {
                    self.app.set_error(format!("save failed: {}", e));
                }
                self.app.clamp_selection(self.controller.rows().len());
            }
            AppAction::ClearAll => {
                let mut prompter = ModalPrompter::new(&mut self.terminal, &self.theme);
                match self.controller.clear_all(&mut prompter) {
                    Ok(true) => {
                        self.app.clamp_selection(0);
                        self.app.set_status("All todos deleted");
                    }
                    Ok(false) => {}
                    Err(e) => self.app.set_error(format!("save failed: {}", e)),
                }
            }
            AppAction::SelectNext => {
                self.app.select_next(self.controller.rows().len());
            }
            AppAction::SelectPrev => {
                self.app.select_prev();
            }
        }
        false
    }

    // -------------------------------------------------------------------
    // Shutdown
    // -------------------------------------------------------------------

    /// Restore the terminal to its normal state.
    fn shutdown(&mut self) -> Result<(), io::Error> {
        terminal::disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
    }
}

// ---------------------------------------------------------------------------
// Key mapping
// ---------------------------------------------------------------------------

/// Map a crossterm key code to the crate-local [`Key`] enum.
fn crossterm_to_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Tab => Key::Tab,
        _ => Key::Other,
    }
}

// ---------------------------------------------------------------------------
// Rendering (free functions to avoid borrow conflicts)
// ---------------------------------------------------------------------------

/// Render the full screen: title bar, todo list, entry bar, footer.
fn render_frame(frame: &mut Frame, state: &RenderState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Min(3),    // todo list
            Constraint::Length(1), // entry bar
            Constraint::Length(1), // footer / status
        ])
        .split(frame.area());

    render_title(frame, chunks[0], state);
    render_list(frame, chunks[1], state);
    render_entry(frame, chunks[2], state);
    render_footer(frame, chunks[3], state);
}

fn render_title(frame: &mut Frame, area: Rect, state: &RenderState) {
    let open = state.rows.iter().filter(|r| !r.done).count();
    let text = format!(" tick — {} open / {} total", open, state.rows.len());
    frame.render_widget(Paragraph::new(text).style(state.theme.title), area);
}

fn render_list(frame: &mut Frame, area: Rect, state: &RenderState) {
    if state.rows.is_empty() {
        let hint = Paragraph::new("\n  Nothing here yet. Type a todo below and press Enter.")
            .style(state.theme.footer);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = state
        .rows
        .iter()
        .map(|row| {
            let checkbox = if row.done { "[x] " } else { "[ ] " };
            let style = if row.completed {
                state.theme.row_done
            } else {
                state.theme.row
            };
            ListItem::new(Line::styled(format!("{}{}", checkbox, row.text), style))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(state.theme.row_selected)
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if state.app.focus == Focus::List {
        list_state.select(Some(state.app.selected.min(state.rows.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_entry(frame: &mut Frame, area: Rect, state: &RenderState) {
    let active = state.app.focus == Focus::Entry;
    let text = format!("> {}", state.app.input.text());
    let style = if active {
        state.theme.entry_active
    } else {
        state.theme.entry_inactive
    };
    frame.render_widget(Paragraph::new(text).style(style), area);

    if active {
        let cursor_x = area.x + 2 + state.app.input.cursor_pos() as u16;
        frame.set_cursor_position((cursor_x, area.y));
    }
}

fn render_footer(frame: &mut Frame, area: Rect, state: &RenderState) {
    if let Some(status) = &state.app.status {
        let style = if state.app.status_is_error {
            state.theme.status_error
        } else {
            state.theme.footer
        };
        frame.render_widget(Paragraph::new(format!(" {}", status)).style(style), area);
        return;
    }

    let hints = match state.app.focus {
        Focus::Entry => Line::styled(" Enter add   Esc/Tab list", state.theme.footer),
        Focus::List => {
            let clear_style = if state.clear_enabled {
                state.theme.footer
            } else {
                state.theme.footer_disabled
            };
            Line::from(vec![
                Span::styled(
                    " j/k move   space toggle   e edit   d delete   a add   ",
                    state.theme.footer,
                ),
                Span::styled("C clear-all", clear_style),
                Span::styled("   q quit", state.theme.footer),
            ])
        }
    };
    frame.render_widget(Paragraph::new(hints), area);
}

//! Blocking modal prompts.
//!
//! `ModalPrompter` implements the core's `Prompter` trait on top of the
//! ratatui terminal: it draws a centered dialog and runs its own read
//! loop until the user submits or cancels. The event loop in
//! [`crate::tui`] is suspended for the duration, which is exactly the
//! semantics the controller expects from a prompt.

use std::io;

use crossterm::event::{self, Event, KeyCode};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use tick_core::controller::Prompter;

use crate::input::InputLine;
use crate::theme::Theme;

/// Modal prompt surface borrowing the runner's terminal.
pub struct ModalPrompter<'a> {
    terminal: &'a mut Terminal<CrosstermBackend<io::Stdout>>,
    theme: &'a Theme,
}

impl<'a> ModalPrompter<'a> {
    pub fn new(
        terminal: &'a mut Terminal<CrosstermBackend<io::Stdout>>,
        theme: &'a Theme,
    ) -> Self {
        ModalPrompter { terminal, theme }
    }

    fn draw_text_modal(&mut self, title: &str, input: &InputLine) -> io::Result<()> {
        let theme = self.theme.clone();
        let text = input.text();
        let cursor = input.cursor_pos();
        self.terminal.draw(|frame| {
            let area = centered_rect(frame.area(), 60, 3);
            frame.render_widget(Clear, area);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme.modal_border)
                .title(format!(" {} ", title));
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(Paragraph::new(text.as_str()), inner);
            frame.set_cursor_position((inner.x + cursor as u16, inner.y));

            let hint_area = Rect {
                x: area.x,
                y: area.y + area.height,
                width: area.width,
                height: 1,
            };
            if hint_area.bottom() <= frame.area().bottom() {
                frame.render_widget(
                    Paragraph::new("Enter: save   Esc: cancel").style(theme.footer),
                    hint_area,
                );
            }
        })?;
        Ok(())
    }

    fn draw_confirm_modal(&mut self, prompt: &str) -> io::Result<()> {
        let theme = self.theme.clone();
        let prompt = prompt.to_string();
        self.terminal.draw(|frame| {
            let area = centered_rect(frame.area(), 60, 4);
            frame.render_widget(Clear, area);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme.modal_border)
                .title(" Confirm ");
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let body = format!("{}\n[y] Yes   [n] No", prompt);
            frame.render_widget(Paragraph::new(body), inner);
        })?;
        Ok(())
    }
}

impl Prompter for ModalPrompter<'_> {
    fn prompt_text(&mut self, prompt: &str, seed: &str) -> Option<String> {
        let mut input = InputLine::new();
        input.seed(seed);
        loop {
            if self.draw_text_modal(prompt, &input).is_err() {
                return None;
            }
            let ev = match event::read() {
                Ok(ev) => ev,
                Err(_) => return None,
            };
            if let Event::Key(key) = ev {
                match key.code {
                    KeyCode::Enter => return Some(input.take()),
                    KeyCode::Esc => return None,
                    KeyCode::Char(ch) => input.insert(ch),
                    KeyCode::Backspace => input.delete_back(),
                    KeyCode::Delete => input.delete_forward(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    KeyCode::Home => input.move_home(),
                    KeyCode::End => input.move_end(),
                    _ => {}
                }
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        loop {
            if self.draw_confirm_modal(prompt).is_err() {
                return false;
            }
            let ev = match event::read() {
                Ok(ev) => ev,
                Err(_) => return false,
            };
            if let Event::Key(key) = ev {
                match key.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return true,
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => return false,
                    _ => {}
                }
            }
        }
    }
}

/// A rect of the given size centered in `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(area, 60, 4);
        assert_eq!(rect, Rect::new(10, 10, 60, 4));

        let small = Rect::new(0, 0, 40, 2);
        let rect = centered_rect(small, 60, 4);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 2);
    }
}

//! Terminal driver for the login form.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering.

use std::io::{self, Stdout, stdout};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use loginform_app::{Driver, FormEvent, KeyInput, LoginForm};
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use crate::ui;

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Owns raw mode and the alternate screen for its whole lifetime; both are
/// restored on drop.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
}

impl TerminalDriver {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal, event_stream: EventStream::new() })
    }

    /// Convert a crossterm key event to a form event.
    pub fn convert_key(key: KeyEvent) -> Option<FormEvent> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c' | 'd') => Some(FormEvent::CancelPressed),
                _ => None,
            };
        }

        let input = match key.code {
            KeyCode::Char(c) => KeyInput::Char(c),
            KeyCode::Enter => KeyInput::Enter,
            KeyCode::Backspace => KeyInput::Backspace,
            KeyCode::Tab => KeyInput::Tab,
            KeyCode::BackTab => KeyInput::BackTab,
            KeyCode::Esc => KeyInput::Esc,
            KeyCode::Up => KeyInput::Up,
            KeyCode::Down => KeyInput::Down,
            _ => return None,
        };
        Some(FormEvent::Key(input))
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self) -> Result<Option<FormEvent>, Self::Error> {
        loop {
            match self.event_stream.next().await {
                Some(Ok(Event::Key(key))) => {
                    if let Some(event) = Self::convert_key(key) {
                        return Ok(Some(event));
                    }
                },
                Some(Ok(Event::Resize(..))) => return Ok(Some(FormEvent::Redraw)),
                Some(Ok(_)) => {},
                Some(Err(e)) => return Err(TerminalError::Io(e)),
                None => return Ok(None),
            }
        }
    }

    fn render(&mut self, form: &LoginForm) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| ui::render(frame, form))?;
        Ok(())
    }

    fn dismiss(&mut self) {
        tracing::info!("login form dismissed");
    }

    fn stop(&mut self) {
        let _ = self.terminal.show_cursor();
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

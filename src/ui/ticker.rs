use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{Ticker, Wait};

/// Waits on terminal input. Raw mode turns Ctrl-C into a key event, so
/// quitting is handled here rather than through a signal handler.
#[derive(Debug, Default)]
pub struct TerminalTicker;

impl Ticker for TerminalTicker {
    fn wait(&mut self, timeout: Duration) -> anyhow::Result<Wait> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(Wait::Elapsed);
            }
            match event::read()? {
                // On Windows, crossterm fires Press and Release; only handle Press
                Event::Key(key) if key.kind == KeyEventKind::Press && is_quit_key(&key) => {
                    return Ok(Wait::Cancelled);
                }
                Event::Resize(_, _) => return Ok(Wait::Redraw),
                _ => {}
            }
        }
    }
}

/// `q`, `Esc` or `Ctrl-C`.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

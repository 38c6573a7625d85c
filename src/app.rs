use std::io;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};

use crate::{
    runtime::{EventSource, Runner, TapEvent, Ticker},
    session::{Keystroke, Phase, SessionState},
    theme::Palette,
    ui,
};

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug)]
pub struct App {
    pub session: SessionState,
    pub palette: Palette,
}

impl App {
    pub fn new(target_words: Vec<String>, palette: Palette) -> Self {
        Self {
            session: SessionState::new(target_words),
            palette,
        }
    }

    pub fn handle_event(&mut self, event: TapEvent, now: Instant) -> Flow {
        let key = match event {
            TapEvent::Key(key) => key,
            // nothing to mutate; the caller redraws
            TapEvent::Resize(..) | TapEvent::Timeout => return Flow::Continue,
        };

        if key.kind == KeyEventKind::Release {
            return Flow::Continue;
        }
        if is_interrupt(&key) {
            return Flow::Exit;
        }

        match self.session.phase() {
            Phase::Complete => Flow::Exit,
            Phase::Typing => {
                if let Some(keystroke) = keystroke(&key) {
                    self.session.apply(keystroke, now);
                }
                Flow::Continue
            }
        }
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Map a terminal key to a session keystroke. Control sequences and
/// anything else without meaning for the test map to None.
pub fn keystroke(key: &KeyEvent) -> Option<Keystroke> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Backspace => Some(Keystroke::Backspace),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Keystroke::Delimiter),
        KeyCode::Char(c) if !c.is_control() => Some(Keystroke::Char(c)),
        _ => None,
    }
}

/// Draw, wait for the next event, apply it, repeat until the app exits.
///
/// A failed draw is logged and skipped; it never touches the session.
pub fn run<B: Backend, E: EventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &mut Runner<E, T>,
) -> io::Result<()> {
    loop {
        let now = Instant::now();
        if let Err(e) = terminal.draw(|f| ui::draw(f, app, now)) {
            tracing::warn!(error = %e, "draw failed");
        }

        let event = runner.step()?;
        if app.handle_event(event, Instant::now()) == Flow::Exit {
            return Ok(());
        }
    }
}

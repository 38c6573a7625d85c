use std::time::Instant;

use ratatui::Frame;

use crate::{
    app::App,
    session::Phase,
    stats::{self, Stats},
    ui::{cursor_position, SummaryView, TypingLayout, TypingView},
};

/// A UI Screen boundary: responsible for rendering one phase of the session
pub trait Screen {
    fn render(&self, app: &App, f: &mut Frame, now: Instant);
}

/// Typing screen - words, live stats and the input box with the cursor
pub struct TypingScreen;

impl Screen for TypingScreen {
    fn render(&self, app: &App, f: &mut Frame, now: Instant) {
        let area = f.area();
        let view = TypingView {
            session: &app.session,
            palette: &app.palette,
            wpm: stats::live_wpm(&app.session, now),
        };
        f.render_widget(view, area);

        let lines = crate::layout::wrap(app.session.target_words(), super::text_width(area));
        let rects = TypingLayout::compute(area, &lines);
        if let Some(pos) = cursor_position(rects.input, app.session.current_input()) {
            f.set_cursor_position(pos);
        }
    }
}

/// Summary screen - final wpm and accuracy
pub struct SummaryScreen;

impl Screen for SummaryScreen {
    fn render(&self, app: &App, f: &mut Frame, _now: Instant) {
        let stats = app.session.summary().copied().unwrap_or(Stats {
            wpm: 0,
            accuracy: 0.0,
        });
        let view = SummaryView {
            stats,
            palette: &app.palette,
        };
        f.render_widget(view, f.area());
    }
}

/// Helper to construct the appropriate screen for the current phase
pub fn current_screen(phase: Phase) -> Box<dyn Screen> {
    match phase {
        Phase::Typing => Box::new(TypingScreen),
        Phase::Complete => Box::new(SummaryScreen),
    }
}

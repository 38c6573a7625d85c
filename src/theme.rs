use ratatui::style::{Color, Modifier, Style};

use crate::classify::Verdict;

/// Styles used by the renderer. Built once at startup and handed to the
/// renderer by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub correct: Style,
    pub incorrect: Style,
    pub pending: Style,
    pub recovered: Style,
    /// patched over every span of the word being typed
    pub current_word: Style,
    pub border: Style,
    pub label: Style,
    pub emphasis: Style,
}

impl Palette {
    pub fn new() -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);

        Self {
            correct: bold.fg(Color::Green),
            incorrect: bold.fg(Color::Red),
            pending: Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            recovered: bold.fg(Color::Yellow),
            current_word: Style::default().add_modifier(Modifier::UNDERLINED),
            border: Style::default().fg(Color::Gray),
            label: Style::default().add_modifier(Modifier::DIM),
            emphasis: bold,
        }
    }

    pub fn verdict(&self, verdict: Verdict) -> Style {
        match verdict {
            Verdict::Pending => self.pending,
            Verdict::Correct => self.correct,
            Verdict::Incorrect => self.incorrect,
            Verdict::Recovered => self.recovered,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

use std::time::Instant;

use crate::classify::{self, MistakeSet};
use crate::stats::{self, Stats};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Complete,
}

/// A key that means something to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keystroke {
    Backspace,
    /// space or enter
    Delimiter,
    Char(char),
}

/// Progress of one typing test.
///
/// The current word index is always `committed_words().len()`, so it is
/// derived rather than stored.
#[derive(Clone, Debug)]
pub struct SessionState {
    target_words: Vec<String>,
    committed: Vec<String>,
    current_input: String,
    mistakes: MistakeSet,
    started_at: Option<Instant>,
    phase: Phase,
    summary: Option<Stats>,
}

impl SessionState {
    pub fn new(target_words: Vec<String>) -> Self {
        let mut state = Self {
            target_words,
            committed: Vec::new(),
            current_input: String::new(),
            mistakes: MistakeSet::new(),
            started_at: None,
            phase: Phase::Typing,
            summary: None,
        };

        // nothing to type
        if state.target_words.is_empty() {
            state.phase = Phase::Complete;
            state.summary = Some(Stats {
                wpm: 0,
                accuracy: 0.0,
            });
        }

        state
    }

    pub fn target_words(&self) -> &[String] {
        &self.target_words
    }

    pub fn committed_words(&self) -> &[String] {
        &self.committed
    }

    pub fn current_index(&self) -> usize {
        self.committed.len()
    }

    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Target word under the cursor, or None once every word is committed.
    pub fn current_target(&self) -> Option<&str> {
        self.target_words
            .get(self.current_index())
            .map(String::as_str)
    }

    pub fn mistakes(&self) -> &MistakeSet {
        &self.mistakes
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Final stats, set exactly once when the last word is committed.
    pub fn summary(&self) -> Option<&Stats> {
        self.summary.as_ref()
    }

    /// Apply one keystroke. Keystrokes after completion are ignored.
    pub fn apply(&mut self, key: Keystroke, now: Instant) {
        if self.phase == Phase::Complete {
            return;
        }

        if self.started_at.is_none() {
            tracing::debug!("session started");
            self.started_at = Some(now);
        }

        match key {
            Keystroke::Backspace => {
                self.current_input.pop();
            }
            Keystroke::Delimiter => self.commit(now),
            Keystroke::Char(c) => self.write(c),
        }
    }

    fn write(&mut self, c: char) {
        let word_index = self.current_index();
        if let Some(target) = self.target_words.get(word_index) {
            let position = self.current_input.chars().count();
            classify::record_keystroke(target, position, c, word_index, &mut self.mistakes);
        }
        self.current_input.push(c);
    }

    fn commit(&mut self, now: Instant) {
        if self.current_input.is_empty() {
            return;
        }

        let word = std::mem::take(&mut self.current_input);
        tracing::debug!(
            index = self.committed.len(),
            word = %word,
            correct = self.target_words.get(self.committed.len()) == Some(&word),
            "word committed"
        );
        self.committed.push(word);

        if self.current_index() == self.target_words.len() {
            self.finish(now);
        }
    }

    fn finish(&mut self, now: Instant) {
        let elapsed = self
            .started_at
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default();
        let summary = stats::final_stats(&self.target_words, &self.committed, elapsed);

        tracing::info!(
            words = self.committed.len(),
            wpm = summary.wpm,
            accuracy = summary.accuracy,
            mistakes = self.mistakes.len(),
            "session complete"
        );

        self.phase = Phase::Complete;
        self.summary = Some(summary);
    }
}

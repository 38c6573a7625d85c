use std::collections::HashSet;

/// Outcome for a single target character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pending,
    Correct,
    Incorrect,
    /// typed correctly after a mistake was first observed at this position
    Recovered,
}

/// Positions (word index, char index) where the first keystroke was wrong.
///
/// Entries are only ever added, from the keystroke path. Rendering reads it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MistakeSet {
    positions: HashSet<(usize, usize)>,
}

impl MistakeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word_index: usize, char_index: usize) -> bool {
        self.positions.contains(&(word_index, char_index))
    }

    /// Returns true if the position was not already recorded.
    pub fn record(&mut self, word_index: usize, char_index: usize) -> bool {
        self.positions.insert((word_index, char_index))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Classify every position of `target` against the in-progress `input`.
///
/// Characters typed past the end of the target are not classified here, see
/// [`overflow`]. The mistake set is only read.
pub fn classify(
    target: &str,
    input: &str,
    word_index: usize,
    mistakes: &MistakeSet,
) -> Vec<(char, Verdict)> {
    let mut typed = input.chars();

    target
        .chars()
        .enumerate()
        .map(|(j, expected)| {
            let verdict = match typed.next() {
                None => Verdict::Pending,
                Some(c) if c == expected => {
                    if mistakes.contains(word_index, j) {
                        Verdict::Recovered
                    } else {
                        Verdict::Correct
                    }
                }
                Some(_) => Verdict::Incorrect,
            };
            (expected, verdict)
        })
        .collect()
}

/// Record a mistake for a freshly typed character at `position` of the
/// current word. Called once per keystroke, before the character is appended.
///
/// Returns true when a new mistake was recorded.
pub fn record_keystroke(
    target: &str,
    position: usize,
    typed: char,
    word_index: usize,
    mistakes: &mut MistakeSet,
) -> bool {
    match target.chars().nth(position) {
        Some(expected) if expected != typed => mistakes.record(word_index, position),
        _ => false,
    }
}

/// Characters typed beyond the end of the target word.
pub fn overflow<'a>(target: &str, input: &'a str) -> &'a str {
    let target_len = target.chars().count();
    match input.char_indices().nth(target_len) {
        Some((byte_idx, _)) => &input[byte_idx..],
        None => "",
    }
}

/// Whole-word verdict for a word that has already been committed.
pub fn committed_verdict(target: &str, committed: &str) -> Verdict {
    if target == committed {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    }
}

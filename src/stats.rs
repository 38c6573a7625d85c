use std::time::{Duration, Instant};

use crate::session::{Phase, SessionState};

/// Elapsed time never counts as less than this, so wpm stays finite right
/// after the first keystroke.
pub const MIN_ELAPSED: Duration = Duration::from_secs(1);

/// Characters per "word" in the wpm formula.
const CHARS_PER_WORD: u128 = 5;

const NANOS_PER_MINUTE: u128 = 60 * 1_000_000_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stats {
    pub wpm: u32,
    /// percentage in 0..=100
    pub accuracy: f64,
}

/// Committed characters plus one separating space per committed word,
/// plus whatever is in progress.
pub fn typed_chars<S: AsRef<str>>(committed: &[S], current_input: &str) -> usize {
    let committed_chars: usize = committed.iter().map(|w| w.as_ref().chars().count()).sum();
    committed_chars + committed.len() + current_input.chars().count()
}

/// Floored words per minute, computed in integer nanoseconds so whole
/// results stay whole.
pub fn wpm(chars: usize, elapsed: Duration) -> u32 {
    let nanos = elapsed.max(MIN_ELAPSED).as_nanos();
    let wpm = chars as u128 * NANOS_PER_MINUTE / (CHARS_PER_WORD * nanos);
    u32::try_from(wpm).unwrap_or(u32::MAX)
}

/// Share of committed characters that belong to correctly typed words.
pub fn accuracy<S: AsRef<str>, T: AsRef<str>>(targets: &[S], committed: &[T]) -> f64 {
    let (correct, total) = committed.iter().zip(targets.iter()).fold(
        (0usize, 0usize),
        |(correct, total), (typed, target)| {
            let len = typed.as_ref().chars().count();
            if typed.as_ref() == target.as_ref() {
                (correct + len, total + len)
            } else {
                (correct, total + len)
            }
        },
    );

    if total == 0 {
        0.0
    } else {
        100.0 * correct as f64 / total as f64
    }
}

/// Stats over the committed words only, over `elapsed`.
pub fn final_stats<S: AsRef<str>, T: AsRef<str>>(
    targets: &[S],
    committed: &[T],
    elapsed: Duration,
) -> Stats {
    Stats {
        wpm: wpm(typed_chars(committed, ""), elapsed),
        accuracy: accuracy(targets, committed),
    }
}

/// Running wpm for the indicator. Zero before the first keystroke; the
/// frozen final value once the session is complete.
pub fn live_wpm(state: &SessionState, now: Instant) -> u32 {
    if state.phase() == Phase::Complete {
        return state.summary().map(|s| s.wpm).unwrap_or(0);
    }

    match state.started_at() {
        None => 0,
        Some(start) => wpm(
            typed_chars(state.committed_words(), state.current_input()),
            now.saturating_duration_since(start),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Keystroke;

    #[test]
    fn typed_chars_counts_separators() {
        assert_eq!(typed_chars(&["the", "bee"], ""), 8);
        assert_eq!(typed_chars(&["the"], "be"), 6);
        let none: [&str; 0] = [];
        assert_eq!(typed_chars(&none, "ab"), 2);
    }

    #[test]
    fn wpm_over_one_minute() {
        // 50 chars / 5 = 10 words in one minute
        assert_eq!(wpm(50, Duration::from_secs(60)), 10);
    }

    #[test]
    fn wpm_floors() {
        // 12 chars in 30s -> 4.8 wpm
        assert_eq!(wpm(12, Duration::from_secs(30)), 4);
    }

    #[test]
    fn wpm_exact_whole_results_are_not_rounded_down() {
        assert_eq!(wpm(30, Duration::from_secs(36)), 10);
        assert_eq!(wpm(6, Duration::from_secs(6)), 12);
        assert_eq!(wpm(3, Duration::from_secs(6)), 6);
        // a nanosecond past the boundary floors down
        assert_eq!(wpm(30, Duration::from_secs(36) + Duration::from_nanos(1)), 9);
    }

    #[test]
    fn wpm_saturates() {
        assert_eq!(wpm(usize::MAX, Duration::ZERO), u32::MAX);
    }

    #[test]
    fn wpm_near_zero_elapsed_is_finite() {
        assert_eq!(wpm(10, Duration::ZERO), 120);
        assert_eq!(wpm(10, Duration::from_nanos(1)), 120);
    }

    #[test]
    fn accuracy_is_character_weighted() {
        let acc = accuracy(&["the", "be"], &["the", "bee"]);
        assert!((acc - 50.0).abs() < 1e-9);
    }

    #[test]
    fn accuracy_of_nothing_is_zero() {
        let none: [&str; 0] = [];
        assert_eq!(accuracy(&["a"], &none), 0.0);
    }

    #[test]
    fn final_stats_ignores_current_input() {
        let stats = final_stats(&["ab", "cd"], &["ab", "cd"], Duration::from_secs(6));
        // 6 chars / 5 = 1.2 words in 0.1 min
        assert_eq!(stats.wpm, 12);
        assert_eq!(stats.accuracy, 100.0);
    }

    #[test]
    fn live_wpm_zero_before_start() {
        let state = SessionState::new(vec!["hi".into()]);
        assert_eq!(live_wpm(&state, Instant::now()), 0);
    }

    #[test]
    fn live_wpm_includes_current_input() {
        let t0 = Instant::now();
        let mut state = SessionState::new(vec!["hello".into(), "world".into()]);
        for c in "hello".chars() {
            state.apply(Keystroke::Char(c), t0);
        }
        state.apply(Keystroke::Delimiter, t0);
        for c in "wor".chars() {
            state.apply(Keystroke::Char(c), t0);
        }
        // 5 + 1 + 3 = 9 chars in 6 seconds -> 1.8 words / 0.1 min = 18
        assert_eq!(live_wpm(&state, t0 + Duration::from_secs(6)), 18);
    }

    #[test]
    fn live_wpm_frozen_after_completion() {
        let t0 = Instant::now();
        let mut state = SessionState::new(vec!["hi".into()]);
        state.apply(Keystroke::Char('h'), t0);
        state.apply(Keystroke::Char('i'), t0);
        state.apply(Keystroke::Delimiter, t0 + Duration::from_secs(6));

        let frozen = state.summary().map(|s| s.wpm);
        assert_eq!(frozen, Some(6));
        assert_eq!(live_wpm(&state, t0 + Duration::from_secs(600)), 6);
    }
}

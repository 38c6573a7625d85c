use unicode_width::UnicodeWidthStr;

/// One display line of the words box: (word, index into the target words).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutLine<'a> {
    pub entries: Vec<(&'a str, usize)>,
}

impl<'a> LayoutLine<'a> {
    /// Printable width: every word plus one trailing space.
    pub fn width(&self) -> usize {
        self.entries.iter().map(|(w, _)| w.width() + 1).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|(w, _)| *w)
    }
}

/// Greedily pack `words` into lines no wider than `max_width`.
///
/// A line always gets at least one word, so a single word wider than
/// `max_width` sits alone on its own line rather than being cut.
pub fn wrap<S: AsRef<str>>(words: &[S], max_width: usize) -> Vec<LayoutLine<'_>> {
    let mut lines = Vec::new();
    let mut line = LayoutLine::default();
    let mut line_width = 0;

    for (idx, word) in words.iter().enumerate() {
        let word = word.as_ref();
        let word_width = word.width();

        if !line.is_empty() && line_width + word_width + 1 > max_width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }

        line.entries.push((word, idx));
        line_width += word_width + 1;
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

/// (width, height) of the text block needed to show `lines`.
pub fn box_size(lines: &[LayoutLine]) -> (usize, usize) {
    let width = lines.iter().map(LayoutLine::width).max().unwrap_or(0);
    (width, lines.len())
}

/// Find the (row, column) where word `word_index` starts.
pub fn locate(lines: &[LayoutLine], word_index: usize) -> Option<(usize, usize)> {
    lines.iter().enumerate().find_map(|(row, line)| {
        let mut col = 0;
        for (word, idx) in &line.entries {
            if *idx == word_index {
                return Some((row, col));
            }
            col += word.width() + 1;
        }
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_words(lines: &[LayoutLine]) -> Vec<Vec<String>> {
        lines
            .iter()
            .map(|l| l.words().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn wraps_when_next_word_overflows() {
        let lines = wrap(&["abc", "de", "fghij"], 7);
        assert_eq!(
            as_words(&lines),
            vec![vec!["abc", "de"], vec!["fghij"]]
        );
    }

    #[test]
    fn line_width_counts_trailing_spaces() {
        let lines = wrap(&["abc", "de"], 80);
        assert_eq!(lines[0].width(), 7);
    }

    #[test]
    fn exact_fit_stays_on_line() {
        // "ab " + "cd " = 6
        let lines = wrap(&["ab", "cd"], 6);
        assert_eq!(lines.len(), 1);
        let lines = wrap(&["ab", "cd"], 5);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn oversized_word_gets_own_line() {
        let lines = wrap(&["a", "extraordinary", "b"], 5);
        assert_eq!(
            as_words(&lines),
            vec![vec!["a"], vec!["extraordinary"], vec!["b"]]
        );
    }

    #[test]
    fn tiny_width_is_one_word_per_line() {
        for width in [0, 1] {
            let lines = wrap(&["x", "y", "z"], width);
            assert_eq!(lines.len(), 3);
            assert!(lines.iter().all(|l| l.entries.len() == 1));
        }
    }

    #[test]
    fn empty_input_gives_no_lines() {
        let words: Vec<String> = vec![];
        assert!(wrap(&words, 10).is_empty());
        assert_eq!(box_size(&wrap(&words, 10)), (0, 0));
    }

    #[test]
    fn concatenation_preserves_sequence() {
        let words: Vec<String> = "the quick brown fox jumps over the lazy dog again and again"
            .split(' ')
            .map(String::from)
            .collect();

        for width in 0..30 {
            let lines = wrap(&words, width);
            let flat: Vec<(&str, usize)> =
                lines.iter().flat_map(|l| l.entries.clone()).collect();
            assert_eq!(flat.len(), words.len());
            for (i, (w, idx)) in flat.iter().enumerate() {
                assert_eq!(*idx, i);
                assert_eq!(*w, words[i]);
            }
            assert!(lines.iter().all(|l| !l.is_empty()));
        }
    }

    #[test]
    fn wrap_is_deterministic() {
        let words = ["one", "two", "three", "four", "five", "six"];
        assert_eq!(wrap(&words, 9), wrap(&words, 9));
    }

    #[test]
    fn box_size_is_widest_line() {
        let lines = wrap(&["abc", "de", "fghij"], 7);
        assert_eq!(box_size(&lines), (7, 2));
    }

    #[test]
    fn locate_finds_row_and_column() {
        let lines = wrap(&["abc", "de", "fghij", "k"], 7);
        assert_eq!(locate(&lines, 0), Some((0, 0)));
        assert_eq!(locate(&lines, 1), Some((0, 4)));
        assert_eq!(locate(&lines, 2), Some((1, 0)));
        assert_eq!(locate(&lines, 3), Some((2, 0)));
        assert_eq!(locate(&lines, 9), None);
    }
}

pub mod screen;

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Widget},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::App,
    classify::{self, Verdict},
    layout::{self, LayoutLine},
    session::SessionState,
    stats::Stats,
    theme::Palette,
};

const HORIZONTAL_MARGIN: u16 = 5;
const MAX_TEXT_WIDTH: u16 = 76;
const MIN_BOX_WIDTH: u16 = 24;
const WORDS_PADDING: u16 = 1;
const INPUT_BOX_HEIGHT: u16 = 3;
const INPUT_PROMPT: &str = " > ";
/// Columns from the input box's left edge to the first typed character:
/// border plus prompt.
pub const INPUT_TEXT_OFFSET: u16 = 1 + INPUT_PROMPT.len() as u16;

/// Draw the screen for the session's current phase.
pub fn draw(f: &mut Frame, app: &App, now: Instant) {
    screen::current_screen(app.session.phase()).render(app, f, now);
}

/// Width available to the wrapped words for a frame of this size.
pub fn text_width(area: Rect) -> usize {
    area.width
        .saturating_sub(HORIZONTAL_MARGIN * 2)
        .saturating_sub(2 + WORDS_PADDING * 2)
        .min(MAX_TEXT_WIDTH) as usize
}

/// Where the pieces of the typing screen go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingLayout {
    pub status: Rect,
    pub words: Rect,
    pub input: Rect,
}

impl TypingLayout {
    /// Center the status row, words box and input box in `area`. Every rect
    /// is clipped to `area`.
    pub fn compute(area: Rect, lines: &[LayoutLine]) -> Self {
        let (text_w, text_h) = layout::box_size(lines);

        let box_w = (text_w as u16)
            .saturating_add(2 + WORDS_PADDING * 2)
            .max(MIN_BOX_WIDTH)
            .min(area.width);
        let room_for_words = area.height.saturating_sub(1 + INPUT_BOX_HEIGHT).max(3);
        let words_h = (text_h as u16).saturating_add(2).min(room_for_words);
        let total_h = 1 + words_h + INPUT_BOX_HEIGHT;

        let left = area.x + area.width.saturating_sub(box_w) / 2;
        let top = area.y + area.height.saturating_sub(total_h) / 2;

        let status = Rect::new(left, top, box_w, 1);
        let words = Rect::new(left, top.saturating_add(1), box_w, words_h);
        let input = Rect::new(
            left,
            top.saturating_add(1).saturating_add(words_h),
            box_w,
            INPUT_BOX_HEIGHT,
        );

        Self {
            status: status.intersection(area),
            words: words.intersection(area),
            input: input.intersection(area),
        }
    }
}

/// Terminal cursor position inside the input box, clamped to the box.
pub fn cursor_position(input_box: Rect, current_input: &str) -> Option<Position> {
    if input_box.width < INPUT_TEXT_OFFSET + 2 || input_box.height < INPUT_BOX_HEIGHT {
        return None;
    }
    let last_col = input_box.right().saturating_sub(2);
    let x = input_box
        .x
        .saturating_add(INPUT_TEXT_OFFSET)
        .saturating_add(current_input.width() as u16)
        .min(last_col);
    Some(Position::new(x, input_box.y + 1))
}

/// Row to scroll the words box to so the line with `word_index` is shown.
fn scroll_offset(lines: &[LayoutLine], word_index: usize, visible_rows: u16) -> u16 {
    let row = layout::locate(lines, word_index)
        .map(|(row, _)| row)
        .unwrap_or(lines.len().saturating_sub(1));
    let visible = visible_rows.max(1) as usize;
    row.saturating_sub(visible - 1) as u16
}

fn word_spans<'a>(
    session: &'a SessionState,
    palette: &Palette,
    word: &'a str,
    idx: usize,
) -> Vec<Span<'a>> {
    let current = session.current_index();

    if idx < current {
        let verdict = classify::committed_verdict(word, &session.committed_words()[idx]);
        return vec![Span::styled(word, palette.verdict(verdict))];
    }
    if idx > current {
        return vec![Span::styled(word, palette.verdict(Verdict::Pending))];
    }

    let input = session.current_input();
    let mut spans: Vec<Span> = classify::classify(word, input, idx, session.mistakes())
        .into_iter()
        .map(|(c, verdict)| {
            Span::styled(
                c.to_string(),
                palette.verdict(verdict).patch(palette.current_word),
            )
        })
        .collect();

    let extra = classify::overflow(word, input);
    if !extra.is_empty() {
        spans.push(Span::styled(
            extra,
            palette.incorrect.patch(palette.current_word),
        ));
    }
    spans
}

/// Typing screen: status row, wrapped words, input box.
pub struct TypingView<'a> {
    pub session: &'a SessionState,
    pub palette: &'a Palette,
    pub wpm: u32,
}

impl Widget for TypingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        let session = self.session;
        let palette = self.palette;
        let lines = layout::wrap(session.target_words(), text_width(area));
        let rects = TypingLayout::compute(area, &lines);

        if !rects.status.is_empty() {
            let counter = format!(
                "{}/{}",
                session.current_index(),
                session.target_words().len()
            );
            Paragraph::new(Span::styled(counter, palette.label))
                .alignment(Alignment::Left)
                .render(rects.status, buf);
            Paragraph::new(Span::styled(format!("{} wpm", self.wpm), palette.emphasis))
                .alignment(Alignment::Right)
                .render(rects.status, buf);
        }

        if !rects.words.is_empty() {
            let text: Vec<Line> = lines
                .iter()
                .map(|line| {
                    let mut spans = Vec::new();
                    for &(word, idx) in &line.entries {
                        spans.extend(word_spans(session, palette, word, idx));
                        spans.push(Span::raw(" "));
                    }
                    Line::from(spans)
                })
                .collect();

            let visible_rows = rects.words.height.saturating_sub(2);
            let offset = scroll_offset(&lines, session.current_index(), visible_rows);

            Paragraph::new(text)
                .block(
                    Block::bordered()
                        .border_style(palette.border)
                        .padding(Padding::horizontal(WORDS_PADDING)),
                )
                .scroll((offset, 0))
                .render(rects.words, buf);
        }

        if !rects.input.is_empty() {
            let line = Line::from(vec![
                Span::styled(INPUT_PROMPT, palette.label),
                Span::raw(session.current_input()),
            ]);
            Paragraph::new(line)
                .block(Block::bordered().border_style(palette.border))
                .render(rects.input, buf);
        }
    }
}

/// Completion summary, centered.
pub struct SummaryView<'a> {
    pub stats: Stats,
    pub palette: &'a Palette,
}

impl SummaryView<'_> {
    const WIDTH: u16 = 34;
    const HEIGHT: u16 = 8;
}

impl Widget for SummaryView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        let width = Self::WIDTH.min(area.width);
        let height = Self::HEIGHT.min(area.height);
        let rect = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );

        let palette = self.palette;
        let text = vec![
            Line::from(Span::styled("test complete", palette.emphasis)),
            Line::default(),
            Line::from(vec![
                Span::styled("wpm       ", palette.label),
                Span::styled(self.stats.wpm.to_string(), palette.emphasis),
            ]),
            Line::from(vec![
                Span::styled("accuracy  ", palette.label),
                Span::styled(format!("{:.1}%", self.stats.accuracy), palette.emphasis),
            ]),
            Line::default(),
            Line::from(Span::styled("press any key to exit", palette.label)),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(palette.border))
            .render(rect, buf);
    }
}

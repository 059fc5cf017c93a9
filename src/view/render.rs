//! Lay the visible window out into screen rows.
//!
//! Wrapping follows `compute_window` exactly so that every byte inside the
//! window lands on screen and nothing after it does.

use super::viewport::Window;
use crate::locator::Label;
use crate::model::GapBuffer;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Glyph drawn for a document byte. Graphic ASCII draws as itself, whitespace
/// takes one blank cell, anything else shows as `?`.
pub fn display_char(byte: u8) -> char {
    if byte.is_ascii_graphic() {
        byte as char
    } else if byte.is_ascii_whitespace() || byte == 0x0b {
        ' '
    } else {
        '?'
    }
}

pub fn label_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// Build the screen rows for `window`. `labels` must be sorted by position;
/// a labelled byte is replaced by its letter in the label style.
pub fn render_lines(
    text: &GapBuffer,
    window: Window,
    cols: usize,
    labels: &[Label],
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if cols == 0 {
        return lines;
    }

    let mut labels = labels.iter().peekable();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut plain = String::new();
    let mut col = 0;

    for (offset, byte) in text.range(window.start..window.end).enumerate() {
        let pos = window.start + offset;

        while labels.peek().is_some_and(|l| l.position < pos) {
            labels.next();
        }
        let label = labels.next_if(|l| l.position == pos);

        match label {
            Some(label) => {
                if !plain.is_empty() {
                    spans.push(Span::raw(std::mem::take(&mut plain)));
                }
                spans.push(Span::styled(label.letter.to_string(), label_style()));
            }
            None if byte == b'\n' => {}
            None => plain.push(display_char(byte)),
        }

        // A labelled newline still ends its row so the layout does not shift.
        if byte == b'\n' {
            flush_row(&mut lines, &mut spans, &mut plain);
            col = 0;
            continue;
        }

        col += 1;
        if col == cols {
            flush_row(&mut lines, &mut spans, &mut plain);
            col = 0;
        }
    }

    if !plain.is_empty() || !spans.is_empty() {
        flush_row(&mut lines, &mut spans, &mut plain);
    }
    lines
}

/// Screen cell `(column, row)` where position `pos` is drawn, or where the
/// next byte would go when `pos` is the window end. `None` when `pos` falls
/// outside the window or past the last row.
pub fn screen_position(
    text: &GapBuffer,
    window: Window,
    cols: usize,
    rows: usize,
    pos: usize,
) -> Option<(u16, u16)> {
    if cols == 0 || pos < window.start || pos > window.end {
        return None;
    }
    let mut col = 0;
    let mut row = 0;
    for byte in text.range(window.start..pos) {
        col += 1;
        if byte == b'\n' {
            col = 0;
        }
        col %= cols;
        if col == 0 {
            row += 1;
        }
    }
    if row >= rows {
        return None;
    }
    Some((col as u16, row as u16))
}

fn flush_row(lines: &mut Vec<Line<'static>>, spans: &mut Vec<Span<'static>>, plain: &mut String) {
    if !plain.is_empty() {
        spans.push(Span::raw(std::mem::take(plain)));
    }
    lines.push(Line::from(std::mem::take(spans)));
}

use crate::model::GapBuffer;

/// The visible slice of the document: `start..end` in logical positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Map a scroll offset and terminal geometry onto the visible byte range.
///
/// `start` is just past the `scroll`-th newline (or the document end). From
/// there rows are consumed the way the renderer lays them out: the column
/// advances per byte, resets at a newline, and wraps at `cols`; each wrap to
/// column zero consumes a row. When the row budget runs out, the byte that
/// completed the last row is left out of the window.
pub fn compute_window(text: &GapBuffer, scroll: usize, rows: usize, cols: usize) -> Window {
    let len = text.len();

    let mut start = 0;
    for _ in 0..scroll {
        match text.find_from(start, b'\n') {
            Some(newline) => start = newline + 1,
            None => {
                start = len;
                break;
            }
        }
    }

    if rows == 0 || cols == 0 {
        return Window { start, end: start };
    }

    let mut end = start;
    let mut col = 0;
    let mut row = 0;
    for byte in text.range(start..len) {
        col += 1;
        if byte == b'\n' {
            col = 0;
        }
        col %= cols;
        if col == 0 {
            row += 1;
        }
        end += 1;
        if row >= rows {
            end -= 1;
            break;
        }
    }

    Window { start, end }
}

/// Scroll state plus the terminal geometry it is measured against.
#[derive(Debug, Clone)]
pub struct Viewport {
    /// Newline-delimited lines skipped before the first visible byte.
    scroll: usize,
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            scroll: 0,
            width,
            height,
        }
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Rows moved by one scroll command.
    pub fn half_page(&self) -> usize {
        self.height as usize / 2
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    /// Scroll up, stopping at the top of the document.
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn set_scroll(&mut self, line: usize) {
        self.scroll = line;
    }

    /// The window for the current scroll and size. Never cached: the text or
    /// the terminal may have changed since the last call.
    pub fn window(&self, text: &GapBuffer) -> Window {
        compute_window(
            text,
            self.scroll,
            self.height as usize,
            self.width as usize,
        )
    }
}

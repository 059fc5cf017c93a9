use super::{Editor, Mode};
use crate::view::render::{render_lines, screen_position};
use ratatui::layout::Position;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

impl Editor {
    /// Draw the visible window, with labels while a hunt is waiting for one.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let text = self.document.text();
        let window = self.window();

        let labels = match &self.mode {
            Mode::Hunting { hunt, .. } => hunt.labels(text, window),
            _ => Vec::new(),
        };

        let lines = render_lines(text, window, area.width as usize, &labels);
        frame.render_widget(Paragraph::new(lines), area);

        if let Mode::Insert { point } = self.mode {
            if let Some((col, row)) = screen_position(
                text,
                window,
                area.width as usize,
                area.height as usize,
                point,
            ) {
                frame.set_cursor_position(Position::new(area.x + col, area.y + row));
            }
        }
    }
}

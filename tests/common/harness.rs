// EditorTestHarness - Virtual terminal environment for E2E testing

use crossterm::event::{KeyCode, KeyModifiers};
use hunt::app::Editor;
use hunt::config::Config;
use ratatui::{backend::TestBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Name of the document every harness edits, inside its temp directory
pub const TEST_FILE_NAME: &str = "test.txt";

/// Drives an `Editor` against ratatui's `TestBackend`, the same way main.rs
/// drives it against the real terminal: one key, then one draw.
pub struct EditorTestHarness {
    editor: Editor,
    terminal: Terminal<TestBackend>,
    file_path: PathBuf,
    _temp_dir: TempDir,
}

impl EditorTestHarness {
    /// Create a harness editing a file that does not exist yet
    pub fn new(width: u16, height: u16) -> io::Result<Self> {
        Self::with_config(width, height, Config::default(), None)
    }

    /// Create a harness editing a file that starts out holding `content`
    pub fn with_content(width: u16, height: u16, content: &str) -> io::Result<Self> {
        Self::with_config(width, height, Config::default(), Some(content.as_bytes()))
    }

    /// Create a harness with a custom config and optional initial file bytes
    pub fn with_config(
        width: u16,
        height: u16,
        config: Config,
        content: Option<&[u8]>,
    ) -> io::Result<Self> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join(TEST_FILE_NAME);
        if let Some(content) = content {
            std::fs::write(&file_path, content)?;
        }

        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend)?;
        let editor = Editor::new(config, &file_path, width, height).map_err(io::Error::other)?;

        let mut harness = EditorTestHarness {
            editor,
            terminal,
            file_path,
            _temp_dir: temp_dir,
        };
        harness.render()?;
        Ok(harness)
    }

    /// Simulate a key press
    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> io::Result<()> {
        // Delegate to the editor's handle_key method (just like main.rs does)
        self.editor
            .handle_key(code, modifiers)
            .map_err(io::Error::other)?;
        self.render()
    }

    /// Send the same key press multiple times, rendering once at the end
    pub fn send_key_repeat(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        count: usize,
    ) -> io::Result<()> {
        for _ in 0..count {
            self.editor
                .handle_key(code, modifiers)
                .map_err(io::Error::other)?;
        }
        self.render()
    }

    /// Simulate typing a string of text, one unmodified key per character
    pub fn type_text(&mut self, text: &str) -> io::Result<()> {
        for ch in text.chars() {
            let code = match ch {
                '\n' => KeyCode::Enter,
                '\t' => KeyCode::Tab,
                ch => KeyCode::Char(ch),
            };
            self.editor
                .handle_key(code, KeyModifiers::NONE)
                .map_err(io::Error::other)?;
        }
        self.render()
    }

    /// Send a character key with Ctrl held
    pub fn send_ctrl(&mut self, ch: char) -> io::Result<()> {
        self.send_key(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    /// Resize both the virtual terminal and the editor
    pub fn resize(&mut self, width: u16, height: u16) -> io::Result<()> {
        self.terminal.backend_mut().resize(width, height);
        self.editor.resize(width, height);
        self.render()
    }

    /// Render the editor to the virtual terminal
    pub fn render(&mut self) -> io::Result<()> {
        self.terminal.draw(|frame| {
            self.editor.render(frame);
        })?;
        Ok(())
    }

    /// Get the terminal buffer
    pub fn buffer(&self) -> &ratatui::buffer::Buffer {
        self.terminal.backend().buffer()
    }

    /// Get the style (color, modifiers) of a specific cell
    pub fn get_cell_style(&self, x: u16, y: u16) -> Option<ratatui::style::Style> {
        let buffer = self.buffer();
        let pos = buffer.index_of(x, y);
        buffer.content.get(pos).map(|cell| cell.style())
    }

    /// Get the text content of a specific screen row, trailing blanks removed
    pub fn get_row_text(&self, y: u16) -> String {
        let buffer = self.buffer();
        let width = buffer.area.width;
        let mut row_text = String::new();

        for x in 0..width {
            let pos = buffer.index_of(x, y);
            if let Some(cell) = buffer.content.get(pos) {
                row_text.push_str(cell.symbol());
            }
        }

        row_text.trim_end().to_string()
    }

    /// Get the entire screen as a string, rows separated by newlines
    pub fn screen_to_string(&self) -> String {
        let buffer = self.buffer();
        let (width, height) = (buffer.area.width, buffer.area.height);
        let mut result = String::new();

        for y in 0..height {
            for x in 0..width {
                let pos = buffer.index_of(x, y);
                if let Some(cell) = buffer.content.get(pos) {
                    result.push_str(cell.symbol());
                }
            }
            if y < height - 1 {
                result.push('\n');
            }
        }

        result
    }

    /// Verify text appears on screen
    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain '{text}'\nScreen content:\n{screen}"
        );
    }

    /// Verify text does not appear on screen
    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen to not contain '{text}'\nScreen content:\n{screen}"
        );
    }

    /// Get the document content (not screen, actual buffer bytes)
    pub fn get_buffer_content(&self) -> String {
        String::from_utf8_lossy(&self.editor.text().to_vec()).into_owned()
    }

    /// Verify document content matches expected
    pub fn assert_buffer_content(&self, expected: &str) {
        let actual = self.get_buffer_content();
        assert_eq!(
            actual, expected,
            "Buffer content mismatch\nExpected: {expected:?}\nActual: {actual:?}"
        );
    }

    /// Path of the file being edited
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Current bytes of the file on disk, `None` if it does not exist
    pub fn file_content(&self) -> Option<Vec<u8>> {
        std::fs::read(&self.file_path).ok()
    }

    /// Access the editor directly (for advanced testing)
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Check if editor wants to quit
    pub fn should_quit(&self) -> bool {
        self.editor.should_quit()
    }

    /// Hardware cursor position as drawn by the last render
    pub fn screen_cursor_position(&mut self) -> (u16, u16) {
        let pos = self.terminal.get_cursor_position().unwrap_or_default();
        (pos.x, pos.y)
    }
}

//! The editor controller: owns the document and the scroll state, and runs
//! the normal / insert / hunt state machine one key at a time.

mod render;
pub mod types;

pub use types::{Mode, PendingCommand};

use crate::config::Config;
use crate::input::keybindings::{insert_action, key_byte, normal_action, Action, InsertAction};
use crate::locator::{Hunt, Step};
use crate::model::{Document, GapBuffer, ModelError};
use crate::view::{Viewport, Window};
use crossterm::event::{KeyCode, KeyModifiers};
use std::path::Path;

pub struct Editor {
    config: Config,
    document: Document,
    viewport: Viewport,
    mode: Mode,
    should_quit: bool,
}

impl Editor {
    /// Load `path` and start in normal mode.
    pub fn new<P: AsRef<Path>>(
        config: Config,
        path: P,
        width: u16,
        height: u16,
    ) -> Result<Self, ModelError> {
        tracing::info!("Editor::new called with width={}, height={}", width, height);
        let document = Document::load(path, config.editor.initial_capacity)?;
        Ok(Self {
            config,
            document,
            viewport: Viewport::new(width, height),
            mode: Mode::Normal,
            should_quit: false,
        })
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport.resize(width, height);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Stop the main loop, e.g. because input reached its end.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn text(&self) -> &GapBuffer {
        self.document.text()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The visible window, recomputed from the current scroll and size.
    pub fn window(&self) -> Window {
        self.viewport.window(self.document.text())
    }

    /// Where typed bytes go, while in insert mode.
    pub fn insert_point(&self) -> Option<usize> {
        match self.mode {
            Mode::Insert { point } => Some(point),
            _ => None,
        }
    }

    /// Handle one key press.
    ///
    /// Errors are structural (allocation, file I/O) and end the session; an
    /// abandoned hunt is not an error and simply returns to normal mode.
    pub fn handle_key(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Result<(), ModelError> {
        let mode = std::mem::replace(&mut self.mode, Mode::Normal);
        self.mode = match mode {
            Mode::Normal => self.handle_normal(code, modifiers)?,
            Mode::Insert { point } => self.handle_insert(point, code, modifiers)?,
            Mode::Hunting { hunt, pending } => self.handle_hunt(hunt, pending, code, modifiers)?,
            Mode::GotoLine { digits } => self.handle_goto_line(digits, code, modifiers),
        };

        if let Mode::Insert { point } = self.mode {
            self.keep_point_visible(point);
        }
        Ok(())
    }

    fn handle_normal(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Result<Mode, ModelError> {
        let Some(action) = normal_action(code, modifiers) else {
            return Ok(Mode::Normal);
        };
        tracing::debug!("normal mode action: {:?}", action);

        match action {
            Action::ScrollDown => self.viewport.scroll_down(self.viewport.half_page()),
            Action::ScrollUp => self.viewport.scroll_up(self.viewport.half_page()),
            Action::Quit => self.should_quit = true,
            Action::InsertBefore => return self.start_hunt(PendingCommand::InsertBefore),
            Action::InsertAfter => return self.start_hunt(PendingCommand::InsertAfter),
            Action::Delete => return self.start_hunt(PendingCommand::Delete { start: None }),
            Action::Change => return self.start_hunt(PendingCommand::Change { start: None }),
            Action::Write => self.document.save()?,
            Action::Reload => self.document.reload()?,
            Action::GotoLine => {
                return Ok(Mode::GotoLine {
                    digits: String::new(),
                })
            }
        }
        Ok(Mode::Normal)
    }

    fn start_hunt(&mut self, pending: PendingCommand) -> Result<Mode, ModelError> {
        match Hunt::start(self.document.text()) {
            Step::Pending(hunt) => Ok(Mode::Hunting { hunt, pending }),
            Step::Found(pos) => self.complete(pending, pos),
            Step::Cancelled => Ok(Mode::Normal),
        }
    }

    fn handle_hunt(
        &mut self,
        hunt: Hunt,
        pending: PendingCommand,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Result<Mode, ModelError> {
        let window = self.window();
        match hunt.feed(key_byte(code, modifiers), self.document.text(), window) {
            Step::Pending(hunt) => Ok(Mode::Hunting { hunt, pending }),
            Step::Found(pos) => self.complete(pending, pos),
            Step::Cancelled => {
                tracing::debug!("{:?} abandoned: no target", pending);
                Ok(Mode::Normal)
            }
        }
    }

    /// Hand a resolved target to the command waiting for it.
    fn complete(&mut self, pending: PendingCommand, pos: usize) -> Result<Mode, ModelError> {
        let len = self.document.text().len();
        match pending {
            PendingCommand::InsertBefore => Ok(Mode::Insert { point: pos.min(len) }),
            PendingCommand::InsertAfter => Ok(Mode::Insert {
                point: (pos + 1).min(len),
            }),
            PendingCommand::Delete { start: None } => {
                self.start_hunt(PendingCommand::Delete { start: Some(pos) })
            }
            PendingCommand::Change { start: None } => {
                self.start_hunt(PendingCommand::Change { start: Some(pos) })
            }
            PendingCommand::Delete { start: Some(start) } => {
                let removed = self.document.text_mut().delete_range(start, pos);
                tracing::debug!("deleted {} bytes from [{}, {}]", removed, start, pos);
                Ok(Mode::Normal)
            }
            PendingCommand::Change { start: Some(start) } => {
                let removed = self.document.text_mut().delete_range(start, pos);
                tracing::debug!("changed {} bytes from [{}, {}]", removed, start, pos);
                Ok(Mode::Insert {
                    point: start.min(pos).min(self.document.text().len()),
                })
            }
        }
    }

    fn handle_insert(
        &mut self,
        point: usize,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Result<Mode, ModelError> {
        let point = point.min(self.document.text().len());
        let point = match insert_action(code, modifiers) {
            InsertAction::Leave => return Ok(Mode::Normal),
            InsertAction::Backspace => {
                if point == 0 {
                    point
                } else {
                    self.document.text_mut().remove(point - 1);
                    point - 1
                }
            }
            InsertAction::Insert(byte) => {
                self.document.text_mut().insert_at(point, byte)?;
                point + 1
            }
            InsertAction::Ignore => point,
        };
        Ok(Mode::Insert { point })
    }

    /// Scroll half a screen when the insertion point has run off the bottom.
    /// Only the bottom edge is checked: inside a line longer than the screen
    /// the scroll can carry the point above the window, where it stays.
    fn keep_point_visible(&mut self, point: usize) {
        if point > self.window().end {
            self.viewport.scroll_down(self.viewport.half_page());
        }
    }

    fn handle_goto_line(
        &mut self,
        mut digits: String,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Mode {
        if let Some(byte) = key_byte(code, modifiers).filter(u8::is_ascii_digit) {
            digits.push(byte as char);
            if digits.len() < self.config.editor.goto_line_max_digits {
                return Mode::GotoLine { digits };
            }
        }
        // Any other key ends the number and is consumed with it.
        self.goto_line(&digits);
        Mode::Normal
    }

    fn goto_line(&mut self, digits: &str) {
        let line = digits.bytes().fold(0usize, |acc, d| {
            acc.saturating_mul(10).saturating_add((d - b'0') as usize)
        });
        if line == 0 {
            return;
        }
        tracing::debug!("goto line {}", line);
        self.viewport.set_scroll(line);
        self.viewport.scroll_up(self.viewport.half_page());
    }
}

//! Raw mode and alternate screen, restored when the guard drops.

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, stdout};

/// Terminal state owned for the lifetime of the editor session.
pub struct TerminalModes {
    raw_mode: bool,
    alternate_screen: bool,
}

impl TerminalModes {
    /// Enter raw mode (no echo, no line discipline, no newline translation)
    /// and the alternate screen.
    pub fn enable() -> io::Result<Self> {
        let mut modes = Self {
            raw_mode: false,
            alternate_screen: false,
        };

        enable_raw_mode()?;
        modes.raw_mode = true;
        tracing::debug!("Enabled raw mode");

        execute!(stdout(), EnterAlternateScreen)?;
        modes.alternate_screen = true;
        tracing::debug!("Entered alternate screen");

        Ok(modes)
    }

    pub fn undo(&mut self) {
        if self.alternate_screen {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            self.alternate_screen = false;
        }
        if self.raw_mode {
            let _ = disable_raw_mode();
            self.raw_mode = false;
        }
    }
}

impl Drop for TerminalModes {
    fn drop(&mut self) {
        self.undo();
    }
}

/// Best-effort restore used from the panic hook, where the guard may not get
/// a chance to drop before the message is printed.
pub fn emergency_cleanup() {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

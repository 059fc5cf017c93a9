use crate::locator::Hunt;

/// Interaction state of the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Waiting for a single-key command.
    Normal,
    /// Typing goes into the document at `point`.
    Insert { point: usize },
    /// A hunt is prompting for a character or a label; `pending` is the
    /// command that receives the target.
    Hunting { hunt: Hunt, pending: PendingCommand },
    /// Collecting the digits of a goto-line command.
    GotoLine { digits: String },
}

impl Mode {
    pub fn is_normal(&self) -> bool {
        matches!(self, Mode::Normal)
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Mode::Insert { .. })
    }

    pub fn is_hunting(&self) -> bool {
        matches!(self, Mode::Hunting { .. })
    }
}

/// A command waiting on hunt results. Two-target commands carry the first
/// target while the second hunt runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingCommand {
    InsertBefore,
    InsertAfter,
    Delete { start: Option<usize> },
    Change { start: Option<usize> },
}

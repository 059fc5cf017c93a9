//! Target resolution ("hunt").
//!
//! The user types the character they want to land on. If it occurs at most
//! once on screen the position is known immediately. Otherwise occurrences are
//! tagged with letters and the user narrows down one letter per round: round
//! `level` labels every `26^level`-th occurrence starting at `offset`, and
//! picking letter `k` moves `offset` forward by `k * 26^level`. The chosen
//! occurrence is therefore addressed by its index written in base 26, least
//! significant digit first.
//!
//! A `Hunt` is a resumable value fed one key at a time so the event loop never
//! blocks on anything but its single input read.

use crate::model::GapBuffer;
use crate::view::Window;

/// Letters available for labels.
pub const ALPHABET_LEN: usize = 26;

/// Label letter for a group index: `a + index mod 26`.
pub fn label_for(index: usize) -> char {
    (b'a' + (index % ALPHABET_LEN) as u8) as char
}

/// Group index selected by a label key. Only `a..=z` are valid.
pub fn label_index(key: u8) -> Option<usize> {
    key.is_ascii_lowercase().then(|| (key - b'a') as usize)
}

/// Occurrences represented by one label at `level`: `26^level`.
pub fn group_size(level: u32) -> usize {
    ALPHABET_LEN.checked_pow(level).unwrap_or(usize::MAX)
}

/// Positions of `needle` inside `window`, in document order.
pub fn occurrences(text: &GapBuffer, window: Window, needle: u8) -> Vec<usize> {
    text.range(window.start..window.end)
        .enumerate()
        .filter(|&(_, b)| b == needle)
        .map(|(i, _)| window.start + i)
        .collect()
}

/// A label drawn over the occurrence at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub position: usize,
    pub letter: char,
}

/// Labels for one disambiguation round, sorted by position.
pub fn label_positions(occurrences: &[usize], level: u32, offset: usize) -> Vec<Label> {
    let stride = group_size(level);
    occurrences
        .iter()
        .skip(offset)
        .step_by(stride)
        .enumerate()
        .map(|(group, &position)| Label {
            position,
            letter: label_for(group),
        })
        .collect()
}

/// Outcome of a single resolution check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The `offset`-th occurrence is the target.
    Found(usize),
    /// Nothing left to pick: the character is absent or the offset overshot.
    Missing,
    /// More occurrences remain than one label tier can address.
    Ambiguous,
}

pub fn resolve(occurrences: &[usize], level: u32, offset: usize) -> Resolution {
    if occurrences.len().saturating_sub(offset) <= group_size(level) {
        match occurrences.get(offset) {
            Some(&pos) => Resolution::Found(pos),
            None => Resolution::Missing,
        }
    } else {
        Resolution::Ambiguous
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HuntState {
    /// Waiting for the character to look for.
    Query,
    /// Labels are on screen; waiting for a letter.
    Label { needle: u8, level: u32, offset: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hunt {
    state: HuntState,
}

/// Result of feeding a hunt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Another key is needed.
    Pending(Hunt),
    Found(usize),
    /// The hunt ended without a target; the command using it is abandoned.
    Cancelled,
}

impl Hunt {
    /// Begin a hunt. An empty document has only one place to go, so it
    /// resolves to position 0 without prompting.
    pub fn start(text: &GapBuffer) -> Step {
        if text.is_empty() {
            return Step::Found(0);
        }
        Step::Pending(Hunt {
            state: HuntState::Query,
        })
    }

    /// Feed the next key. `key` is `None` for keys that carry no byte
    /// (arrows, escape, ...), which cancel the hunt.
    pub fn feed(self, key: Option<u8>, text: &GapBuffer, window: Window) -> Step {
        let Some(key) = key else {
            tracing::debug!("hunt cancelled by non-character key");
            return Step::Cancelled;
        };

        match self.state {
            HuntState::Query => descend(text, window, key, 0, 0),
            HuntState::Label {
                needle,
                level,
                offset,
            } => match label_index(key) {
                Some(index) => {
                    let offset = offset.saturating_add(index.saturating_mul(group_size(level)));
                    descend(text, window, needle, level + 1, offset)
                }
                None => {
                    tracing::debug!("invalid label key {:?}, hunt cancelled", key as char);
                    Step::Cancelled
                }
            },
        }
    }

    /// The character being hunted, once typed.
    pub fn needle(&self) -> Option<u8> {
        match self.state {
            HuntState::Query => None,
            HuntState::Label { needle, .. } => Some(needle),
        }
    }

    /// Labels to draw for the current round; empty while awaiting the query.
    pub fn labels(&self, text: &GapBuffer, window: Window) -> Vec<Label> {
        match self.state {
            HuntState::Query => Vec::new(),
            HuntState::Label {
                needle,
                level,
                offset,
            } => label_positions(&occurrences(text, window, needle), level, offset),
        }
    }
}

fn descend(text: &GapBuffer, window: Window, needle: u8, level: u32, offset: usize) -> Step {
    let found = occurrences(text, window, needle);
    match resolve(&found, level, offset) {
        Resolution::Found(pos) => {
            tracing::debug!(
                "hunt for {:?} resolved to {} at level {}",
                needle as char,
                pos,
                level
            );
            Step::Found(pos)
        }
        Resolution::Missing => {
            tracing::debug!("no occurrence of {:?} at offset {}", needle as char, offset);
            Step::Cancelled
        }
        Resolution::Ambiguous => Step::Pending(Hunt {
            state: HuntState::Label {
                needle,
                level,
                offset,
            },
        }),
    }
}

//! Key handling: translating terminal key events into editor actions.

pub mod keybindings;

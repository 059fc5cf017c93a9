//! Process-level services used by the binary.

pub mod terminal_modes;
pub mod tracing_setup;

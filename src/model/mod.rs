//! Document model: the gap buffer and its file binding.

pub mod document;
pub mod error;
pub mod gap_buffer;

pub use document::Document;
pub use error::ModelError;
pub use gap_buffer::GapBuffer;

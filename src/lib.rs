//! A cursorless modal text editor.
//!
//! Edit locations are chosen by typing the character to land on; when it is
//! ambiguous on screen, occurrences are labelled with letters and narrowed
//! down one keystroke per round (see [`locator`]).

pub mod app;
pub mod config;
pub mod input;
pub mod locator;
pub mod model;
pub mod services;
pub mod view;

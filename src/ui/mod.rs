//! UI module - line-based terminal input

pub mod prompt;

pub use prompt::{wait_for_selection, Selection};

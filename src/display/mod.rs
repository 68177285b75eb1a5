//! Terminal display formatting
//!
//! Formats notes and installment schedules for terminal output.

pub mod note;

pub use note::{format_note_preview, format_schedule};

//! CLI command handlers for promissoria-cli
//!
//! Each submodule owns one top-level command: argument structs, the
//! subcommand enum where there is one, and a `handle_*_command` entry point
//! called from `main`.

pub mod args;
pub mod export;
pub mod note;
pub mod words;

pub use args::NoteArgs;
pub use export::{handle_export_command, ExportCommands};
pub use note::{handle_note_command, NoteCommands};
pub use words::handle_words_command;

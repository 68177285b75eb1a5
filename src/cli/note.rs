//! Note commands: terminal preview and installment schedule

use clap::Subcommand;

use crate::cli::args::NoteArgs;
use crate::config::Settings;
use crate::display::{format_note_preview, format_schedule};
use crate::error::{PromissoriaError, PromissoriaResult};
use crate::models::PromissoryNote;
use crate::services::{generate_installment_notes, NoteNumberer};

#[derive(Subcommand, Debug)]
pub enum NoteCommands {
    /// Render a note as a plain-text document in the terminal
    Preview {
        #[command(flatten)]
        note: NoteArgs,
    },
    /// Show the installment schedule for a note as a table
    Schedule {
        #[command(flatten)]
        note: NoteArgs,

        /// Number of installments (1-12)
        #[arg(short, long, default_value_t = 1)]
        installments: u32,
    },
}

/// Handle `promissoria note <SUBCOMMAND>`
pub fn handle_note_command(command: NoteCommands, settings: &Settings) -> PromissoriaResult<()> {
    match command {
        NoteCommands::Preview { note } => {
            let note = note.build_note(settings)?;
            println!("{}", format_note_preview(&note));
        }
        NoteCommands::Schedule { note, installments } => {
            let base = note.build_note(settings)?;
            let notes = expand_installments(&base, installments)?;
            println!("{}", format_schedule(&notes));
        }
    }
    Ok(())
}

/// Turn a base note into the notes a command operates on
///
/// One installment keeps the note and its number unchanged; more than one
/// generates the "BB/CC de TT" series.
pub(crate) fn expand_installments(
    base: &PromissoryNote,
    installments: u32,
) -> PromissoriaResult<Vec<PromissoryNote>> {
    if installments <= 1 {
        if installments == 0 {
            return Err(PromissoriaError::invalid_installments(installments));
        }
        return Ok(vec![base.clone()]);
    }
    let mut numberer = NoteNumberer::new();
    generate_installment_notes(base, installments, &mut numberer)
}

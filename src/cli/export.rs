//! Export commands: printable HTML, JSON batches and CSV schedules

use std::fs::File;
use std::io::Write as _;
use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;

use crate::cli::args::NoteArgs;
use crate::cli::note::expand_installments;
use crate::config::{PromissoriaPaths, Settings};
use crate::error::{PromissoriaError, PromissoriaResult};
use crate::export::{export_notes_json, export_schedule_csv, document_html, RenderOptions};
use crate::models::PromissoryNote;

#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Render the notes as a printable A4 HTML document
    Html {
        #[command(flatten)]
        note: NoteArgs,

        /// Number of installments (1-12)
        #[arg(short, long, default_value_t = 1)]
        installments: u32,

        /// Use the compact 120x90mm layout, five notes per page
        #[arg(long)]
        save_paper: bool,

        /// Notes per page, clamped to the layout's maximum
        #[arg(long)]
        notes_per_page: Option<usize>,

        /// Open the browser print dialog when the document loads
        #[arg(long)]
        auto_print: bool,

        /// Output file (defaults into the exports directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Write the notes as a JSON batch with metadata
    Json {
        #[command(flatten)]
        note: NoteArgs,

        /// Number of installments (1-12)
        #[arg(short, long, default_value_t = 1)]
        installments: u32,

        /// Output file (defaults into the exports directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Write the installment schedule as CSV
    Csv {
        #[command(flatten)]
        note: NoteArgs,

        /// Number of installments (1-12)
        #[arg(short, long, default_value_t = 1)]
        installments: u32,

        /// Output file (defaults into the exports directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// Handle `promissoria export <SUBCOMMAND>`
pub fn handle_export_command(
    command: ExportCommands,
    settings: &Settings,
    paths: &PromissoriaPaths,
) -> PromissoriaResult<()> {
    match command {
        ExportCommands::Html {
            note,
            installments,
            save_paper,
            notes_per_page,
            auto_print,
            out,
        } => {
            let base = note.build_note(settings)?;
            let notes = expand_installments(&base, installments)?;

            let opts = RenderOptions {
                save_paper: save_paper || settings.save_paper,
                notes_per_page: notes_per_page.unwrap_or(settings.notes_per_page),
                auto_print,
            };
            let html = document_html(&notes, &opts);

            let path = resolve_out(out, paths, &notes, "html")?;
            let mut file = File::create(&path)?;
            file.write_all(html.as_bytes())?;
            report(&notes, &path);
        }
        ExportCommands::Json {
            note,
            installments,
            out,
        } => {
            let base = note.build_note(settings)?;
            let notes = expand_installments(&base, installments)?;

            let path = resolve_out(out, paths, &notes, "json")?;
            let mut file = File::create(&path)?;
            export_notes_json(&notes, &mut file)?;
            report(&notes, &path);
        }
        ExportCommands::Csv {
            note,
            installments,
            out,
        } => {
            let base = note.build_note(settings)?;
            let notes = expand_installments(&base, installments)?;

            let path = resolve_out(out, paths, &notes, "csv")?;
            let mut file = File::create(&path)?;
            export_schedule_csv(&notes, &mut file)?;
            report(&notes, &path);
        }
    }
    Ok(())
}

/// Pick the output path: an explicit `--out`, or a dated file name in the
/// exports directory
fn resolve_out(
    out: Option<PathBuf>,
    paths: &PromissoriaPaths,
    notes: &[PromissoryNote],
    extension: &str,
) -> PromissoriaResult<PathBuf> {
    if let Some(path) = out {
        return Ok(path);
    }
    paths.ensure_directories()?;
    Ok(paths.exports_dir().join(default_file_name(notes, extension)))
}

fn default_file_name(notes: &[PromissoryNote], extension: &str) -> String {
    let today = Local::now().date_naive().format("%Y-%m-%d");
    if notes.len() == 1 {
        format!(
            "nota-promissoria-{}-{}.{}",
            notes[0].number.replace([' ', '/'], "-"),
            today,
            extension
        )
    } else {
        format!("notas-promissorias-{}.{}", today, extension)
    }
}

fn report(notes: &[PromissoryNote], path: &std::path::Path) {
    if notes.len() == 1 {
        println!("Exported 1 note to {}", path.display());
    } else {
        println!("Exported {} notes to {}", notes.len(), path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_name_single() {
        let notes = vec![PromissoryNote::default()];
        let name = default_file_name(&notes, "html");
        assert!(name.starts_with("nota-promissoria-01-de-01-"));
        assert!(name.ends_with(".html"));
    }

    #[test]
    fn test_default_file_name_batch() {
        let notes = vec![PromissoryNote::default(), PromissoryNote::default()];
        let name = default_file_name(&notes, "csv");
        assert!(name.starts_with("notas-promissorias-"));
        assert!(name.ends_with(".csv"));
    }
}

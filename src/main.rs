use anyhow::Result;
use clap::{Parser, Subcommand};

use promissoria_cli::cli::{
    handle_export_command, handle_note_command, handle_words_command, ExportCommands,
    NoteCommands,
};
use promissoria_cli::config::{PromissoriaPaths, Settings};

#[derive(Parser)]
#[command(
    name = "promissoria",
    version,
    about = "Promissory note generator for the Brazilian \"nota promissória\"",
    long_about = "promissoria generates Brazilian promissory notes: it spells \
                  amounts out in Portuguese, splits a note into monthly \
                  installments, previews notes in the terminal and exports \
                  printable HTML, JSON batches and CSV schedules."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Spell an amount out in words, e.g. "DOIS MIL E NOVENTA REAIS"
    Words {
        /// Amount, e.g. "2090,00" or "R$ 2.090,00"
        amount: String,
    },

    /// Preview notes and installment schedules in the terminal
    #[command(subcommand)]
    Note(NoteCommands),

    /// Export notes as printable HTML, JSON or CSV
    #[command(subcommand)]
    Export(ExportCommands),

    /// Create the data directories and default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PromissoriaPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Words { amount }) => {
            handle_words_command(&amount)?;
        }
        Some(Commands::Note(cmd)) => {
            handle_note_command(cmd, &settings)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(cmd, &settings, &paths)?;
        }
        Some(Commands::Init) => {
            println!("Initializing promissoria at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Edit default parties and locations in:");
            println!("  {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("promissoria Configuration");
            println!("=========================");
            println!("Config directory:  {}", paths.config_dir().display());
            println!("Exports directory: {}", paths.exports_dir().display());
            println!();
            println!("Settings:");
            println!("  Default beneficiary: {}", settings.default_beneficiary_name);
            println!("  Default city/state:  {}/{}", settings.default_city, settings.default_state);
            println!("  Payment location:    {}", settings.default_payment_location);
            println!("  Save paper layout:   {}", settings.save_paper);
            println!("  Notes per page:      {}", settings.notes_per_page);
        }
        None => {
            println!("promissoria - Brazilian promissory note generator");
            println!();
            println!("Run 'promissoria --help' for usage information.");
            println!("Run 'promissoria words 2090,00' to spell an amount out.");
        }
    }

    Ok(())
}

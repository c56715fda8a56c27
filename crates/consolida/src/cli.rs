use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

pub const DEFAULT_DATABASE: &str = "configuraciones.db";
pub const DEFAULT_OUTPUT: &str = "reporte_consolidado.xlsx";

#[derive(Parser, Debug)]
#[command(
    name = "consolida",
    about = "Extract configured cells from spreadsheet files into one consolidated report"
)]
pub struct Cli {
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Enter extraction entries interactively and persist them
    Configure {
        #[arg(long, default_value = DEFAULT_DATABASE)]
        database: PathBuf,
    },
    /// Print the persisted extraction entries
    Show {
        #[arg(long, default_value = DEFAULT_DATABASE)]
        database: PathBuf,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Consolidate the configured cells from the selected files
    Consolidate {
        files: Vec<PathBuf>,
        #[arg(long, default_value = DEFAULT_DATABASE)]
        database: PathBuf,
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Xlsx)]
        format: OutputFormat,
        /// Use the saved configuration without asking
        #[arg(long, default_value_t = false)]
        use_saved: bool,
        /// Re-enter the configuration before consolidating
        #[arg(long, default_value_t = false, conflicts_with = "use_saved")]
        reconfigure: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Xlsx,
    Csv,
}

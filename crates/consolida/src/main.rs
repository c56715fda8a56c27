mod cli;
mod export;
mod logging;
mod prompt;
mod run;
mod store;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbose = if cli.verbose {
        true
    } else {
        logging::env_flag()
    };
    logging::init(verbose);
    match cli.command {
        Command::Configure { database } => run::configure(&database),
        Command::Show { database, json } => run::show(&database, json),
        Command::Consolidate {
            files,
            database,
            output,
            format,
            use_saved,
            reconfigure,
        } => run::consolidate(files, &database, &output, format, use_saved, reconfigure),
    }
}

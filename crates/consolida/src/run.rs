use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use consolida_core::ConfigEntry;

use crate::cli::OutputFormat;
use crate::export;
use crate::logging;
use crate::prompt;
use crate::store::SettingsStore;

pub fn configure(database: &Path) -> Result<()> {
    let stdin = io::stdin();
    let entries = prompt::configure_entries(&mut stdin.lock(), &mut io::stderr())?;
    if entries.is_empty() {
        logging::info("no entries provided, nothing saved");
        return Ok(());
    }
    let mut store = SettingsStore::open(database)?;
    store.append(&entries)?;
    logging::info(format!("saved {} configuration entries", entries.len()));
    Ok(())
}

pub fn show(database: &Path, json: bool) -> Result<()> {
    let store = SettingsStore::open(database)?;
    let entries = store.load_all()?;
    if entries.is_empty() {
        logging::info("no saved configuration");
        return Ok(());
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!("{}", describe(entry));
        }
    }
    Ok(())
}

pub fn consolidate(
    files: Vec<PathBuf>,
    database: &Path,
    output: &Path,
    format: OutputFormat,
    use_saved: bool,
    reconfigure: bool,
) -> Result<()> {
    let stdin = io::stdin();
    consolidate_with(
        files,
        database,
        output,
        format,
        use_saved,
        reconfigure,
        &mut stdin.lock(),
        &mut io::stderr(),
    )
}

fn consolidate_with<R: BufRead, W: Write>(
    files: Vec<PathBuf>,
    database: &Path,
    output: &Path,
    format: OutputFormat,
    use_saved: bool,
    reconfigure: bool,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let selected = filter_spreadsheets(files);
    if selected.is_empty() {
        bail!("select at least one .xlsx or .xls file");
    }
    for path in &selected {
        logging::verbose(format!("selected {}", path.display()));
    }
    let mut store = SettingsStore::open(database)?;
    let entries = gather_entries(&mut store, use_saved, reconfigure, input, out)?;
    let report = consolida_core::consolidate(&selected, &entries)?;
    export::write(&report, output, format)?;
    logging::info(format!(
        "consolidated {} values into {}",
        report.rows.len(),
        output.display()
    ));
    Ok(())
}

fn gather_entries<R: BufRead, W: Write>(
    store: &mut SettingsStore,
    use_saved: bool,
    reconfigure: bool,
    input: &mut R,
    out: &mut W,
) -> Result<Vec<ConfigEntry>> {
    if reconfigure {
        return configure_and_save(store, input, out);
    }
    let saved = store.load_all()?;
    if saved.is_empty() {
        bail!("no saved configuration; run `consolida configure` first");
    }
    if use_saved {
        return Ok(saved);
    }
    for entry in &saved {
        writeln!(out, "{}", describe(entry))?;
    }
    if prompt::confirm(input, out, "Use this saved configuration?")? {
        Ok(saved)
    } else {
        configure_and_save(store, input, out)
    }
}

fn configure_and_save<R: BufRead, W: Write>(
    store: &mut SettingsStore,
    input: &mut R,
    out: &mut W,
) -> Result<Vec<ConfigEntry>> {
    let entries = prompt::configure_entries(input, out)?;
    if entries.is_empty() {
        bail!("configuration is empty, nothing to consolidate");
    }
    store.append(&entries)?;
    Ok(entries)
}

fn describe(entry: &ConfigEntry) -> String {
    format!(
        "Archivo: {}, Hoja: {}, Celdas: {}",
        entry.file_key, entry.sheet, entry.cells
    )
}

fn filter_spreadsheets(files: Vec<PathBuf>) -> Vec<PathBuf> {
    files
        .into_iter()
        .filter(|path| {
            let extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.to_ascii_lowercase());
            let keep = matches!(extension.as_deref(), Some("xlsx") | Some("xls"));
            if !keep {
                logging::warn(format!(
                    "skipping {}: not a spreadsheet file",
                    path.display()
                ));
            }
            keep
        })
        .collect()
}

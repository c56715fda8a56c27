use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use consolida_core::ConfigEntry;

pub const SENTINEL: &str = "fin";

/// Ask for configuration entries until the sentinel is entered.
///
/// An empty answer to any prompt aborts the whole loop; nothing entered so
/// far is returned or persisted.
pub fn configure_entries<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Vec<ConfigEntry>> {
    let mut entries = Vec::new();
    loop {
        let file_key = ask(
            input,
            out,
            &format!("File name (without extension), or '{SENTINEL}' to finish: "),
        )?;
        if file_key.is_empty() {
            bail!("a file name is required");
        }
        if file_key.eq_ignore_ascii_case(SENTINEL) {
            break;
        }
        let sheet = ask(input, out, &format!("Sheet name for '{file_key}': "))?;
        if sheet.is_empty() {
            bail!("a sheet name is required");
        }
        let cells = ask(
            input,
            out,
            &format!("Cells to extract from sheet '{sheet}' (comma-separated): "),
        )?;
        if cells.is_empty() {
            bail!("at least one cell reference is required");
        }
        entries.push(ConfigEntry::new(file_key, sheet, cells));
    }
    Ok(entries)
}

/// Yes/no question. Accepts y/yes/s/si; anything else counts as no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<bool> {
    let answer = ask(input, out, &format!("{question} [y/n]: "))?;
    Ok(matches!(
        answer.to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    ))
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read console input")?;
    if read == 0 {
        bail!("input ended before the configuration was complete");
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_configure(script: &str) -> Result<Vec<ConfigEntry>> {
        let mut input = Cursor::new(script.to_string());
        let mut out: Vec<u8> = Vec::new();
        configure_entries(&mut input, &mut out)
    }

    #[test]
    fn sentinel_alone_yields_no_entries() {
        assert!(run_configure("fin\n").unwrap().is_empty());
        assert!(run_configure("FIN\n").unwrap().is_empty());
    }

    #[test]
    fn entries_accumulate_until_the_sentinel() {
        let entries = run_configure("Ventas\nResumen\nA1, B2:B4, C\nGastos\nDetalle\nD5\nfin\n")
            .unwrap();
        assert_eq!(
            entries,
            vec![
                ConfigEntry::new("Ventas", "Resumen", "A1, B2:B4, C"),
                ConfigEntry::new("Gastos", "Detalle", "D5"),
            ]
        );
    }

    #[test]
    fn blank_answers_abort() {
        assert!(run_configure("\n").is_err());
        assert!(run_configure("Ventas\n\n").is_err());
        assert!(run_configure("Ventas\nResumen\n\n").is_err());
    }

    #[test]
    fn truncated_input_aborts() {
        assert!(run_configure("Ventas\nResumen\n").is_err());
    }

    #[test]
    fn confirm_accepts_spanish_and_english_yes() {
        for answer in ["y\n", "YES\n", "s\n", "Si\n", "sí\n"] {
            let mut input = Cursor::new(answer.to_string());
            let mut out: Vec<u8> = Vec::new();
            assert!(confirm(&mut input, &mut out, "Continue?").unwrap());
        }
        let mut input = Cursor::new("n\n".to_string());
        let mut out: Vec<u8> = Vec::new();
        assert!(!confirm(&mut input, &mut out, "Continue?").unwrap());
    }

    #[test]
    fn prompts_are_written_to_the_output() {
        let mut input = Cursor::new("fin\n".to_string());
        let mut out: Vec<u8> = Vec::new();
        configure_entries(&mut input, &mut out).unwrap();
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("'fin' to finish"));
    }
}

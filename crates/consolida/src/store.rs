use std::path::Path;

use anyhow::{Context, Result};
use consolida_core::ConfigEntry;
use rusqlite::{params, Connection};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS settings (
    id INTEGER PRIMARY KEY,
    archivo TEXT NOT NULL,
    hoja TEXT NOT NULL,
    celda TEXT NOT NULL
)";

/// Append-only SQLite store for extraction configuration. Re-entered
/// configurations become new rows; existing rows are never updated.
pub struct SettingsStore {
    conn: Connection,
}

impl SettingsStore {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open settings database {}", path.display()))?;
        Self::with_connection(conn)
    }

    #[allow(dead_code)]
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)
            .context("failed to apply settings schema")?;
        Ok(Self { conn })
    }

    pub fn append(&mut self, entries: &[ConfigEntry]) -> Result<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt =
                tx.prepare("INSERT INTO settings (archivo, hoja, celda) VALUES (?1, ?2, ?3)")?;
            for entry in entries {
                stmt.execute(params![entry.file_key, entry.sheet, entry.cells])?;
            }
        }
        tx.commit().context("failed to persist configuration")?;
        Ok(())
    }

    pub fn load_all(&self) -> Result<Vec<ConfigEntry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT archivo, hoja, celda FROM settings ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(ConfigEntry {
                file_key: row.get(0)?,
                sheet: row.get(1)?,
                cells: row.get(2)?,
            })
        })?;
        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }
}

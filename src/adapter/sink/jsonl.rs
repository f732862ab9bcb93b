//! Newline-delimited JSON files, one per season and table.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::table::Table;
use crate::error::Result;
use crate::port::TableSink;

/// Writes `<root>/<season>/<table>.jsonl`, truncating existing files.
pub struct JsonLinesSink {
    root: PathBuf,
}

impl JsonLinesSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn table_path(&self, season: &str, table: &str) -> PathBuf {
        self.root.join(season).join(format!("{table}.jsonl"))
    }
}

impl TableSink for JsonLinesSink {
    fn write(&self, season: &str, table: &Table) -> Result<()> {
        let path = self.table_path(season, &table.name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(&path)?);
        for row in &table.rows {
            serde_json::to_writer(&mut writer, row)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        debug!(path = %path.display(), rows = table.len(), "Wrote table");
        Ok(())
    }
}

//! Recording [`TableSink`] for tests.

use std::sync::Mutex;

use crate::domain::table::Table;
use crate::error::Result;
use crate::port::TableSink;

/// Keeps every written table in memory, in write order.
#[derive(Default)]
pub struct MemorySink {
    written: Mutex<Vec<(String, Table)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All `(season, table)` pairs written so far.
    pub fn written(&self) -> Vec<(String, Table)> {
        self.written.lock().unwrap().clone()
    }

    /// The most recent write of `name` for `season`.
    pub fn table(&self, season: &str, name: &str) -> Option<Table> {
        self.written
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(s, t)| s == season && t.name == name)
            .map(|(_, t)| t.clone())
    }
}

impl TableSink for MemorySink {
    fn write(&self, season: &str, table: &Table) -> Result<()> {
        self.written
            .lock()
            .unwrap()
            .push((season.to_string(), table.clone()));
        Ok(())
    }
}

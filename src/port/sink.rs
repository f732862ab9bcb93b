//! Write-side port for extracted tables.

use crate::domain::table::Table;
use crate::error::Result;

/// Destination for flat tables, e.g. a warehouse or a directory of files.
///
/// Writing a table replaces any previous contents for the same season.
pub trait TableSink: Send + Sync {
    fn write(&self, season: &str, table: &Table) -> Result<()>;
}

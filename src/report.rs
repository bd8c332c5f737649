//! Row accounting for one cleaning run.

use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub rows_read: usize,
    /// Counts that were present but not integers; included in `rows_dropped_null`.
    pub rows_unparseable_count: usize,
    pub rows_dropped_null: usize,
    pub rows_dropped_negative: usize,
    pub rows_dropped_duplicate: usize,
    pub rows_written: usize,
}

impl CleanReport {
    pub fn rows_dropped(&self) -> usize {
        self.rows_dropped_null + self.rows_dropped_negative + self.rows_dropped_duplicate
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

//! CSV Data Loader Module
//! Reads a survey CSV through Polars and checks it carries the required columns.

use super::schema;
use crate::error::{CleanError, CleanResult};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Loads survey CSV files with every column read as text.
///
/// Schema inference is switched off so that `No_individuals` is typed
/// explicitly by the processor instead of by whole-column guessing.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file and verify the required columns are present.
    pub fn load_csv(file_path: &Path) -> CleanResult<DataFrame> {
        // Surface unreadable input as I/O rather than an engine error
        let file = File::open(file_path).map_err(|e| CleanError::io(file_path, e))?;
        let meta = file.metadata().map_err(|e| CleanError::io(file_path, e))?;
        if meta.is_dir() {
            return Err(CleanError::io(
                file_path,
                std::io::Error::other("input path is a directory"),
            ));
        }
        if meta.len() == 0 {
            // No header row at all
            return Err(CleanError::Schema {
                missing: schema::missing_columns(&[]),
            });
        }
        drop(file);

        let read_error = |source: PolarsError| CleanError::Read {
            path: file_path.to_path_buf(),
            source,
        };
        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .finish()
            .and_then(|lf| lf.collect())
            .map_err(read_error)?;
        debug!(columns = ?df.get_column_names(), "parsed header");

        schema::check_required(&df)?;
        info!(
            path = %file_path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded input"
        );

        Ok(df)
    }
}

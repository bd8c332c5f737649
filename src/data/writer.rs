//! CSV Publisher Module
//! Writes the cleaned table to a temporary file and renames it into place.

use crate::error::{CleanError, CleanResult};
use polars::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::Builder;
use tracing::{debug, info};

/// Publishes a DataFrame as a single CSV file with a header row.
///
/// The output path only ever holds a complete file: either the previous
/// output or the new one.
pub struct CsvPublisher;

impl CsvPublisher {
    pub fn publish(df: &mut DataFrame, output_path: &Path, overwrite: bool) -> CleanResult<()> {
        if output_path.is_dir() {
            return Err(CleanError::io(
                output_path,
                io::Error::other("output path is a directory"),
            ));
        }
        if !overwrite && output_path.exists() {
            return Err(CleanError::io(
                output_path,
                io::Error::new(io::ErrorKind::AlreadyExists, "output exists and overwrite is off"),
            ));
        }

        let parent = match output_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(|e| CleanError::io(parent, e))?;

        // Dropped (and deleted) on any early return below
        let mut staged = Builder::new()
            .prefix(".bird_cleaner-")
            .suffix(".csv.tmp")
            .tempfile_in(parent)
            .map_err(|e| CleanError::io(parent, e))?;
        debug!(staged = %staged.path().display(), "writing staged output");

        CsvWriter::new(staged.as_file_mut())
            .include_header(true)
            .finish(df)?;

        let file = staged.as_file_mut();
        file.flush()
            .and_then(|_| file.sync_all())
            .map_err(|e| CleanError::io(output_path, e))?;

        let persisted = if overwrite {
            staged.persist(output_path)
        } else {
            staged.persist_noclobber(output_path)
        };
        persisted.map_err(|e| CleanError::io(output_path, e.error))?;

        info!(path = %output_path.display(), rows = df.height(), "published output");
        Ok(())
    }
}

//! Error Module
//! Failure taxonomy for the cleaning pipeline.

use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

pub type CleanResult<T> = Result<T, CleanError>;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Input is missing required column(s): {}", .missing.join(", "))]
    Schema { missing: Vec<String> },
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No_individuals value {value:?} on line {line} is not an integer")]
    TypeCoercion { line: usize, value: String },
    #[error("Could not parse {} as CSV: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("Table engine error: {0}")]
    Engine(#[from] PolarsError),
    #[error("Invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("No {0} path given")]
    MissingPath(&'static str),
    #[error("Failed to start session: {0}")]
    Session(#[from] rayon::ThreadPoolBuildError),
}

impl CleanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CleanError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_lists_every_missing_column() {
        let err = CleanError::Schema {
            missing: vec!["CommonName".to_string(), "ScientificName".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Input is missing required column(s): CommonName, ScientificName"
        );
    }

    #[test]
    fn type_coercion_error_names_line_and_value() {
        let err = CleanError::TypeCoercion {
            line: 4,
            value: "many".to_string(),
        };
        assert!(err.to_string().contains("\"many\""));
        assert!(err.to_string().contains("line 4"));
    }
}

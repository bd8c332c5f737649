//! Configuration Module
//! Paths and options for one cleaning run, loadable from a JSON file.

use crate::error::{CleanError, CleanResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What to do with a `No_individuals` value that is not an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CountPolicy {
    /// Treat the value as null so the row is removed by the null filter.
    Drop,
    /// Abort the run with a type coercion error.
    Reject,
}

impl Default for CountPolicy {
    fn default() -> Self {
        CountPolicy::Drop
    }
}

/// Settings for a single pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub overwrite: bool,
    pub count_policy: CountPolicy,
    /// Worker threads for the session pool; 0 lets rayon decide.
    ///
    /// Only count parsing runs on this pool. Polars does its reading,
    /// filtering and writing on its own global pool (`POLARS_MAX_THREADS`).
    pub threads: usize,
}

/// Command line values layered over a loaded config. `None` keeps the
/// config's value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    /// Set by `--no-overwrite`; it can only turn overwriting off.
    pub no_overwrite: bool,
    pub count_policy: Option<CountPolicy>,
    pub threads: Option<usize>,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            input_path: None,
            output_path: None,
            overwrite: true,
            count_policy: CountPolicy::default(),
            threads: 0,
        }
    }
}

impl CleanConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: Some(input_path.into()),
            output_path: Some(output_path.into()),
            ..Default::default()
        }
    }

    /// Load settings from a JSON file. Absent keys take their defaults.
    pub fn from_json_file(path: &Path) -> CleanResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| CleanError::io(path, e))?;
        serde_json::from_str(&raw).map_err(|source| CleanError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply command line values on top of this config.
    pub fn merge_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(input) = overrides.input_path {
            self.input_path = Some(input);
        }
        if let Some(output) = overrides.output_path {
            self.output_path = Some(output);
        }
        if overrides.no_overwrite {
            self.overwrite = false;
        }
        if let Some(policy) = overrides.count_policy {
            self.count_policy = policy;
        }
        if let Some(threads) = overrides.threads {
            self.threads = threads;
        }
        self
    }

    pub fn input(&self) -> CleanResult<&Path> {
        self.input_path
            .as_deref()
            .ok_or(CleanError::MissingPath("input"))
    }

    pub fn output(&self) -> CleanResult<&Path> {
        self.output_path
            .as_deref()
            .ok_or(CleanError::MissingPath("output"))
    }
}

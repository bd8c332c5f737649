//! Bird Cleaner - survey CSV cleaning pipeline
//!
//! Loads bird-survey observations, drops incomplete and negative-count rows,
//! renames the kept columns, removes duplicates and publishes a new CSV.

pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod session;

pub use config::{CleanConfig, ConfigOverrides, CountPolicy};
pub use error::{CleanError, CleanResult};
pub use pipeline::run;
pub use report::CleanReport;
pub use session::Session;

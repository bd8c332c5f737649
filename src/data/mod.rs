//! Data module - CSV loading, cleaning and writing

pub mod schema;
mod loader;
mod processor;
mod writer;

#[cfg(test)]
mod writer_tests;

pub use loader::DataLoader;
pub use processor::{CountTyping, DataProcessor};
pub use writer::CsvPublisher;

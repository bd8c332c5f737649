//! Cleaning Pipeline
//! Read → type counts → drop nulls → project → drop negatives → dedup → write.

use crate::config::CleanConfig;
use crate::data::{CsvPublisher, DataLoader, DataProcessor};
use crate::error::CleanResult;
use crate::report::CleanReport;
use crate::session::Session;
use tracing::{info, info_span};

/// Run the whole cleaning job inside `session`.
///
/// Blocks until the output is published or a step fails. Nothing is
/// written unless every step before the write succeeded.
pub fn run(session: &Session, config: &CleanConfig) -> CleanResult<CleanReport> {
    let input = config.input()?;
    let output = config.output()?;

    let span = info_span!("clean", input = %input.display(), output = %output.display());

    // The pool's worker threads do not inherit the caller's entered span
    session.install(|| {
        span.in_scope(|| -> CleanResult<CleanReport> {
            let df = DataLoader::load_csv(input)?;

            let mut report = CleanReport {
                input_path: input.to_path_buf(),
                output_path: output.to_path_buf(),
                rows_read: df.height(),
                ..Default::default()
            };

            let typed = DataProcessor::type_counts(df, config.count_policy)?;
            report.rows_unparseable_count = typed.unparseable;

            let df = DataProcessor::drop_incomplete(typed.df)?;
            report.rows_dropped_null = report.rows_read - df.height();
            info!(remaining = df.height(), dropped = report.rows_dropped_null, "null filter");

            let df = DataProcessor::project(df)?;

            let before = df.height();
            let df = DataProcessor::drop_negative_counts(df)?;
            report.rows_dropped_negative = before - df.height();
            info!(remaining = df.height(), dropped = report.rows_dropped_negative, "range filter");

            let before = df.height();
            let mut df = DataProcessor::deduplicate(df)?;
            report.rows_dropped_duplicate = before - df.height();
            info!(remaining = df.height(), dropped = report.rows_dropped_duplicate, "deduplicate");

            CsvPublisher::publish(&mut df, output, config.overwrite)?;
            report.rows_written = df.height();

            Ok(report)
        })
    })
}

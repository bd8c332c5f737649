//! Bird Cleaner - command line entry point.

use anyhow::{Context, Result};
use bird_cleaner::{pipeline, CleanConfig, ConfigOverrides, CountPolicy, Session};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "bird_cleaner")]
#[command(about = "Clean a bird survey CSV: drop incomplete, negative and duplicate rows")]
#[command(version)]
struct Cli {
    /// Survey CSV to read
    input: Option<PathBuf>,
    /// Where to write the cleaned CSV
    output: Option<PathBuf>,
    /// JSON config file; command line values take precedence
    #[arg(long)]
    config: Option<PathBuf>,
    /// Fail instead of replacing an existing output file
    #[arg(long)]
    no_overwrite: bool,
    /// Handling of non-integer No_individuals values
    #[arg(long, value_enum)]
    count_policy: Option<CountPolicy>,
    /// Threads for count parsing (0 = one per core); polars sizes its own pool
    #[arg(long)]
    threads: Option<usize>,
    /// Also write the run report as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,
    /// Debug logging unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<(CleanConfig, Option<PathBuf>)> {
        let base = match &self.config {
            Some(path) => CleanConfig::from_json_file(path)
                .with_context(|| format!("reading config {}", path.display()))?,
            None => CleanConfig::default(),
        };

        let config = base.merge_overrides(ConfigOverrides {
            input_path: self.input,
            output_path: self.output,
            no_overwrite: self.no_overwrite,
            count_policy: self.count_policy,
            threads: self.threads,
        });
        Ok((config, self.report))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let (config, report_path) = cli.into_config()?;

    let report = {
        let session = Session::builder()
            .threads(config.threads)
            .build()
            .context("starting session")?;
        pipeline::run(&session, &config).context("cleaning run failed")?
    };

    info!(
        read = report.rows_read,
        dropped = report.rows_dropped(),
        written = report.rows_written,
        "done"
    );

    if let Some(path) = report_path {
        let json = report.to_json().context("serializing report")?;
        fs::write(&path, json).with_context(|| format!("writing report {}", path.display()))?;
    }

    Ok(())
}

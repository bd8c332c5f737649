//! Data Processor Module
//! The cleaning steps: count typing, null filter, projection, range filter, dedup.

use super::schema::{BIRD_COUNT, NO_INDIVIDUALS, RENAMES, REQUIRED_COLUMNS, TEXT_COLUMNS};
use crate::config::CountPolicy;
use crate::error::{CleanError, CleanResult};
use polars::prelude::*;
use rayon::prelude::*;
use tracing::{debug, warn};

/// First data row of the input sits on this line (the header is line 1).
const FIRST_DATA_LINE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawCount {
    Missing,
    Valid(i64),
    Invalid,
}

impl RawCount {
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => RawCount::Missing,
            Some(s) => s.parse::<i64>().map_or(RawCount::Invalid, RawCount::Valid),
        }
    }

    fn value(self) -> Option<i64> {
        match self {
            RawCount::Valid(v) => Some(v),
            RawCount::Missing | RawCount::Invalid => None,
        }
    }
}

/// Result of typing the `No_individuals` column.
#[derive(Debug)]
pub struct CountTyping {
    pub df: DataFrame,
    /// Values present in the input that did not parse as integers.
    pub unparseable: usize,
}

/// Handles the ordered cleaning steps over a survey table.
pub struct DataProcessor;

impl DataProcessor {
    /// Replace the text `No_individuals` column with an Int64 column.
    ///
    /// Parsing fans out over the current rayon pool. Under
    /// `CountPolicy::Drop` unparseable values become null; under
    /// `CountPolicy::Reject` the first one aborts with its input line.
    pub fn type_counts(mut df: DataFrame, policy: CountPolicy) -> CleanResult<CountTyping> {
        let raw = df.column(NO_INDIVIDUALS)?.cast(&DataType::String)?;
        let raw_values: Vec<Option<&str>> = raw.str()?.into_iter().collect();

        let parsed: Vec<RawCount> = raw_values
            .par_iter()
            .map(|v| RawCount::parse(*v))
            .collect();

        if policy == CountPolicy::Reject {
            if let Some(idx) = parsed.iter().position(|p| *p == RawCount::Invalid) {
                return Err(CleanError::TypeCoercion {
                    line: idx + FIRST_DATA_LINE,
                    value: raw_values[idx].unwrap_or_default().to_string(),
                });
            }
        }

        let unparseable = parsed.iter().filter(|p| **p == RawCount::Invalid).count();
        if unparseable > 0 {
            warn!(unparseable, "non-integer No_individuals values treated as null");
        }

        let counts: Vec<Option<i64>> = parsed.into_iter().map(RawCount::value).collect();
        df.with_column(Column::new(NO_INDIVIDUALS.into(), counts))?;

        Ok(CountTyping { df, unparseable })
    }

    /// Step 1: drop rows with a null in any required input column.
    ///
    /// An empty or whitespace-only text value (e.g. a quoted `""`) is
    /// missing too.
    pub fn drop_incomplete(df: DataFrame) -> CleanResult<DataFrame> {
        let present = REQUIRED_COLUMNS
            .iter()
            .fold(lit(true), |acc, name| acc.and(col(*name).is_not_null()));
        let complete = TEXT_COLUMNS.iter().fold(present, |acc, name| {
            acc.and(col(*name).str().strip_chars(lit(NULL)).neq(lit("")))
        });

        let filtered = df.lazy().filter(complete).collect()?;
        Ok(filtered)
    }

    /// Step 2: keep only the required columns, under their output names.
    pub fn project(df: DataFrame) -> CleanResult<DataFrame> {
        let selection: Vec<Expr> = RENAMES
            .iter()
            .map(|(from, to)| col(*from).alias(*to))
            .collect();

        let projected = df.lazy().select(selection).collect()?;
        debug!(columns = ?projected.get_column_names(), "projected");
        Ok(projected)
    }

    /// Step 3: drop rows whose count is negative.
    pub fn drop_negative_counts(df: DataFrame) -> CleanResult<DataFrame> {
        let filtered = df
            .lazy()
            .filter(col(BIRD_COUNT).gt_eq(lit(0i64)))
            .collect()?;
        Ok(filtered)
    }

    /// Step 4: collapse exact duplicate rows, keeping the first of each set.
    ///
    /// Surviving rows stay in input order so reruns write identical bytes.
    pub fn deduplicate(df: DataFrame) -> CleanResult<DataFrame> {
        let unique = df
            .lazy()
            .unique_stable(None, UniqueKeepStrategy::First)
            .collect()?;
        Ok(unique)
    }
}

//! Column names of the survey input and the cleaned output.

use crate::error::{CleanError, CleanResult};
use polars::prelude::DataFrame;

pub const BCR_NAME: &str = "BCR_name";
pub const COMMON_NAME: &str = "CommonName";
pub const SCIENTIFIC_NAME: &str = "ScientificName";
pub const NO_INDIVIDUALS: &str = "No_individuals";

pub const BCR: &str = "BCR";
pub const BIRD_NAME: &str = "BirdName";
pub const BIRD_SCIENTIFIC_NAME: &str = "BirdScientificName";
pub const BIRD_COUNT: &str = "BirdCount";

/// Input columns every survey file must carry, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 4] = [BCR_NAME, COMMON_NAME, SCIENTIFIC_NAME, NO_INDIVIDUALS];

/// Required columns holding free text; blank values there count as missing.
pub const TEXT_COLUMNS: [&str; 3] = [BCR_NAME, COMMON_NAME, SCIENTIFIC_NAME];

/// Output header, in order.
pub const OUTPUT_COLUMNS: [&str; 4] = [BCR, BIRD_NAME, BIRD_SCIENTIFIC_NAME, BIRD_COUNT];

/// (input, output) pairs for the projection step.
pub const RENAMES: [(&str, &str); 4] = [
    (BCR_NAME, BCR),
    (COMMON_NAME, BIRD_NAME),
    (SCIENTIFIC_NAME, BIRD_SCIENTIFIC_NAME),
    (NO_INDIVIDUALS, BIRD_COUNT),
];

/// Required columns absent from `columns`, in canonical order.
pub fn missing_columns(columns: &[String]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|required| !columns.iter().any(|c| c == *required))
        .map(|s| s.to_string())
        .collect()
}

/// Fail with a schema error naming every required column `df` lacks.
pub fn check_required(df: &DataFrame) -> CleanResult<()> {
    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let missing = missing_columns(&columns);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CleanError::Schema { missing })
    }
}

// src/schema/columns.rs

use std::collections::HashSet;
use thiserror::Error;

pub const COL_MODEL: &str = "model";
pub const COL_MODEL_YEAR: &str = "model_year";
pub const COL_FUEL: &str = "fuel";
pub const COL_CYLINDERS: &str = "cylinders";
pub const COL_ODOMETER: &str = "odometer";
pub const COL_PAINT_COLOR: &str = "paint_color";
pub const COL_IS_4WD: &str = "is_4wd";
pub const COL_CONDITION: &str = "condition";
pub const COL_PRICE: &str = "price";

/// Every column the pipeline needs. Files may carry any number of
/// extra columns on top of these; they pass through untouched.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    COL_MODEL,
    COL_MODEL_YEAR,
    COL_FUEL,
    COL_CYLINDERS,
    COL_ODOMETER,
    COL_PAINT_COLOR,
    COL_IS_4WD,
    COL_CONDITION,
    COL_PRICE,
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("required column(s) missing from input: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// Check that `headers` covers every required column. Order does not
/// matter and extra columns are fine. Reports all absences at once.
pub fn validate_headers<S: AsRef<str>>(headers: &[S]) -> Result<(), SchemaError> {
    let present: HashSet<&str> = headers.iter().map(|h| h.as_ref().trim()).collect();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !present.contains(*col))
        .map(|col| col.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::MissingColumns(missing))
    }
}

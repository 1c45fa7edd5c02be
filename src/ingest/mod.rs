// src/ingest/mod.rs

use anyhow::{anyhow, Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

use crate::schema::{
    columns::{
        COL_CONDITION, COL_CYLINDERS, COL_FUEL, COL_IS_4WD, COL_MODEL, COL_MODEL_YEAR,
        COL_ODOMETER, COL_PAINT_COLOR, COL_PRICE,
    },
    validate_headers, Condition, Fuel, REQUIRED_COLUMNS,
};

/// One advertisement row as it arrives from the CSV, before imputation.
/// The five imputable columns are optional; `is_4wd` keeps its raw flag
/// text so the cleaning step owns the boolean coercion policy.
#[derive(Debug, Clone, PartialEq)]
pub struct RawListing {
    pub model: String,
    pub model_year: Option<f64>,
    pub fuel: Fuel,
    pub cylinders: Option<f64>,
    pub odometer: Option<f64>,
    pub paint_color: Option<String>,
    pub is_4wd: Option<String>,
    pub condition: Condition,
    pub price: f64,
    /// Columns outside the required set, passed through untouched.
    pub extras: BTreeMap<String, String>,
}

/// Positions of the required columns in this file's header row, plus
/// the name/position of every extra column.
struct ColumnIndex {
    model: usize,
    model_year: usize,
    fuel: usize,
    cylinders: usize,
    odometer: usize,
    paint_color: usize,
    is_4wd: usize,
    condition: usize,
    price: usize,
    extras: Vec<(String, usize)>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let names: Vec<&str> = headers.iter().map(str::trim).collect();
        validate_headers(&names)?;

        let pos = |col: &str| -> usize {
            // validate_headers guarantees every required column is present
            names.iter().position(|h| *h == col).expect("required column")
        };
        let extras = names
            .iter()
            .enumerate()
            .filter(|(_, name)| !REQUIRED_COLUMNS.contains(name))
            .map(|(i, name)| (name.to_string(), i))
            .collect();

        Ok(Self {
            model: pos(COL_MODEL),
            model_year: pos(COL_MODEL_YEAR),
            fuel: pos(COL_FUEL),
            cylinders: pos(COL_CYLINDERS),
            odometer: pos(COL_ODOMETER),
            paint_color: pos(COL_PAINT_COLOR),
            is_4wd: pos(COL_IS_4WD),
            condition: pos(COL_CONDITION),
            price: pos(COL_PRICE),
            extras,
        })
    }
}

/// Trimmed field content, with blank cells mapped to `None`.
fn opt_field<'r>(record: &'r StringRecord, idx: usize) -> Option<&'r str> {
    record.get(idx).map(str::trim).filter(|s| !s.is_empty())
}

/// A column the data model declares never-missing must actually hold a value.
fn req_field<'r>(record: &'r StringRecord, idx: usize, row: usize, col: &str) -> Result<&'r str> {
    opt_field(record, idx).ok_or_else(|| anyhow!("data row {}: column `{}` is empty", row, col))
}

fn opt_f64(record: &StringRecord, idx: usize, row: usize, col: &str) -> Result<Option<f64>> {
    opt_field(record, idx)
        .map(|s| {
            s.parse::<f64>()
                .with_context(|| format!("data row {}: column `{}`: bad number `{}`", row, col, s))
        })
        .transpose()
}

fn parse_record(record: &StringRecord, idx: &ColumnIndex, row: usize) -> Result<RawListing> {
    let fuel: Fuel = req_field(record, idx.fuel, row, COL_FUEL)?
        .parse()
        .with_context(|| format!("data row {}", row))?;
    let condition: Condition = req_field(record, idx.condition, row, COL_CONDITION)?
        .parse()
        .with_context(|| format!("data row {}", row))?;
    let price: f64 = req_field(record, idx.price, row, COL_PRICE)?
        .parse()
        .with_context(|| format!("data row {}: column `{}`: bad number", row, COL_PRICE))?;

    let extras = idx
        .extras
        .iter()
        .map(|(name, i)| {
            let value = record.get(*i).map(str::trim).unwrap_or_default();
            (name.clone(), value.to_string())
        })
        .collect();

    Ok(RawListing {
        model: req_field(record, idx.model, row, COL_MODEL)?.to_string(),
        model_year: opt_f64(record, idx.model_year, row, COL_MODEL_YEAR)?,
        fuel,
        cylinders: opt_f64(record, idx.cylinders, row, COL_CYLINDERS)?,
        odometer: opt_f64(record, idx.odometer, row, COL_ODOMETER)?,
        paint_color: opt_field(record, idx.paint_color).map(str::to_string),
        is_4wd: opt_field(record, idx.is_4wd).map(str::to_string),
        condition,
        price,
        extras,
    })
}

/// Read one listings CSV into typed rows.
///
/// The header row is validated against the required column set before
/// any record is parsed, so a missing column fails fast with a
/// `SchemaError` (downcastable from the returned error) and never after
/// partial work. A file with valid headers and no data rows is fine.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_listings<P: AsRef<Path>>(path: P) -> Result<Vec<RawListing>> {
    let file = File::open(&path)
        .with_context(|| format!("opening listings CSV {:?}", path.as_ref()))?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let headers = rdr.headers().context("reading CSV header row")?.clone();
    let idx = ColumnIndex::from_headers(&headers)?;

    let mut rows = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = i + 1;
        let record =
            result.with_context(|| format!("CSV parse error at data row {}", row))?;
        rows.push(parse_record(&record, &idx, row)?);
    }

    info!(rows = rows.len(), "loaded listings");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaError;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,carscrub::ingest=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    fn write_csv(content: &str) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().expect("temp file");
        tmp.write_all(content.as_bytes()).expect("write csv");
        tmp
    }

    const FULL_HEADER: &str =
        "price,model_year,model,condition,cylinders,fuel,odometer,paint_color,is_4wd";

    #[test]
    fn loads_typed_rows() {
        init_test_logging();
        let tmp = write_csv(
            "price,model_year,model,condition,cylinders,fuel,odometer,paint_color,is_4wd\n\
             5000,2010,honda civic,good,4,gas,120000,red,1.0\n\
             32000,2019,nissan leaf,like new,,electric,15000,,\n",
        );

        let rows = load_listings(tmp.path()).unwrap();
        assert_eq!(rows.len(), 2);

        let civic = &rows[0];
        assert_eq!(civic.model, "honda civic");
        assert_eq!(civic.model_year, Some(2010.0));
        assert_eq!(civic.fuel, Fuel::Gas);
        assert_eq!(civic.cylinders, Some(4.0));
        assert_eq!(civic.odometer, Some(120000.0));
        assert_eq!(civic.paint_color.as_deref(), Some("red"));
        assert_eq!(civic.is_4wd.as_deref(), Some("1.0"));
        assert_eq!(civic.condition, Condition::Good);
        assert_eq!(civic.price, 5000.0);

        let leaf = &rows[1];
        assert_eq!(leaf.fuel, Fuel::Electric);
        assert_eq!(leaf.condition, Condition::LikeNew);
        assert_eq!(leaf.cylinders, None);
        assert_eq!(leaf.paint_color, None);
        assert_eq!(leaf.is_4wd, None);
    }

    #[test]
    fn extra_columns_pass_through() {
        let tmp = write_csv(&format!(
            "{},region,days_listed\n5000,2010,honda civic,good,4,gas,120000,red,,pacific,39\n",
            FULL_HEADER
        ));

        let rows = load_listings(tmp.path()).unwrap();
        assert_eq!(rows[0].extras.get("region").map(String::as_str), Some("pacific"));
        assert_eq!(rows[0].extras.get("days_listed").map(String::as_str), Some("39"));
        assert_eq!(rows[0].extras.len(), 2);
    }

    #[test]
    fn missing_required_column_is_schema_error() {
        // no odometer column
        let tmp = write_csv(
            "price,model_year,model,condition,cylinders,fuel,paint_color,is_4wd\n\
             5000,2010,honda civic,good,4,gas,red,1.0\n",
        );

        let err = load_listings(tmp.path()).unwrap_err();
        match err.downcast_ref::<SchemaError>() {
            Some(SchemaError::MissingColumns(missing)) => {
                assert_eq!(missing, &vec!["odometer".to_string()]);
            }
            None => panic!("expected SchemaError, got: {err:#}"),
        }
    }

    #[test]
    fn header_only_file_yields_zero_rows() {
        let tmp = write_csv(&format!("{}\n", FULL_HEADER));
        let rows = load_listings(tmp.path()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn bad_number_is_an_error_with_row_context() {
        let tmp = write_csv(&format!(
            "{}\n5000,twenty-ten,honda civic,good,4,gas,120000,red,\n",
            FULL_HEADER
        ));

        let err = load_listings(tmp.path()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("data row 1"), "unexpected error: {msg}");
        assert!(msg.contains("model_year"), "unexpected error: {msg}");
    }

    #[test]
    fn empty_never_missing_column_is_an_error() {
        let tmp = write_csv(&format!(
            "{}\n,2010,honda civic,good,4,gas,120000,red,\n",
            FULL_HEADER
        ));

        let err = load_listings(tmp.path()).unwrap_err();
        assert!(format!("{err:#}").contains("`price` is empty"));
    }
}

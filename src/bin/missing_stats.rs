use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

/// Operator tool: report how many values each column of a raw listings
/// CSV is missing, before any cleaning happens.
fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let path_arg = env::args().nth(1).unwrap_or_else(|| "vehicles_us.csv".into());
    let path = Path::new(&path_arg);
    tracing::info!(path = %path.display(), "scanning for missing values");

    let file = File::open(path).with_context(|| format!("opening {:?}", path))?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = rdr
        .headers()
        .context("reading CSV header row")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut missing = vec![0u64; headers.len()];
    let mut total = 0u64;
    for (i, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV parse error at data row {}", i + 1))?;
        for (col, field) in record.iter().enumerate() {
            if field.trim().is_empty() {
                missing[col] += 1;
            }
        }
        total += 1;
    }

    let name_width = headers.iter().map(String::len).max().unwrap_or(6).max(6);
    println!("{:<name_width$}  {:>10}  {:>8}", "column", "missing", "pct");
    for (name, count) in headers.iter().zip(&missing) {
        let pct = if total == 0 {
            0.0
        } else {
            *count as f64 * 100.0 / total as f64
        };
        println!("{:<name_width$}  {:>10}  {:>7.2}%", name, count, pct);
    }
    println!("{} rows scanned", total);

    Ok(())
}

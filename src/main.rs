use anyhow::{Context, Result};
use carscrub::{
    clean::clean_listings,
    ingest, view,
};
use serde::Serialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();
    info!("startup");

    // ─── 2) resolve paths ────────────────────────────────────────────
    let mut args = env::args().skip(1);
    let csv_path = PathBuf::from(args.next().unwrap_or_else(|| "vehicles_us.csv".into()));
    let views_dir = PathBuf::from(args.next().unwrap_or_else(|| "views".into()));
    fs::create_dir_all(&views_dir)
        .with_context(|| format!("creating views directory {:?}", views_dir))?;

    // ─── 3) load + clean ─────────────────────────────────────────────
    let raw = ingest::load_listings(&csv_path)?;
    let (listings, summary) = clean_listings(raw);
    summary.log();

    // ─── 4) build chart datasets for the dashboard surface ───────────
    let histogram = view::year_histogram(&listings);
    let by_fuel = view::scatter_points(&listings, view::ScatterColorBy::Fuel);
    let by_condition = view::scatter_points(&listings, view::ScatterColorBy::Condition);

    // ─── 5) write view files ─────────────────────────────────────────
    write_json(&views_dir.join("year_histogram.json"), &histogram)?;
    write_json(&views_dir.join("scatter_by_fuel.json"), &by_fuel)?;
    write_json(&views_dir.join("scatter_by_condition.json"), &by_condition)?;
    write_json(&views_dir.join("clean_summary.json"), &summary)?;

    info!(
        rows = listings.len(),
        views = %views_dir.display(),
        "all done"
    );
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = fs::File::create(path).with_context(|| format!("creating {:?}", path))?;
    serde_json::to_writer_pretty(file, value).with_context(|| format!("writing {:?}", path))?;
    info!(path = %path.display(), "wrote view");
    Ok(())
}

// src/clean/mod.rs

pub mod groups;
pub mod summary;

pub use summary::CleanSummary;

use serde::Serialize;
use std::collections::BTreeMap;

use crate::ingest::RawListing;
use crate::schema::{Condition, Fuel};

/// Fill value for a listing that didn't state its paint color.
pub const UNKNOWN_PAINT: &str = "Unknown";

/// One advertisement row after imputation. `paint_color` and `is_4wd`
/// are total here; the three numeric columns stay optional because a
/// group whose every member is missing has nothing to impute from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub model: String,
    pub model_year: Option<f64>,
    pub fuel: Fuel,
    pub cylinders: Option<f64>,
    pub odometer: Option<f64>,
    pub paint_color: String,
    pub is_4wd: bool,
    pub condition: Condition,
    pub price: f64,
    pub extras: BTreeMap<String, String>,
}

/// Impute missing values, row count preserved, order preserved.
///
/// Column fixes run in a fixed order because later ones read earlier
/// results:
/// 1. `model_year` — per-model median over present values.
/// 2. `cylinders` — electric vehicles forced to 0 first (they have no
///    cylinders, whatever the ad claims), then per-model median over
///    the post-override values.
/// 3. `odometer` — per-model-year mean, where imputed years from step 1
///    count toward their group.
/// 4. `paint_color` — missing becomes `"Unknown"`.
/// 5. `is_4wd` — a non-blank flag in the source column means the seller
///    declared 4WD, so `true`; absent means `false`.
pub fn clean_listings(rows: Vec<RawListing>) -> (Vec<Listing>, CleanSummary) {
    let mut summary = CleanSummary {
        rows: rows.len(),
        ..CleanSummary::default()
    };

    let year_by_model = groups::median_by_group(
        rows.iter()
            .filter_map(|r| r.model_year.map(|y| (r.model.clone(), y))),
    );
    let cylinders_by_model = groups::median_by_group(
        rows.iter()
            .filter_map(|r| electric_override(r).map(|c| (r.model.clone(), c))),
    );

    // Resolve every row's year up front; odometer groups on the
    // post-fill value.
    let final_years: Vec<Option<f64>> = rows
        .iter()
        .map(|r| r.model_year.or_else(|| year_by_model.get(&r.model).copied()))
        .collect();

    let odometer_by_year = groups::mean_by_group(
        rows.iter()
            .zip(&final_years)
            .filter_map(|(r, year)| match (year, r.odometer) {
                (Some(y), Some(odo)) => Some((y.to_bits(), odo)),
                _ => None,
            }),
    );

    let mut out = Vec::with_capacity(rows.len());
    for (r, year) in rows.into_iter().zip(final_years) {
        if r.model_year.is_none() {
            if year.is_some() {
                summary.model_year_filled += 1;
            } else {
                summary.model_year_residual += 1;
            }
        }

        let cylinders = match electric_override(&r) {
            Some(c) => {
                if r.fuel == Fuel::Electric {
                    summary.cylinders_zeroed += 1;
                }
                Some(c)
            }
            None => match cylinders_by_model.get(&r.model) {
                Some(median) => {
                    summary.cylinders_filled += 1;
                    Some(*median)
                }
                None => {
                    summary.cylinders_residual += 1;
                    None
                }
            },
        };

        let odometer = match r.odometer {
            Some(odo) => Some(odo),
            None => match year.and_then(|y| odometer_by_year.get(&y.to_bits())) {
                Some(mean) => {
                    summary.odometer_filled += 1;
                    Some(*mean)
                }
                None => {
                    summary.odometer_residual += 1;
                    None
                }
            },
        };

        let paint_color = match r.paint_color {
            Some(color) => color,
            None => {
                summary.paint_color_filled += 1;
                UNKNOWN_PAINT.to_string()
            }
        };

        let is_4wd = match r.is_4wd.as_deref().map(str::trim) {
            Some(flag) if !flag.is_empty() => true,
            _ => {
                summary.is_4wd_defaulted += 1;
                false
            }
        };

        out.push(Listing {
            model: r.model,
            model_year: year,
            fuel: r.fuel,
            cylinders,
            odometer,
            paint_color,
            is_4wd,
            condition: r.condition,
            price: r.price,
            extras: r.extras,
        });
    }

    (out, summary)
}

/// Cylinders as the median computation should see them: electric rows
/// are 0 no matter what the column says, other rows keep their value.
fn electric_override(r: &RawListing) -> Option<f64> {
    if r.fuel == Fuel::Electric {
        Some(0.0)
    } else {
        r.cylinders
    }
}

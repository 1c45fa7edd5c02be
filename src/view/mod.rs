// src/view/mod.rs
//
// Chart-input datasets for the dashboard surface. Everything here is a
// read-only selection over the cleaned table; the table itself is
// never touched.

pub mod palette;

use serde::Serialize;

use crate::clean::Listing;

/// Model years at or before this cutoff are outliers and excluded from
/// the histogram dataset only.
pub const YEAR_HISTOGRAM_CUTOFF: f64 = 1989.0;

/// Scatter range filters, matching the dashboard's axis bounds.
pub const SCATTER_MAX_ODOMETER: f64 = 400_000.0;
pub const SCATTER_MAX_PRICE: f64 = 100_000.0;

/// Which categorical column colors the price-vs-odometer scatter —
/// the dashboard's checkbox toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScatterColorBy {
    Fuel,
    Condition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearHistogram {
    pub cutoff: f64,
    pub years: Vec<f64>,
}

/// Model-year values for the frequency histogram. Residual-missing
/// years have nothing to contribute and are skipped.
pub fn year_histogram(listings: &[Listing]) -> YearHistogram {
    let years = listings
        .iter()
        .filter_map(|l| l.model_year)
        .filter(|year| *year > YEAR_HISTOGRAM_CUTOFF)
        .collect();
    YearHistogram {
        cutoff: YEAR_HISTOGRAM_CUTOFF,
        years,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub odometer: f64,
    pub price: f64,
    pub color_key: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterView {
    pub color_by: ScatterColorBy,
    pub points: Vec<ScatterPoint>,
}

/// Price-vs-odometer points inside the axis bounds, colored by the
/// selected category. Rows with a residual-missing odometer fall to
/// the range filter like any other out-of-range row.
pub fn scatter_points(listings: &[Listing], color_by: ScatterColorBy) -> ScatterView {
    let points = listings
        .iter()
        .filter_map(|l| {
            let odometer = l.odometer?;
            if odometer >= SCATTER_MAX_ODOMETER || l.price >= SCATTER_MAX_PRICE {
                return None;
            }
            let (color_key, color) = match color_by {
                ScatterColorBy::Fuel => (l.fuel.to_string(), palette::fuel_color(l.fuel)),
                ScatterColorBy::Condition => (
                    l.condition.to_string(),
                    palette::condition_color(l.condition),
                ),
            };
            Some(ScatterPoint {
                odometer,
                price: l.price,
                color_key,
                color,
            })
        })
        .collect();
    ScatterView { color_by, points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Condition, Fuel};
    use std::collections::BTreeMap;

    fn listing(year: Option<f64>, odometer: Option<f64>, price: f64) -> Listing {
        Listing {
            model: "civic".to_string(),
            model_year: year,
            fuel: Fuel::Gas,
            cylinders: Some(4.0),
            odometer,
            paint_color: "red".to_string(),
            is_4wd: false,
            condition: Condition::Good,
            price,
            extras: BTreeMap::new(),
        }
    }

    #[test]
    fn histogram_drops_outliers_and_residual_missing() {
        let listings = vec![
            listing(Some(1989.0), Some(1000.0), 5000.0),
            listing(Some(1990.0), Some(1000.0), 5000.0),
            listing(Some(2015.0), Some(1000.0), 5000.0),
            listing(None, Some(1000.0), 5000.0),
        ];
        let hist = year_histogram(&listings);
        assert_eq!(hist.years, vec![1990.0, 2015.0]);
        assert_eq!(hist.cutoff, YEAR_HISTOGRAM_CUTOFF);
    }

    #[test]
    fn scatter_applies_range_filters() {
        let listings = vec![
            listing(Some(2010.0), Some(120_000.0), 5000.0),
            listing(Some(2010.0), Some(400_000.0), 5000.0),
            listing(Some(2010.0), Some(120_000.0), 100_000.0),
            listing(Some(2010.0), None, 5000.0),
        ];
        let view = scatter_points(&listings, ScatterColorBy::Fuel);
        assert_eq!(view.points.len(), 1);
        assert_eq!(view.points[0].odometer, 120_000.0);
        assert_eq!(view.points[0].price, 5000.0);
    }

    #[test]
    fn fuel_toggle_colors_by_fuel() {
        let mut leaf = listing(Some(2019.0), Some(15_000.0), 30_000.0);
        leaf.fuel = Fuel::Electric;
        let view = scatter_points(&[leaf], ScatterColorBy::Fuel);
        assert_eq!(view.points[0].color_key, "electric");
        assert_eq!(view.points[0].color, "green");
    }

    #[test]
    fn condition_toggle_colors_by_condition() {
        let mut wreck = listing(Some(2001.0), Some(250_000.0), 800.0);
        wreck.condition = Condition::Salvage;
        let view = scatter_points(&[wreck], ScatterColorBy::Condition);
        assert_eq!(view.points[0].color_key, "salvage");
        assert_eq!(view.points[0].color, "red");
    }

    #[test]
    fn condition_palette_covers_every_value() {
        let colors: Vec<_> = [
            Condition::Salvage,
            Condition::LikeNew,
            Condition::Good,
            Condition::Fair,
            Condition::Excellent,
            Condition::New,
        ]
        .into_iter()
        .map(palette::condition_color)
        .collect();
        assert_eq!(colors, vec!["red", "blue", "green", "orange", "black", "yellow"]);
    }
}

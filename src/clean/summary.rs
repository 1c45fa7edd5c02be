// src/clean/summary.rs

use serde::Serialize;
use tracing::info;

/// What the cleaning pass did, column by column. `*_residual` counts
/// rows that stayed missing because their whole group had no values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CleanSummary {
    pub rows: usize,
    pub model_year_filled: usize,
    pub model_year_residual: usize,
    pub cylinders_zeroed: usize,
    pub cylinders_filled: usize,
    pub cylinders_residual: usize,
    pub odometer_filled: usize,
    pub odometer_residual: usize,
    pub paint_color_filled: usize,
    pub is_4wd_defaulted: usize,
}

impl CleanSummary {
    pub fn log(&self) {
        info!(
            rows = self.rows,
            model_year_filled = self.model_year_filled,
            model_year_residual = self.model_year_residual,
            cylinders_zeroed = self.cylinders_zeroed,
            cylinders_filled = self.cylinders_filled,
            cylinders_residual = self.cylinders_residual,
            odometer_filled = self.odometer_filled,
            odometer_residual = self.odometer_residual,
            paint_color_filled = self.paint_color_filled,
            is_4wd_defaulted = self.is_4wd_defaulted,
            "cleaned listings"
        );
    }
}

// src/view/palette.rs

use crate::schema::{Condition, Fuel};

/// Fixed chart color per fuel type.
pub fn fuel_color(fuel: Fuel) -> &'static str {
    match fuel {
        Fuel::Gas => "red",
        Fuel::Hybrid => "blue",
        Fuel::Electric => "green",
        Fuel::Diesel => "orange",
        Fuel::Other => "black",
    }
}

/// Fixed chart color per vehicle condition.
pub fn condition_color(condition: Condition) -> &'static str {
    match condition {
        Condition::Salvage => "red",
        Condition::LikeNew => "blue",
        Condition::Good => "green",
        Condition::Fair => "orange",
        Condition::Excellent => "black",
        Condition::New => "yellow",
    }
}

// src/schema/types.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fuel type of a listed vehicle, spelled as the CSV spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fuel {
    Gas,
    Hybrid,
    Electric,
    Diesel,
    Other,
}

#[derive(Debug, Error)]
#[error("unknown fuel type `{0}`")]
pub struct ParseFuelError(String);

impl FromStr for Fuel {
    type Err = ParseFuelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gas" => Ok(Fuel::Gas),
            "hybrid" => Ok(Fuel::Hybrid),
            "electric" => Ok(Fuel::Electric),
            "diesel" => Ok(Fuel::Diesel),
            "other" => Ok(Fuel::Other),
            _ => Err(ParseFuelError(s.to_string())),
        }
    }
}

impl fmt::Display for Fuel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Fuel::Gas => "gas",
            Fuel::Hybrid => "hybrid",
            Fuel::Electric => "electric",
            Fuel::Diesel => "diesel",
            Fuel::Other => "other",
        };
        f.write_str(s)
    }
}

/// Seller-reported vehicle condition. `LikeNew` keeps the CSV's
/// two-word spelling on both parse and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Salvage,
    #[serde(rename = "like new")]
    LikeNew,
    Good,
    Fair,
    Excellent,
    New,
}

#[derive(Debug, Error)]
#[error("unknown condition `{0}`")]
pub struct ParseConditionError(String);

impl FromStr for Condition {
    type Err = ParseConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "salvage" => Ok(Condition::Salvage),
            "like new" => Ok(Condition::LikeNew),
            "good" => Ok(Condition::Good),
            "fair" => Ok(Condition::Fair),
            "excellent" => Ok(Condition::Excellent),
            "new" => Ok(Condition::New),
            _ => Err(ParseConditionError(s.to_string())),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Condition::Salvage => "salvage",
            Condition::LikeNew => "like new",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::Excellent => "excellent",
            Condition::New => "new",
        };
        f.write_str(s)
    }
}

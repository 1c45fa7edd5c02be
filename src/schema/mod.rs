pub mod columns;
pub mod types;

pub use columns::{validate_headers, SchemaError, REQUIRED_COLUMNS};
pub use types::{Condition, Fuel};

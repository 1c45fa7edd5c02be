pub mod clean;
pub mod ingest;
pub mod schema;
pub mod view;

//! Input helpers.
//!
//! - CSV ingest into the results table (`ingest`)

pub mod ingest;

pub use ingest::*;

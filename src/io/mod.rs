//! Input/output helpers.
//!
//! - CSV ingest + validation (`ingest`)
//! - dataset CSV export (`export`)
//! - prediction JSON read/write (`prediction`)

pub mod export;
pub mod ingest;
pub mod prediction;

pub use export::*;
pub use ingest::*;
pub use prediction::*;

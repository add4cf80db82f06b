//! Core types and writers.
//!
//! This module contains:
//! - [`models`] - [`Row`] and [`Document`]
//! - [`output`] - [`RowWriter`] and the file/string entry points

pub mod models;
pub mod output;

// Re-export main types for convenience
pub use models::{Document, Row};
pub use output::{RowWriter, to_csv, write_csv};

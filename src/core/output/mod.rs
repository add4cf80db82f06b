//! Output writers.
//!
//! - [`RowWriter`] - streams rows into any [`std::io::Write`] sink
//! - [`write_csv`] - writes a whole [`Document`](crate::Document) to a file
//! - [`to_csv`] - renders a whole document to a `String`
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> rowpack::Result<()> {
//! use rowpack::core::output::{to_csv, write_csv};
//! use rowpack::config::WriterConfig;
//! use rowpack::Document;
//!
//! let document = Document::sample();
//! let config = WriterConfig::new();
//!
//! // Write to a file
//! write_csv(&document, "output.csv", &config)?;
//!
//! // Or get as a string
//! let csv_string = to_csv(&document, &config)?;
//! # Ok(())
//! # }
//! ```

mod csv_writer;

pub use csv_writer::{RowWriter, to_csv, write_csv};

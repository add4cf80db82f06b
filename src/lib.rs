//! # Rowpack
//!
//! Writes tabular string rows as comma-separated text following the
//! RFC 4180 convention: fields joined with `,`, rows terminated by `\r\n`,
//! and fields containing `,`, `"`, `\r` or `\n` wrapped in double quotes with
//! internal quotes doubled.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rowpack::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let document = Document::new()
//!         .with_row(["Name", "Age", "Occupation"])
//!         .with_row(["John Doe", "30", "Developer"]);
//!
//!     write_csv(&document, "output.csv", &WriterConfig::new())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Writing to Any Sink
//!
//! [`RowWriter`](core::output::RowWriter) borrows a caller-owned
//! [`std::io::Write`] for one session:
//!
//! ```rust
//! use rowpack::prelude::*;
//!
//! let mut sink = Vec::new();
//! let mut writer = RowWriter::new(&mut sink, &WriterConfig::new());
//! writer.write(["Doe, Jane", "29"])?;
//! writer.flush()?;
//! drop(writer);
//!
//! assert_eq!(sink, b"\"Doe, Jane\",29\r\n");
//! # Ok::<(), rowpack::RowpackError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`core`] — Core types and writers
//!   - [`core::models`] — [`Row`](core::models::Row), [`Document`]
//!   - [`core::output`] — [`RowWriter`](core::output::RowWriter),
//!     [`write_csv`](core::output::write_csv), [`to_csv`](core::output::to_csv)
//! - [`config`] — [`WriterConfig`](config::WriterConfig), [`LineTerminator`](config::LineTerminator)
//! - [`error`] — Unified error types ([`RowpackError`], [`Result`])
//! - `cli` — CLI arguments (requires the `cli` feature)
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;

// Re-export the main types at the crate root for convenience
pub use crate::core::models::Document;
pub use error::{Result, RowpackError};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use rowpack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Document;
    pub use crate::core::models::Row;

    // Error types
    pub use crate::error::{Result, RowpackError};

    // Configuration
    pub use crate::config::{LineTerminator, WriterConfig};

    // Output
    pub use crate::core::output::{RowWriter, to_csv, write_csv};
}

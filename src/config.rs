//! Configuration types for the row writer.
//!
//! Delimiter and quoting rules are fixed (comma, double quote, quote only when
//! needed). What can be tuned is the line terminator and the size of the
//! writer's internal buffer.
//!
//! # Example
//!
//! ```rust
//! use rowpack::config::{LineTerminator, WriterConfig};
//!
//! let config = WriterConfig::new()
//!     .with_terminator(LineTerminator::Lf)
//!     .with_buffer_capacity(64 * 1024);
//!
//! assert_eq!(config.terminator.as_str(), "\n");
//! ```

use serde::{Deserialize, Serialize};

/// Default internal buffer size (8KB).
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// Smallest buffer the writer will use; smaller requests are raised to this.
///
/// The encoder emits doubled quotes and CRLF as indivisible units, so the
/// buffer must always hold a few bytes.
pub const MIN_BUFFER_CAPACITY: usize = 16;

/// Line terminator written after every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTerminator {
    /// `\r\n`, the standard delimited-text convention (default)
    #[default]
    Crlf,

    /// `\n`
    Lf,
}

impl LineTerminator {
    /// Returns the terminator as written to the sink.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::Crlf => "\r\n",
            LineTerminator::Lf => "\n",
        }
    }

    pub(crate) fn to_csv(self) -> csv::Terminator {
        match self {
            LineTerminator::Crlf => csv::Terminator::CRLF,
            LineTerminator::Lf => csv::Terminator::Any(b'\n'),
        }
    }
}

impl std::fmt::Display for LineTerminator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineTerminator::Crlf => write!(f, "CRLF"),
            LineTerminator::Lf => write!(f, "LF"),
        }
    }
}

impl std::str::FromStr for LineTerminator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "crlf" => Ok(LineTerminator::Crlf),
            "lf" => Ok(LineTerminator::Lf),
            _ => Err(format!(
                "Unknown line terminator: '{}'. Expected one of: crlf, lf",
                s
            )),
        }
    }
}

/// Configuration for [`RowWriter`](crate::core::output::RowWriter).
///
/// # Example
///
/// ```rust
/// use rowpack::config::WriterConfig;
///
/// let config = WriterConfig::default();
/// assert_eq!(config.terminator.as_str(), "\r\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Line terminator written after each row (default: CRLF)
    pub terminator: LineTerminator,

    /// Internal buffer size in bytes (default: 8KB, minimum: 16)
    pub buffer_capacity: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            terminator: LineTerminator::Crlf,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl WriterConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line terminator.
    #[must_use]
    pub fn with_terminator(mut self, terminator: LineTerminator) -> Self {
        self.terminator = terminator;
        self
    }

    /// Sets the internal buffer size. Values below [`MIN_BUFFER_CAPACITY`]
    /// are raised to it when the writer is built.
    #[must_use]
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    pub(crate) fn effective_buffer_capacity(&self) -> usize {
        self.buffer_capacity.max(MIN_BUFFER_CAPACITY)
    }
}

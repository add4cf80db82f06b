//! Command-line interface definition using clap.

use clap::Parser;

use crate::config::{LineTerminator, WriterConfig};

/// Write a small table of rows to an RFC 4180-style CSV file.
///
/// Without arguments, writes the built-in sample table to `output.csv`.
#[derive(Parser, Debug, Clone)]
#[command(name = "rowpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    rowpack
    rowpack -o people.csv
    rowpack --input rows.json -o rows.csv
    rowpack --lf --strict")]
pub struct Args {
    /// Path to output file
    #[arg(short, long, default_value = "output.csv")]
    pub output: String,

    /// JSON file holding an array of rows (arrays of strings)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<String>,

    /// Terminate rows with LF instead of CRLF
    #[arg(long)]
    pub lf: bool,

    /// Exit with a non-zero status when writing fails
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    /// Builds the writer configuration selected by the flags.
    pub fn writer_config(&self) -> WriterConfig {
        let terminator = if self.lf {
            LineTerminator::Lf
        } else {
            LineTerminator::Crlf
        };
        WriterConfig::new().with_terminator(terminator)
    }
}

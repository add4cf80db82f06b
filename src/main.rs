//! # rowpack CLI
//!
//! Command-line interface for rowpack library.

use std::process;

use clap::Parser as ClapParser;

use rowpack::cli::Args;
use rowpack::core::write_csv;
use rowpack::{Document, RowpackError};

fn main() {
    env_logger::init();
    let args = <Args as ClapParser>::parse();

    // Failures are reported on stdout; the exit status stays 0 unless --strict.
    if let Err(e) = run(&args) {
        log::debug!("Write failed: {:?}", e);
        println!("Error: {}", e);
        if args.strict {
            process::exit(1);
        }
        return;
    }

    println!("CSV file created successfully");
}

fn run(args: &Args) -> Result<(), RowpackError> {
    let document = match args.input {
        Some(ref input) => Document::from_json_path(input)?,
        None => Document::sample(),
    };

    let config = args.writer_config();
    log::info!(
        "Writing {} rows to {} ({})",
        document.len(),
        args.output,
        config.terminator
    );
    write_csv(&document, &args.output, &config)
}

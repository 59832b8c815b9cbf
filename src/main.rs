//! Command-line entry point
//!
//! Thin glue around [`Transposer`]: argument check, error reporting and
//! the exit-code mapping. All real work happens in the library.

use csvtranspose::Transposer;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "csvtranspose".to_string());

    let (input, output) = match (args.next(), args.next()) {
        (Some(input), Some(output)) => (input, output),
        _ => {
            eprintln!("Not enough arguments.");
            eprintln!("Usage: {} input_CSV_file output_CSV_file", program);
            return ExitCode::from(1);
        }
    };

    match Transposer::new().run(&input, &output) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process;

fn main() {
    let _logger = match skychart_cli::init_logging() {
        Ok(handle) => handle,
        Err(err) => {
            eprintln!("skychart: {err}");
            process::exit(1);
        }
    };
    if let Err(err) = skychart_cli::run() {
        eprintln!("skychart: {err}");
        process::exit(1);
    }
}

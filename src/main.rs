//! shows-api entry point
//!
//! Parses arguments and runs the selected command. Exits 2 on a
//! configuration error and 1 on any other failure.

use shows_api::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("error: {}", e);
        let code = if e.is_config_error() { 2 } else { 1 };
        std::process::exit(code);
    }
}

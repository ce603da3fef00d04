//! # Stopwatch
//!
//! A command-line front end for timing commands and formatting durations.

use log::error;

mod cli;
mod logging;
mod runner;

fn main() {
    dotenv::dotenv().ok();
    logging::init();

    let args = cli::args::build_cli().get_matches();

    // For any error, return an exit code -1. Otherwise return the exit code provided.
    let code = match runner::run(&args) {
        Ok(code) => code,
        Err(err) => {
            error!("{}", err.to_string().to_lowercase());
            -1
        }
    };

    std::process::exit(code)
}

//! CLI argument definitions for `stopwatch-cli`.

use clap::{Arg, ArgAction, Command};

/// Build the CLI argument parser and command definitions.
pub fn build_cli() -> Command {
    Command::new("stopwatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Time commands and format durations")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .subcommand(
            Command::new("run")
                .about("Run a command and report how long it took")
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .short('m')
                        .value_name("MODE")
                        .help("Output mode: short, human, full, hms or elapsed"),
                )
                .arg(
                    Arg::new("hms")
                        .long("hms")
                        .value_name("TEMPLATE")
                        .help("printf-style template for hours, minutes and seconds"),
                )
                .arg(
                    Arg::new("coarse")
                        .long("coarse")
                        .action(ArgAction::SetTrue)
                        .help("Measure whole seconds only"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("mode")
                        .help("Print every rendering as JSON"),
                )
                .arg(
                    Arg::new("options")
                        .long("options")
                        .short('o')
                        .value_name("PATH")
                        .help("Path to a JSON file of timer options"),
                )
                .arg(
                    Arg::new("COMMAND")
                        .help("The command to run, followed by its arguments")
                        .required(true)
                        .num_args(1..)
                        .trailing_var_arg(true)
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Print a number of seconds as HH:MM:SS")
                .arg(
                    Arg::new("SECONDS")
                        .help("Total seconds, may be fractional")
                        .required(true)
                        .allow_negative_numbers(true),
                ),
        )
        .subcommand(
            Command::new("split")
                .about("Print a number of seconds as hours, minutes and seconds")
                .arg(
                    Arg::new("SECONDS")
                        .help("Total seconds, may be fractional")
                        .required(true)
                        .allow_negative_numbers(true),
                ),
        )
        .subcommand(
            Command::new("spec")
                .about("Print the default hms template")
                .arg(
                    Arg::new("fractional")
                        .long("fractional")
                        .value_name("BOOL")
                        .help("Force the fractional (true) or whole-second (false) template"),
                ),
        )
}

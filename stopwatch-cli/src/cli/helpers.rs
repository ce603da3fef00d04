//! Subcommands over the pure hms helpers.

use clap::ArgMatches;
use stopwatch_lib::{default_format_spec, format_hms, format_seconds, separate_hms};

use crate::runner::RunError;

/// Dispatch `format`, `split` and `spec`; `None` if the subcommand is not one of them.
pub fn maybe_run_helper(name: &str, args: &ArgMatches) -> Result<Option<i32>, RunError> {
    match name {
        "format" => {
            println!("{}", format_hms(parse_seconds(args)?));
        }
        "split" => {
            let hms = separate_hms(parse_seconds(args)?);
            println!("{} {} {}", hms.hours, hms.minutes, format_seconds(hms.seconds));
        }
        "spec" => {
            let fractional = match args.get_one::<String>("fractional") {
                Some(raw) => Some(raw.parse::<bool>().map_err(|_| {
                    RunError::InvalidArgument(format!("--fractional expects true or false, got {}", raw))
                })?),
                None => None,
            };
            println!("{}", default_format_spec(fractional));
        }
        _ => return Ok(None),
    }
    Ok(Some(0))
}

fn parse_seconds(args: &ArgMatches) -> Result<f64, RunError> {
    let raw = args
        .get_one::<String>("SECONDS")
        .ok_or_else(|| RunError::InvalidArgument("missing SECONDS".into()))?;
    match raw.parse::<f64>() {
        Ok(seconds) if seconds.is_finite() && seconds >= 0.0 => Ok(seconds),
        _ => Err(RunError::InvalidArgument(format!(
            "SECONDS must be a non-negative number, got {}",
            raw
        ))),
    }
}

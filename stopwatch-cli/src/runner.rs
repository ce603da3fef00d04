use std::fmt::{Display, Formatter};
use std::fs;
use std::process::Command;

use clap::ArgMatches;
use log::{debug, info};
use stopwatch_lib::{StringMode, Timer, TimerError, TimerOptions};

use crate::cli;

/// Failures that end a CLI invocation.
#[derive(Debug)]
pub enum RunError {
    Io(std::io::Error),
    Timer(TimerError),
    InvalidArgument(String),
}

impl Display for RunError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {}", err),
            Self::Timer(err) => write!(f, "{}", err),
            Self::InvalidArgument(err) => write!(f, "invalid argument: {}", err),
        }
    }
}

impl std::error::Error for RunError {}

impl From<std::io::Error> for RunError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<TimerError> for RunError {
    fn from(value: TimerError) -> Self {
        Self::Timer(value)
    }
}

pub fn run(args: &ArgMatches) -> Result<i32, RunError> {
    let Some((name, sub_args)) = args.subcommand() else {
        return Err(RunError::InvalidArgument("missing subcommand".into()));
    };

    if let Some(code) = cli::helpers::maybe_run_helper(name, sub_args)? {
        return Ok(code);
    }

    match name {
        "run" => run_timed(sub_args),
        other => Err(RunError::InvalidArgument(format!("unknown subcommand {}", other))),
    }
}

fn timer_options(args: &ArgMatches) -> Result<TimerOptions, RunError> {
    let mut options = match args.get_one::<String>("options") {
        Some(path) => {
            debug!("Reading timer options from {}", path);
            TimerOptions::from_json(&fs::read_to_string(path)?)?
        }
        None => TimerOptions::new(),
    };

    if args.get_flag("coarse") {
        options = options.hires(false);
    }
    if let Some(template) = args.get_one::<String>("hms") {
        options = options.hms(template.as_str());
    }
    if let Some(mode) = args.get_one::<String>("mode") {
        options = options.string(StringMode::from_name(mode));
    }

    // The clock starts right before the child is spawned.
    Ok(options.start(false))
}

fn run_timed(args: &ArgMatches) -> Result<i32, RunError> {
    let mut timer = Timer::new(timer_options(args)?)?;
    let mut command = args
        .get_many::<String>("COMMAND")
        .ok_or_else(|| RunError::InvalidArgument("missing COMMAND".into()))?;
    let program = command
        .next()
        .ok_or_else(|| RunError::InvalidArgument("missing COMMAND".into()))?;
    let rest: Vec<&String> = command.collect();

    info!("Running {} {:?}", program, rest);
    timer.start();
    let status = Command::new(program).args(&rest).status();
    let elapsed = timer.stop()?;
    let status = status?;
    info!("{} exited with {} after {}s", program, status, elapsed);

    let output = if args.get_flag("json") {
        timer.report()?.to_json()?
    } else {
        timer.string(None)?
    };
    println!("{}", output);

    Ok(status.code().unwrap_or(-1))
}

//! The stopwatch.
//!
//! A [`Timer`] records a start and an optional stop reading from its clock.
//! While running, elapsed time is measured against "now".

mod elapsed;
mod options;
mod render;

pub use elapsed::Elapsed;
pub use options::{Deprecation, ResolvedOptions, TimerOptions};
pub use render::{Renderer, StringMode};

use std::collections::HashMap;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;
use std::time::Instant;

use crate::clock::{Clock, SystemClock};
use crate::error::TimerError;
use crate::hms::{self, Hms, HmsFormat};
use crate::report::TimerReport;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Timestamp {
    Precise(Instant),
    Coarse(u64),
}

impl Timestamp {
    fn until(self, end: Timestamp) -> Elapsed {
        match (self, end) {
            (Self::Precise(start), Self::Precise(end)) => {
                Elapsed::from_duration(end.saturating_duration_since(start))
            }
            (Self::Coarse(start), Self::Coarse(end)) => Elapsed::from_secs(end.saturating_sub(start)),
            // A timer reads a single source for its whole life.
            _ => Elapsed::default(),
        }
    }
}

/// Measures wall-clock time between a start and a stop (or now).
#[derive(Clone)]
pub struct Timer {
    clock: Arc<dyn Clock>,
    started: Option<Timestamp>,
    stopped: Option<Timestamp>,
    hires: bool,
    hms_format: HmsFormat,
    string_mode: StringMode,
    renderers: HashMap<String, Renderer>,
    deprecations: Vec<Deprecation>,
}

impl Timer {
    /// Build a timer on the system clock.
    ///
    /// # Errors
    /// Returns [`TimerError::InvalidTemplate`] if the `hms` (or legacy
    /// `format`) template does not parse.
    pub fn new(options: TimerOptions) -> Result<Self, TimerError> {
        Self::with_clock(options, SystemClock)
    }

    /// Build a timer reading from `clock`.
    pub fn with_clock(options: TimerOptions, clock: impl Clock + 'static) -> Result<Self, TimerError> {
        let clock: Arc<dyn Clock> = Arc::new(clock);
        let resolved = options.resolve(clock.hires_available())?;
        Ok(Self::from_resolved(resolved, clock))
    }

    /// Build a timer from already resolved options.
    pub fn from_resolved(resolved: ResolvedOptions, clock: Arc<dyn Clock>) -> Self {
        let mut timer = Self {
            // Never trust a hires flag the clock cannot back.
            hires: resolved.hires && clock.hires_available(),
            clock,
            started: None,
            stopped: None,
            hms_format: resolved.hms_format,
            string_mode: resolved.string_mode,
            renderers: HashMap::new(),
            deprecations: resolved.deprecations,
        };
        if resolved.start {
            timer.start();
        }
        timer
    }

    fn now(&self) -> Timestamp {
        if self.hires {
            Timestamp::Precise(self.clock.precise_now())
        } else {
            Timestamp::Coarse(self.clock.coarse_now())
        }
    }

    /// Clear any stop reading and start counting from now.
    pub fn start(&mut self) -> &mut Self {
        self.stopped = None;
        self.started = Some(self.now());
        self
    }

    /// Same as [`Timer::start`].
    pub fn restart(&mut self) -> &mut Self {
        self.start()
    }

    /// Freeze the timer and return the elapsed time.
    ///
    /// Stopping an already stopped timer keeps the original stop reading.
    ///
    /// # Errors
    /// Returns [`TimerError::NotStarted`] if the timer was never started.
    pub fn stop(&mut self) -> Result<Elapsed, TimerError> {
        if self.started.is_none() {
            return Err(TimerError::NotStarted);
        }
        if self.stopped.is_none() {
            self.stopped = Some(self.now());
        }
        self.elapsed()
    }

    /// Time between start and stop, or start and now while running.
    ///
    /// # Errors
    /// Returns [`TimerError::NotStarted`] if the timer was never started.
    pub fn elapsed(&self) -> Result<Elapsed, TimerError> {
        let started = self.started.ok_or(TimerError::NotStarted)?;
        let end = self.stopped.unwrap_or_else(|| self.now());
        Ok(started.until(end))
    }

    /// Elapsed seconds as a plain number.
    pub fn to_seconds(&self) -> Result<f64, TimerError> {
        self.elapsed().map(f64::from)
    }

    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some() && self.stopped.is_none()
    }

    /// Whether this timer reads the high-resolution source.
    pub fn hires(&self) -> bool {
        self.hires
    }

    pub fn hms_format(&self) -> &HmsFormat {
        &self.hms_format
    }

    pub fn string_mode(&self) -> &StringMode {
        &self.string_mode
    }

    /// Legacy options that were remapped when this timer was built.
    pub fn deprecations(&self) -> &[Deprecation] {
        &self.deprecations
    }

    /// The built-in hms template matching this timer's resolution.
    pub fn default_format_spec(&self) -> &'static str {
        hms::default_format_spec(Some(self.hires))
    }

    /// Elapsed time split into hours, minutes and seconds.
    pub fn hms_parts(&self) -> Result<Hms, TimerError> {
        self.elapsed().map(|elapsed| elapsed.hms())
    }

    /// Elapsed time rendered through `format`, or the configured template.
    ///
    /// # Errors
    /// Returns [`TimerError::InvalidTemplate`] if `format` does not parse, or
    /// [`TimerError::NotStarted`].
    pub fn hms(&self, format: Option<&str>) -> Result<String, TimerError> {
        match format {
            Some(template) => self.hms_with(&HmsFormat::parse(template)?),
            None => self.hms_with(&self.hms_format),
        }
    }

    pub fn hms_with(&self, format: &HmsFormat) -> Result<String, TimerError> {
        Ok(format.render(&self.hms_parts()?))
    }

    /// `123.000000s (00:02:03.000000)`
    pub fn short(&self) -> Result<String, TimerError> {
        let elapsed = self.elapsed()?;
        Ok(format!("{}s ({})", elapsed, self.hms_format.render(&elapsed.hms())))
    }

    /// `0 hours 2 minutes 3 seconds`
    pub fn human(&self) -> Result<String, TimerError> {
        Ok(human_text(&self.hms_parts()?))
    }

    /// `123 seconds (0 hours 2 minutes 3 seconds)`
    pub fn full(&self) -> Result<String, TimerError> {
        let elapsed = self.elapsed()?;
        Ok(format!("{} seconds ({})", elapsed, human_text(&elapsed.hms())))
    }

    /// Render with `mode`, or the configured default mode.
    ///
    /// # Errors
    /// Returns [`TimerError::UnknownFormat`] for a [`StringMode::Named`] mode
    /// with no registered renderer, or [`TimerError::NotStarted`].
    pub fn string(&self, mode: Option<&StringMode>) -> Result<String, TimerError> {
        mode.unwrap_or(&self.string_mode).render(self)
    }

    /// Render with a mode looked up by name.
    ///
    /// Built-in modes and the `hms`/`elapsed` methods resolve first, then
    /// renderers registered with [`Timer::register_renderer`].
    pub fn string_named(&self, name: &str) -> Result<String, TimerError> {
        self.string(Some(&StringMode::from_name(name)))
    }

    /// Make a renderer available to [`Timer::string_named`] under `name`.
    ///
    /// Returns the renderer previously registered under that name.
    pub fn register_renderer(&mut self, name: impl Into<String>, renderer: Renderer) -> Option<Renderer> {
        self.renderers.insert(name.into(), renderer)
    }

    pub(crate) fn renderer(&self, name: &str) -> Option<&Renderer> {
        self.renderers.get(name)
    }

    /// Snapshot the timer for serialization.
    pub fn report(&self) -> Result<TimerReport, TimerError> {
        TimerReport::from_timer(self)
    }
}

pub(crate) fn human_text(hms: &Hms) -> String {
    format!(
        "{} hours {} minutes {} seconds",
        hms.hours,
        hms.minutes,
        hms::format_seconds(hms.seconds)
    )
}

impl Default for Timer {
    /// A started timer on the system clock.
    fn default() -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let resolved = ResolvedOptions::defaults(clock.hires_available());
        Self::from_resolved(resolved, clock)
    }
}

impl Debug for Timer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timer")
            .field("started", &self.started)
            .field("stopped", &self.stopped)
            .field("hires", &self.hires)
            .field("hms_format", &self.hms_format.template())
            .field("string_mode", &self.string_mode.name())
            .field("renderers", &self.renderers.keys().collect::<Vec<_>>())
            .field("deprecations", &self.deprecations)
            .finish()
    }
}

impl Display for Timer {
    /// The default string mode. Failures render as `<error>`, use
    /// [`Timer::string`] to observe them.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.string(None) {
            Ok(text) => f.write_str(&text),
            Err(err) => write!(f, "<{}>", err),
        }
    }
}

impl TryFrom<&Timer> for Elapsed {
    type Error = TimerError;

    fn try_from(timer: &Timer) -> Result<Self, Self::Error> {
        timer.elapsed()
    }
}

impl TryFrom<&Timer> for f64 {
    type Error = TimerError;

    fn try_from(timer: &Timer) -> Result<Self, Self::Error> {
        timer.to_seconds()
    }
}

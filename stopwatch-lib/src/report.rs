//! Serializable timer snapshots.

use serde::Serialize;

use crate::error::TimerError;
use crate::timer::{human_text, Timer};

/// A timer's elapsed time in every built-in rendering.
///
/// All fields come from a single clock reading, so a running timer reports
/// consistent values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerReport {
    pub seconds: f64,
    pub hours: u64,
    pub minutes: u64,
    pub secs: f64,
    pub hires: bool,
    pub running: bool,
    pub hms: String,
    pub short: String,
    pub human: String,
    pub full: String,
}

impl TimerReport {
    /// # Errors
    /// Returns [`TimerError::NotStarted`] if the timer was never started.
    pub fn from_timer(timer: &Timer) -> Result<Self, TimerError> {
        let elapsed = timer.elapsed()?;
        let hms = elapsed.hms();
        let clock_text = timer.hms_format().render(&hms);
        let human = human_text(&hms);

        Ok(Self {
            seconds: elapsed.as_secs_f64(),
            hours: hms.hours,
            minutes: hms.minutes,
            secs: hms.seconds,
            hires: timer.hires(),
            running: timer.is_running(),
            short: format!("{}s ({})", elapsed, clock_text),
            full: format!("{} seconds ({})", elapsed, human),
            hms: clock_text,
            human,
        })
    }

    pub fn to_json(&self) -> Result<String, TimerError> {
        serde_json::to_string(self).map_err(|err| TimerError::Serialize(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::clock::ManualClock;
    use crate::timer::TimerOptions;

    #[test]
    fn report_matches_timer_renderings() {
        let clock = ManualClock::default();
        let mut timer =
            Timer::with_clock(TimerOptions::new().hires(false), clock.clone()).expect("build timer");
        clock.advance(Duration::from_secs(3723));
        timer.stop().expect("stop");

        let report = timer.report().expect("report");
        assert_eq!(report.seconds, 3723.0);
        assert_eq!((report.hours, report.minutes, report.secs), (1, 2, 3.0));
        assert!(!report.hires);
        assert!(!report.running);
        assert_eq!(report.hms, "01:02:03");
        assert_eq!(Ok(report.short.clone()), timer.short());
        assert_eq!(Ok(report.human.clone()), timer.human());
        assert_eq!(Ok(report.full.clone()), timer.full());
    }

    #[test]
    fn report_serializes_to_json() {
        let clock = ManualClock::default();
        let timer =
            Timer::with_clock(TimerOptions::new().hires(true), clock.clone()).expect("build timer");
        clock.advance(Duration::from_millis(1_500));

        let json = timer.report().expect("report").to_json().expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse json");
        assert_eq!(value["seconds"], 1.5);
        assert_eq!(value["running"], true);
        assert_eq!(value["short"], "1.500000s (00:00:01.500000)");
    }

    #[test]
    fn report_requires_start() {
        let timer = Timer::with_clock(TimerOptions::new().start(false), ManualClock::default())
            .expect("build timer");
        assert_eq!(timer.report(), Err(TimerError::NotStarted));
    }
}

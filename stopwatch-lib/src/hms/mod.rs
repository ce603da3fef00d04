//! Hours/minutes/seconds decomposition and formatting.

mod format;

pub use format::HmsFormat;

use crate::clock;

const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_MINUTE: f64 = 60.0;
const SIGNIFICANT_DIGITS: usize = 15;

/// `HH:MM:SS.ffffff`
pub const FRACTIONAL_SPEC: &str = "%02d:%02d:%09.6f";
/// `HH:MM:SS`
pub const WHOLE_SPEC: &str = "%02d:%02d:%02d";

/// A duration split into hours, minutes and (possibly fractional) seconds.
///
/// Hours are not capped at 24.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hms {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: f64,
}

impl Hms {
    pub fn new(hours: u64, minutes: u64, seconds: f64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Whether the seconds component has a non-zero fractional part.
    pub fn is_fractional(&self) -> bool {
        self.seconds.trunc() != self.seconds
    }

    /// Total seconds represented by the triple.
    pub fn total_seconds(&self) -> f64 {
        self.hours as f64 * SECONDS_PER_HOUR + self.minutes as f64 * SECONDS_PER_MINUTE + self.seconds
    }
}

impl From<f64> for Hms {
    fn from(seconds: f64) -> Self {
        separate_hms(seconds)
    }
}

impl From<u64> for Hms {
    fn from(seconds: u64) -> Self {
        separate_hms(seconds as f64)
    }
}

impl From<(u64, u64, f64)> for Hms {
    fn from((hours, minutes, seconds): (u64, u64, f64)) -> Self {
        Self::new(hours, minutes, seconds)
    }
}

impl From<(u64, u64, u64)> for Hms {
    fn from((hours, minutes, seconds): (u64, u64, u64)) -> Self {
        Self::new(hours, minutes, seconds as f64)
    }
}

/// Split a total number of seconds into hours, minutes and seconds.
///
/// Negative and non-finite inputs are treated as zero.
pub fn separate_hms(seconds: f64) -> Hms {
    if !seconds.is_finite() || seconds <= 0.0 {
        return Hms::default();
    }

    let mut hours = (seconds / SECONDS_PER_HOUR).floor();
    let mut remaining = seconds - hours * SECONDS_PER_HOUR;
    if remaining < 0.0 {
        hours -= 1.0;
        remaining += SECONDS_PER_HOUR;
    }

    let mut minutes = (remaining / SECONDS_PER_MINUTE).floor();
    remaining -= minutes * SECONDS_PER_MINUTE;
    if remaining < 0.0 {
        minutes -= 1.0;
        remaining += SECONDS_PER_MINUTE;
    }

    // The subtractions above leave error below the input's own precision;
    // round it away at the input's significant digits.
    if seconds >= SECONDS_PER_MINUTE {
        let decimals = SIGNIFICANT_DIGITS as i32 - 1 - seconds.log10().floor() as i32;
        if decimals > 0 {
            let scale = 10_f64.powi(decimals);
            remaining = (remaining * scale).round() / scale;
        }
        if remaining >= SECONDS_PER_MINUTE {
            remaining -= SECONDS_PER_MINUTE;
            minutes += 1.0;
        }
        if minutes >= SECONDS_PER_MINUTE {
            minutes -= SECONDS_PER_MINUTE;
            hours += 1.0;
        }
    }

    Hms {
        hours: hours as u64,
        minutes: minutes as u64,
        seconds: remaining,
    }
}

/// Seconds as plain text: at most 15 significant digits, no trailing zeros.
///
/// `2.0` renders as `2`, `3.5` as `3.5`, and `5.299999999999997` as `5.3`.
pub fn format_seconds(seconds: f64) -> String {
    if !seconds.is_finite() {
        return seconds.to_string();
    }
    if seconds == 0.0 {
        return "0".to_string();
    }

    let magnitude = seconds.abs().log10().floor() as i32;
    let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - magnitude).max(0) as usize;
    let text = format!("{:.*}", decimals, seconds);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// The default hms template.
///
/// With `None`, the template follows whether the process has a
/// high-resolution clock.
pub fn default_format_spec(fractional: Option<bool>) -> &'static str {
    if fractional.unwrap_or_else(clock::hires_available) {
        FRACTIONAL_SPEC
    } else {
        WHOLE_SPEC
    }
}

/// Format a triple or a total number of seconds with the default template.
///
/// The fractional template is used only when the seconds component is not
/// integral, so `(2, 3, 4)` renders as `02:03:04`.
pub fn format_hms(value: impl Into<Hms>) -> String {
    let hms = value.into();
    HmsFormat::builtin(hms.is_fractional()).render(&hms)
}

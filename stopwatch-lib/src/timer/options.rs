//! Construction options for [`Timer`](super::Timer).

use std::fmt::{Display, Formatter};

use log::{debug, warn};
use serde::Deserialize;

use super::render::StringMode;
use crate::error::TimerError;
use crate::hms::HmsFormat;

/// Options accepted when building a timer.
///
/// Every field is optional; unset fields take the defaults documented on
/// [`ResolvedOptions`]. Deserializes from JSON with the keys `start`,
/// `hires`, `hms`, `string` and the legacy `format`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimerOptions {
    pub start: Option<bool>,
    pub hires: Option<bool>,
    pub hms: Option<String>,
    pub string: Option<StringMode>,
    #[serde(rename = "format")]
    pub legacy_format: Option<String>,
}

impl TimerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, TimerError> {
        serde_json::from_str(json).map_err(|err| TimerError::Options(err.to_string()))
    }

    pub fn start(mut self, start: bool) -> Self {
        self.start = Some(start);
        self
    }

    pub fn hires(mut self, hires: bool) -> Self {
        self.hires = Some(hires);
        self
    }

    pub fn hms(mut self, template: impl Into<String>) -> Self {
        self.hms = Some(template.into());
        self
    }

    pub fn string(mut self, mode: StringMode) -> Self {
        self.string = Some(mode);
        self
    }

    #[deprecated(note = "use `hms` instead")]
    pub fn format(mut self, template: impl Into<String>) -> Self {
        self.legacy_format = Some(template.into());
        self
    }

    /// Apply defaults and remap legacy keys.
    ///
    /// A requested high-resolution source is dropped when `hires_available`
    /// is false. The legacy `format` key fills `hms` only when `hms` is unset,
    /// and always records a [`Deprecation`].
    ///
    /// # Errors
    /// Returns [`TimerError::InvalidTemplate`] if the hms template does not parse.
    pub fn resolve(self, hires_available: bool) -> Result<ResolvedOptions, TimerError> {
        let mut deprecations = Vec::new();
        let mut hms = self.hms;

        if let Some(legacy) = self.legacy_format {
            let deprecation = Deprecation {
                option: "format",
                replacement: "hms",
            };
            warn!("{}", deprecation);
            deprecations.push(deprecation);
            hms.get_or_insert(legacy);
        }

        let requested = self.hires.unwrap_or(hires_available);
        if requested && !hires_available {
            debug!("High-resolution clock unavailable, using whole seconds");
        }
        let hires = requested && hires_available;

        let hms_format = match hms {
            Some(template) => HmsFormat::parse(&template)?,
            None => HmsFormat::builtin(hires),
        };

        Ok(ResolvedOptions {
            start: self.start.unwrap_or(true),
            hires,
            hms_format,
            string_mode: self.string.unwrap_or_default(),
            deprecations,
        })
    }
}

/// Options after defaults and legacy remapping.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    /// Start immediately. Defaults to `true`.
    pub start: bool,
    /// Use the high-resolution source. Defaults to the clock's availability.
    pub hires: bool,
    /// Template for [`Timer::hms`](super::Timer::hms). Defaults to the
    /// built-in template for `hires`.
    pub hms_format: HmsFormat,
    /// Defaults to [`StringMode::Short`].
    pub string_mode: StringMode,
    pub deprecations: Vec<Deprecation>,
}

impl ResolvedOptions {
    pub fn defaults(hires_available: bool) -> Self {
        Self {
            start: true,
            hires: hires_available,
            hms_format: HmsFormat::builtin(hires_available),
            string_mode: StringMode::default(),
            deprecations: Vec::new(),
        }
    }
}

/// A legacy option that was accepted and remapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deprecation {
    pub option: &'static str,
    pub replacement: &'static str,
}

impl Display for Deprecation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "timer option `{}` is deprecated, use `{}` instead",
            self.option, self.replacement
        )
    }
}

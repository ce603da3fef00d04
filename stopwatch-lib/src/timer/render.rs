//! String renderers for [`Timer`].

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Deserializer};

use super::Timer;
use crate::error::TimerError;

type RenderFn = dyn Fn(&Timer) -> Result<String, TimerError> + Send + Sync;

/// A caller-supplied `Timer -> String` function.
#[derive(Clone)]
pub struct Renderer(Arc<RenderFn>);

impl Renderer {
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&Timer) -> Result<String, TimerError> + Send + Sync + 'static,
    {
        Self(Arc::new(render))
    }

    pub fn render(&self, timer: &Timer) -> Result<String, TimerError> {
        (self.0)(timer)
    }
}

impl Debug for Renderer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Renderer(..)")
    }
}

/// Which rendering [`Timer::string`] produces.
#[derive(Debug, Clone, Default)]
pub enum StringMode {
    /// `<seconds>s (<hms>)`
    #[default]
    Short,
    /// `<h> hours <m> minutes <s> seconds`
    Human,
    /// `<seconds> seconds (<human>)`
    Full,
    /// [`Timer::hms`] with the configured template.
    Hms,
    /// The bare elapsed seconds.
    Elapsed,
    /// A renderer registered on the timer under this name.
    Named(String),
    Custom(Renderer),
}

impl StringMode {
    /// Map a mode name to a mode. Unrecognised names become [`StringMode::Named`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "short" => Self::Short,
            "human" => Self::Human,
            "full" => Self::Full,
            "hms" => Self::Hms,
            "elapsed" => Self::Elapsed,
            other => Self::Named(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Short => "short",
            Self::Human => "human",
            Self::Full => "full",
            Self::Hms => "hms",
            Self::Elapsed => "elapsed",
            Self::Named(name) => name,
            Self::Custom(_) => "custom",
        }
    }

    pub fn custom<F>(render: F) -> Self
    where
        F: Fn(&Timer) -> Result<String, TimerError> + Send + Sync + 'static,
    {
        Self::Custom(Renderer::new(render))
    }

    pub(super) fn render(&self, timer: &Timer) -> Result<String, TimerError> {
        match self {
            Self::Short => timer.short(),
            Self::Human => timer.human(),
            Self::Full => timer.full(),
            Self::Hms => timer.hms(None),
            Self::Elapsed => timer.elapsed().map(|elapsed| elapsed.to_string()),
            Self::Named(name) => match timer.renderer(name) {
                Some(renderer) => renderer.render(timer),
                None => Err(TimerError::UnknownFormat(name.clone())),
            },
            Self::Custom(renderer) => renderer.render(timer),
        }
    }
}

impl<'de> Deserialize<'de> for StringMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for name in ["short", "human", "full", "hms", "elapsed", "mine"] {
            assert_eq!(StringMode::from_name(name).name(), name);
        }
        assert!(matches!(StringMode::from_name("mine"), StringMode::Named(ref n) if n == "mine"));
    }

    #[test]
    fn default_is_short() {
        assert!(matches!(StringMode::default(), StringMode::Short));
    }

    #[test]
    fn deserializes_from_name() {
        let mode: StringMode = serde_json::from_str(r#""human""#).expect("deserialize mode");
        assert!(matches!(mode, StringMode::Human));
    }
}

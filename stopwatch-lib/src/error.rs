use std::fmt::{Display, Formatter};

/// Error type for timer queries, rendering, and option parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// The timer was queried before it was ever started.
    NotStarted,
    /// A string mode that is neither built in, a timer method, nor registered.
    UnknownFormat(String),
    /// An hms template that cannot render `(int, int, number)`.
    InvalidTemplate { template: String, reason: String },
    /// A serialized options document could not be read.
    Options(String),
    /// A report could not be serialized.
    Serialize(String),
}

impl Display for TimerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "timer not started"),
            Self::UnknownFormat(mode) => write!(f, "unknown format: {}", mode),
            Self::InvalidTemplate { template, reason } => {
                write!(f, "invalid hms template {:?}: {}", template, reason)
            }
            Self::Options(err) => write!(f, "invalid timer options: {}", err),
            Self::Serialize(err) => write!(f, "failed to serialize report: {}", err),
        }
    }
}

impl std::error::Error for TimerError {}

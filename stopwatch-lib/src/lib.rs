//! # Stopwatch Library
//!
//! Measures elapsed wall-clock time between a start and a stop (or now) and
//! renders it as seconds or hours/minutes/seconds text.
//!
//! ```
//! use stopwatch_lib::{format_hms, Timer, TimerOptions};
//!
//! let mut timer = Timer::new(TimerOptions::new()).unwrap();
//! let elapsed = timer.stop().unwrap();
//! assert!(elapsed.as_secs_f64() >= 0.0);
//! assert_eq!(format_hms(3723.5), "01:02:03.500000");
//! ```

pub mod clock;
mod error;
pub mod hms;
pub mod report;
pub mod timer;

pub use clock::{hires_available, Clock, ManualClock, SystemClock};
pub use error::TimerError;
pub use hms::{default_format_spec, format_hms, format_seconds, separate_hms, Hms, HmsFormat};
pub use report::TimerReport;
pub use timer::{Deprecation, Elapsed, Renderer, ResolvedOptions, StringMode, Timer, TimerOptions};

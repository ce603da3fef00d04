use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::Add;
use std::time::Duration;

use crate::hms::{separate_hms, Hms};

/// The numeric value of a timer: elapsed seconds.
///
/// Coarse timers produce whole seconds; high-resolution timers produce
/// fractional seconds. Adding the two gives a high-resolution value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Elapsed {
    seconds: f64,
    hires: bool,
}

impl Elapsed {
    /// Whole seconds from a coarse clock.
    pub fn from_secs(seconds: u64) -> Self {
        Self {
            seconds: seconds as f64,
            hires: false,
        }
    }

    /// Fractional seconds from a high-resolution clock.
    pub fn from_secs_f64(seconds: f64) -> Self {
        Self {
            seconds,
            hires: true,
        }
    }

    pub fn from_duration(duration: Duration) -> Self {
        Self::from_secs_f64(duration.as_secs_f64())
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.seconds
    }

    /// Negative or non-finite values convert to a zero duration.
    pub fn as_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.seconds).unwrap_or(Duration::ZERO)
    }

    /// Whether the value came from a high-resolution clock.
    pub fn is_hires(&self) -> bool {
        self.hires
    }

    pub fn hms(&self) -> Hms {
        separate_hms(self.seconds)
    }
}

impl Add for Elapsed {
    type Output = Elapsed;

    fn add(self, rhs: Elapsed) -> Elapsed {
        Elapsed {
            seconds: self.seconds + rhs.seconds,
            hires: self.hires || rhs.hires,
        }
    }
}

impl Sum for Elapsed {
    fn sum<I: Iterator<Item = Elapsed>>(iter: I) -> Elapsed {
        iter.fold(Elapsed::default(), Add::add)
    }
}

impl From<Elapsed> for f64 {
    fn from(value: Elapsed) -> f64 {
        value.seconds
    }
}

impl From<Elapsed> for Duration {
    fn from(value: Elapsed) -> Duration {
        value.as_duration()
    }
}

impl Display for Elapsed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.hires {
            write!(f, "{:.6}", self.seconds)
        } else {
            write!(f, "{}", self.seconds.trunc() as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coarse_displays_as_integer() {
        assert_eq!(Elapsed::from_secs(5).to_string(), "5");
        assert_eq!(Elapsed::from_secs(0).to_string(), "0");
    }

    #[test]
    fn hires_displays_six_decimals() {
        assert_eq!(Elapsed::from_secs_f64(123.0).to_string(), "123.000000");
        assert_eq!(Elapsed::from_secs_f64(0.5).to_string(), "0.500000");
    }

    #[test]
    fn sums_promote_to_hires() {
        let total = Elapsed::from_secs(3) + Elapsed::from_secs_f64(0.25);
        assert!(total.is_hires());
        assert_eq!(total.as_secs_f64(), 3.25);

        let total: Elapsed = [Elapsed::from_secs(1), Elapsed::from_secs(2)].into_iter().sum();
        assert!(!total.is_hires());
        assert_eq!(f64::from(total), 3.0);
    }

    #[test]
    fn converts_to_duration() {
        assert_eq!(
            Elapsed::from_secs_f64(1.5).as_duration(),
            Duration::from_millis(1_500)
        );
        assert_eq!(Elapsed::from_secs_f64(-1.0).as_duration(), Duration::ZERO);
    }
}

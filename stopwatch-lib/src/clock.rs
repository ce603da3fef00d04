//! Time sources for [`Timer`](crate::timer::Timer).
//!
//! A clock supplies two readings: a monotonic high-resolution [`Instant`] and a
//! coarse count of whole seconds since the Unix epoch. Timers pick one of the
//! two at construction and never mix them.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use log::debug;

const PROBE_SAMPLES: usize = 8;

static HIRES_AVAILABLE: OnceLock<bool> = OnceLock::new();

/// Whether the host clock reports sub-second precision.
///
/// The probe runs at most once per process; later calls return the cached
/// answer.
pub fn hires_available() -> bool {
    *HIRES_AVAILABLE.get_or_init(probe_hires)
}

fn probe_hires() -> bool {
    // A whole-second wall clock never reports a sub-second component.
    let available = (0..PROBE_SAMPLES).any(|_| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|since| since.subsec_nanos() != 0)
            .unwrap_or(false)
    });
    debug!("High-resolution clock available: {}", available);
    available
}

/// Source of "now" for a timer.
pub trait Clock: Send + Sync {
    /// Whether [`Clock::precise_now`] carries sub-second precision.
    fn hires_available(&self) -> bool;

    /// Monotonic high-resolution reading.
    fn precise_now(&self) -> Instant;

    /// Whole seconds since the Unix epoch.
    fn coarse_now(&self) -> u64;
}

/// The host's clocks: [`Instant`] and [`SystemTime`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn hires_available(&self) -> bool {
        hires_available()
    }

    fn precise_now(&self) -> Instant {
        Instant::now()
    }

    fn coarse_now(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|since| since.as_secs())
            .unwrap_or(0)
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a caller can keep one handle and hand
/// another to a timer.
#[derive(Debug, Clone)]
pub struct ManualClock {
    inner: Arc<ManualClockState>,
}

#[derive(Debug)]
struct ManualClockState {
    origin: Instant,
    epoch_secs: u64,
    offset_nanos: AtomicU64,
    hires: AtomicBool,
}

impl ManualClock {
    /// Create a clock at `epoch_secs` seconds since the Unix epoch.
    pub fn new(epoch_secs: u64) -> Self {
        Self {
            inner: Arc::new(ManualClockState {
                origin: Instant::now(),
                epoch_secs,
                offset_nanos: AtomicU64::new(0),
                hires: AtomicBool::new(true),
            }),
        }
    }

    /// Create a clock that reports no high-resolution source.
    pub fn coarse_only(epoch_secs: u64) -> Self {
        let clock = Self::new(epoch_secs);
        clock.set_hires_available(false);
        clock
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        let _ = self
            .inner
            .offset_nanos
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                Some(current.saturating_add(nanos))
            });
    }

    /// Move the clock forward by fractional seconds. Negative values are ignored.
    pub fn advance_secs_f64(&self, secs: f64) {
        if secs.is_finite() && secs > 0.0 {
            self.advance(Duration::from_secs_f64(secs));
        }
    }

    /// Toggle whether this clock claims a high-resolution source.
    pub fn set_hires_available(&self, available: bool) {
        self.inner.hires.store(available, Ordering::SeqCst);
    }

    /// Time advanced since creation.
    pub fn offset(&self) -> Duration {
        Duration::from_nanos(self.inner.offset_nanos.load(Ordering::SeqCst))
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clock for ManualClock {
    fn hires_available(&self) -> bool {
        self.inner.hires.load(Ordering::SeqCst)
    }

    fn precise_now(&self) -> Instant {
        self.inner.origin + self.offset()
    }

    fn coarse_now(&self) -> u64 {
        self.inner.epoch_secs.saturating_add(self.offset().as_secs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hires_probe_is_stable() {
        let first = hires_available();
        for _ in 0..4 {
            assert_eq!(hires_available(), first);
        }
    }

    #[test]
    fn system_clock_coarse_is_after_epoch() {
        assert!(SystemClock.coarse_now() > 1_000_000_000);
    }

    #[test]
    fn manual_clock_moves_only_when_advanced() {
        let clock = ManualClock::new(100);
        let before = clock.precise_now();
        assert_eq!(clock.precise_now(), before);
        assert_eq!(clock.coarse_now(), 100);

        clock.advance(Duration::from_millis(2_500));
        assert_eq!(clock.precise_now() - before, Duration::from_millis(2_500));
        assert_eq!(clock.coarse_now(), 102);
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::default();
        let handle = clock.clone();
        handle.advance_secs_f64(3.0);
        assert_eq!(clock.offset(), Duration::from_secs(3));
        handle.advance_secs_f64(-1.0);
        assert_eq!(clock.offset(), Duration::from_secs(3));
    }

    #[test]
    fn manual_clock_coarse_saturates_near_max_epoch() {
        let clock = ManualClock::new(u64::MAX - 1);
        clock.advance(Duration::from_secs(10));
        assert_eq!(clock.coarse_now(), u64::MAX);
    }

    #[test]
    fn manual_clock_hires_toggle() {
        let clock = ManualClock::coarse_only(0);
        assert!(!clock.hires_available());
        clock.set_hires_available(true);
        assert!(clock.hires_available());
    }
}

//! Tick clock and dwell timers.
//!
//! Time in Horizon Cascade never comes from the wall clock directly. The host
//! render loop advances a [`TickClock`] once per update tick, and anything that
//! waits (such as delayed submenu expansion) compares a [`DwellTimer`] against
//! the clock on each tick instead of sleeping.

use std::time::Duration;

use crate::logging::targets;

/// A monotonic millisecond counter advanced by the host's update tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickClock {
    now_ms: u64,
}

impl TickClock {
    /// Create a clock starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock starting at the given timestamp.
    pub fn starting_at(now_ms: u64) -> Self {
        Self { now_ms }
    }

    /// Current timestamp in milliseconds.
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Advance the clock by `elapsed`, saturating at `u64::MAX`.
    ///
    /// Returns the new timestamp.
    pub fn advance(&mut self, elapsed: Duration) -> u64 {
        let step = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self.now_ms = self.now_ms.saturating_add(step);
        tracing::trace!(target: targets::CLOCK, now_ms = self.now_ms, "clock advanced");
        self.now_ms
    }
}

/// Tracks how long something has been continuously dwelt upon.
///
/// A disarmed timer never elapses. Arming an armed timer restarts it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DwellTimer {
    armed_at: Option<u64>,
}

impl DwellTimer {
    /// Create a disarmed timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the timer at `now`.
    pub fn arm(&mut self, now: u64) {
        self.armed_at = Some(now);
    }

    /// Stop the timer.
    pub fn disarm(&mut self) {
        self.armed_at = None;
    }

    /// Whether the timer is running.
    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    /// The timestamp the timer was armed at, if running.
    pub fn armed_at(&self) -> Option<u64> {
        self.armed_at
    }

    /// Time spent since the timer was armed.
    pub fn elapsed(&self, now: u64) -> Option<Duration> {
        self.armed_at
            .map(|start| Duration::from_millis(now.saturating_sub(start)))
    }

    /// Whether at least `delay` has passed since the timer was armed.
    pub fn has_elapsed(&self, now: u64, delay: Duration) -> bool {
        self.elapsed(now).is_some_and(|elapsed| elapsed >= delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_advance() {
        let mut clock = TickClock::new();
        assert_eq!(clock.now(), 0);
        assert_eq!(clock.advance(Duration::from_millis(16)), 16);
        assert_eq!(clock.advance(Duration::from_millis(17)), 33);
    }

    #[test]
    fn test_clock_saturates() {
        let mut clock = TickClock::starting_at(u64::MAX - 1);
        clock.advance(Duration::from_secs(10));
        assert_eq!(clock.now(), u64::MAX);
    }

    #[test]
    fn test_disarmed_timer_never_elapses() {
        let timer = DwellTimer::new();
        assert!(!timer.is_armed());
        assert!(!timer.has_elapsed(10_000, Duration::ZERO));
    }

    #[test]
    fn test_timer_elapses_after_delay() {
        let mut timer = DwellTimer::new();
        timer.arm(100);
        assert!(!timer.has_elapsed(599, Duration::from_millis(500)));
        assert!(timer.has_elapsed(600, Duration::from_millis(500)));
    }

    #[test]
    fn test_rearm_restarts_dwell() {
        let mut timer = DwellTimer::new();
        timer.arm(0);
        timer.arm(400);
        assert!(!timer.has_elapsed(600, Duration::from_millis(500)));
        assert_eq!(timer.elapsed(600), Some(Duration::from_millis(200)));

        timer.disarm();
        assert_eq!(timer.elapsed(600), None);
    }
}

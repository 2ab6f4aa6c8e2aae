//! Loop pacing
//!
//! Two ways to space gameplay ticks:
//!
//! - [`Pacing::FixedDelay`]: one tick per loop iteration followed by a sleep
//!   of `1000 / speed` milliseconds. Tick rate and frame rate are the same.
//! - [`Pacing::Accumulator`]: frames run at [`FRAME_INTERVAL`] and a
//!   [`TickClock`] releases gameplay ticks as real time accumulates.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Frame spacing used with accumulator pacing (~60 Hz).
pub const FRAME_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Fastest accepted tick rate; anything higher rounds to a 0ms interval.
pub const MAX_SPEED: u32 = 1000;

/// Upper bound on ticks run in one frame after a stall.
pub const MAX_TICKS_PER_FRAME: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pacing {
    #[default]
    FixedDelay,
    Accumulator,
}

/// Time between gameplay ticks at `ticks_per_second`, whole milliseconds.
pub fn tick_interval(ticks_per_second: u32) -> Duration {
    Duration::from_millis(1000 / u64::from(ticks_per_second.max(1)))
}

/// Fixed-timestep accumulator.
#[derive(Debug, Clone)]
pub struct TickClock {
    step: Duration,
    accumulator: Duration,
    max_ticks: u32,
}

impl TickClock {
    pub fn new(ticks_per_second: u32) -> Self {
        TickClock {
            step: tick_interval(ticks_per_second),
            accumulator: Duration::ZERO,
            max_ticks: MAX_TICKS_PER_FRAME,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Adds `elapsed` and returns how many ticks are now due.
    ///
    /// When more than `max_ticks` are owed the backlog is dropped so a long
    /// stall does not replay as a burst of moves.
    pub fn accumulate(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut due = 0;
        while self.accumulator >= self.step && due < self.max_ticks {
            self.accumulator -= self.step;
            due += 1;
        }

        if self.accumulator >= self.step {
            self.accumulator = Duration::ZERO;
        }

        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_interval_uses_integer_milliseconds() {
        assert_eq!(tick_interval(7), Duration::from_millis(142));
        assert_eq!(tick_interval(10), Duration::from_millis(100));
        // Zero speed is clamped rather than dividing by zero
        assert_eq!(tick_interval(0), Duration::from_millis(1000));
        assert_eq!(tick_interval(MAX_SPEED), Duration::from_millis(1));
    }

    #[test]
    fn test_accumulator_releases_whole_steps() {
        let mut clock = TickClock::new(10);
        assert_eq!(clock.accumulate(Duration::from_millis(50)), 0);
        assert_eq!(clock.accumulate(Duration::from_millis(60)), 1);
        // 10ms carried over
        assert_eq!(clock.accumulate(Duration::from_millis(90)), 1);
        assert_eq!(clock.accumulate(Duration::from_millis(250)), 2);
    }

    #[test]
    fn test_accumulator_caps_catch_up() {
        let mut clock = TickClock::new(10);
        assert_eq!(clock.accumulate(Duration::from_secs(5)), MAX_TICKS_PER_FRAME);
        // Backlog was dropped
        assert_eq!(clock.accumulate(Duration::from_millis(50)), 0);
    }
}

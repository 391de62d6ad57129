//! Fixed-step pacing that turns elapsed wall time into whole ticks.

use std::time::Duration;

use meme_train_core::Difficulty;

/// Accumulates elapsed time and releases ticks at the difficulty's rate.
///
/// Shells feed frame deltas of any size; the simulation only ever sees whole
/// ticks, so it runs identically regardless of the frame rate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cadence {
    interval: Duration,
    accumulator: Duration,
}

impl Cadence {
    /// Creates a cadence for the provided difficulty.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            interval: Duration::from_secs(1) / difficulty.ticks_per_second().max(1),
            accumulator: Duration::ZERO,
        }
    }

    /// Wall time between two ticks.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Adds `elapsed` to the accumulator and returns the ticks now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator = self.accumulator.saturating_add(elapsed);
        if self.interval.is_zero() {
            return 0;
        }

        let mut ticks = 0;
        while self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            ticks += 1;
        }
        ticks
    }

    /// Drops any partially accumulated time.
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

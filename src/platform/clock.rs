//=========================================================================
// Tick Clock
//
// Millisecond timing for simulation pacing. The counter is relative to
// shell construction and wraps at u32::MAX; callers must treat it as a
// wrapping counter, never as epoch time.
//
//=========================================================================

use std::thread;
use std::time::{Duration, Instant};

//=== TickClock ===========================================================

/// Wall-clock millisecond counter plus a blocking sleep primitive.
pub(crate) struct TickClock {
    origin: Instant,
}

impl TickClock {
    pub(crate) fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds since shell construction, truncated to u32.
    ///
    /// Wraps silently after ~49.7 days.
    pub(crate) fn now_ms(&self) -> u32 {
        self.origin.elapsed().as_millis() as u32
    }

    /// Blocks the calling thread for approximately `ms` milliseconds.
    ///
    /// Best-effort: the OS may oversleep. The shell is single-threaded, so
    /// this stalls the whole tick loop, which is the point (pacing).
    pub(crate) fn sleep_ms(&self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_ms_is_non_decreasing() {
        let clock = TickClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }

    #[test]
    fn sleep_ms_blocks_at_least_requested_duration() {
        let clock = TickClock::new();
        let before = Instant::now();
        clock.sleep_ms(10);
        assert!(before.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn sleep_zero_is_noop() {
        let clock = TickClock::new();
        clock.sleep_ms(0);
    }
}

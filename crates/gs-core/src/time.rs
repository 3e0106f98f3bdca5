//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  The mapping to wall
//! time is held in `SimClock`:
//!
//!   elapsed = tick * tick_interval_ms
//!
//! The reference deployment ticks every 100 ms.  The tick interval only
//! matters to the external scheduler and to output timestamps; the stepper
//! itself moves a fixed distance per tick regardless of wall time.

use std::fmt;
use std::time::Duration;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and elapsed wall time.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// Wall-clock milliseconds one tick represents.  Default: 100.
    pub tick_interval_ms: u64,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_interval_ms: u64) -> Self {
        Self {
            tick_interval_ms,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated milliseconds at `tick`.
    #[inline]
    pub fn elapsed_ms_at(&self, tick: Tick) -> u64 {
        tick.0.saturating_mul(self.tick_interval_ms)
    }

    /// Elapsed simulated milliseconds since tick 0.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms_at(self.current_tick)
    }

    /// The tick interval as a `Duration`, for interval timers.
    #[inline]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = self.elapsed_ms();
        write!(f, "{} ({}.{:03} s)", self.current_tick, ms / 1_000, ms % 1_000)
    }
}

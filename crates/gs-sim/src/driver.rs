//! Wall-clock tick scheduling.
//!
//! [`Sim`] has no notion of real time; [`IntervalDriver`] calls
//! [`Sim::step`] every `tick_interval_ms` on the calling thread until it is
//! told to stop.  Commands such as [`Sim::request_route`] are applied between
//! driver runs (or from observer hooks), never during a tick.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use gs_core::SimConfig;
use gs_grid::Router;
use tracing::debug;

use crate::{Sim, SimObserver, SimResult};

/// Shared flag that asks a running [`IntervalDriver`] to stop.
///
/// Clones share the same flag, so one can be handed to another thread (or an
/// observer) while the driver blocks.  The driver checks it between ticks; a
/// tick already in progress always completes.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Fixed-interval tick loop.
#[derive(Debug)]
pub struct IntervalDriver {
    interval:  Duration,
    max_ticks: Option<u64>,
    stop:      StopHandle,
}

impl IntervalDriver {
    pub fn new(interval: Duration) -> Self {
        Self { interval, max_ticks: None, stop: StopHandle::new() }
    }

    /// A driver ticking every `config.tick_interval_ms`.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.make_clock().interval())
    }

    /// Stop after `n` ticks even if nobody calls [`StopHandle::stop`].
    pub fn max_ticks(mut self, n: u64) -> Self {
        self.max_ticks = Some(n);
        self
    }

    /// A handle that stops this driver.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Tick `sim` until stopped or the tick limit is reached.  Returns the
    /// number of ticks run.
    ///
    /// Each tick is followed by a sleep for whatever remains of the interval;
    /// a tick that overruns the interval is followed immediately by the next.
    pub fn run<R: Router, O: SimObserver>(
        &self,
        sim:      &mut Sim<R>,
        observer: &mut O,
    ) -> SimResult<u64> {
        let mut ticks = 0u64;
        while !self.stop.is_stopped() && self.max_ticks.is_none_or(|max| ticks < max) {
            let started = Instant::now();
            sim.step(observer)?;
            ticks += 1;

            let remaining = self.interval.saturating_sub(started.elapsed());
            if !remaining.is_zero() && !self.stop.is_stopped() {
                thread::sleep(remaining);
            }
        }
        debug!(ticks, clock = %sim.clock, "interval driver stopped");
        Ok(ticks)
    }
}

//! Scheduling between poll cycles.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};
use tracing::trace;

/// What the poller should do after waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Stop,
}

/// Decides when the next poll cycle starts.
///
/// The fixed-interval sleep is one implementation; an event-driven source can
/// replace it without touching classification or scanning.
pub trait TickSource {
    /// Block until the next cycle should begin.
    fn wait(&mut self) -> Tick;

    /// Checked between files of a large batch so shutdown does not have to
    /// wait for the whole batch. Never interrupts a file mid-analysis.
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Cancellation flag shared with the signal handler.
#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag(Arc<AtomicBool>);

impl ShutdownFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

const SLEEP_SLICE: Duration = Duration::from_millis(100);

/// Sleeps a fixed interval between cycles, waking early on shutdown.
#[derive(Debug)]
pub struct IntervalTicker {
    interval: Duration,
    shutdown: ShutdownFlag,
    cycle_limit: Option<u64>,
    ticks: u64,
}

impl IntervalTicker {
    pub fn new(interval: Duration, shutdown: ShutdownFlag) -> Self {
        Self {
            interval,
            shutdown,
            cycle_limit: None,
            ticks: 0,
        }
    }

    /// Stop after `cycles` poll cycles have completed.
    pub fn with_cycle_limit(mut self, cycles: u64) -> Self {
        self.cycle_limit = Some(cycles);
        self
    }
}

impl TickSource for IntervalTicker {
    fn wait(&mut self) -> Tick {
        self.ticks += 1;
        if self.cycle_limit.is_some_and(|limit| self.ticks >= limit) {
            trace!(ticks = self.ticks, "Cycle limit reached");
            return Tick::Stop;
        }

        let deadline = Instant::now() + self.interval;
        loop {
            if self.shutdown.is_requested() {
                return Tick::Stop;
            }
            let now = Instant::now();
            if now >= deadline {
                return Tick::Continue;
            }
            thread::sleep(SLEEP_SLICE.min(deadline - now));
        }
    }

    fn is_cancelled(&self) -> bool {
        self.shutdown.is_requested()
    }
}

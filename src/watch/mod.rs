//! Watch mode: a polling loop over directory snapshots.

pub mod poller;
pub mod tick;

pub use poller::{CycleOutcome, PollState, Poller};
pub use tick::{IntervalTicker, ShutdownFlag, Tick, TickSource};

//! Discovery layer: enumerates the watch root into snapshots.

pub mod snapshot;

pub use snapshot::{Snapshot, Snapshotter, display_key};

//! Security-focused tests for the snapshotter and content scanner.

mod redos_tests;
mod symlink_tests;

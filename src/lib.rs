//! memobench: comparative micro-benchmark harness for memoizing caches.
//!
//! Measures per-call set/get overhead of several caching implementations
//! around one deterministic workload function, with an uncached baseline
//! subtracted from the set pass.

pub mod adapter;
pub mod adapters;
pub mod error;
pub mod registry;
pub mod report;
pub mod runner;
pub mod timer;
pub mod workload;

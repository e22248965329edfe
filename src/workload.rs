//! The workload function whose cached cost is being measured.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Upper bound (inclusive) of the workload's output range.
pub const OUTPUT_MAX: u64 = 100_000;

/// Deterministic pseudo-random computation seeded by the input identifier.
///
/// Every input in `[0, n)` maps to a reproducible output, so repeated calls
/// with the same input are cache-hit candidates. The computation itself is
/// trivial; the harness measures caching overhead around it, not the work.
pub fn expensive_call(seed: u64) -> u64 {
    let mut rng = SmallRng::seed_from_u64(seed);
    rng.random_range(0..=OUTPUT_MAX)
}

//! Central roster of cache adapters under test.
//!
//! Single source of truth for which adapters run and in what order.
//! Registration order is report order, so it must stay deterministic and
//! stable across runs. To add an adapter, modify this file only.

use std::path::Path;

use crate::adapter::CacheAdapter;
use crate::adapters::{DiskJsonMemo, FxMapMemo, LruMemo, MokaMemo};
use crate::error::BenchError;
use crate::workload;

/// Adapter names in registration order.
pub const ADAPTER_NAMES: &[&str] = &["fx-hashmap", "lru", "moka", "disk-json"];

/// Builds the standard roster around the workload function.
///
/// Bounded adapters are sized to hold all `iterations` entries at once, so a
/// get pass immediately after a set pass is guaranteed to be all hits. The
/// disk adapter gets its own namespace directory under `cache_root`.
///
/// Any construction failure aborts the whole run: nothing has been measured
/// yet and a partial roster would silently change the comparison.
pub fn standard_roster(
    iterations: usize,
    cache_root: &Path,
) -> Result<Vec<Box<dyn CacheAdapter>>, BenchError> {
    let inner = workload::expensive_call as fn(u64) -> u64;

    let lru = LruMemo::try_new(iterations, inner).map_err(|source| BenchError::Construction {
        adapter: "lru".to_string(),
        source,
    })?;

    let disk = DiskJsonMemo::try_new(cache_root.join("disk-json"), inner).map_err(|source| {
        BenchError::Construction {
            adapter: "disk-json".to_string(),
            source,
        }
    })?;

    Ok(vec![
        Box::new(FxMapMemo::new(inner)),
        Box::new(lru),
        Box::new(MokaMemo::new(iterations as u64, inner)),
        Box::new(disk),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn roster_order_matches_registered_names() {
        let dir = TempDir::new().unwrap();
        let roster = standard_roster(16, dir.path()).unwrap();
        let names: Vec<&str> = roster.iter().map(|adapter| adapter.name()).collect();
        assert_eq!(names, ADAPTER_NAMES);
    }

    #[test]
    fn names_are_unique() {
        let mut names = ADAPTER_NAMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ADAPTER_NAMES.len());
    }

    #[test]
    fn zero_iterations_fails_at_construction() {
        let dir = TempDir::new().unwrap();
        assert!(standard_roster(0, dir.path()).is_err());
    }

    #[test]
    fn every_adapter_round_trips_the_workload() {
        let dir = TempDir::new().unwrap();
        let mut roster = standard_roster(8, dir.path()).unwrap();
        for adapter in roster.iter_mut() {
            for input in 0..8u64 {
                assert_eq!(
                    adapter.call(input).unwrap(),
                    workload::expensive_call(input),
                    "adapter {} diverged from the workload",
                    adapter.name(),
                );
            }
        }
    }
}

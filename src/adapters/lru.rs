//! Bounded memo table on the `lru` crate's `LruCache`.

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::adapter::{CacheAdapter, ResetOutcome};
use crate::error::AdapterError;

/// Memoizes the wrapped function in a bounded LRU cache.
///
/// Capacity must be at least the benchmark's iteration count, otherwise the
/// get pass evicts its own working set and stops being an all-hit pass.
pub struct LruMemo<F> {
    inner: F,
    cache: LruCache<u64, u64>,
}

impl<F> LruMemo<F>
where
    F: FnMut(u64) -> u64,
{
    pub fn try_new(capacity: usize, inner: F) -> Result<Self, AdapterError> {
        let capacity = NonZeroUsize::new(capacity)
            .ok_or_else(|| AdapterError::store("lru capacity must be non-zero"))?;
        Ok(Self {
            inner,
            cache: LruCache::new(capacity),
        })
    }
}

impl<F> CacheAdapter for LruMemo<F>
where
    F: FnMut(u64) -> u64,
{
    fn name(&self) -> &str {
        "lru"
    }

    fn call(&mut self, input: u64) -> Result<u64, AdapterError> {
        if let Some(&value) = self.cache.get(&input) {
            return Ok(value);
        }
        let value = (self.inner)(input);
        self.cache.put(input, value);
        Ok(value)
    }

    fn reset(&mut self) -> Result<ResetOutcome, AdapterError> {
        if self.cache.is_empty() {
            return Ok(ResetOutcome::AlreadyEmpty);
        }
        self.cache.clear();
        Ok(ResetOutcome::Cleared)
    }
}

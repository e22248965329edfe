//! Memo table on moka's synchronous concurrent cache.
//!
//! The harness is single-threaded; moka is included because it is a common
//! production choice and its internal bookkeeping (frequency sketch, pending
//! task queue) gives it a distinctly different overhead profile from the
//! plain map adapters.

use moka::sync::Cache;

use crate::adapter::{CacheAdapter, ResetOutcome};
use crate::error::AdapterError;

/// Memoizes the wrapped function in a `moka::sync::Cache`.
pub struct MokaMemo<F> {
    inner: F,
    cache: Cache<u64, u64>,
}

impl<F> MokaMemo<F>
where
    F: FnMut(u64) -> u64,
{
    pub fn new(capacity: u64, inner: F) -> Self {
        Self {
            inner,
            cache: Cache::builder().max_capacity(capacity).build(),
        }
    }
}

impl<F> CacheAdapter for MokaMemo<F>
where
    F: FnMut(u64) -> u64,
{
    fn name(&self) -> &str {
        "moka"
    }

    fn call(&mut self, input: u64) -> Result<u64, AdapterError> {
        if let Some(value) = self.cache.get(&input) {
            return Ok(value);
        }
        let value = (self.inner)(input);
        self.cache.insert(input, value);
        Ok(value)
    }

    fn reset(&mut self) -> Result<ResetOutcome, AdapterError> {
        // entry_count is only exact after pending tasks are flushed.
        self.cache.run_pending_tasks();
        if self.cache.entry_count() == 0 {
            return Ok(ResetOutcome::AlreadyEmpty);
        }
        self.cache.invalidate_all();
        self.cache.run_pending_tasks();
        Ok(ResetOutcome::Cleared)
    }
}

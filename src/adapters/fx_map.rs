//! Unbounded in-process memo table on `FxHashMap`.

use rustc_hash::FxHashMap;

use crate::adapter::{CacheAdapter, ResetOutcome};
use crate::error::AdapterError;

/// Memoizes the wrapped function in an unbounded `FxHashMap`.
pub struct FxMapMemo<F> {
    inner: F,
    table: FxHashMap<u64, u64>,
}

impl<F> FxMapMemo<F>
where
    F: FnMut(u64) -> u64,
{
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            table: FxHashMap::default(),
        }
    }
}

impl<F> CacheAdapter for FxMapMemo<F>
where
    F: FnMut(u64) -> u64,
{
    fn name(&self) -> &str {
        "fx-hashmap"
    }

    fn call(&mut self, input: u64) -> Result<u64, AdapterError> {
        if let Some(&value) = self.table.get(&input) {
            return Ok(value);
        }
        let value = (self.inner)(input);
        self.table.insert(input, value);
        Ok(value)
    }

    fn reset(&mut self) -> Result<ResetOutcome, AdapterError> {
        if self.table.is_empty() {
            return Ok(ResetOutcome::AlreadyEmpty);
        }
        self.table.clear();
        Ok(ResetOutcome::Cleared)
    }
}

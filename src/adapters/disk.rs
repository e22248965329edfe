//! Persistent memo store with one JSON file per entry.
//!
//! The Rust stand-in for on-disk function caches: each adapter instance owns
//! an isolated namespace directory supplied at construction, so concurrent
//! test runs and sibling adapters never collide on paths.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::adapter::{CacheAdapter, ResetOutcome};
use crate::error::AdapterError;

#[derive(Debug, Serialize, Deserialize)]
struct CachedEntry {
    input: u64,
    value: u64,
}

/// Memoizes the wrapped function as JSON files under a namespace directory.
pub struct DiskJsonMemo<F> {
    inner: F,
    namespace: PathBuf,
}

impl<F> DiskJsonMemo<F>
where
    F: FnMut(u64) -> u64,
{
    /// Creates the namespace directory. A store that cannot be created is an
    /// adapter-construction failure, which the runner treats as fatal.
    pub fn try_new(namespace: impl Into<PathBuf>, inner: F) -> Result<Self, AdapterError> {
        let namespace = namespace.into();
        fs::create_dir_all(&namespace)?;
        Ok(Self { inner, namespace })
    }

    pub fn namespace(&self) -> &Path {
        &self.namespace
    }

    fn entry_path(&self, input: u64) -> PathBuf {
        self.namespace.join(format!("{input}.json"))
    }

    fn read_entry(path: &Path, input: u64) -> Result<Option<u64>, AdapterError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let entry: CachedEntry = serde_json::from_str(&text)?;
        if entry.input != input {
            return Err(AdapterError::store(format!(
                "entry file {} holds input {}, expected {}",
                path.display(),
                entry.input,
                input,
            )));
        }
        Ok(Some(entry.value))
    }
}

impl<F> CacheAdapter for DiskJsonMemo<F>
where
    F: FnMut(u64) -> u64,
{
    fn name(&self) -> &str {
        "disk-json"
    }

    fn call(&mut self, input: u64) -> Result<u64, AdapterError> {
        let path = self.entry_path(input);
        if let Some(value) = Self::read_entry(&path, input)? {
            return Ok(value);
        }
        let value = (self.inner)(input);
        let entry = CachedEntry { input, value };
        fs::write(&path, serde_json::to_string(&entry)?)?;
        Ok(value)
    }

    fn reset(&mut self) -> Result<ResetOutcome, AdapterError> {
        let mut entries = fs::read_dir(&self.namespace)?;
        if entries.next().is_none() {
            return Ok(ResetOutcome::AlreadyEmpty);
        }
        fs::remove_dir_all(&self.namespace)?;
        fs::create_dir_all(&self.namespace)?;
        Ok(ResetOutcome::Cleared)
    }
}

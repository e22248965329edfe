//! Error types for the benchmark harness.
//!
//! Every failure carries enough context to be diagnosed from output alone:
//! which adapter, and which pass of the run. Timing code never retries and
//! never substitutes sentinel results; errors propagate to the top level.

use std::fmt;
use std::io;

// ---------------------------------------------------------------------------
// AdapterError
// ---------------------------------------------------------------------------

/// Error produced by a cache adapter's call or reset operation.
#[derive(Debug)]
pub enum AdapterError {
    /// Underlying store I/O failed (on-disk adapters).
    Io(io::Error),
    /// A cached entry could not be encoded or decoded.
    Codec(serde_json::Error),
    /// Store-specific failure with a human-readable description.
    Store(String),
}

impl AdapterError {
    /// Creates a store-specific error with the given description.
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "store i/o failed: {err}"),
            Self::Codec(err) => write!(f, "cache entry codec failed: {err}"),
            Self::Store(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for AdapterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Codec(err) => Some(err),
            Self::Store(_) => None,
        }
    }
}

impl From<io::Error> for AdapterError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for AdapterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Codec(err)
    }
}

// ---------------------------------------------------------------------------
// MeasureError
// ---------------------------------------------------------------------------

/// Error produced inside a single measurement loop.
#[derive(Debug)]
pub enum MeasureError {
    /// The measured callable failed; the pass total is discarded.
    Call {
        iteration: usize,
        source: AdapterError,
    },
    /// The monotonic clock reported a non-monotonic interval. This is a
    /// platform-level defect and is raised rather than suppressed.
    ClockAnomaly { iteration: usize },
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call { iteration, source } => {
                write!(f, "call failed at iteration {iteration}: {source}")
            },
            Self::ClockAnomaly { iteration } => {
                write!(f, "non-monotonic clock interval at iteration {iteration}")
            },
        }
    }
}

impl std::error::Error for MeasureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Call { source, .. } => Some(source),
            Self::ClockAnomaly { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Pass
// ---------------------------------------------------------------------------

/// Which measurement pass of an adapter's triple a failure occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Set,
    Get,
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Set => "set pass",
            Self::Get => "get pass",
        })
    }
}

// ---------------------------------------------------------------------------
// BenchError
// ---------------------------------------------------------------------------

/// Top-level harness error.
#[derive(Debug)]
pub enum BenchError {
    /// The run configuration is invalid (e.g. zero iterations).
    Config(String),
    /// An adapter could not be constructed. Fatal for the whole run: no
    /// measurements have happened yet, so there is no partial state worth
    /// preserving.
    Construction {
        adapter: String,
        source: AdapterError,
    },
    /// The uncached baseline measurement failed. Fatal: every adapter's set
    /// average depends on it.
    Baseline { source: MeasureError },
    /// An adapter measurement pass failed.
    Measurement {
        adapter: String,
        pass: Pass,
        source: MeasureError,
    },
    /// Writing the report to the output sink failed.
    Report(io::Error),
}

impl BenchError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "invalid configuration: {msg}"),
            Self::Construction { adapter, source } => {
                write!(f, "failed to construct adapter `{adapter}`: {source}")
            },
            Self::Baseline { source } => write!(f, "baseline measurement failed: {source}"),
            Self::Measurement {
                adapter,
                pass,
                source,
            } => write!(f, "{pass} failed for adapter `{adapter}`: {source}"),
            Self::Report(err) => write!(f, "failed to write report: {err}"),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(_) => None,
            Self::Construction { source, .. } => Some(source),
            Self::Baseline { source } => Some(source),
            Self::Measurement { source, .. } => Some(source),
            Self::Report(err) => Some(err),
        }
    }
}

impl From<io::Error> for BenchError {
    fn from(err: io::Error) -> Self {
        Self::Report(err)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

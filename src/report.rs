//! Per-adapter result records and their textual form.

use std::io::{self, Write};

use crate::adapter::ResetOutcome;

/// Measured averages for one adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterReport {
    pub name: String,
    /// Baseline-subtracted marginal cost of first-time caching, per call.
    /// May be negative when caching overhead is below measurement noise.
    pub set_avg_secs: f64,
    /// Absolute cache-read latency per call. Not baseline-subtracted: a get
    /// is not comparable to the uncached cost.
    pub get_avg_secs: f64,
    /// How the pre-measurement reset went.
    pub reset: ResetOutcome,
}

impl AdapterReport {
    /// Writes the fixed report block for this adapter.
    pub fn write_into<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "=== {} ===", self.name)?;
        writeln!(out, "Average set time: {} seconds", self.set_avg_secs)?;
        writeln!(out, "Average get time: {} seconds", self.get_avg_secs)?;
        if self.reset == ResetOutcome::Unsupported {
            writeln!(
                out,
                "Warning: store does not support clearing; numbers may include pre-existing entries"
            )?;
        }
        Ok(())
    }
}

/// Outcome of one adapter's reset/set/get triple.
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterOutcome {
    Measured(AdapterReport),
    /// Reset failed in a non-benign way; the adapter was skipped rather than
    /// measured against an unknown store state.
    Skipped { name: String, reason: String },
}

impl AdapterOutcome {
    pub fn name(&self) -> &str {
        match self {
            Self::Measured(report) => &report.name,
            Self::Skipped { name, .. } => name,
        }
    }

    pub fn write_into<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Self::Measured(report) => report.write_into(out),
            Self::Skipped { name, reason } => {
                writeln!(out, "=== {name} ===")?;
                writeln!(out, "Skipped: {reason}")
            },
        }
    }
}

/// Results of a full run, in roster order.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub iterations: usize,
    /// Average uncached call latency, computed once and reused per adapter.
    pub uncached_avg_secs: f64,
    pub outcomes: Vec<AdapterOutcome>,
}

impl RunSummary {
    /// Renders all report blocks as one string.
    pub fn render(&self) -> String {
        let mut buffer = Vec::new();
        for outcome in &self.outcomes {
            outcome
                .write_into(&mut buffer)
                .expect("writing to a Vec cannot fail");
        }
        String::from_utf8(buffer).expect("report blocks are valid utf-8")
    }
}

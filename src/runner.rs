//! Benchmark driver: baseline, then a reset/set/get triple per adapter.
//!
//! Execution is strictly sequential and single-threaded. Concurrency would
//! invalidate timing isolation, so no pass ever overlaps another and each
//! adapter owns its store exclusively for the duration of its triple.

use std::io::Write;
use std::path::PathBuf;

use rustc_hash::FxHashSet;

use crate::adapter::CacheAdapter;
use crate::error::{BenchError, Pass};
use crate::registry;
use crate::report::{AdapterOutcome, AdapterReport, RunSummary};
use crate::timer;
use crate::workload;

/// Run configuration, fixed at construction time.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Number of distinct inputs per pass. Both passes present the same
    /// inputs `0..iterations` in the same order.
    pub iterations: usize,
    /// Root directory for on-disk adapter namespaces.
    pub cache_root: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iterations: 5_000,
            cache_root: PathBuf::from("target").join("memobench"),
        }
    }
}

impl RunConfig {
    fn validate(&self) -> Result<(), BenchError> {
        if self.iterations == 0 {
            return Err(BenchError::config("iteration count must be positive"));
        }
        Ok(())
    }
}

/// Orchestrates a full benchmark run over an ordered adapter roster.
pub struct Runner {
    config: RunConfig,
    roster: Vec<Box<dyn CacheAdapter>>,
}

impl Runner {
    /// Builds a runner over an explicit roster. Adapter names must be unique:
    /// the name is the report key.
    pub fn new(config: RunConfig, roster: Vec<Box<dyn CacheAdapter>>) -> Result<Self, BenchError> {
        config.validate()?;

        let mut seen = FxHashSet::default();
        for adapter in &roster {
            if !seen.insert(adapter.name().to_string()) {
                return Err(BenchError::config(format!(
                    "duplicate adapter name `{}`",
                    adapter.name()
                )));
            }
        }

        Ok(Self { config, roster })
    }

    /// Builds a runner over the standard roster from `registry`.
    pub fn with_standard_roster(config: RunConfig) -> Result<Self, BenchError> {
        config.validate()?;
        let roster = registry::standard_roster(config.iterations, &config.cache_root)?;
        Self::new(config, roster)
    }

    /// Executes the full run, streaming one report block per adapter to
    /// `out`, and returns the collected summary.
    ///
    /// Reset failures skip the affected adapter and the run continues;
    /// measurement failures abort the run. Neither is ever papered over with
    /// a sentinel result.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<RunSummary, BenchError> {
        let n = self.config.iterations;

        // Uncached baseline, computed exactly once and reused per adapter.
        let baseline_total = timer::measure(|input| Ok(workload::expensive_call(input)), n)
            .map_err(|source| BenchError::Baseline { source })?;
        let uncached_avg = baseline_total.as_secs_f64() / n as f64;

        let mut outcomes = Vec::with_capacity(self.roster.len());

        for adapter in self.roster.iter_mut() {
            let name = adapter.name().to_string();

            let reset = match adapter.reset() {
                Ok(outcome) => outcome,
                Err(err) => {
                    let outcome = AdapterOutcome::Skipped {
                        name,
                        reason: err.to_string(),
                    };
                    outcome.write_into(out)?;
                    outcomes.push(outcome);
                    continue;
                },
            };

            let set_total = timer::measure(|input| adapter.call(input), n).map_err(|source| {
                BenchError::Measurement {
                    adapter: name.clone(),
                    pass: Pass::Set,
                    source,
                }
            })?;
            let set_avg = set_total.as_secs_f64() / n as f64 - uncached_avg;

            // Same inputs, same order: every call here hits the entries the
            // set pass just stored.
            let get_total = timer::measure(|input| adapter.call(input), n).map_err(|source| {
                BenchError::Measurement {
                    adapter: name.clone(),
                    pass: Pass::Get,
                    source,
                }
            })?;
            let get_avg = get_total.as_secs_f64() / n as f64;

            let outcome = AdapterOutcome::Measured(AdapterReport {
                name,
                set_avg_secs: set_avg,
                get_avg_secs: get_avg,
                reset,
            });
            outcome.write_into(out)?;
            outcomes.push(outcome);
        }

        Ok(RunSummary {
            iterations: n,
            uncached_avg_secs: uncached_avg,
            outcomes,
        })
    }
}

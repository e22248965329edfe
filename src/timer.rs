//! Per-call timing loop over a sequence of distinct inputs.

use std::time::{Duration, Instant};

use crate::error::{AdapterError, MeasureError};

/// Times `call` over the inputs `0..iterations`, in order, and returns the
/// total elapsed wall-clock time. Callers divide by `iterations` themselves.
///
/// Timestamps are taken immediately before and immediately after each call
/// with [`Instant`], so the accumulated deltas are immune to wall-clock
/// adjustments. Return values are discarded; side effects of the call (cache
/// population) are intentional.
///
/// The first call failure propagates immediately and the partial total is
/// discarded. A non-monotonic timestamp pair surfaces as
/// [`MeasureError::ClockAnomaly`].
pub fn measure<F>(mut call: F, iterations: usize) -> Result<Duration, MeasureError>
where
    F: FnMut(u64) -> Result<u64, AdapterError>,
{
    let mut total = Duration::ZERO;

    for iteration in 0..iterations {
        let start = Instant::now();
        call(iteration as u64).map_err(|source| MeasureError::Call { iteration, source })?;
        let end = Instant::now();

        let delta = end
            .checked_duration_since(start)
            .ok_or(MeasureError::ClockAnomaly { iteration })?;
        total += delta;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn feeds_inputs_in_order_without_gaps() {
        let mut seen = Vec::new();
        let total = measure(
            |input| {
                seen.push(input);
                Ok(input)
            },
            100,
        )
        .expect("measure");

        assert_eq!(seen, (0..100u64).collect::<Vec<_>>());
        assert!(total >= Duration::ZERO);
    }

    #[test]
    fn zero_iterations_touches_nothing() {
        let mut calls = 0usize;
        let total = measure(
            |input| {
                calls += 1;
                Ok(input)
            },
            0,
        )
        .expect("measure");

        assert_eq!(calls, 0);
        assert_eq!(total, Duration::ZERO);
    }

    #[test]
    fn accumulates_at_least_the_slept_time() {
        let total = measure(
            |input| {
                thread::sleep(Duration::from_millis(2));
                Ok(input)
            },
            5,
        )
        .expect("measure");

        assert!(total >= Duration::from_millis(10));
    }

    #[test]
    fn failure_propagates_and_stops_the_pass() {
        let mut calls = 0usize;
        let result = measure(
            |input| {
                calls += 1;
                if input == 3 {
                    Err(AdapterError::store("injected"))
                } else {
                    Ok(input)
                }
            },
            10,
        );

        match result {
            Err(MeasureError::Call { iteration, .. }) => assert_eq!(iteration, 3),
            other => panic!("expected call failure, got {other:?}"),
        }
        assert_eq!(calls, 4);
    }
}

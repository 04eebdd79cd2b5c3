//! Pairing scalar and vector results into per-image comparisons.

use serde::Serialize;
use std::time::Duration;

use crate::benchmark::harness::BenchmarkResult;
use crate::convert::Method;
use crate::pipeline::speedup;

/// Scalar vs. vector timing for one image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub image: String,
    pub pixel_count: usize,
    pub scalar: Duration,
    pub vector: Duration,
    /// `scalar / vector`; `None` when the vector time rounds to zero.
    pub speedup: Option<f64>,
    /// Largest channel difference between the two outputs.
    pub max_channel_delta: u8,
}

/// Pair up the scalar and vector result of each image.
///
/// A vector result is paired with the scalar result just before it, so
/// images sharing a name still get one row each. Rows come out in input
/// order; a result without its partner is skipped. Sorting by size, e.g. for
/// a plot, is left to the caller.
pub fn summarize(results: &[BenchmarkResult]) -> Vec<Comparison> {
    let mut comparisons = Vec::with_capacity(results.len() / 2);
    let mut pending: Option<&BenchmarkResult> = None;
    for result in results {
        match result.method {
            Method::Scalar => pending = Some(result),
            Method::Vector => {
                let Some(scalar) = pending.take().filter(|s| s.image == result.image) else {
                    continue;
                };
                comparisons.push(Comparison {
                    image: result.image.clone(),
                    pixel_count: scalar.pixel_count(),
                    scalar: scalar.elapsed,
                    vector: result.elapsed,
                    speedup: speedup(scalar.elapsed, result.elapsed),
                    max_channel_delta: result.divergence.max(scalar.divergence),
                });
            }
        }
    }
    comparisons
}

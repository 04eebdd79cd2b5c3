//! Harness configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::params::AdjustParams;

/// Default number of untimed warm-up runs per (image, method).
const DEFAULT_WARMUP_RUNS: u32 = 1;
/// Default number of timed runs per (image, method).
const DEFAULT_TIMED_RUNS: u32 = 3;

/// Square edge lengths used when benchmarking rescaled copies of one image.
pub const DEFAULT_SIZES: [u32; 3] = [100, 400, 800];

/// How the harness runs each (image, method) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Adjustments applied during the untimed setup.
    pub params: AdjustParams,
    /// Runs discarded before timing starts.
    pub warmup_runs: u32,
    /// Timed runs; the reported duration is their median. Must be ≥ 1.
    pub timed_runs: u32,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            params: AdjustParams::new(120.0, 1.5),
            warmup_runs: DEFAULT_WARMUP_RUNS,
            timed_runs: DEFAULT_TIMED_RUNS,
        }
    }
}

impl BenchmarkConfig {
    /// One timed run, no warm-up: the minimum the comparison needs.
    pub fn single_run(params: AdjustParams) -> Self {
        Self {
            params,
            warmup_runs: 0,
            timed_runs: 1,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.timed_runs == 0 {
            return Err(CoreError::invalid_parameter(
                "timed_runs",
                0.0,
                "at least one timed run is required",
            ));
        }
        self.params.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = BenchmarkConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.params.hue_shift, 120.0);
        assert_eq!(config.params.value_exponent, 1.5);
    }

    #[test]
    fn test_zero_timed_runs_rejected() {
        let config = BenchmarkConfig {
            timed_runs: 0,
            ..BenchmarkConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidParameter {
                name: "timed_runs",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let config = BenchmarkConfig::single_run(AdjustParams::new(0.0, 0.1));
        assert!(config.validate().is_err());
    }
}

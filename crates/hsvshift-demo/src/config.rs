//! Runtime configuration for the demo.

use std::path::Path;

use hsvshift_core::{AdjustParams, BenchmarkConfig};

use crate::AdjustArgs;
use crate::error::DemoError;

/// Default timed runs per (image, method) in `compare`.
const DEFAULT_TIMED_RUNS: u32 = 3;
/// Default warm-up runs per (image, method) in `compare`.
const DEFAULT_WARMUP_RUNS: u32 = 1;

/// Defaults that can be overridden from the environment.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Timed runs per (image, method).
    pub timed_runs: u32,
    /// Warm-up runs per (image, method).
    pub warmup_runs: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            timed_runs: std::env::var("HSVSHIFT_TIMED_RUNS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMED_RUNS),
            warmup_runs: std::env::var("HSVSHIFT_WARMUP_RUNS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_WARMUP_RUNS),
        }
    }
}

impl DemoConfig {
    /// Harness configuration with command-line overrides applied.
    pub fn benchmark(
        &self,
        params: AdjustParams,
        runs: Option<u32>,
        warmup: Option<u32>,
    ) -> BenchmarkConfig {
        BenchmarkConfig {
            params,
            warmup_runs: warmup.unwrap_or(self.warmup_runs),
            timed_runs: runs.unwrap_or(self.timed_runs),
        }
    }
}

fn load_params_file(path: &Path) -> Result<AdjustParams, DemoError> {
    let text = std::fs::read_to_string(path).map_err(|source| DemoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DemoError::Params {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve adjustment parameters: flags override the file, the file
/// overrides `base`.
pub fn resolve_params(args: &AdjustArgs, base: AdjustParams) -> Result<AdjustParams, DemoError> {
    let mut params = match &args.params {
        Some(path) => load_params_file(path)?,
        None => base,
    };
    if let Some(hue_shift) = args.hue_shift {
        params.hue_shift = hue_shift;
    }
    if let Some(saturation) = args.saturation {
        params.saturation = saturation;
    }
    if let Some(value_exponent) = args.value_exponent {
        params.value_exponent = value_exponent;
    }
    params.validate()?;
    Ok(params)
}

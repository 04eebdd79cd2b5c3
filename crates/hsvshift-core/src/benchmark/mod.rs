//! Benchmark harness — times both converters over a set of images.
//!
//! For every image the harness runs the shared setup
//! ([`prepare`](crate::pipeline::prepare)) once, outside the timed region,
//! then times each converter on the same adjusted HSV image. Results are
//! plain data; plotting and printing belong to the caller.

pub mod config;
pub mod harness;
pub mod summary;

pub use config::{BenchmarkConfig, DEFAULT_SIZES};
pub use harness::{
    BenchmarkImage, BenchmarkResult, resized_variants, run_comparison, run_comparison_with,
};
pub use summary::{Comparison, summarize};

//! `modify` and `compare` subcommands.

use std::path::PathBuf;

use hsvshift_core::benchmark::{DEFAULT_SIZES, resized_variants, run_comparison_with};
use hsvshift_core::{AdjustParams, AdjustmentReport, BenchmarkImage, Comparison, Method};
use hsvshift_core::{modify as modify_image, rgb_to_hsv, summarize};
use hsvshift_io::{load_image, save_image};

use crate::AdjustArgs;
use crate::config::{DemoConfig, resolve_params};
use crate::error::DemoError;

/// Parameters used when neither flags nor a file set them.
const DEMO_PARAMS: AdjustParams = AdjustParams {
    hue_shift: 120.0,
    saturation: 1.0,
    value_exponent: 1.5,
};

pub struct ModifyOptions {
    pub input: PathBuf,
    pub adjust: AdjustArgs,
    pub save: Option<PathBuf>,
    pub save_method: Method,
    pub print_values: bool,
    pub samples: usize,
}

pub struct CompareOptions {
    pub inputs: Vec<PathBuf>,
    pub adjust: AdjustArgs,
    pub resize: bool,
    pub sizes: Option<Vec<u32>>,
    pub runs: Option<u32>,
    pub warmup: Option<u32>,
    pub json: bool,
}

fn print_report(report: &AdjustmentReport) {
    println!("\nHue channel (degrees):");
    println!(
        "  original [{:.1}, {:.1}]  modified [{:.1}, {:.1}]  shift {}°",
        report.hue_before.min,
        report.hue_before.max,
        report.hue_after.min,
        report.hue_after.max,
        report.params.hue_shift
    );
    println!("\nValue channel (0-255):");
    println!(
        "  original [{:.0}, {:.0}]  modified [{:.0}, {:.0}]  exponent {}",
        report.value_before.min,
        report.value_before.max,
        report.value_after.min,
        report.value_after.max,
        report.params.value_exponent
    );

    println!("\nSample pixels:");
    for (i, s) in report.samples.iter().enumerate() {
        println!(
            "  {} at ({}, {}): hue {:.1}° -> {:.1}°, value {:.0} -> {:.0} ({:.4} -> {:.4})",
            i + 1,
            s.x,
            s.y,
            s.hue_before,
            s.hue_after,
            s.value_before,
            s.value_after,
            s.normalized_before,
            s.normalized_after
        );
    }
}

pub fn modify(opts: &ModifyOptions) -> Result<(), DemoError> {
    let params = resolve_params(&opts.adjust, DEMO_PARAMS)?;
    let image = load_image(&opts.input)?;
    let out = modify_image(&image, &params)?;

    if opts.print_values {
        let before = rgb_to_hsv(&image);
        let report = AdjustmentReport::compute(&before, &out.hsv, &params, opts.samples)?;
        print_report(&report);
    }

    println!("\nMethod comparison for {image}:");
    println!("  scalar: {:.6} s", out.scalar_elapsed.as_secs_f64());
    println!("  vector: {:.6} s", out.vector_elapsed.as_secs_f64());
    match out.speedup() {
        Some(speedup) => println!("  speedup: {speedup:.2}x"),
        None => println!("  speedup: n/a"),
    }
    println!("  max channel difference: {}", out.max_channel_delta()?);

    if let Some(path) = &opts.save {
        save_image(path, out.output(opts.save_method))?;
    }
    Ok(())
}

fn load_inputs(opts: &CompareOptions) -> Result<Vec<BenchmarkImage>, DemoError> {
    if opts.resize {
        let Some(first) = opts.inputs.first() else {
            return Err(DemoError::NoImages);
        };
        if opts.inputs.len() > 1 {
            tracing::warn!(
                "--resize uses only {}; ignoring {} other input(s)",
                first.display(),
                opts.inputs.len() - 1
            );
        }
        let image = load_image(first)?;
        let sizes = opts.sizes.as_deref().unwrap_or(&DEFAULT_SIZES[..]);
        let name = first.display().to_string();
        return Ok(resized_variants(&name, &image, sizes)?);
    }

    let mut images = Vec::with_capacity(opts.inputs.len());
    for path in &opts.inputs {
        match load_image(path) {
            Ok(image) => images.push(BenchmarkImage::new(path.display().to_string(), image)),
            Err(err) => tracing::warn!("skipping {}: {err}", path.display()),
        }
    }
    if images.is_empty() {
        return Err(DemoError::NoImages);
    }
    Ok(images)
}

fn print_table(comparisons: &[Comparison]) {
    println!(
        "{:<40} {:>10} {:>12} {:>12} {:>9} {:>6}",
        "image", "pixels", "scalar (s)", "vector (s)", "speedup", "delta"
    );
    for c in comparisons {
        let speedup = c
            .speedup
            .map_or_else(|| "n/a".to_string(), |s| format!("{s:.2}x"));
        println!(
            "{:<40} {:>10} {:>12.6} {:>12.6} {:>9} {:>6}",
            c.image,
            c.pixel_count,
            c.scalar.as_secs_f64(),
            c.vector.as_secs_f64(),
            speedup,
            c.max_channel_delta
        );
    }
}

pub fn compare(config: &DemoConfig, opts: &CompareOptions) -> Result<(), DemoError> {
    let params = resolve_params(&opts.adjust, DEMO_PARAMS)?;
    let bench = config.benchmark(params, opts.runs, opts.warmup);
    let images = load_inputs(opts)?;

    let results = run_comparison_with(&images, &bench)?;
    let mut comparisons = summarize(&results);
    comparisons.sort_by_key(|c| c.pixel_count);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_table(&comparisons);
    }
    Ok(())
}

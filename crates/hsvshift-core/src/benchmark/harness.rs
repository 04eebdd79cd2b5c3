//! Timed runs of both converters.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::benchmark::config::BenchmarkConfig;
use crate::convert::{Method, max_channel_delta};
use crate::error::Result;
use crate::image::{HsvImage, RgbImage};
use crate::pipeline::{prepare, timed};

/// A named input image.
#[derive(Debug, Clone)]
pub struct BenchmarkImage {
    /// Identity reported back in each result (usually a path or size label).
    pub name: String,
    pub image: RgbImage,
}

impl BenchmarkImage {
    pub fn new(name: impl Into<String>, image: RgbImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }
}

/// Timing of one converter on one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Name of the image this result belongs to.
    pub image: String,
    pub width: u32,
    pub height: u32,
    pub method: Method,
    /// Median wall-clock time of the conversion step alone.
    pub elapsed: Duration,
    /// Number of timed runs behind `elapsed`.
    pub runs: u32,
    /// Largest channel difference from the scalar output (0 for scalar).
    pub divergence: u8,
}

impl BenchmarkResult {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

fn median(mut samples: Vec<Duration>) -> Duration {
    samples.sort_unstable();
    samples
        .get(samples.len().saturating_sub(1) / 2)
        .copied()
        .unwrap_or_default()
}

/// Time `method` on `hsv`: warm-up runs first, then `timed_runs` measured
/// runs. Returns the output of the last run and the median duration.
fn measure(method: Method, hsv: &HsvImage, config: &BenchmarkConfig) -> (RgbImage, Duration) {
    for _ in 0..config.warmup_runs {
        let _ = std::hint::black_box(method.convert(hsv));
    }

    let mut samples = Vec::with_capacity(config.timed_runs as usize);
    let mut output = None;
    for run in 0..config.timed_runs {
        let (rgb, elapsed) = timed(method, std::hint::black_box(hsv));
        tracing::debug!("{method} run {run}: {elapsed:?}");
        samples.push(elapsed);
        output = Some(rgb);
    }

    // `timed_runs` is validated to be at least one.
    let output = output.unwrap_or_else(|| method.convert(hsv));
    (output, median(samples))
}

/// Run both converters over every image with `config`.
///
/// Returns one result per (image, method) pair, in input order, scalar
/// first. Only the conversion step is inside the timed region.
pub fn run_comparison_with(
    images: &[BenchmarkImage],
    config: &BenchmarkConfig,
) -> Result<Vec<BenchmarkResult>> {
    config.validate()?;

    let mut results = Vec::with_capacity(images.len() * Method::ALL.len());
    for input in images {
        let hsv = prepare(&input.image, &config.params)?;

        let mut reference: Option<RgbImage> = None;
        for method in Method::ALL {
            let (output, elapsed) = measure(method, &hsv, config);
            let divergence = match &reference {
                Some(scalar) => max_channel_delta(scalar, &output)?,
                None => 0,
            };

            results.push(BenchmarkResult {
                image: input.name.clone(),
                width: input.image.width,
                height: input.image.height,
                method,
                elapsed,
                runs: config.timed_runs,
                divergence,
            });

            if method == Method::Scalar {
                reference = Some(output);
            }
        }

        tracing::info!(
            "benchmarked {} ({}x{}, {} pixels)",
            input.name,
            input.image.width,
            input.image.height,
            input.image.pixel_count()
        );
    }

    Ok(results)
}

/// Run both converters over every image with the default configuration.
pub fn run_comparison(images: &[BenchmarkImage]) -> Result<Vec<BenchmarkResult>> {
    run_comparison_with(images, &BenchmarkConfig::default())
}

/// Nearest-neighbour rescaled square copies of `image`, one per edge length.
pub fn resized_variants(
    name: &str,
    image: &RgbImage,
    sizes: &[u32],
) -> Result<Vec<BenchmarkImage>> {
    sizes
        .iter()
        .map(|&size| {
            let resized = image.resize_nearest(size, size)?;
            Ok(BenchmarkImage::new(format!("{name}@{size}x{size}"), resized))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::params::AdjustParams;

    fn checker(size: u32) -> RgbImage {
        let pixels = (0..size * size)
            .map(|i| {
                if (i / size + i % size) % 2 == 0 {
                    [200, 40, 90]
                } else {
                    [30, 180, 220]
                }
            })
            .collect();
        RgbImage::new(size, size, pixels).unwrap()
    }

    #[test]
    fn test_one_result_per_image_and_method() {
        let images = vec![
            BenchmarkImage::new("small", checker(4)),
            BenchmarkImage::new("large", checker(16)),
        ];
        let config = BenchmarkConfig::single_run(AdjustParams::new(90.0, 2.0));
        let results = run_comparison_with(&images, &config).unwrap();

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].image, "small");
        assert_eq!(results[0].method, Method::Scalar);
        assert_eq!(results[1].method, Method::Vector);
        assert_eq!(results[2].image, "large");
        assert_eq!(results[3].pixel_count(), 256);
        for result in &results {
            assert_eq!(result.runs, 1);
            assert!(result.divergence <= 1);
        }
    }

    #[test]
    fn test_repeated_runs_recorded() {
        let images = vec![BenchmarkImage::new("img", checker(8))];
        let config = BenchmarkConfig {
            warmup_runs: 2,
            timed_runs: 5,
            ..BenchmarkConfig::default()
        };
        let results = run_comparison_with(&images, &config).unwrap();
        assert!(results.iter().all(|r| r.runs == 5));
    }

    #[test]
    fn test_empty_input_gives_no_results() {
        assert!(run_comparison(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected_before_running() {
        let images = vec![BenchmarkImage::new("img", checker(2))];
        let config = BenchmarkConfig {
            timed_runs: 0,
            ..BenchmarkConfig::default()
        };
        assert!(matches!(
            run_comparison_with(&images, &config),
            Err(CoreError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_median() {
        let ms = Duration::from_millis;
        assert_eq!(median(vec![ms(5), ms(1), ms(3)]), ms(3));
        assert_eq!(median(vec![ms(4), ms(2)]), ms(2));
        assert_eq!(median(vec![]), Duration::ZERO);
    }

    #[test]
    fn test_duplicate_names_summarized_separately() {
        let images = vec![
            BenchmarkImage::new("same", checker(2)),
            BenchmarkImage::new("same", checker(30)),
        ];
        let results = run_comparison_with(&images, &BenchmarkConfig::default()).unwrap();
        let summary = crate::benchmark::summarize(&results);
        let counts: Vec<usize> = summary.iter().map(|c| c.pixel_count).collect();
        assert_eq!(results.len(), 4);
        assert_eq!(counts, vec![4, 900]);
    }

    #[test]
    fn test_resized_variants_reject_inconsistent_image() {
        let image = RgbImage {
            width: 4,
            height: 4,
            pixels: vec![[1, 2, 3], [4, 5, 6], [7, 8, 9]],
        };
        assert!(matches!(
            resized_variants("x", &image, &[2]),
            Err(CoreError::InvalidImage { .. })
        ));
    }

    #[test]
    fn test_resized_variants() {
        let variants = resized_variants("photo", &checker(10), &[3, 7]).unwrap();
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0].name, "photo@3x3");
        assert_eq!(variants[1].image.pixel_count(), 49);
    }
}

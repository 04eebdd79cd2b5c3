//! hsvshift demo — command-line front end for the HSV adjustment core.
//!
//! `modify` adjusts one image and reconstructs it with both converters;
//! `compare` times the converters over several images.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;

#[derive(Parser)]
#[command(name = "hsvshift")]
#[command(version, about = "HSV hue/value adjustment with scalar and vector reconstruction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Adjustment flags shared by both subcommands. Unset flags fall back to the
/// parameters file, then to the defaults.
#[derive(clap::Args, Debug, Clone)]
pub struct AdjustArgs {
    /// Hue shift in degrees (wrapped modulo 360)
    #[arg(long, value_name = "DEGREES", allow_negative_numbers = true)]
    pub hue_shift: Option<f32>,

    /// Saturation multiplier (0-2)
    #[arg(long, value_name = "FACTOR")]
    pub saturation: Option<f32>,

    /// Power-law exponent for the value channel (0.5-4)
    #[arg(long, value_name = "EXPONENT")]
    pub value_exponent: Option<f32>,

    /// JSON file with hue_shift / saturation / value_exponent
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Adjust one image and convert it back with both methods
    Modify {
        /// Input image
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        #[command(flatten)]
        adjust: AdjustArgs,

        /// Where to write the adjusted image
        #[arg(short, long, value_name = "FILE")]
        save: Option<PathBuf>,

        /// Which method's output to save: scalar or vector
        #[arg(long, value_name = "METHOD", default_value = "vector")]
        save_method: hsvshift_core::Method,

        /// Print hue/value ranges and sample pixels before and after
        #[arg(long)]
        print_values: bool,

        /// Number of sample pixels shown with --print-values
        #[arg(long, value_name = "N", default_value = "5")]
        samples: usize,
    },

    /// Time both methods over a set of images
    Compare {
        /// Input images
        #[arg(value_name = "INPUTS", required = true)]
        inputs: Vec<PathBuf>,

        #[command(flatten)]
        adjust: AdjustArgs,

        /// Benchmark square rescaled copies of the first input instead
        #[arg(long)]
        resize: bool,

        /// Edge lengths used with --resize
        #[arg(long, value_name = "N,N,...", value_delimiter = ',')]
        sizes: Option<Vec<u32>>,

        /// Timed runs per image and method
        #[arg(long, value_name = "N")]
        runs: Option<u32>,

        /// Untimed warm-up runs per image and method
        #[arg(long, value_name = "N")]
        warmup: Option<u32>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = DemoConfig::default();

    let result = match cli.command {
        Commands::Modify {
            input,
            adjust,
            save,
            save_method,
            print_values,
            samples,
        } => commands::modify(&commands::ModifyOptions {
            input,
            adjust,
            save,
            save_method,
            print_values,
            samples,
        }),
        Commands::Compare {
            inputs,
            adjust,
            resize,
            sizes,
            runs,
            warmup,
            json,
        } => commands::compare(
            &config,
            &commands::CompareOptions {
                inputs,
                adjust,
                resize,
                sizes,
                runs,
                warmup,
                json,
            },
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

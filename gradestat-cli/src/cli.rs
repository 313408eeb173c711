use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gradestat_stats::VarianceConvention;

/// Score statistics and grade distributions
#[derive(Parser, Debug)]
#[command(name = "gradestat", version, about = "Score statistics and grade distribution reports")]
pub struct Cli {
    /// Path to configuration file (TOML, overrides $GRADESTAT_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Where the sample comes from: positional values, a file, or stdin.
#[derive(Args, Debug, Clone, Default)]
pub struct SampleArgs {
    /// Sample values (whitespace- or comma-separated)
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Read the sample from a file instead of the command line
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Descriptive statistics of a sample
    Stats {
        #[command(flatten)]
        sample: SampleArgs,
        /// Variance denominator
        #[arg(long, value_parser = parse_convention)]
        variance: Option<VarianceConvention>,
        /// Digits after the decimal point
        #[arg(long)]
        decimals: Option<usize>,
    },

    /// Binned frequency distribution of a sample
    Dist {
        #[command(flatten)]
        sample: SampleArgs,
        /// Ascending bin boundaries, e.g. 0,60,70,80,90,100
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        boundaries: Option<Vec<f64>>,
    },

    /// Pass/fail counts against a threshold
    Analyze {
        #[command(flatten)]
        sample: SampleArgs,
        /// Minimum passing score (inclusive)
        #[arg(long)]
        pass_threshold: Option<f64>,
    },

    /// Statistics and distribution together
    Report {
        #[command(flatten)]
        sample: SampleArgs,
    },
}

fn parse_convention(s: &str) -> Result<VarianceConvention, String> {
    s.parse().map_err(|e: gradestat_core::GradestatError| e.to_string())
}

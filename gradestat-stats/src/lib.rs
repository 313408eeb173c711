//! Score statistics for the gradestat workspace.
//!
//! - **Samples**: [`sample`] validates and parses numeric input
//! - **Descriptive statistics**: count, sum, average, median, mode, range,
//!   variance and standard deviation via [`compute_statistics`]
//! - **Distributions**: boundary-based binning via [`bin_distribution`]
//! - **Score analysis**: pass/fail counts via [`analyze_scores`]
//! - **Reports**: fixed-shape text rendering in [`report`]
//!
//! All operations are pure functions of their inputs.

pub mod descriptive;
pub mod distribution;
pub mod report;
pub mod sample;
pub mod scores;

pub use descriptive::{compute_statistics, compute_statistics_with, StatisticsResult, VarianceConvention};
pub use distribution::{bin_distribution, Bin, Distribution, DEFAULT_GRADE_BOUNDARIES};
pub use report::{format_analysis, format_distribution, format_report, ReportOptions};
pub use sample::{parse_sample, parse_sample_text, read_sample_file, validate_sample};
pub use scores::{analyze_scores, ScoreAnalysis, DEFAULT_PASS_THRESHOLD};

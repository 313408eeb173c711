use anyhow::Result;
use serde::Serialize;
use std::io::Read;

use gradestat_stats::report::{format_analysis_with, format_distribution_with, format_report_with};
use gradestat_stats::{
    analyze_scores, bin_distribution, compute_statistics_with, Distribution, ReportOptions,
    StatisticsResult,
};

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::GradestatConfig;
use crate::input::read_sample;
use crate::output::json_ok;

#[derive(Debug, Serialize)]
struct FullReport {
    statistics: StatisticsResult,
    distribution: Distribution,
}

/// Execute the parsed command and return what should be printed.
pub fn run<R: Read>(cli: &Cli, config: &GradestatConfig, stdin: R) -> Result<String> {
    let json = cli.format == OutputFormat::Json;
    match &cli.command {
        Commands::Stats { sample, variance, decimals } => {
            let data = read_sample(sample, stdin)?;
            let convention = variance.unwrap_or(config.statistics.variance);
            let stats = compute_statistics_with(&data, convention)?;
            tracing::info!(count = stats.count, ?convention, "computed statistics");
            if json {
                return Ok(json_ok(&stats));
            }
            let options = ReportOptions {
                decimal_places: decimals.unwrap_or(config.report.decimal_places),
                ..config.report.clone()
            };
            Ok(format_report_with(&stats, &options))
        }
        Commands::Dist { sample, boundaries } => {
            let data = read_sample(sample, stdin)?;
            let boundaries = boundaries.as_deref().unwrap_or(config.distribution.boundaries.as_slice());
            let dist = bin_distribution(&data, boundaries)?;
            if dist.dropped > 0 {
                tracing::warn!(dropped = dist.dropped, "values outside the bin boundaries were ignored");
            }
            if json {
                return Ok(json_ok(&dist));
            }
            Ok(format_distribution_with(&dist, data.len(), &config.report))
        }
        Commands::Analyze { sample, pass_threshold } => {
            let data = read_sample(sample, stdin)?;
            let threshold = pass_threshold.unwrap_or(config.analysis.pass_threshold);
            let analysis = analyze_scores(&data, threshold)?;
            if json {
                return Ok(json_ok(&analysis));
            }
            Ok(format_analysis_with(&analysis, &config.report))
        }
        Commands::Report { sample } => {
            let data = read_sample(sample, stdin)?;
            let statistics = compute_statistics_with(&data, config.statistics.variance)?;
            let distribution = bin_distribution(&data, &config.distribution.boundaries)?;
            if json {
                return Ok(json_ok(&FullReport { statistics, distribution }));
            }
            Ok(format!(
                "{}\n\n{}",
                format_report_with(&statistics, &config.report),
                format_distribution_with(&distribution, data.len(), &config.report),
            ))
        }
    }
}

//! Plain-text rendering of statistics, distributions and score analyses.
//!
//! Every formatter is a pure projection of its input. Absent values render as
//! [`ReportOptions::missing`] so a report always has the same lines.

use crate::descriptive::StatisticsResult;
use crate::distribution::Distribution;
use crate::scores::ScoreAnalysis;

/// Decimal places used when the caller has no preference.
pub const DEFAULT_DECIMAL_PLACES: usize = 2;

/// Percentage points represented by one bar glyph.
const PERCENT_PER_BAR_UNIT: f64 = 2.0;

/// Rendering options shared by the formatters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReportOptions {
    /// Digits after the decimal point for numeric statistics.
    pub decimal_places: usize,
    /// Marker printed in place of an absent value.
    pub missing: String,
    /// Glyph repeated to draw distribution bars.
    pub bar: char,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            missing: "no data".to_string(),
            bar: '#',
        }
    }
}

impl ReportOptions {
    fn number(&self, value: Option<f64>) -> String {
        match value {
            Some(v) => format!("{:.*}", self.decimal_places, v),
            None => self.missing.clone(),
        }
    }

    fn list(&self, values: Option<&[f64]>) -> String {
        match values {
            Some(vs) => vs
                .iter()
                .map(|&v| format!("{:.*}", self.decimal_places, v))
                .collect::<Vec<_>>()
                .join(", "),
            None => self.missing.clone(),
        }
    }
}

/// Render `result` with `decimal_places` digits and the default marker.
///
/// # Example
///
/// ```
/// use gradestat_stats::descriptive::compute_statistics;
/// use gradestat_stats::report::format_report;
///
/// let report = format_report(&compute_statistics(&[]).unwrap(), 2);
/// assert!(report.contains("Average: no data"));
/// ```
pub fn format_report(result: &StatisticsResult, decimal_places: usize) -> String {
    let options = ReportOptions {
        decimal_places,
        ..ReportOptions::default()
    };
    format_report_with(result, &options)
}

/// Render `result` with explicit [`ReportOptions`].
pub fn format_report_with(result: &StatisticsResult, options: &ReportOptions) -> String {
    [
        format!("Count: {}", result.count),
        format!("Sum: {:.*}", options.decimal_places, result.sum),
        format!("Average: {}", options.number(result.average)),
        format!("Median: {}", options.number(result.median)),
        format!("Mode: {}", options.list(result.mode.as_deref())),
        format!("Max: {}", options.number(result.max)),
        format!("Min: {}", options.number(result.min)),
        format!("Range: {}", options.number(result.range)),
        format!("Variance: {}", options.number(result.variance)),
        format!("Std deviation: {}", options.number(result.std_deviation)),
    ]
    .join("\n")
}

/// Render each bin with its count, share of `total`, and a bar.
///
/// One bar glyph stands for two percentage points, truncated. A `total` of
/// zero renders every share as 0%.
pub fn format_distribution(distribution: &Distribution, total: usize) -> String {
    format_distribution_with(distribution, total, &ReportOptions::default())
}

/// [`format_distribution`] with explicit [`ReportOptions`].
pub fn format_distribution_with(
    distribution: &Distribution,
    total: usize,
    options: &ReportOptions,
) -> String {
    let mut lines = vec!["Score distribution:".to_string()];
    for (label, count) in distribution.iter() {
        let percentage = percentage(count, total);
        let units = (percentage / PERCENT_PER_BAR_UNIT) as usize;
        let bar: String = std::iter::repeat(options.bar).take(units).collect();
        let line = format!("{label}: {count} ({percentage:.1}%) {bar}");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Render a pass/fail analysis. The average is shown to one decimal place.
pub fn format_analysis(analysis: &ScoreAnalysis) -> String {
    format_analysis_with(analysis, &ReportOptions::default())
}

/// [`format_analysis`] with explicit [`ReportOptions`] (only `missing` is used).
pub fn format_analysis_with(analysis: &ScoreAnalysis, options: &ReportOptions) -> String {
    let raw = |v: Option<f64>| v.map_or_else(|| options.missing.clone(), |v| v.to_string());
    let average = analysis
        .average
        .map_or_else(|| options.missing.clone(), |v| format!("{v:.1}"));
    [
        format!("Total: {}", analysis.total_count),
        format!("Passed: {}", analysis.pass_count),
        format!("Failed: {}", analysis.fail_count),
        format!("Highest score: {}", raw(analysis.max_score)),
        format!("Lowest score: {}", raw(analysis.min_score)),
        format!("Average score: {average}"),
    ]
    .join("\n")
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptive::compute_statistics;
    use crate::distribution::{bin_distribution, DEFAULT_GRADE_BOUNDARIES};
    use crate::scores::{analyze_scores, DEFAULT_PASS_THRESHOLD};

    const SCORES: [f64; 12] = [
        85.0, 92.0, 78.0, 45.0, 63.0, 59.0, 71.0, 88.0, 95.0, 32.0, 85.0, 91.0,
    ];

    #[test]
    fn report_for_empty_keeps_shape() {
        let report = format_report(&compute_statistics(&[]).unwrap(), 2);
        let expected = "\
Count: 0
Sum: 0.00
Average: no data
Median: no data
Mode: no data
Max: no data
Min: no data
Range: no data
Variance: no data
Std deviation: no data";
        assert_eq!(report, expected);
    }

    #[test]
    fn report_same_line_count_either_way() {
        let empty = format_report(&compute_statistics(&[]).unwrap(), 2);
        let full = format_report(&compute_statistics(&SCORES).unwrap(), 2);
        assert_eq!(empty.lines().count(), full.lines().count());
    }

    #[test]
    fn report_decimal_places() {
        let stats = compute_statistics(&[1.0, 2.0]).unwrap();
        let report = format_report(&stats, 3);
        assert!(report.contains("Average: 1.500"));
        assert!(report.contains("Median: 1.500"));
        let report = format_report(&stats, 0);
        assert!(report.contains("Sum: 3\n"));
    }

    #[test]
    fn report_mode_comma_joined() {
        let stats = compute_statistics(&[1.0, 2.0, 3.0]).unwrap();
        assert!(format_report(&stats, 1).contains("Mode: 1.0, 2.0, 3.0"));
    }

    #[test]
    fn report_score_sample() {
        let report = format_report(&compute_statistics(&SCORES).unwrap(), 2);
        assert!(report.starts_with("Count: 12\nSum: 884.00\nAverage: 73.67\n"));
        assert!(report.contains("Mode: 85.00"));
        assert!(report.contains("Range: 63.00"));
    }

    #[test]
    fn report_custom_marker() {
        let options = ReportOptions {
            missing: "-".into(),
            ..ReportOptions::default()
        };
        let report = format_report_with(&compute_statistics(&[]).unwrap(), &options);
        assert!(report.contains("Median: -"));
    }

    #[test]
    fn distribution_lines() {
        let dist = bin_distribution(&SCORES, &DEFAULT_GRADE_BOUNDARIES).unwrap();
        let text = format_distribution(&dist, SCORES.len());
        let expected = "\
Score distribution:
0-60: 3 (25.0%) ############
60-70: 2 (16.7%) ########
70-80: 2 (16.7%) ########
80-90: 3 (25.0%) ############
90-100: 2 (16.7%) ########";
        assert_eq!(text, expected);
    }

    #[test]
    fn distribution_zero_total() {
        let dist = bin_distribution(&[], &DEFAULT_GRADE_BOUNDARIES).unwrap();
        let text = format_distribution(&dist, 0);
        assert!(text.contains("0-60: 0 (0.0%)"));
        assert!(!text.contains('#'));
    }

    #[test]
    fn distribution_custom_bar() {
        let dist = bin_distribution(&[10.0], &[0.0, 100.0]).unwrap();
        let options = ReportOptions {
            bar: '*',
            ..ReportOptions::default()
        };
        let text = format_distribution_with(&dist, 1, &options);
        assert!(text.ends_with(&"*".repeat(50)));
    }

    #[test]
    fn analysis_text() {
        let scores = [85.0, 92.0, 78.0, 45.0, 63.0, 59.0, 71.0, 88.0, 95.0, 32.0];
        let a = analyze_scores(&scores, DEFAULT_PASS_THRESHOLD).unwrap();
        let expected = "\
Total: 10
Passed: 7
Failed: 3
Highest score: 95
Lowest score: 32
Average score: 70.8";
        assert_eq!(format_analysis(&a), expected);
    }

    #[test]
    fn analysis_empty() {
        let a = analyze_scores(&[], DEFAULT_PASS_THRESHOLD).unwrap();
        let text = format_analysis(&a);
        assert!(text.contains("Highest score: no data"));
        assert!(text.contains("Average score: no data"));
    }
}

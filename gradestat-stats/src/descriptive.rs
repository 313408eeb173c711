//! Descriptive statistics for numeric samples.
//!
//! [`compute_statistics`] returns a fixed-shape [`StatisticsResult`]. An empty
//! sample is not an error: every statistic that needs at least one value is
//! `None`, so an absent average is never confused with a true zero.
//!
//! Variance uses the sample convention (`n - 1` denominator) unless the caller
//! asks for [`VarianceConvention::Population`] through
//! [`compute_statistics_with`]. The convention used is stored in the result.

use gradestat_core::{Result, Summarizable};

use crate::sample::validate_sample;

/// Denominator used for variance and standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VarianceConvention {
    /// Sample variance, `n - 1` denominator (Bessel's correction).
    #[default]
    Sample,
    /// Population variance, `n` denominator.
    Population,
}

impl VarianceConvention {
    /// Degrees-of-freedom correction subtracted from `n`.
    pub fn ddof(self) -> usize {
        match self {
            VarianceConvention::Sample => 1,
            VarianceConvention::Population => 0,
        }
    }
}

impl std::str::FromStr for VarianceConvention {
    type Err = gradestat_core::GradestatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sample" => Ok(VarianceConvention::Sample),
            "population" => Ok(VarianceConvention::Population),
            _ => Err(gradestat_core::GradestatError::InvalidConfiguration(format!(
                "unknown variance convention: {s:?} (expected \"sample\" or \"population\")"
            ))),
        }
    }
}

/// Aggregate descriptive statistics for a numeric sample.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatisticsResult {
    /// Number of observations.
    pub count: usize,
    /// Arithmetic sum (0 for an empty sample).
    pub sum: f64,
    /// Arithmetic mean.
    pub average: Option<f64>,
    /// Median (mean of the two central values for even counts).
    pub median: Option<f64>,
    /// Every value tied for the highest frequency, ascending.
    pub mode: Option<Vec<f64>>,
    /// Maximum value.
    pub max: Option<f64>,
    /// Minimum value.
    pub min: Option<f64>,
    /// Range (max - min).
    pub range: Option<f64>,
    /// Variance under [`StatisticsResult::variance_convention`]; 0 for a single value.
    pub variance: Option<f64>,
    /// Square root of the variance.
    pub std_deviation: Option<f64>,
    /// Convention used for `variance` and `std_deviation`.
    pub variance_convention: VarianceConvention,
}

impl StatisticsResult {
    fn empty(convention: VarianceConvention) -> Self {
        Self {
            count: 0,
            sum: 0.0,
            average: None,
            median: None,
            mode: None,
            max: None,
            min: None,
            range: None,
            variance: None,
            std_deviation: None,
            variance_convention: convention,
        }
    }

    /// Whether the result was computed from an empty sample.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Summarizable for StatisticsResult {
    fn summary(&self) -> String {
        match (self.average, self.std_deviation, self.min, self.max) {
            (Some(mean), Some(std), Some(min), Some(max)) => format!(
                "n={}, mean={:.4}, std={:.4}, min={:.4}, max={:.4}",
                self.count, mean, std, min, max,
            ),
            _ => format!("n={}, no data", self.count),
        }
    }
}

/// Compute descriptive statistics for `data` using sample variance.
///
/// # Errors
///
/// Returns [`GradestatError::InvalidInput`](gradestat_core::GradestatError::InvalidInput)
/// if any value is not finite. An empty sample is not an error.
///
/// # Overflow
///
/// `average` and `median` stay finite for every finite sample. `sum`, `range`,
/// `variance` and `std_deviation` are `inf` when their true value exceeds
/// `f64::MAX`, e.g. `sum` of `[f64::MAX, f64::MAX]` or `range` of
/// `[-f64::MAX, f64::MAX]`.
///
/// # Example
///
/// ```
/// use gradestat_stats::descriptive::compute_statistics;
///
/// let stats = compute_statistics(&[85.0, 92.0, 78.0, 85.0]).unwrap();
/// assert_eq!(stats.count, 4);
/// assert_eq!(stats.mode, Some(vec![85.0]));
/// assert_eq!(stats.median, Some(85.0));
///
/// let empty = compute_statistics(&[]).unwrap();
/// assert_eq!(empty.average, None);
/// ```
pub fn compute_statistics(data: &[f64]) -> Result<StatisticsResult> {
    compute_statistics_with(data, VarianceConvention::Sample)
}

/// Compute descriptive statistics for `data` with an explicit variance convention.
pub fn compute_statistics_with(
    data: &[f64],
    convention: VarianceConvention,
) -> Result<StatisticsResult> {
    validate_sample(data)?;
    if data.is_empty() {
        return Ok(StatisticsResult::empty(convention));
    }

    let n = data.len();
    let n_f = n as f64;
    let sum: f64 = data.iter().sum();
    // Fall back to summing pre-divided values when the plain sum overflows.
    let average = if sum.is_finite() {
        sum / n_f
    } else {
        data.iter().map(|&x| x / n_f).sum()
    };

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let min = sorted[0];
    let max = sorted[n - 1];

    let variance = if n > 1 {
        let ss: f64 = data.iter().map(|&x| (x - average).powi(2)).sum();
        ss / (n - convention.ddof()) as f64
    } else {
        0.0
    };

    let result = StatisticsResult {
        count: n,
        sum,
        average: Some(average),
        median: Some(median_sorted(&sorted)),
        mode: Some(mode_sorted(&sorted)),
        max: Some(max),
        min: Some(min),
        range: Some(max - min),
        variance: Some(variance),
        std_deviation: Some(variance.sqrt()),
        variance_convention: convention,
    };
    tracing::debug!(summary = %result.summary(), "computed statistics");
    Ok(result)
}

// ── Internal ───────────────────────────────────────────────────────────────

/// Median of a non-empty, ascending slice.
fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 0 {
        sorted[mid - 1] / 2.0 + sorted[mid] / 2.0
    } else {
        sorted[mid]
    }
}

/// All values tied for the highest run length in a non-empty, ascending slice.
fn mode_sorted(sorted: &[f64]) -> Vec<f64> {
    let mut runs: Vec<(f64, usize)> = Vec::new();
    for &x in sorted {
        match runs.last_mut() {
            Some((value, freq)) if *value == x => *freq += 1,
            _ => runs.push((x, 1)),
        }
    }
    let max_freq = runs.iter().map(|&(_, freq)| freq).max().unwrap_or(0);
    runs.into_iter()
        .filter(|&(_, freq)| freq == max_freq)
        .map(|(value, _)| value)
        .collect()
}

// ── Tests ──────────────────────────────────────────────────────────────────


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn scores(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(-1_000.0..1_000.0f64, 1..=max_len)
    }

    proptest! {
        #[test]
        fn median_between_extrema(data in scores(200)) {
            let stats = compute_statistics(&data).unwrap();
            let median = stats.median.unwrap();
            prop_assert!(stats.min.unwrap() <= median);
            prop_assert!(median <= stats.max.unwrap());
        }

        #[test]
        fn average_times_count_is_sum(data in scores(200)) {
            let stats = compute_statistics(&data).unwrap();
            let back = stats.average.unwrap() * stats.count as f64;
            prop_assert!((back - stats.sum).abs() <= 1e-9 * stats.sum.abs().max(1.0));
        }

        #[test]
        fn repeated_calls_agree(data in scores(100)) {
            prop_assert_eq!(compute_statistics(&data).unwrap(), compute_statistics(&data).unwrap());
        }

        #[test]
        fn mode_values_come_from_sample(data in proptest::collection::vec(0..20i32, 1..50)) {
            let data: Vec<f64> = data.into_iter().map(f64::from).collect();
            let stats = compute_statistics(&data).unwrap();
            for m in stats.mode.unwrap() {
                prop_assert!(data.contains(&m));
            }
        }
    }
}

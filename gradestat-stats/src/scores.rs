//! Pass/fail analysis of score lists.

use gradestat_core::{Result, Summarizable};

use crate::sample::validate_sample;

/// Pass mark used when the caller has no preference.
pub const DEFAULT_PASS_THRESHOLD: f64 = 60.0;

/// Pass/fail counts and extrema of a score list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreAnalysis {
    pub total_count: usize,
    /// Scores at or above the threshold.
    pub pass_count: usize,
    pub fail_count: usize,
    pub max_score: Option<f64>,
    pub min_score: Option<f64>,
    pub average: Option<f64>,
    /// Threshold the counts were computed against.
    pub pass_threshold: f64,
}

impl Summarizable for ScoreAnalysis {
    fn summary(&self) -> String {
        format!(
            "total={}, pass={}, fail={} (threshold {})",
            self.total_count, self.pass_count, self.fail_count, self.pass_threshold,
        )
    }
}

/// Count passing and failing scores and find the extrema.
///
/// A score passes when it is `>= pass_threshold`. An empty list yields zero
/// counts and absent extrema.
///
/// # Errors
///
/// Returns [`GradestatError::InvalidInput`](gradestat_core::GradestatError::InvalidInput)
/// if a score or the threshold is not finite.
pub fn analyze_scores(scores: &[f64], pass_threshold: f64) -> Result<ScoreAnalysis> {
    validate_sample(scores)?;
    if !pass_threshold.is_finite() {
        return Err(gradestat_core::GradestatError::InvalidInput(format!(
            "pass threshold {pass_threshold} is not finite"
        )));
    }

    let pass_count = scores.iter().filter(|&&s| s >= pass_threshold).count();
    let (max_score, min_score, average) = if scores.is_empty() {
        (None, None, None)
    } else {
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let avg = scores.iter().sum::<f64>() / scores.len() as f64;
        (Some(max), Some(min), Some(avg))
    };

    Ok(ScoreAnalysis {
        total_count: scores.len(),
        pass_count,
        fail_count: scores.len() - pass_count,
        max_score,
        min_score,
        average,
        pass_threshold,
    })
}

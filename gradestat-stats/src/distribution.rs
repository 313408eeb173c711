//! Binned frequency distributions.
//!
//! [`bin_distribution`] buckets a sample into bins formed by adjacent pairs of
//! ascending boundaries. Every bin is half-open `[lo, hi)` except the last,
//! which is closed `[lo, hi]` so a value equal to the top boundary is counted.
//! Values outside `[b[0], b[n-1]]` are dropped and tallied in
//! [`Distribution::dropped`].

use gradestat_core::{GradestatError, Result, Summarizable};

use crate::sample::validate_sample;

/// Grade boundaries used when the caller has no preference.
pub const DEFAULT_GRADE_BOUNDARIES: [f64; 6] = [0.0, 60.0, 70.0, 80.0, 90.0, 100.0];

/// One bucket of a [`Distribution`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bin {
    /// Lower boundary (inclusive).
    pub lower: f64,
    /// Upper boundary (exclusive, inclusive for the last bin).
    pub upper: f64,
    /// Display label, e.g. `"60-70"`.
    pub label: String,
    /// Number of sample values in this bin.
    pub count: usize,
}

/// Bin counts in boundary order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distribution {
    /// Bins, one per adjacent boundary pair.
    pub bins: Vec<Bin>,
    /// Values that fell outside every bin.
    pub dropped: usize,
}

impl Distribution {
    /// Number of values that landed in some bin.
    pub fn binned(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Look up a bin count by label.
    pub fn count(&self, label: &str) -> Option<usize> {
        self.bins.iter().find(|b| b.label == label).map(|b| b.count)
    }

    /// `(label, count)` pairs in boundary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.bins.iter().map(|b| (b.label.as_str(), b.count))
    }
}

impl Summarizable for Distribution {
    fn summary(&self) -> String {
        let parts: Vec<String> = self
            .bins
            .iter()
            .map(|b| format!("{}:{}", b.label, b.count))
            .collect();
        format!("{} (dropped={})", parts.join(", "), self.dropped)
    }
}

/// Check that `boundaries` can form at least one bin.
///
/// # Errors
///
/// Returns [`GradestatError::InvalidConfiguration`] if there are fewer than two
/// boundaries, any boundary is not finite, or they are not strictly ascending.
pub fn validate_boundaries(boundaries: &[f64]) -> Result<()> {
    if boundaries.len() < 2 {
        return Err(GradestatError::InvalidConfiguration(format!(
            "need at least 2 bin boundaries (got {})",
            boundaries.len()
        )));
    }
    if let Some(b) = boundaries.iter().find(|b| !b.is_finite()) {
        return Err(GradestatError::InvalidConfiguration(format!(
            "bin boundary {b} is not finite"
        )));
    }
    if let Some(w) = boundaries.windows(2).find(|w| w[0] >= w[1]) {
        return Err(GradestatError::InvalidConfiguration(format!(
            "bin boundaries must be strictly ascending ({} is followed by {})",
            w[0], w[1]
        )));
    }
    Ok(())
}

/// Bucket `data` into the bins described by `boundaries`.
///
/// # Errors
///
/// Returns [`GradestatError::InvalidConfiguration`] for unusable boundaries
/// (see [`validate_boundaries`]) and [`GradestatError::InvalidInput`] for
/// non-finite sample values.
///
/// # Example
///
/// ```
/// use gradestat_stats::distribution::{bin_distribution, DEFAULT_GRADE_BOUNDARIES};
///
/// let dist = bin_distribution(&[59.0, 60.0, 100.0, 101.0], &DEFAULT_GRADE_BOUNDARIES).unwrap();
/// assert_eq!(dist.count("0-60"), Some(1));
/// assert_eq!(dist.count("60-70"), Some(1));
/// assert_eq!(dist.count("90-100"), Some(1));
/// assert_eq!(dist.dropped, 1);
/// ```
pub fn bin_distribution(data: &[f64], boundaries: &[f64]) -> Result<Distribution> {
    validate_boundaries(boundaries)?;
    validate_sample(data)?;

    let mut bins: Vec<Bin> = boundaries
        .windows(2)
        .map(|w| Bin {
            lower: w[0],
            upper: w[1],
            label: format!("{}-{}", w[0], w[1]),
            count: 0,
        })
        .collect();

    let mut dropped = 0;
    for &x in data {
        match bin_index(boundaries, x) {
            Some(i) => bins[i].count += 1,
            None => {
                tracing::debug!(value = x, "value outside bin boundaries, dropped");
                dropped += 1;
            }
        }
    }

    Ok(Distribution { bins, dropped })
}

/// Index of the bin holding `x`, or `None` if it lies outside every bin.
fn bin_index(boundaries: &[f64], x: f64) -> Option<usize> {
    let last = boundaries.len() - 1;
    if x < boundaries[0] || x > boundaries[last] {
        return None;
    }
    if x == boundaries[last] {
        return Some(last - 1);
    }
    // Number of boundaries <= x, minus one, is the half-open bin index.
    let upper = boundaries.partition_point(|&b| b <= x);
    Some(upper - 1)
}

// ── Tests ──────────────────────────────────────────────────────────────────

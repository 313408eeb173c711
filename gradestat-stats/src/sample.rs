//! Sample validation and parsing.
//!
//! A sample is a plain `&[f64]`. The only values the engine rejects are the
//! non-finite ones (`NaN`, `±∞`), which stand in for non-numeric elements.

use std::path::Path;

use gradestat_core::{GradestatError, Result};

/// Check that every value in `data` is finite.
///
/// # Errors
///
/// Returns [`GradestatError::InvalidInput`] naming the first offending index.
pub fn validate_sample(data: &[f64]) -> Result<()> {
    match data.iter().position(|x| !x.is_finite()) {
        Some(i) => Err(GradestatError::InvalidInput(format!(
            "sample value at index {i} is not a finite number ({})",
            data[i]
        ))),
        None => Ok(()),
    }
}

/// Parse textual tokens into a sample.
///
/// Tokens are trimmed before parsing; empty tokens are skipped. Integers and
/// decimals are both accepted.
///
/// # Errors
///
/// Returns [`GradestatError::InvalidInput`] for the first token that is not a
/// finite number.
///
/// # Example
///
/// ```
/// use gradestat_stats::sample::parse_sample;
///
/// let data = parse_sample(["85", " 92.5", "78"]).unwrap();
/// assert_eq!(data, vec![85.0, 92.5, 78.0]);
/// assert!(parse_sample(["85", "abc"]).is_err());
/// ```
pub fn parse_sample<I, S>(tokens: I) -> Result<Vec<f64>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut data = Vec::new();
    for (pos, token) in tokens.into_iter().enumerate() {
        let token = token.as_ref().trim();
        if token.is_empty() {
            continue;
        }
        let value: f64 = token.parse().map_err(|_| {
            GradestatError::InvalidInput(format!(
                "token {pos} ({token:?}) is not a number"
            ))
        })?;
        if !value.is_finite() {
            return Err(GradestatError::InvalidInput(format!(
                "token {pos} ({token:?}) is not a finite number"
            )));
        }
        data.push(value);
    }
    Ok(data)
}

/// Split free-form text on whitespace and commas, then [`parse_sample`] it.
pub fn parse_sample_text(text: &str) -> Result<Vec<f64>> {
    parse_sample(text.split(|c: char| c.is_whitespace() || c == ','))
}

/// Read a file and [`parse_sample_text`] its contents.
///
/// # Errors
///
/// Returns [`GradestatError::Io`] (carrying the path) if the file cannot be
/// read, and [`GradestatError::InvalidInput`] for non-numeric tokens.
pub fn read_sample_file(path: impl AsRef<Path>) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        GradestatError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    parse_sample_text(&text)
}

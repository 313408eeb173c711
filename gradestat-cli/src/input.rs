use anyhow::{Context, Result};
use std::io::Read;

use gradestat_stats::sample::{parse_sample, parse_sample_text, read_sample_file};

use crate::cli::SampleArgs;

/// Collect the sample from positional values, else `--input`, else `stdin`.
pub fn read_sample<R: Read>(args: &SampleArgs, stdin: R) -> Result<Vec<f64>> {
    if !args.values.is_empty() {
        let tokens = args
            .values
            .iter()
            .flat_map(|v| v.split(|c: char| c.is_whitespace() || c == ','));
        return Ok(parse_sample(tokens)?);
    }

    let data = match &args.input {
        Some(path) => read_sample_file(path)?,
        None => {
            let mut text = String::new();
            let mut stdin = stdin;
            stdin.read_to_string(&mut text).context("reading sample from stdin")?;
            parse_sample_text(&text)?
        }
    };
    tracing::info!(count = data.len(), "read sample");
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(values: &[&str], input: Option<PathBuf>) -> SampleArgs {
        SampleArgs {
            values: values.iter().map(|s| s.to_string()).collect(),
            input,
        }
    }

    #[test]
    fn values_take_priority() {
        let data = read_sample(&args(&["1", "2,3"], None), "99".as_bytes()).unwrap();
        assert_eq!(data, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn falls_back_to_stdin() {
        let data = read_sample(&args(&[], None), "85 92\n78, 45".as_bytes()).unwrap();
        assert_eq!(data, vec![85.0, 92.0, 78.0, 45.0]);
    }

    #[test]
    fn empty_stdin_is_empty_sample() {
        let data = read_sample(&args(&[], None), "".as_bytes()).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn reads_file() {
        let path = std::env::temp_dir().join(format!("gradestat-input-{}.txt", std::process::id()));
        std::fs::write(&path, "10\n20\n30\n").unwrap();
        let data = read_sample(&args(&[], Some(path.clone())), "".as_bytes()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(data, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = PathBuf::from("/nonexistent/gradestat-input.txt");
        let err = read_sample(&args(&[], Some(path)), "".as_bytes()).unwrap_err();
        let err = err.downcast::<gradestat_core::GradestatError>().unwrap();
        assert!(matches!(err, gradestat_core::GradestatError::Io(_)));
    }

    #[test]
    fn non_numeric_is_error() {
        let err = read_sample(&args(&["1", "x"], None), "".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("invalid input"));
    }
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use gradestat_stats::{ReportOptions, VarianceConvention, DEFAULT_GRADE_BOUNDARIES, DEFAULT_PASS_THRESHOLD};

/// Environment variable naming a configuration file.
pub const CONFIG_ENV: &str = "GRADESTAT_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradestatConfig {
    pub report: ReportOptions,
    pub statistics: StatisticsConfig,
    pub distribution: DistributionConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsConfig {
    pub variance: VarianceConvention,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionConfig {
    pub boundaries: Vec<f64>,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            boundaries: DEFAULT_GRADE_BOUNDARIES.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub pass_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            pass_threshold: DEFAULT_PASS_THRESHOLD,
        }
    }
}

impl GradestatConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// CLI path first, then `$GRADESTAT_CONFIG`, then built-in defaults.
    pub fn resolve_config(cli_config: Option<PathBuf>) -> Result<Self> {
        let config = if let Some(config_path) = cli_config {
            Self::load_from_file(config_path)?
        } else if let Ok(env_config) = std::env::var(CONFIG_ENV) {
            Self::load_from_file(env_config)?
        } else {
            Self::default()
        };
        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(GradestatConfig::from_toml("").unwrap(), GradestatConfig::default());
    }

    #[test]
    fn defaults() {
        let config = GradestatConfig::default();
        assert_eq!(config.report.decimal_places, 2);
        assert_eq!(config.report.missing, "no data");
        assert_eq!(config.statistics.variance, VarianceConvention::Sample);
        assert_eq!(config.distribution.boundaries, vec![0.0, 60.0, 70.0, 80.0, 90.0, 100.0]);
        assert_eq!(config.analysis.pass_threshold, 60.0);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = GradestatConfig::from_toml(
            r#"
[report]
decimal_places = 1
bar = "*"

[statistics]
variance = "population"

[distribution]
boundaries = [0.0, 50.0, 100.0]
"#,
        )
        .unwrap();
        assert_eq!(config.report.decimal_places, 1);
        assert_eq!(config.report.bar, '*');
        assert_eq!(config.report.missing, "no data");
        assert_eq!(config.statistics.variance, VarianceConvention::Population);
        assert_eq!(config.distribution.boundaries, vec![0.0, 50.0, 100.0]);
        assert_eq!(config.analysis.pass_threshold, 60.0);
    }

    #[test]
    fn bad_toml_is_error() {
        assert!(GradestatConfig::from_toml("[statistics]\nvariance = \"biased\"").is_err());
    }

    #[test]
    fn missing_file_is_error() {
        let err = GradestatConfig::load_from_file("/nonexistent/gradestat.toml").unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }
}

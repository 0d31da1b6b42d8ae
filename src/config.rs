use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for a harvesting run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// File with one URL per line (`-` for stdin)
    #[serde(default)]
    pub input_path: Option<PathBuf>,

    /// Destination CSV file
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Minimum delay between consecutive requests
    #[serde(default = "default_delay_seconds")]
    pub delay_seconds: f64,

    /// Upper bound of the random extra delay added on top of `delay_seconds`
    #[serde(default)]
    pub jitter_seconds: f64,

    /// Per-request timeout
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: f64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Default value for output_path
fn default_output_path() -> PathBuf {
    PathBuf::from("website_metadata.csv")
}

/// Default value for delay_seconds
fn default_delay_seconds() -> f64 {
    1.0
}

/// Default value for timeout_seconds
fn default_timeout_seconds() -> f64 {
    10.0
}

/// Default value for user_agent
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/91.0.4472.124 Safari/537.36"
        .to_string()
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            input_path: None,
            output_path: default_output_path(),
            delay_seconds: default_delay_seconds(),
            jitter_seconds: 0.0,
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl HarvestConfig {
    /// Load configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut contents = String::new();
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut contents))
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_json(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check that every duration field is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        seconds("delay_seconds", self.delay_seconds)?;
        seconds("jitter_seconds", self.jitter_seconds)?;
        seconds("timeout_seconds", self.timeout_seconds)?;
        Ok(())
    }

    pub fn delay(&self) -> Result<Duration, ConfigError> {
        seconds("delay_seconds", self.delay_seconds)
    }

    pub fn jitter(&self) -> Result<Duration, ConfigError> {
        seconds("jitter_seconds", self.jitter_seconds)
    }

    pub fn timeout(&self) -> Result<Duration, ConfigError> {
        seconds("timeout_seconds", self.timeout_seconds)
    }
}

fn seconds(field: &'static str, value: f64) -> Result<Duration, ConfigError> {
    Duration::try_from_secs_f64(value).map_err(|_| ConfigError::InvalidSeconds { field, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = HarvestConfig::from_json(r#"{ "delay_seconds": 2.5 }"#).unwrap();
        assert_eq!(config.delay_seconds, 2.5);
        assert_eq!(config.timeout_seconds, 10.0);
        assert_eq!(config.jitter_seconds, 0.0);
        assert_eq!(config.output_path, PathBuf::from("website_metadata.csv"));
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
        assert!(config.input_path.is_none());
    }

    #[test]
    fn test_durations() {
        let config = HarvestConfig {
            delay_seconds: 0.25,
            timeout_seconds: 3.0,
            ..HarvestConfig::default()
        };
        assert_eq!(config.delay().unwrap(), Duration::from_millis(250));
        assert_eq!(config.timeout().unwrap(), Duration::from_secs(3));
        assert_eq!(config.jitter().unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_rejects_negative_and_non_finite_seconds() {
        let negative = HarvestConfig {
            delay_seconds: -1.0,
            ..HarvestConfig::default()
        };
        assert!(matches!(
            negative.validate(),
            Err(ConfigError::InvalidSeconds {
                field: "delay_seconds",
                ..
            })
        ));

        let infinite = HarvestConfig {
            timeout_seconds: f64::INFINITY,
            ..HarvestConfig::default()
        };
        assert!(infinite.validate().is_err());
    }

    #[test]
    fn test_from_file_reports_missing_file() {
        let err = HarvestConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}

//! Connection settings for the Computer Vision service.

use config::{Config, Environment, File};
use derive_getters::Getters;
use iris_error::{ConfigError, IrisResult};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// File stem searched for in the working directory (`iris.toml`).
pub const DEFAULT_CONFIG_NAME: &str = "iris";

/// Prefix of the environment variables that override file settings.
pub const ENV_PREFIX: &str = "IRIS";

/// Connection settings for the Computer Vision service.
///
/// Loaded from layered sources, later layers winning:
///
/// 1. defaults (`timeout_secs = 30`)
/// 2. a TOML file (`iris.toml` if present, or an explicit path)
/// 3. `IRIS_BASE_URL`, `IRIS_API_KEY` and `IRIS_TIMEOUT_SECS`
///
/// # Examples
///
/// ```
/// use iris_client::VisionConfig;
///
/// let config = VisionConfig::builder()
///     .base_url("https://westus.api.cognitive.microsoft.com/vision/v2.1")
///     .api_key("secret")
///     .build()
///     .unwrap();
/// assert_eq!(*config.timeout_secs(), 30);
/// assert!(!format!("{:?}", config).contains("secret"));
/// ```
#[derive(Clone, PartialEq, Eq, Getters, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct VisionConfig {
    /// Service endpoint including the API version path.
    base_url: String,
    /// Subscription key sent with every request.
    api_key: String,
    /// Request timeout in seconds.
    #[builder(default = "DEFAULT_TIMEOUT_SECS")]
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// `IRIS_*` variables, kept as strings.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
}

impl VisionConfig {
    /// Creates a builder for VisionConfig.
    pub fn builder() -> VisionConfigBuilder {
        VisionConfigBuilder::default()
    }

    /// Loads settings from `iris.toml` (optional) and the environment.
    #[instrument]
    pub fn load() -> IrisResult<Self> {
        Self::from_sources(None, environment())
    }

    /// Loads settings from the file at `path`, which must exist, and the environment.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_from(path: impl AsRef<Path>) -> IrisResult<Self> {
        Self::from_sources(Some(path.as_ref()), environment())
    }

    fn from_sources(path: Option<&Path>, environment: Environment) -> IrisResult<Self> {
        let mut builder = Config::builder()
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64)
            .map_err(|e| ConfigError::new(e.to_string()))?;

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_NAME).required(false)),
        };

        let config: VisionConfig = builder
            .add_source(environment)
            .build()
            .and_then(|c| c.try_deserialize::<VisionConfig>())
            .map_err(|e| ConfigError::new(e.to_string()))?;

        config.validate()?;
        debug!(
            base_url = %config.base_url,
            timeout_secs = config.timeout_secs,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Checks that required settings are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::new("base_url must not be empty"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::new(format!(
                "base_url must be an http(s) URL, got {}",
                self.base_url
            )));
        }
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::new("api_key must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::new("timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl std::fmt::Debug for VisionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisionConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.toml", name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_explicit_file() {
        let path = write_config(
            "iris-config-full",
            r#"
base_url = "https://westus.api.cognitive.microsoft.com/vision/v2.1"
api_key = "file-key"
timeout_secs = 5
"#,
        );

        let config = VisionConfig::load_from(&path).unwrap();
        assert_eq!(
            config.base_url(),
            "https://westus.api.cognitive.microsoft.com/vision/v2.1"
        );
        assert_eq!(config.api_key(), "file-key");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        fs::remove_file(path).ok();
    }

    #[test]
    fn timeout_defaults_when_absent() {
        let path = write_config(
            "iris-config-default-timeout",
            r#"
base_url = "http://localhost:8080/vision/v2.1"
api_key = "file-key"
"#,
        );

        let config = VisionConfig::load_from(&path).unwrap();
        assert_eq!(*config.timeout_secs(), DEFAULT_TIMEOUT_SECS);
        fs::remove_file(path).ok();
    }

    #[test]
    fn environment_overrides_file_and_keeps_key_text() {
        let path = write_config(
            "iris-config-env",
            r#"
base_url = "http://localhost:8080/vision/v2.1"
api_key = "file-key"
"#,
        );
        let vars: config::Map<String, String> = [
            ("IRIS_API_KEY", "000123"),
            ("IRIS_TIMEOUT_SECS", "45"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config =
            VisionConfig::from_sources(Some(&path), environment().source(Some(vars))).unwrap();
        assert_eq!(config.api_key(), "000123");
        assert_eq!(*config.timeout_secs(), 45);
        assert_eq!(config.base_url(), "http://localhost:8080/vision/v2.1");
        fs::remove_file(path).ok();
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("iris-config-does-not-exist.toml");
        assert!(VisionConfig::load_from(path).is_err());
    }

    #[test]
    fn rejects_empty_key() {
        let config = VisionConfig::builder()
            .base_url("https://example.com/vision/v2.1")
            .api_key("  ")
            .build()
            .unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("api_key"));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let config = VisionConfig::builder()
            .base_url("ftp://example.com")
            .api_key("key")
            .build()
            .unwrap();
        assert!(config.validate().is_err());
    }
}

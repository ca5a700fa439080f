//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{PromptError, Result};
use crate::template::TemplateStore;
use std::path::Path;
use std::time::Duration;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "promptrun.yaml";

/// Environment variable overriding `base_url`.
pub const ENV_BASE_URL: &str = "OLLAMA_BASE_URL";

/// Environment variable overriding `model`.
pub const ENV_MODEL: &str = "PROMPTRUN_MODEL";

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PromptError::Config)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path` if it exists, otherwise return defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PromptError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| PromptError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Apply `OLLAMA_BASE_URL` and `PROMPTRUN_MODEL` if they are set and non-empty.
    pub fn apply_env(mut self) -> Result<Self> {
        if let Ok(url) = std::env::var(ENV_BASE_URL)
            && !url.trim().is_empty()
        {
            self.base_url = url;
        }
        if let Ok(model) = std::env::var(ENV_MODEL)
            && !model.trim().is_empty()
        {
            self.model = model;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `model` and `base_url` must be non-empty
    /// - `base_url` must be an http(s) URL
    /// - `timeout_seconds`, if set, must be positive
    /// - `template_extension` must be non-empty and have no leading dot
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(PromptError::Config(
                "config validation failed: model must not be empty".to_string(),
            ));
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(PromptError::Config(format!(
                "config validation failed: base_url must start with http:// or https:// (found '{}')",
                self.base_url
            )));
        }

        if self.timeout_seconds == Some(0) {
            return Err(PromptError::Config(
                "config validation failed: timeout_seconds must be greater than 0".to_string(),
            ));
        }

        if self.template_extension.is_empty() {
            return Err(PromptError::Config(
                "config validation failed: template_extension must be non-empty".to_string(),
            ));
        }
        if self.template_extension.starts_with('.') {
            return Err(PromptError::Config(format!(
                "config validation failed: template_extension must not have a leading dot (found '{}'). Use '{}' instead.",
                self.template_extension,
                self.template_extension.trim_start_matches('.')
            )));
        }

        Ok(())
    }

    /// Request timeout as a `Duration`, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// Template store described by this config.
    pub fn template_store(&self) -> TemplateStore {
        TemplateStore::new(&self.templates_dir, &self.template_extension)
    }
}

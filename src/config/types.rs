//! Default value functions used by the Config struct.

use crate::backend::DEFAULT_BASE_URL;
use crate::template::DEFAULT_EXTENSION;
use std::path::PathBuf;

/// Model used when neither the config nor the invocation names one.
pub const DEFAULT_MODEL: &str = "llama3";

// Default value functions for serde
pub(crate) fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
pub(crate) fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
pub(crate) fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}
pub(crate) fn default_template_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a promptrun client.
///
/// Each `PromptClient` owns one of these; there is no process-wide default.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Model settings
    // =========================================================================
    /// Model identifier used when an invocation does not override it.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the Ollama server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. Unset means the request may block indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,

    // =========================================================================
    // Template settings
    // =========================================================================
    /// Directory holding the template files.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,

    /// Template file extension, without a leading dot.
    #[serde(default = "default_template_extension")]
    pub template_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            timeout_seconds: None,
            templates_dir: default_templates_dir(),
            template_extension: default_template_extension(),
        }
    }
}

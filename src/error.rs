//! Error types for promptrun.
//!
//! Uses thiserror for derive macros. Every failure in the pipeline surfaces
//! here with enough context (template name, attempted path, underlying cause)
//! to diagnose it; printing is left to the CLI layer.

use crate::backend::BackendError;
use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for promptrun operations.
#[derive(Error, Debug)]
pub enum PromptError {
    /// No file backs the requested template name.
    #[error("template '{name}' not found at: {}", path.display())]
    TemplateNotFound {
        /// The requested template name.
        name: String,
        /// The path that was tried.
        path: PathBuf,
    },

    /// The template file exists but could not be read.
    #[error("failed to read template '{}': {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required section tag is missing after substitution.
    #[error("malformed template '{template}': no {{{missing}}}...{{{missing}_END}} section found")]
    MalformedTemplate {
        /// Template name, or `<inline>` for text that did not come from the store.
        template: String,
        /// The section tag that was required.
        missing: String,
    },

    /// A mandatory invocation parameter was absent.
    #[error("missing required parameter '{0}'")]
    MissingBinding(String),

    /// The file named by `INPUT_PATH` could not be read.
    #[error("failed to read input file '{}': {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The model backend failed to produce a reply.
    #[error("generation failed for model '{model}': {source}")]
    Generation {
        model: String,
        #[source]
        source: BackendError,
    },

    /// Configuration could not be loaded or is invalid.
    #[error("{0}")]
    Config(String),

    /// The result log could not be written.
    #[error("result log failed: {0}")]
    ResultLog(String),
}

impl PromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::MissingBinding(_) | PromptError::Config(_) => exit_codes::USER_ERROR,
            PromptError::TemplateNotFound { .. }
            | PromptError::TemplateRead { .. }
            | PromptError::MalformedTemplate { .. } => exit_codes::TEMPLATE_FAILURE,
            PromptError::Generation { .. } => exit_codes::GENERATION_FAILURE,
            PromptError::InputRead { .. } | PromptError::ResultLog(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for promptrun operations.
pub type Result<T> = std::result::Result<T, PromptError>;

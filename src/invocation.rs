//! Invocation parameters.
//!
//! An invocation names a template and carries the placeholder bindings for
//! one request. It can be built directly or from a flat parameter bag in
//! which a few keys are reserved:
//!
//! - `PROMPT` - template name (required, not used as a binding)
//! - `VERSION` / `MODEL_VERSION` - model override, `VERSION` first
//! - `INPUT_PATH` - file whose content is bound to `INPUT_SEQUENCE`
//!
//! Every other key becomes a placeholder binding.

use crate::error::{PromptError, Result};
use crate::template::Bindings;
use std::path::PathBuf;

/// Parameter naming the template.
pub const PROMPT_KEY: &str = "PROMPT";

/// Parameters that override the model, in precedence order.
pub const MODEL_KEYS: [&str; 2] = ["VERSION", "MODEL_VERSION"];

/// Parameter naming an input file.
pub const INPUT_PATH_KEY: &str = "INPUT_PATH";

/// Placeholder the input file content is bound to.
pub const INPUT_SEQUENCE_KEY: &str = "INPUT_SEQUENCE";

/// One request: template, optional model override, optional input file, bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub template: String,
    pub model: Option<String>,
    pub input_path: Option<PathBuf>,
    pub bindings: Bindings,
}

impl Invocation {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    pub fn bind(mut self, name: impl Into<String>, value: impl std::fmt::Display) -> Self {
        self.bindings.insert(name, value);
        self
    }

    /// Build an invocation from a flat parameter bag.
    ///
    /// # Returns
    ///
    /// * `Ok(Invocation)` - With `PROMPT` removed from the bindings
    /// * `Err(PromptError::MissingBinding)` - If `PROMPT` is absent or blank
    pub fn from_params(mut params: Bindings) -> Result<Self> {
        let template = params
            .remove(PROMPT_KEY)
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| PromptError::MissingBinding(PROMPT_KEY.to_string()))?;

        let model = MODEL_KEYS
            .iter()
            .filter_map(|key| params.get(key))
            .find(|value| !value.trim().is_empty())
            .map(str::to_string);

        let input_path = params
            .get(INPUT_PATH_KEY)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            template,
            model,
            input_path,
            bindings: params,
        })
    }

    /// Bindings to substitute, with the input file content bound to
    /// `INPUT_SEQUENCE` unless the caller bound it already.
    pub fn resolve_bindings(&self) -> Result<Bindings> {
        let mut bindings = self.bindings.clone();

        if let Some(path) = &self.input_path
            && !bindings.contains(INPUT_SEQUENCE_KEY)
        {
            let content = std::fs::read_to_string(path).map_err(|source| PromptError::InputRead {
                path: path.clone(),
                source,
            })?;
            bindings.insert(INPUT_SEQUENCE_KEY, content);
        }

        Ok(bindings)
    }
}

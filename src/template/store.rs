//! File-backed template store.
//!
//! Templates live in a single directory as `<name>.<extension>` files.
//! Nothing is cached; each `load` reads the file again.

use crate::error::{PromptError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default file extension for template files.
pub const DEFAULT_EXTENSION: &str = "txt";

/// A loaded template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// The name the template was requested by.
    pub name: String,
    /// Raw text, placeholders and section markers included.
    pub text: String,
}

/// Resolves template names to files in a directory.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
    extension: String,
}

impl TemplateStore {
    /// Create a store rooted at `dir` using the given file extension (no leading dot).
    pub fn new<P: Into<PathBuf>>(dir: P, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// The directory templates are resolved from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a template name resolves to.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, self.extension))
    }

    /// Load a template by name.
    ///
    /// # Returns
    ///
    /// * `Ok(Template)` - The raw template text
    /// * `Err(PromptError::MissingBinding)` - If `name` is empty
    /// * `Err(PromptError::TemplateNotFound)` - If no file exists; carries the attempted path
    /// * `Err(PromptError::TemplateRead)` - If the file exists but cannot be read
    pub fn load(&self, name: &str) -> Result<Template> {
        if name.trim().is_empty() {
            return Err(PromptError::MissingBinding("PROMPT".to_string()));
        }

        let path = self.path_for(name);
        tracing::debug!(template = name, path = %path.display(), "loading template");

        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Template {
                name: name.to_string(),
                text,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(PromptError::TemplateNotFound {
                name: name.to_string(),
                path,
            }),
            Err(source) => Err(PromptError::TemplateRead { path, source }),
        }
    }

    /// List the names of every template in the store, sorted.
    ///
    /// A missing directory is reported as `TemplateNotFound` for the directory itself.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                PromptError::TemplateNotFound {
                    name: "*".to_string(),
                    path: self.dir.clone(),
                }
            } else {
                PromptError::TemplateRead {
                    path: self.dir.clone(),
                    source: e,
                }
            }
        })?;

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext == self.extension)
            })
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string)
            })
            .collect();

        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with(files: &[(&str, &str)]) -> (TempDir, TemplateStore) {
        let temp_dir = TempDir::new().unwrap();
        for (name, content) in files {
            std::fs::write(temp_dir.path().join(name), content).unwrap();
        }
        let store = TemplateStore::new(temp_dir.path(), DEFAULT_EXTENSION);
        (temp_dir, store)
    }

    #[test]
    fn test_load_existing_template() {
        let (_dir, store) = store_with(&[("greeting.txt", "{SYSTEM_CONFIG}hi{SYSTEM_CONFIG_END}")]);

        let template = store.load("greeting").unwrap();
        assert_eq!(template.name, "greeting");
        assert_eq!(template.text, "{SYSTEM_CONFIG}hi{SYSTEM_CONFIG_END}");
    }

    #[test]
    fn test_load_missing_template_reports_path() {
        let (dir, store) = store_with(&[]);

        let err = store.load("nope").unwrap_err();
        match err {
            PromptError::TemplateNotFound { ref name, ref path } => {
                assert_eq!(name, "nope");
                assert_eq!(path, &dir.path().join("nope.txt"));
            }
            _ => panic!("unexpected error type: {:?}", err),
        }
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn test_load_empty_name_fails_before_io() {
        let store = TemplateStore::new("/definitely/not/here", DEFAULT_EXTENSION);
        let err = store.load("  ").unwrap_err();
        assert!(matches!(err, PromptError::MissingBinding(_)));
    }

    #[test]
    fn test_custom_extension() {
        let (_dir, store) = store_with(&[("a.prompt", "A"), ("a.txt", "B")]);
        let store = TemplateStore::new(store.dir(), "prompt");

        assert_eq!(store.load("a").unwrap().text, "A");
        assert!(store.path_for("a").ends_with("a.prompt"));
    }

    #[test]
    fn test_directory_with_template_name_is_read_error() {
        let (dir, store) = store_with(&[]);
        std::fs::create_dir(dir.path().join("weird.txt")).unwrap();

        let err = store.load("weird").unwrap_err();
        assert!(matches!(err, PromptError::TemplateRead { .. }));
    }

    #[test]
    fn test_list_sorted_and_filtered() {
        let (_dir, store) = store_with(&[
            ("b.txt", ""),
            ("a.txt", ""),
            ("notes.md", ""),
            ("c.txt", ""),
        ]);

        assert_eq!(store.list().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_list_missing_directory() {
        let store = TemplateStore::new("/definitely/not/here", DEFAULT_EXTENSION);
        let err = store.list().unwrap_err();
        assert!(matches!(err, PromptError::TemplateNotFound { .. }));
    }
}

use crate::backend::{BackendError, ChatBackend};
use crate::chat::ChatMessage;
use crate::config::Config;
use std::cell::RefCell;
use std::path::PathBuf;
use tempfile::TempDir;

type Request = (String, Vec<ChatMessage>);

/// Backend double that records every request and answers from a script.
pub(crate) struct FakeBackend {
    reply: Box<dyn Fn() -> Result<String, BackendError>>,
    requests: RefCell<Vec<Request>>,
}

impl FakeBackend {
    pub(crate) fn replying(text: &str) -> Self {
        let text = text.to_string();
        Self {
            reply: Box::new(move || Ok(text.clone())),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn failing(make_error: impl Fn() -> BackendError + 'static) -> Self {
        Self {
            reply: Box::new(move || Err(make_error())),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }
}

impl ChatBackend for FakeBackend {
    fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String, BackendError> {
        self.requests
            .borrow_mut()
            .push((model.to_string(), messages.to_vec()));
        (self.reply)()
    }
}

/// Temporary template directory.
pub(crate) struct TemplateDir {
    dir: TempDir,
}

impl TemplateDir {
    /// Create a directory holding `<name>.txt` for each `(name, content)` pair.
    pub(crate) fn with(templates: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        for (name, content) in templates {
            std::fs::write(dir.path().join(format!("{}.txt", name)), content).unwrap();
        }
        Self { dir }
    }

    pub(crate) fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Write an arbitrary file next to the templates and return its path.
    pub(crate) fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Default config pointing at this directory.
    pub(crate) fn config(&self) -> Config {
        Config {
            templates_dir: self.path(),
            ..Default::default()
        }
    }
}

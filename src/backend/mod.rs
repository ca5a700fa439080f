//! Model backends.
//!
//! A backend takes a model identifier and a list of chat messages and returns
//! the model's reply text. Calls are synchronous and are never retried here.

mod ollama;

pub use ollama::{DEFAULT_BASE_URL, OllamaBackend};

use crate::chat::ChatMessage;
use thiserror::Error;

/// Ways a backend call can fail.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend could not be reached or the connection broke mid-request.
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    /// The backend refused the request: a non-success status, or an `error` body.
    #[error("backend rejected the request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The backend answered but the body is not a usable chat reply.
    #[error("malformed backend response: {0}")]
    Malformed(String),
}

/// A chat-style model service.
pub trait ChatBackend {
    /// Send `messages` to `model` and return the reply text.
    fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String, BackendError>;
}

impl<B: ChatBackend + ?Sized> ChatBackend for &B {
    fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String, BackendError> {
        (**self).chat(model, messages)
    }
}

impl<B: ChatBackend + ?Sized> ChatBackend for Box<B> {
    fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String, BackendError> {
        (**self).chat(model, messages)
    }
}

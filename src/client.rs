//! Prompt client: template in, model reply out.
//!
//! The client ties the pipeline together:
//!
//! 1. load the template from the store
//! 2. resolve bindings (including the optional input file)
//! 3. substitute placeholders
//! 4. assemble the message sequence
//! 5. send it to the backend
//!
//! Each call is independent. The only state a client holds is its own
//! configuration, template store, and backend.

use crate::backend::{ChatBackend, OllamaBackend};
use crate::chat::{MessageSequence, assemble};
use crate::config::Config;
use crate::error::{PromptError, Result};
use crate::invocation::Invocation;
use crate::template::{TemplateStore, substitute};

/// The reply to one invocation together with what produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub template: String,
    pub model: String,
    pub text: String,
}

/// Renders templates and sends them to a chat backend.
#[derive(Debug)]
pub struct PromptClient<B> {
    config: Config,
    store: TemplateStore,
    backend: B,
}

impl PromptClient<OllamaBackend> {
    /// Create a client talking to the Ollama server named in `config`.
    pub fn ollama(config: Config) -> Result<Self> {
        let backend = OllamaBackend::new(&config.base_url, config.timeout())
            .map_err(|e| PromptError::Config(format!("failed to create Ollama client: {}", e)))?;
        Ok(Self::new(config, backend))
    }
}

impl<B: ChatBackend> PromptClient<B> {
    pub fn new(config: Config, backend: B) -> Self {
        let store = config.template_store();
        Self {
            config,
            store,
            backend,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Model an invocation will be sent to.
    pub fn model_for<'a>(&'a self, invocation: &'a Invocation) -> &'a str {
        invocation.model.as_deref().unwrap_or(&self.config.model)
    }

    /// Build the message sequence for an invocation without contacting the backend.
    pub fn render(&self, invocation: &Invocation) -> Result<MessageSequence> {
        let template = self.store.load(&invocation.template)?;
        let bindings = invocation.resolve_bindings()?;
        let filled = substitute(&template.text, &bindings);
        assemble(&template.name, &filled)
    }

    /// Send a message sequence to `model` and return the reply text.
    ///
    /// Any backend failure is reported as `PromptError::Generation`; nothing is retried.
    pub fn generate(&self, model: &str, messages: &MessageSequence) -> Result<String> {
        tracing::info!(model, messages = messages.len(), "sending chat request");

        self.backend
            .chat(model, messages.messages())
            .map_err(|source| {
                tracing::warn!(model, error = %source, "chat request failed");
                PromptError::Generation {
                    model: model.to_string(),
                    source,
                }
            })
    }

    /// Run the whole pipeline for one invocation.
    pub fn process(&self, invocation: &Invocation) -> Result<Completion> {
        let messages = self.render(invocation)?;
        let model = self.model_for(invocation);
        let text = self.generate(model, &messages)?;

        tracing::debug!(
            template = %invocation.template,
            model,
            reply_len = text.len(),
            "generation complete"
        );

        Ok(Completion {
            template: invocation.template.clone(),
            model: model.to_string(),
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendError;
    use crate::chat::Role;
    use crate::test_support::{FakeBackend, TemplateDir};

    const GREETING: &str = "\
{SYSTEM_CONFIG}
Hi {NAME}
{SYSTEM_CONFIG_END}
{USER_CONFIG}
Echo {NAME}
{USER_CONFIG_END}
";

    #[test]
    fn test_process_sends_assembled_messages() {
        let dir = TemplateDir::with(&[("greeting", GREETING)]);
        let client = PromptClient::new(dir.config(), FakeBackend::replying("pong"));

        let completion = client
            .process(&Invocation::new("greeting").bind("NAME", "A{B}C"))
            .unwrap();

        assert_eq!(completion.text, "pong");
        assert_eq!(completion.model, "llama3");
        assert_eq!(completion.template, "greeting");

        let requests = client.backend().requests();
        assert_eq!(requests.len(), 1);
        let (model, messages) = &requests[0];
        assert_eq!(model, "llama3");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, "Hi A{B}C");
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "Echo A{B}C");
    }

    #[test]
    fn test_invocation_model_overrides_config() {
        let dir = TemplateDir::with(&[("greeting", GREETING)]);
        let client = PromptClient::new(dir.config(), FakeBackend::replying("ok"));

        let completion = client
            .process(&Invocation::new("greeting").with_model("codellama"))
            .unwrap();

        assert_eq!(completion.model, "codellama");
        assert_eq!(client.backend().requests()[0].0, "codellama");
    }

    #[test]
    fn test_clients_do_not_share_default_model() {
        let dir = TemplateDir::with(&[("greeting", GREETING)]);
        let a = PromptClient::new(
            Config {
                model: "a".to_string(),
                ..dir.config()
            },
            FakeBackend::replying("x"),
        );
        let b = PromptClient::new(
            Config {
                model: "b".to_string(),
                ..dir.config()
            },
            FakeBackend::replying("y"),
        );

        let inv = Invocation::new("greeting");
        assert_eq!(a.process(&inv).unwrap().model, "a");
        assert_eq!(b.process(&inv).unwrap().model, "b");
    }

    #[test]
    fn test_missing_template_never_reaches_backend() {
        let dir = TemplateDir::with(&[]);
        let client = PromptClient::new(dir.config(), FakeBackend::replying("x"));

        let err = client.process(&Invocation::new("absent")).unwrap_err();
        assert!(matches!(err, PromptError::TemplateNotFound { .. }));
        assert!(err.to_string().contains("absent.txt"));
        assert!(client.backend().requests().is_empty());
    }

    #[test]
    fn test_malformed_template_never_reaches_backend() {
        let dir = TemplateDir::with(&[("bad", "{USER_CONFIG}only user{USER_CONFIG_END}")]);
        let client = PromptClient::new(dir.config(), FakeBackend::replying("x"));

        let err = client.process(&Invocation::new("bad")).unwrap_err();
        assert!(matches!(err, PromptError::MalformedTemplate { .. }));
        assert!(client.backend().requests().is_empty());
    }

    #[test]
    fn test_backend_failure_is_generation_error() {
        let dir = TemplateDir::with(&[("greeting", GREETING)]);
        let client = PromptClient::new(
            dir.config(),
            FakeBackend::failing(|| BackendError::Rejected {
                status: 404,
                body: "model not found".to_string(),
            }),
        );

        let err = client.process(&Invocation::new("greeting")).unwrap_err();
        match err {
            PromptError::Generation { ref model, ref source } => {
                assert_eq!(model, "llama3");
                assert!(matches!(source, BackendError::Rejected { status: 404, .. }));
            }
            _ => panic!("unexpected error type: {:?}", err),
        }
        assert_eq!(client.backend().requests().len(), 1);
    }

    #[test]
    fn test_render_with_input_file() {
        let dir = TemplateDir::with(&[(
            "review",
            "{SYSTEM_CONFIG}Review R code.{SYSTEM_CONFIG_END}\
             {USER_CONFIG}{INPUT_SEQUENCE}{USER_CONFIG_END}",
        )]);
        let input = dir.write_file("code.R", "f <- function(x) { x + 1 }");
        let client = PromptClient::new(dir.config(), FakeBackend::replying("x"));

        let seq = client
            .render(&Invocation::new("review").with_input_path(input))
            .unwrap();
        assert_eq!(seq.user().content, "f <- function(x) { x + 1 }");
        assert!(client.backend().requests().is_empty());
    }

    #[test]
    fn test_few_shot_template_from_store() {
        let dir = TemplateDir::with(&[(
            "few_shot",
            "{SYSTEM_CONFIG}s{SYSTEM_CONFIG_END}\n\
             {USER_CONFIG}example{USER_CONFIG_END}\n\
             {ASSISTANT_CONFIG}answer{ASSISTANT_CONFIG_END}\n\
             {USER_CONFIG}{QUESTION}{USER_CONFIG_END}",
        )]);
        let client = PromptClient::new(dir.config(), FakeBackend::replying("x"));

        let seq = client
            .render(&Invocation::new("few_shot").bind("QUESTION", "real"))
            .unwrap();
        assert_eq!(
            seq.roles(),
            vec![Role::System, Role::User, Role::Assistant, Role::User]
        );
        assert_eq!(seq.messages()[3].content, "real");
    }
}

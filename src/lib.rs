//! Promptrun: a prompt-templating harness for local chat models.
//!
//! A template is a text file with `{PLACEHOLDER}` tokens and role-tagged
//! sections. The pipeline loads it, substitutes the caller's bindings,
//! splits the result into system/user/assistant messages and sends them to
//! a chat backend (Ollama by default):
//!
//! ```no_run
//! use promptrun::client::PromptClient;
//! use promptrun::config::Config;
//! use promptrun::invocation::Invocation;
//!
//! let client = PromptClient::ollama(Config::default())?;
//! let reply = client.process(&Invocation::new("tipo1_codigo_facil_adicao"))?;
//! println!("{}", reply.text);
//! # Ok::<(), promptrun::error::PromptError>(())
//! ```

pub mod backend;
pub mod chat;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod exercise;
pub mod exit_codes;
pub mod invocation;
pub mod logging;
pub mod results;
pub mod template;

#[cfg(test)]
mod test_support;

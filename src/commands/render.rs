//! Implementation of the `promptrun render` command.
//!
//! Prints the message sequence a template renders to as pretty JSON, in the
//! same shape the chat request carries. Nothing is sent to the model.

use super::invocation_from;
use crate::chat::MessageSequence;
use crate::cli::RenderArgs;
use crate::client::PromptClient;
use crate::config::Config;
use crate::error::{PromptError, Result};

/// Execute the `promptrun render` command.
pub fn cmd_render(config: Config, args: RenderArgs) -> Result<()> {
    let invocation = invocation_from(args.template);

    // The backend is never called; building it only validates the URL.
    let client = PromptClient::ollama(config)?;
    let messages = client.render(&invocation)?;

    println!("{}", to_pretty_json(&messages)?);
    Ok(())
}

fn to_pretty_json(messages: &MessageSequence) -> Result<String> {
    serde_json::to_string_pretty(messages)
        .map_err(|e| PromptError::Config(format!("failed to serialize messages: {}", e)))
}

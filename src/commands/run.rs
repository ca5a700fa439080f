//! Implementation of the `promptrun run` command.

use super::invocation_from;
use crate::cli::RunArgs;
use crate::client::PromptClient;
use crate::config::Config;
use crate::error::Result;

/// Execute the `promptrun run` command.
///
/// Renders the template, sends it to the model and prints the reply on stdout.
pub fn cmd_run(config: Config, args: RunArgs) -> Result<()> {
    let mut invocation = invocation_from(args.template);
    invocation.model = args.model;

    let client = PromptClient::ollama(config)?;
    let completion = client.process(&invocation)?;

    println!("{}", completion.text);
    Ok(())
}

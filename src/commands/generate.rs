//! Implementation of the `promptrun generate` command.
//!
//! # What `promptrun generate` does
//!
//! 1. Builds the template name `<kind>_<level>_<circuit>`
//! 2. Warns (without failing) on unusual level/circuit pairs
//! 3. Binds the DNAr reference for documentation prompts
//! 4. Sends the rendered messages to the model
//! 5. Appends the reply and its metadata to the CSV log
//! 6. Prints the reply

use crate::backend::ChatBackend;
use crate::cli::GenerateArgs;
use crate::client::{Completion, PromptClient};
use crate::config::Config;
use crate::error::Result;
use crate::exercise::Exercise;
use crate::invocation::Invocation;
use crate::results::{ResultRecord, append_result};
use std::path::Path;

/// Execute the `promptrun generate` command.
pub fn cmd_generate(config: Config, args: GenerateArgs) -> Result<()> {
    let exercise = Exercise::new(args.kind, args.level, args.circuit);
    if let Some(warning) = exercise.combination_warning() {
        tracing::warn!("{}", warning);
        eprintln!("Warning: {}", warning);
    }

    let client = PromptClient::ollama(config)?;
    let model = args.model.as_deref().unwrap_or(&client.config().model);

    println!("Generating R code with DNAr");
    println!("  Model:    {}", model);
    println!("  Template: {}", exercise.template_name());
    println!("  Output:   {}", args.output.display());
    println!();

    let completion = generate_and_log(&client, &exercise, args.model.clone(), &args.output)?;

    println!("{}", completion.text);
    println!();
    println!("Saved to: {}", args.output.display());
    Ok(())
}

/// Run one exercise and append the result to the CSV log at `output`.
///
/// Nothing is written to the log if generation fails.
pub(crate) fn generate_and_log<B: ChatBackend>(
    client: &PromptClient<B>,
    exercise: &Exercise,
    model: Option<String>,
    output: &Path,
) -> Result<Completion> {
    let mut invocation = Invocation::new(exercise.template_name());
    invocation.model = model;
    for (key, value) in exercise.bindings().iter() {
        invocation.bindings.insert(key, value);
    }

    let completion = client.process(&invocation)?;

    let record = ResultRecord::new(&completion.model, &completion.template, &completion.text)
        .with_exercise(
            exercise.kind.as_str(),
            exercise.level.as_str(),
            exercise.circuit.as_str(),
        );
    append_result(output, &record)?;

    Ok(completion)
}

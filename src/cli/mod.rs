//! CLI argument parsing for promptrun.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::exercise::{Circuit, Level, PromptKind};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Promptrun: render prompt templates into chat messages and send them to a local model.
///
/// Templates are plain text files with `{PLACEHOLDER}` tokens and
/// `{SYSTEM_CONFIG}`, `{USER_CONFIG}` and `{ASSISTANT_CONFIG}` sections.
#[derive(Parser, Debug)]
#[command(name = "promptrun")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ./promptrun.yaml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding template files (overrides config).
    #[arg(long, global = true)]
    pub templates_dir: Option<PathBuf>,

    /// Ollama base URL (overrides config and OLLAMA_BASE_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for promptrun.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate DNAr R code for an exercise and append it to a CSV log.
    ///
    /// The template is `<kind>_<level>_<circuit>` in the templates directory.
    Generate(GenerateArgs),

    /// Run any template against the model and print the reply.
    Run(RunArgs),

    /// Print the chat messages a template renders to, without calling the model.
    Render(RenderArgs),

    /// List available templates.
    Templates,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Model to use (default: config `model`).
    #[arg(short, long)]
    pub model: Option<String>,

    /// Prompt kind.
    #[arg(short = 't', long, value_enum)]
    pub kind: PromptKind,

    /// Difficulty level.
    #[arg(short = 'n', long, value_enum)]
    pub level: Level,

    /// Circuit to simulate.
    #[arg(short, long, value_enum)]
    pub circuit: Circuit,

    /// CSV file the result is appended to.
    #[arg(short = 's', long)]
    pub output: PathBuf,
}

/// Template selection and bindings shared by `run` and `render`.
#[derive(Parser, Debug)]
pub struct TemplateArgs {
    /// Template name (file name without extension).
    #[arg(short, long)]
    pub template: String,

    /// Placeholder binding, repeatable.
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_binding)]
    pub bindings: Vec<(String, String)>,

    /// File whose content is bound to {INPUT_SEQUENCE}.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub template: TemplateArgs,

    /// Model to use (default: config `model`).
    #[arg(short, long)]
    pub model: Option<String>,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub template: TemplateArgs,
}

/// Parse a `KEY=VALUE` binding. The value may itself contain `=`.
fn parse_binding(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid binding '{}': expected KEY=VALUE", s))?;
    if key.is_empty() {
        return Err(format!("invalid binding '{}': empty key", s));
    }
    Ok((key.to_string(), value.to_string()))
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

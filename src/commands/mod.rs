//! Command implementations for promptrun.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, and the config resolution they share.

mod generate;
mod render;
mod run;

use crate::cli::{Cli, Command, TemplateArgs};
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::Result;
use crate::invocation::Invocation;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;

    match cli.command {
        Command::Generate(args) => generate::cmd_generate(config, args),
        Command::Run(args) => run::cmd_run(config, args),
        Command::Render(args) => render::cmd_render(config, args),
        Command::Templates => cmd_templates(config),
    }
}

/// Build the effective config: file, then environment, then CLI flags.
///
/// An explicit `--config` must exist; the default `promptrun.yaml` is optional.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(DEFAULT_CONFIG_FILE)?,
    };
    let mut config = config.apply_env()?;

    if let Some(dir) = &cli.templates_dir {
        config.templates_dir = dir.clone();
    }
    if let Some(url) = &cli.base_url {
        config.base_url = url.clone();
    }

    config.validate()?;
    tracing::debug!(?config, "resolved config");
    Ok(config)
}

/// Turn `--template/--set/--input` into an invocation.
fn invocation_from(args: TemplateArgs) -> Invocation {
    let mut invocation = Invocation::new(args.template);
    for (key, value) in args.bindings {
        invocation.bindings.insert(key, value);
    }
    invocation.input_path = args.input;
    invocation
}

fn cmd_templates(config: Config) -> Result<()> {
    let store = config.template_store();
    let names = store.list()?;

    if names.is_empty() {
        println!("No templates found in {}", store.dir().display());
        return Ok(());
    }

    for name in names {
        println!("{}", name);
    }
    Ok(())
}

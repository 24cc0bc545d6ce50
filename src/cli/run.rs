use std::env;

use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, build::build, init::init},
};

/// Dispatch to the command handler for the parsed arguments.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to get current directory")?;

    match command {
        Some(Command::Build(cmd)) => build(cmd, &cwd),
        Some(Command::Init) => init(&cwd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

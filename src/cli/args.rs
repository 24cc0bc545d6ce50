//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `build`: Infer properties and filter access levels of a comment tree
//! - `init`: Initialize docpost configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::Access;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Build(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Parser)]
pub struct BuildArgs {
    /// JSON file with the parsed comments (`-` reads stdin)
    pub input: PathBuf,

    /// Access levels to publish (overrides config file)
    /// Can be specified multiple times: --access public --access protected
    #[arg(long, value_enum)]
    pub access: Vec<Access>,

    /// Treat names matching this regex as private unless they state an access
    #[arg(long)]
    pub infer_private: Option<String>,

    /// Directory comment context paths are relative to (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Skip property inference for type aliases and interfaces
    #[arg(long)]
    pub no_infer: bool,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub args: BuildArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Infer type properties and filter comments by access level
    Build(BuildCommand),
    /// Initialize a new .docpostrc.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::cli::args::*;

    #[test]
    fn test_parse_build_args() {
        let args = Arguments::try_parse_from([
            "docpost",
            "build",
            "comments.json",
            "--access",
            "public",
            "--access",
            "undefined",
            "--infer-private",
            "^_",
            "-o",
            "out.json",
            "-v",
        ])
        .unwrap();

        let Some(Command::Build(cmd)) = &args.command else {
            panic!("expected build command");
        };
        assert_eq!(cmd.args.input, PathBuf::from("comments.json"));
        assert_eq!(cmd.args.access, vec![Access::Public, Access::Undefined]);
        assert_eq!(cmd.args.infer_private.as_deref(), Some("^_"));
        assert_eq!(cmd.args.output, Some(PathBuf::from("out.json")));
        assert!(!cmd.args.no_infer);
        assert!(args.verbose());
    }

    #[test]
    fn test_unknown_access_level() {
        let result = Arguments::try_parse_from(["docpost", "build", "in.json", "--access", "secret"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_cli() {
        Arguments::command().debug_assert();
    }
}

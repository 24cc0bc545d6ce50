use std::path::PathBuf;

use crate::cli::exit_status::ExitStatus;
use crate::core::pipeline::ParseErrorIssue;

#[derive(Debug)]
pub enum CommandSummary {
    Build(BuildSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct BuildSummary {
    /// Comments read, at every depth.
    pub input_count: usize,
    /// Comments written after filtering, at every depth.
    pub output_count: usize,
    pub inferred_count: usize,
    pub source_files: usize,
    pub parse_errors: Vec<ParseErrorIssue>,
    /// None when the result went to stdout.
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a docpost command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Build(summary) if !summary.parse_errors.is_empty() => {
                ExitStatus::Failure
            }
            CommandSummary::Build(_) => ExitStatus::Success,
            CommandSummary::Init(InitSummary { created: true }) => ExitStatus::Success,
            CommandSummary::Init(InitSummary { created: false }) => ExitStatus::Failure,
        }
    }
}

//! Summary printing.
//!
//! Everything goes to stderr: `build` may be writing its JSON to stdout.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{BuildSummary, CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::pipeline::ParseErrorIssue;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stderr().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Build(summary) => print_build(summary, verbose, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}

fn print_build<W: Write>(summary: &BuildSummary, verbose: bool, writer: &mut W) {
    print_parse_errors(&summary.parse_errors, verbose, writer);

    let mut msg = format!(
        "Published {} of {}, inferred {} from {}",
        summary.output_count,
        plural(summary.input_count, "comment", "comments"),
        plural(summary.inferred_count, "property", "properties"),
        plural(summary.source_files, "source file", "source files"),
    );
    if let Some(output) = &summary.output {
        msg.push_str(&format!(" -> {}", output.display()));
    }

    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn print_parse_errors<W: Write>(errors: &[ParseErrorIssue], verbose: bool, writer: &mut W) {
    if errors.is_empty() {
        return;
    }

    if verbose {
        for error in errors {
            let _ = writeln!(
                writer,
                "{} {}",
                "warning:".bold().yellow(),
                error.error
            );
            let _ = writeln!(writer, "  {} {}", "-->".blue(), error.file_path);
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            plural(errors.len(), "source file", "source files"),
            "-v".cyan()
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} already exists",
            "error:".bold().red(),
            CONFIG_FILE_NAME
        );
    }
}

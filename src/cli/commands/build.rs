//! `docpost build`: read comments, infer, filter, write.
//!
//! Configuration is merged with the following priority (highest to lowest):
//! 1. CLI arguments (e.g., `--access public`)
//! 2. `.docpostrc.json` config file
//! 3. Built-in defaults

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result};
use regex::Regex;

use super::{BuildSummary, CommandResult, CommandSummary};
use crate::{
    cli::args::{BuildArgs, BuildCommand},
    config::{Config, load_config},
    core::{AccessLevels, Comment, Pipeline, PipelineOptions},
};

pub fn build(cmd: BuildCommand, cwd: &Path) -> Result<CommandResult> {
    let args = cmd.args;
    let config = load_config(cwd)?.config;
    let options = pipeline_options(&args, &config, cwd)?;

    let comments = read_comments(&args.input, cwd)?;
    let result = Pipeline::new(options).run(comments);

    let json = serde_json::to_string_pretty(&result.comments)
        .context("Failed to serialize comments")?;
    match &args.output {
        Some(path) => {
            let path = cwd.join(path);
            fs::write(&path, json + "\n")
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        None => println!("{}", json),
    }

    Ok(CommandResult {
        summary: CommandSummary::Build(BuildSummary {
            input_count: result.input_count,
            output_count: result.output_count,
            inferred_count: result.inferred_count,
            source_files: result.source_files,
            parse_errors: result.parse_errors,
            output: args.output,
        }),
    })
}

fn pipeline_options(args: &BuildArgs, config: &Config, cwd: &Path) -> Result<PipelineOptions> {
    let access = if args.access.is_empty() {
        config.access.clone()
    } else {
        args.access.iter().copied().collect::<AccessLevels>()
    };

    let infer_private = match &args.infer_private {
        Some(pattern) => Some(
            Regex::new(pattern)
                .with_context(|| format!("Invalid regex for --infer-private: \"{}\"", pattern))?,
        ),
        None => config.infer_private_regex()?,
    };

    let source_root = match &args.source_root {
        Some(root) => cwd.join(root),
        None => cwd.join(&config.source_root),
    };

    Ok(PipelineOptions {
        access,
        infer_private,
        infer_properties: config.infer_properties && !args.no_infer,
        source_root,
        verbose: args.verbose,
    })
}

fn read_comments(input: &Path, cwd: &Path) -> Result<Vec<Comment>> {
    let content = if input == Path::new("-") {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read comments from stdin")?;
        content
    } else {
        let path = cwd.join(input);
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?
    };

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse comments: {}", input.display()))
}

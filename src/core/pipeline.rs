//! Post-processing pipeline.
//!
//! 1. **Load**: parse every source file referenced by a comment context
//! 2. **Infer**: properties of type aliases and interfaces, then private
//!    access by naming pattern
//! 3. **Filter**: drop comments and properties outside the allowed levels
//!
//! Source files are parsed in parallel, and root comment trees are inferred
//! in parallel since they share no state. Within one tree the traversal is
//! sequential and deterministic.

use std::{collections::BTreeSet, path::PathBuf, slice};

use rayon::prelude::*;
use regex::Regex;

use super::{
    comment::Comment,
    filter_access::{AccessLevels, filter_access},
    infer::{SourceSet, infer_access, infer_properties},
    parsers::ts::parse_ts_file,
    walk::walk_mut,
};

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub access: AccessLevels,
    pub infer_private: Option<Regex>,
    pub infer_properties: bool,
    /// Directory comment context paths are relative to.
    pub source_root: PathBuf,
    pub verbose: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            access: AccessLevels::default(),
            infer_private: None,
            infer_properties: true,
            source_root: PathBuf::from("./"),
            verbose: false,
        }
    }
}

/// A source file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug)]
pub struct PipelineResult {
    pub comments: Vec<Comment>,
    /// Comments in the input, at every depth.
    pub input_count: usize,
    /// Comments left after filtering, at every depth.
    pub output_count: usize,
    /// Properties added by inference (merges into explicit ones not counted).
    pub inferred_count: usize,
    /// Source files parsed successfully.
    pub source_files: usize,
    pub parse_errors: Vec<ParseErrorIssue>,
}

pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    pub fn run(&self, mut comments: Vec<Comment>) -> PipelineResult {
        let input_count = count_comments(&comments);

        // Phase 1: load
        let (sources, parse_errors) = if self.options.infer_properties {
            self.load_sources(&comments)
        } else {
            (SourceSet::new(), Vec::new())
        };

        // Phase 2: infer (access last, so inferred properties match too)
        let before = count_properties(&comments);
        if !sources.is_empty() {
            comments.par_iter_mut().for_each(|root| {
                walk_mut(slice::from_mut(root), &mut |comment: &mut Comment| {
                    infer_properties(comment, &sources);
                });
            });
        }
        let inferred_count = count_properties(&comments) - before;
        infer_access(self.options.infer_private.as_ref(), &mut comments);

        // Phase 3: filter
        let comments = filter_access(Some(&self.options.access), comments);

        PipelineResult {
            output_count: count_comments(&comments),
            comments,
            input_count,
            inferred_count,
            source_files: sources.len(),
            parse_errors,
        }
    }

    /// Parse every distinct context file, in parallel.
    ///
    /// Sources are keyed by the path as written in the comment context.
    pub fn load_sources(&self, comments: &[Comment]) -> (SourceSet, Vec<ParseErrorIssue>) {
        let files: Vec<PathBuf> = context_files(comments).into_iter().collect();
        let root = &self.options.source_root;

        let parse_results: Vec<_> = files
            .par_iter()
            .map(|file| (file.clone(), parse_ts_file(&root.join(file))))
            .collect();

        // Sequential merge
        let mut sources = SourceSet::new();
        let mut errors = Vec::new();

        for (file, result) in parse_results {
            match result {
                Ok(parsed) => sources.insert(file, parsed),
                Err(e) => {
                    if self.options.verbose {
                        eprintln!("Warning: {} - {}", file.display(), e);
                    }
                    errors.push(ParseErrorIssue {
                        file_path: file.display().to_string(),
                        error: e.to_string(),
                    });
                }
            }
        }

        (sources, errors)
    }
}

fn context_files(comments: &[Comment]) -> BTreeSet<PathBuf> {
    fn collect(comments: &[Comment], files: &mut BTreeSet<PathBuf>) {
        for comment in comments {
            if let Some(file) = &comment.context.file {
                files.insert(file.clone());
            }
            for members in comment.members.values() {
                collect(members, files);
            }
        }
    }

    let mut files = BTreeSet::new();
    collect(comments, &mut files);
    files
}

fn count_comments(comments: &[Comment]) -> usize {
    comments.iter().map(Comment::count).sum()
}

fn count_properties(comments: &[Comment]) -> usize {
    comments
        .iter()
        .map(|comment| {
            comment.properties.len()
                + comment
                    .members
                    .values()
                    .map(|members| count_properties(members))
                    .sum::<usize>()
        })
        .sum()
}

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::OutputFormat;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the checklist against one server and print a line per question.
    Test(TestArgs),
    /// Grade every submission of an assignment and print a CSV report.
    Grade(GradeArgs),
}

#[derive(Clone, Debug, Args)]
pub struct TestArgs {
    /// Base URL of the server to test (e.g., http://localhost:3000)
    pub url: String,

    /// Assignment whose checklist to run (defaults to grading.assignment)
    #[arg(short, long)]
    pub assignment: Option<String>,

    /// Print the run report as json or raw (compact) json instead of lines
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

#[derive(Clone, Debug, Args)]
pub struct GradeArgs {
    /// JSON-lines export of the assignmentsubmissions collection
    #[arg(long)]
    pub submissions: Option<PathBuf>,

    /// JSON-lines export of the users collection
    #[arg(long)]
    pub users: Option<PathBuf>,

    /// Assignment slug to grade (defaults to grading.assignment)
    #[arg(short, long)]
    pub assignment: Option<String>,

    /// Maximum submissions probed at once (defaults to grading.max_concurrency)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: Option<u16>,

    /// Write the CSV report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// How the schema document is serialized.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON, two-space indent.
    Json,
    /// Single-line JSON.
    Raw,
}

/// Top-level CLI parser for the `fnschema` binary.
#[derive(Debug, Parser)]
#[command(
    name = "fnschema",
    version,
    about = "Describe a Go function's parameters as a JSON Schema for function calling"
)]
pub struct Cli {
    /// Directory of the Go package to analyze
    #[arg(short, long, default_value = ".")]
    pub src: PathBuf,

    /// Name of the top-level function to describe
    #[arg(long)]
    pub func: String,

    /// Output file, or `-` for standard output
    #[arg(short, long, default_value = "-")]
    pub output: PathBuf,

    /// Output format: json, raw
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Also analyze `_test.go` files
    #[arg(long)]
    pub include_tests: bool,

    /// Quiet mode (errors only in logs)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

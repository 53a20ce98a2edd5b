//! CLI argument parsing for autoconcept.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::vehicle::VehicleCategory;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Autoconcept: daily concept-car article generator.
///
/// Each run invents a hydrogen concept car (name, spec sheet, three
/// generated photos), writes an HTML article, and adds a card to the
/// site's feed page. Running with no subcommand is the same as `generate`.
#[derive(Parser, Debug)]
#[command(name = "autoconcept")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Flags for the implicit `generate` run.
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Log at debug level (RUST_LOG takes precedence when set).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands for autoconcept.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate today's car: images, article and feed card.
    ///
    /// Requires OPENAI_API_KEY. Fails without side effects when the feed
    /// index is missing its markers.
    Generate(GenerateArgs),

    /// Print the car a run would generate, without calling the image
    /// service or writing anything.
    Preview(PreviewArgs),

    /// Create the project directories and an index page with an empty feed.
    Init(InitArgs),
}

/// Flags that decide what a run draws.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Project root (defaults to the current directory).
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Run date, YYYY-MM-DD (defaults to today, local time).
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Seed for reproducible names, specs and prompts.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Force a category instead of deriving it from the date.
    #[arg(long, value_enum)]
    pub category: Option<VehicleCategory>,

    /// Use the future range table and aesthetic.
    #[arg(long)]
    pub future: bool,
}

/// Arguments for the `generate` command.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Do not touch index.html.
    #[arg(long)]
    pub no_index: bool,
}

/// Arguments for the `preview` command.
#[derive(Args, Debug, Clone, Default)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Print the draft as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `init` command.
#[derive(Args, Debug, Clone, Default)]
pub struct InitArgs {
    /// Project root (defaults to the current directory).
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD ({})", e))
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

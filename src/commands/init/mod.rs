//! Implementation of the `autoconcept init` command.
//!
//! Prepares a project directory for daily runs:
//!
//! 1. Creates `images/`, `articles/` and `templates/`
//! 2. Writes `autoconcept.yaml` with the defaults, unless one exists
//! 3. Writes `index.html` with an empty feed section, unless one exists
//!
//! This command is idempotent. Existing files are never rewritten; an index
//! lacking the feed markers is kept as is and `generate` reports it.


use crate::cli::InitArgs;
use crate::config::Config;
use crate::context::ProjectContext;
use crate::error::Result;
use crate::feed::{FeedMarkers, scaffold_index};
use crate::fs::atomic_write_file;
use std::env;
use tracing::info;

/// What `init` created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitOutcome {
    pub config_created: bool,
    pub index_created: bool,
}

/// Execute the `autoconcept init` command.
pub fn cmd_init(args: InitArgs) -> Result<()> {
    let ctx = ProjectContext::resolve_optional(args.root.as_deref())?;
    let config = Config::load_or_default(ctx.config_path())?.apply_env(|key| env::var(key).ok());

    let outcome = init_project(&ctx, &config)?;

    println!("Initialized autoconcept project in {}.", ctx.root.display());
    println!();
    println!("  images/");
    println!("  articles/");
    println!("  templates/");
    if outcome.config_created {
        println!("  autoconcept.yaml  (defaults)");
    }
    if outcome.index_created {
        println!("  index.html  (new, empty feed)");
    } else {
        println!("  index.html  (kept as is)");
    }
    Ok(())
}

pub fn init_project(ctx: &ProjectContext, config: &Config) -> Result<InitOutcome> {
    ctx.ensure_dirs()?;

    let config_path = ctx.config_path();
    let config_created = if config_path.exists() {
        false
    } else {
        atomic_write_file(&config_path, &Config::default().to_yaml()?)?;
        info!("created {}", config_path.display());
        true
    };

    let index_created = if ctx.index_path.exists() {
        false
    } else {
        let html = scaffold_index(&config.site_title, FeedMarkers::from(&config.feed));
        atomic_write_file(&ctx.index_path, &html)?;
        info!("created {}", ctx.index_path.display());
        true
    };

    Ok(InitOutcome {
        config_created,
        index_created,
    })
}

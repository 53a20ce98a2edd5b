//! Implementation of the `autoconcept generate` command.
//!
//! # What a run does
//!
//! 1. Verifies `index.html` carries both feed markers (when the feed is on)
//! 2. Loads the article and card templates (project overrides or built-ins)
//! 3. Draws category, name, spec sheet and prompts
//! 4. Renders the article and card, so template errors surface before any
//!    request is made
//! 5. Fetches and stores the three images, all or nothing
//! 6. Writes the article
//! 7. Inserts the card into the feed
//!
//! Steps 1 to 4 have no side effects. If step 6 or 7 fails, the files this
//! run created are removed. Files left by an earlier run under the same
//! names are never removed.


use super::draft::{self, Draft};
use crate::cli::GenerateArgs;
use crate::config::{ApiKey, Config};
use crate::context::ProjectContext;
use crate::error::Result;
use crate::feed::{FeedMarkers, check_index, update_index};
use crate::fs::{atomic_write_file, remove_written};
use crate::image::{ImageGenerator, OpenAiImageClient, fetch_and_save};
use crate::render::{
    ArticleInput, DEFAULT_ARTICLE_TEMPLATE, DEFAULT_CARD_TEMPLATE, build_context, load_template,
    render,
};
use crate::vehicle::VehicleCategory;
use chrono::NaiveDate;
use rand::Rng;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Inputs a run does not draw at random.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub date: NaiveDate,
    pub category: VehicleCategory,
    /// Insert a card into the feed (still subject to `feed.enabled`).
    pub update_feed: bool,
}

/// What a successful run wrote.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub draft: Draft,
    pub images: Vec<PathBuf>,
    pub article_path: PathBuf,
    pub article_url: String,
    pub feed_updated: bool,
}

/// Execute the `autoconcept generate` command.
pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    // Credential first: a missing key must not leave anything behind.
    let api_key = ApiKey::from_lookup(|key| env::var(key).ok())?;

    let selection = &args.selection;
    let ctx = selection.project()?;
    let config = selection.config(&ctx, |key| env::var(key).ok())?;
    let client = OpenAiImageClient::new(&config.image, api_key)?;

    let date = selection.run_date(config.timezone);
    let options = RunOptions {
        date,
        category: selection.category(date),
        update_feed: !args.no_index,
    };
    let mut rng = selection.rng();

    let report = run_generation(&ctx, &config, &client, &mut rng, &options)?;
    print_report(&ctx, &report);
    Ok(())
}

/// Run the full pipeline against `generator`.
pub fn run_generation<R: Rng>(
    ctx: &ProjectContext,
    config: &Config,
    generator: &dyn ImageGenerator,
    rng: &mut R,
    options: &RunOptions,
) -> Result<RunReport> {
    let markers = FeedMarkers::from(&config.feed);
    let update_feed = options.update_feed && config.feed.enabled;
    if update_feed {
        check_index(&ctx.index_path, markers)?;
    }

    let article_template = load_template(&ctx.article_template_path(), DEFAULT_ARTICLE_TEMPLATE)?;
    let card_template = if update_feed {
        Some(load_template(&ctx.card_template_path(), DEFAULT_CARD_TEMPLATE)?)
    } else {
        None
    };

    let draft = draft::draw(config, options.category, rng);
    let artifacts = ctx.artifacts(options.date, &draft.identity.slug, &config.image.extension);

    let values = build_context(&ArticleInput {
        identity: &draft.identity,
        category: draft.category,
        spec: &draft.spec,
        images: &artifacts.images,
        date: options.date,
        site_title: &config.site_title,
        article_url: &artifacts.article_url,
    });
    let article = render(&article_template, &values)?;
    let card = card_template
        .map(|template| render(&template, &values))
        .transpose()?;

    ctx.ensure_dirs()?;
    // Only files this run created are rolled back; earlier runs' files stay.
    let mut created = fetch_and_save(generator, &draft.prompts, &artifacts.images)?;

    let article_existed = artifacts.article_path.exists();
    if let Err(err) = atomic_write_file(&artifacts.article_path, &article) {
        abandon(&created);
        return Err(err);
    }
    info!("article written: {}", artifacts.article_path.display());
    if !article_existed {
        created.push(artifacts.article_path.clone());
    }

    if let Some(card) = &card
        && let Err(err) = update_index(&ctx.index_path, card, markers)
    {
        abandon(&created);
        return Err(err);
    }

    Ok(RunReport {
        draft,
        images: artifacts.images.into_iter().map(|t| t.path).collect(),
        article_path: artifacts.article_path,
        article_url: artifacts.article_url,
        feed_updated: card.is_some(),
    })
}

fn abandon(created: &[PathBuf]) {
    warn!("run failed, removing {} file(s) it created", created.len());
    remove_written(created);
}

fn relative<'a>(ctx: &ProjectContext, path: &'a Path) -> &'a Path {
    path.strip_prefix(&ctx.root).unwrap_or(path)
}

fn print_report(ctx: &ProjectContext, report: &RunReport) {
    let draft = &report.draft;
    println!("Generated {} ({}).", draft.identity.name, draft.category.kind_label());
    println!();
    for image in &report.images {
        println!("  {}", relative(ctx, image).display());
    }
    println!("  {}", relative(ctx, &report.article_path).display());
    if report.feed_updated {
        println!("  {}  (card added)", relative(ctx, &ctx.index_path).display());
    }
    println!();
    println!("Article URL: {}", report.article_url);
}

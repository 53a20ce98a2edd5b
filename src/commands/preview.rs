//! Implementation of the `autoconcept preview` command.
//!
//! Draws the same category, identity, spec sheet and prompts a `generate`
//! run with the same flags would, and prints them. Nothing is written and
//! the image service is not contacted, so no credential is needed.

use super::draft::{self, Draft};
use crate::cli::PreviewArgs;
use crate::error::{AutoconceptError, Result};
use crate::prompt::ImageView;
use chrono::NaiveDate;
use std::env;

/// Execute the `autoconcept preview` command.
pub fn cmd_preview(args: PreviewArgs) -> Result<()> {
    let selection = &args.selection;
    let ctx = selection.project()?;
    let config = selection.config(&ctx, |key| env::var(key).ok())?;

    let date = selection.run_date(config.timezone);
    let mut rng = selection.rng();
    let draft = draft::draw(&config, selection.category(date), &mut rng);

    if args.json {
        println!("{}", to_json(date, &draft)?);
    } else {
        print!("{}", to_text(date, &draft));
    }
    Ok(())
}

fn to_json(date: NaiveDate, draft: &Draft) -> Result<String> {
    let value = serde_json::json!({
        "date": date.format("%Y-%m-%d").to_string(),
        "draft": draft,
    });
    serde_json::to_string_pretty(&value).map_err(|e| {
        AutoconceptError::UserError(format!("failed to serialize preview: {}", e))
    })
}

fn to_text(date: NaiveDate, draft: &Draft) -> String {
    let spec = &draft.spec;
    let dims = &spec.dimensions;
    let mut out = String::new();

    out.push_str(&format!(
        "{} ({}, {})\n",
        draft.identity.name,
        draft.category,
        date.format("%Y-%m-%d")
    ));
    out.push_str(&format!("Slug:        {}\n", draft.identity.slug));
    if draft.future_mode {
        out.push_str("Mode:        future\n");
    }
    out.push_str(&format!("0-100 km/h:  {:.1} s\n", spec.zero_to_100));
    out.push_str(&format!("Top speed:   {} km/h\n", spec.top_speed));
    out.push_str(&format!("Power:       {} hp\n", spec.power_hp));
    out.push_str(&format!("Range:       {} km\n", spec.range_km));
    out.push_str(&format!("Seats:       {}\n", spec.seats));
    out.push_str(&format!(
        "Dimensions:  {:.2} x {:.2} x {:.2} m, wheelbase {:.2} m\n",
        dims.length, dims.width, dims.height, dims.wheelbase
    ));
    out.push_str(&format!("Tags:        {}\n", spec.tags.join(", ")));

    for view in ImageView::ALL {
        out.push_str(&format!("\n[{} prompt]\n{}\n", view, draft.prompts.get(view)));
    }
    out
}

//! Article context and template sources.

use super::template::{Field, TemplateContext, render_template};
use crate::error::{AutoconceptError, Result};
use crate::image::ImageTarget;
use crate::prompt::ImageView;
use crate::vehicle::{VehicleCategory, VehicleIdentity, VehicleSpec};
use chrono::NaiveDate;
use std::path::Path;
use tracing::debug;

/// Built-in article page: stylesheet, print and copy buttons, lightbox.
pub const DEFAULT_ARTICLE_TEMPLATE: &str = include_str!("../../assets/article_template.html");

/// Built-in feed card fragment.
pub const DEFAULT_CARD_TEMPLATE: &str = include_str!("../../assets/card_template.html");

/// Everything an article or card can show about one run.
#[derive(Debug, Clone, Copy)]
pub struct ArticleInput<'a> {
    pub identity: &'a VehicleIdentity,
    pub category: VehicleCategory,
    pub spec: &'a VehicleSpec,
    pub images: &'a [ImageTarget],
    pub date: NaiveDate,
    pub site_title: &'a str,
    pub article_url: &'a str,
}

/// Fill every field of the closed set from one run's data.
pub fn build_context(input: &ArticleInput<'_>) -> TemplateContext {
    let spec = input.spec;
    let mut ctx = TemplateContext::new();

    ctx.set(Field::Model, &input.identity.name)
        .set(Field::Kind, input.category.kind_label())
        .set(Field::Zero100, format!("{:.1}", spec.zero_to_100))
        .set(Field::Vmax, spec.top_speed)
        .set(Field::PowerHp, spec.power_hp)
        .set(Field::Autonomy, spec.range_km)
        .set(Field::Seats, spec.seats)
        .set(Field::DimLength, format!("{:.2}", spec.dimensions.length))
        .set(Field::DimWidth, format!("{:.2}", spec.dimensions.width))
        .set(Field::DimHeight, format!("{:.2}", spec.dimensions.height))
        .set(Field::DimWheelbase, format!("{:.2}", spec.dimensions.wheelbase))
        .set(Field::Tags, spec.tags.join(" · "))
        .set(Field::Date, input.date.format("%Y-%m-%d"))
        .set(Field::SiteTitle, input.site_title)
        .set(Field::ArticleUrl, input.article_url);

    for image in input.images {
        let field = match image.view {
            ImageView::Front => Field::Img01,
            ImageView::Rear => Field::Img02,
            ImageView::Interior => Field::Img03,
        };
        ctx.set(field, &image.url);
    }

    ctx
}

/// Read the override template at `path` if it is a file, else use `fallback`.
pub fn load_template(path: &Path, fallback: &str) -> Result<String> {
    if path.is_file() {
        debug!("using template override {}", path.display());
        std::fs::read_to_string(path).map_err(|e| {
            AutoconceptError::UserError(format!(
                "failed to read template '{}': {}",
                path.display(),
                e
            ))
        })
    } else {
        Ok(fallback.to_string())
    }
}

/// Render a template against a run context.
pub fn render(template: &str, ctx: &TemplateContext) -> Result<String> {
    Ok(render_template(template, ctx)?)
}

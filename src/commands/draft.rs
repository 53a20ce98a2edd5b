//! The random half of a run: everything decided before the image service is
//! contacted.

use crate::config::Config;
use crate::prompt::{PromptSet, StyleChoices, build_prompts};
use crate::vehicle::{VehicleCategory, VehicleIdentity, VehicleSpec, randomize_spec};
use rand::Rng;
use serde::Serialize;
use tracing::info;

/// Category, name, spec sheet and prompts for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Draft {
    pub category: VehicleCategory,
    pub future_mode: bool,
    pub identity: VehicleIdentity,
    pub spec: VehicleSpec,
    pub style: StyleChoices,
    pub prompts: PromptSet,
}

/// Draw identity, spec and style in a fixed order so a seed reproduces a draft.
pub fn draw<R: Rng>(config: &Config, category: VehicleCategory, rng: &mut R) -> Draft {
    let identity = VehicleIdentity::invent(category, rng);
    let spec = randomize_spec(category, config.ranges_for(category), rng);
    let style = StyleChoices::draw(rng);
    let prompts = build_prompts(category, &identity, &style, config.future_mode);

    info!(
        category = %category,
        future_mode = config.future_mode,
        "drafted {} ({})",
        identity.name,
        identity.slug
    );

    Draft {
        category,
        future_mode: config.future_mode,
        identity,
        spec,
        style,
        prompts,
    }
}

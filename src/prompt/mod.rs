//! Image prompt builder.
//!
//! Each run produces three prompts (front, rear, interior) that share one
//! paint and one backdrop so the views read as the same car. Every prompt
//! opens with the same style contract, which tells the image service not to
//! reproduce real trademarks, logos, badges or brand-identifiable grilles.
//!
//! Prompt length is not checked against service limits.

mod vocabulary;

use crate::vehicle::{VehicleCategory, VehicleIdentity};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::fmt;

/// The three views generated per run, in fetch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageView {
    Front,
    Rear,
    Interior,
}

impl ImageView {
    pub const ALL: [ImageView; 3] = [ImageView::Front, ImageView::Rear, ImageView::Interior];

    /// One-based position, used as the `-01..-03` file suffix.
    pub fn number(self) -> u8 {
        match self {
            ImageView::Front => 1,
            ImageView::Rear => 2,
            ImageView::Interior => 3,
        }
    }
}

impl fmt::Display for ImageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageView::Front => write!(f, "front"),
            ImageView::Rear => write!(f, "rear"),
            ImageView::Interior => write!(f, "interior"),
        }
    }
}

/// Visual choices drawn once per run and shared across views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleChoices {
    pub paint: String,
    pub backdrop: String,
    pub wheels: String,
    pub interior_framing: String,
}

impl StyleChoices {
    /// Draw each attribute uniformly from its fixed set.
    pub fn draw<R: Rng>(rng: &mut R) -> Self {
        Self {
            paint: pick(&vocabulary::PAINTS, rng),
            backdrop: pick(&vocabulary::BACKDROPS, rng),
            wheels: pick(&vocabulary::WHEELS, rng),
            interior_framing: pick(&vocabulary::INTERIOR_FRAMINGS, rng),
        }
    }
}

fn pick<R: Rng>(options: &[&str], rng: &mut R) -> String {
    // The vocabulary arrays are non-empty constants.
    options.choose(rng).copied().unwrap_or_default().to_string()
}

/// The three prompts for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptSet {
    pub front: String,
    pub rear: String,
    pub interior: String,
}

impl PromptSet {
    pub fn get(&self, view: ImageView) -> &str {
        match view {
            ImageView::Front => &self.front,
            ImageView::Rear => &self.rear,
            ImageView::Interior => &self.interior,
        }
    }
}

/// Compose the front, rear and interior prompts.
pub fn build_prompts(
    category: VehicleCategory,
    identity: &VehicleIdentity,
    style: &StyleChoices,
    future_mode: bool,
) -> PromptSet {
    let body = match category {
        VehicleCategory::Sport => "low-slung hypercar proportions",
        VehicleCategory::Luxury => "long luxury sedan proportions",
    };
    let tail = match category {
        VehicleCategory::Sport => "continuous light bar with sculpted diffuser",
        VehicleCategory::Luxury => "elegant light bar, clean trunk line",
    };

    let front = format!(
        "{}\nShot: front three-quarter view, dynamic angle; Body: {}; Paint: {}; Wheels: {}; \
         Backdrop: {}. Vehicle name: {}.",
        style_contract(vocabulary::FRONT_HINT, future_mode),
        body,
        style.paint,
        style.wheels,
        style.backdrop,
        identity.name
    );

    let rear = format!(
        "{}\nShot: rear three-quarter view, low angle; Tail: {}; Paint: {}; Backdrop: {}. \
         Vehicle name: {}.",
        style_contract(vocabulary::REAR_HINT, future_mode),
        tail,
        style.paint,
        style.backdrop,
        identity.name
    );

    let interior = format!(
        "{}\nHigh-end luxury interior, {}, {}, {}, minimal yet futuristic, natural daylight, \
         photography look, no logos. Exterior paint where visible: {}; setting: {}. \
         Vehicle name: {}.",
        style_contract("(no logos on steering wheel or seats)", future_mode),
        style.interior_framing,
        vocabulary::INTERIOR_MATERIALS,
        vocabulary::INTERIOR_UI,
        style.paint,
        style.backdrop,
        identity.name
    );

    PromptSet {
        front,
        rear,
        interior,
    }
}

/// Shared opening of every prompt.
fn style_contract(view_hint: &str, future_mode: bool) -> String {
    let mut contract = format!(
        "Ultra-realistic high-resolution concept car photo, unique visual identity that DOES NOT \
         resemble existing brands (no brand logos, no badges, no trademarks, no \
         brand-identifiable grille), elegant futuristic surfacing, aerodynamic sculpture, crisp \
         details, global illumination, photography-grade rendering, subtle reflections, premium \
         materials, signature light elements {}.",
        view_hint
    );
    if future_mode {
        contract.push(' ');
        contract.push_str(vocabulary::FUTURE_CLAUSE);
        contract.push('.');
    }
    contract
}

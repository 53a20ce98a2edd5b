//! Invented model names and their slugs.

use super::VehicleCategory;
use rand::Rng;
use serde::Serialize;

/// Syllable pool for invented names. Chosen to avoid echoing existing marques.
pub const SYLLABLES: [&str; 24] = [
    "Aely", "Orion", "Veyra", "Celest", "Hydra", "Aeon", "Kaly", "Nyra", "Solin", "Vestra", "Elios",
    "Ophir", "Zyra", "Lumen", "Icar", "Nexa", "Arion", "Eidos", "Nova", "Kaelis", "Astra", "Lyra",
    "Seraph", "Valk",
];

/// Display name plus the slug used in file names and URLs.
///
/// Nothing tracks names across runs; two runs on the same day can collide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleIdentity {
    pub name: String,
    pub slug: String,
}

impl VehicleIdentity {
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self { name, slug }
    }

    pub fn invent<R: Rng>(category: VehicleCategory, rng: &mut R) -> Self {
        Self::from_name(invent_name(category, rng))
    }
}

/// Two distinct syllables concatenated, then the category suffix:
/// `"OrionNyra One"`, `"LumenAstra Lux"`.
pub fn invent_name<R: Rng>(category: VehicleCategory, rng: &mut R) -> String {
    let first = rng.gen_range(0..SYLLABLES.len());
    let mut second = rng.gen_range(0..SYLLABLES.len() - 1);
    if second >= first {
        second += 1;
    }
    format!(
        "{}{} {}",
        SYLLABLES[first],
        SYLLABLES[second],
        category.name_suffix()
    )
}

/// Convert a display name into a filesystem and URL safe slug.
///
/// Characters other than letters, digits, `_`, `-` and whitespace are
/// dropped; the rest is trimmed and lowercased, and each run of whitespace
/// or underscores becomes a single hyphen. Existing hyphens are kept as is.
pub fn slugify(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();

    let mut slug = String::with_capacity(kept.len());
    let mut in_separator = false;

    for c in kept.trim().chars() {
        if c.is_whitespace() || c == '_' {
            if !in_separator {
                slug.push('-');
                in_separator = true;
            }
        } else {
            slug.extend(c.to_lowercase());
            in_separator = false;
        }
    }

    // Fallback for names made entirely of punctuation
    if slug.is_empty() {
        slug = "untitled".to_string();
    }

    slug
}

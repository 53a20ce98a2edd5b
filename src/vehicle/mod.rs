//! Vehicle domain: category, invented identity, and the randomized spec sheet.
//!
//! Everything here is a pure function of its inputs and an injected random
//! source, so a seeded `StdRng` reproduces a run exactly.

mod identity;
mod spec;

pub use identity::VehicleIdentity;
pub use spec::{Dimensions, VehicleSpec, randomize_spec};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Performance (sport) or comfort (luxury) classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCategory {
    /// Two-seat hydrogen supercar.
    Sport,
    /// Four-seat hydrogen luxury sedan.
    Luxury,
}

impl VehicleCategory {
    /// Even day of month is Sport, odd is Luxury.
    pub fn for_day(day: u32) -> Self {
        if day % 2 == 0 {
            VehicleCategory::Sport
        } else {
            VehicleCategory::Luxury
        }
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self::for_day(date.day())
    }

    /// Suffix appended to the invented name.
    pub fn name_suffix(self) -> &'static str {
        match self {
            VehicleCategory::Sport => "One",
            VehicleCategory::Luxury => "Lux",
        }
    }

    /// Kind label as published in articles.
    pub fn kind_label(self) -> &'static str {
        match self {
            VehicleCategory::Sport => "supercar",
            VehicleCategory::Luxury => "berline de luxe",
        }
    }

    pub fn seats(self) -> u32 {
        match self {
            VehicleCategory::Sport => 2,
            VehicleCategory::Luxury => 4,
        }
    }

    pub fn tags(self) -> [&'static str; 2] {
        match self {
            VehicleCategory::Sport => ["Supercar", "Hydrogène"],
            VehicleCategory::Luxury => ["Berline", "Hydrogène"],
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleCategory::Sport => write!(f, "sport"),
            VehicleCategory::Luxury => write!(f, "luxury"),
        }
    }
}

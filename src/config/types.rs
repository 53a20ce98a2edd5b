//! Building blocks of the config model: intervals, range tables, and the
//! image service and feed sections.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A closed interval `[min, max]` a spec field is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Interval<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies inside the closed interval.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

impl Interval<f64> {
    /// Whether both bounds are finite; `rand` cannot sample otherwise.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

/// Numeric ranges for one vehicle category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRanges {
    /// 0-100 km/h time in seconds, drawn then rounded to one decimal.
    pub zero_to_100: Interval<f64>,
    /// Top speed in km/h.
    pub top_speed: Interval<u32>,
    /// System power in horsepower.
    pub power_hp: Interval<u32>,
    /// Range in km.
    pub range_km: Interval<u32>,
    /// Body length in meters (two decimals).
    pub length: Interval<f64>,
    pub width: Interval<f64>,
    pub height: Interval<f64>,
    pub wheelbase: Interval<f64>,
}

impl CategoryRanges {
    /// Iterate over `(field name, finite?, ordered?)` for validation messages.
    pub(crate) fn bound_checks(&self) -> [(&'static str, bool, bool); 8] {
        [
            ("zero_to_100", self.zero_to_100.is_finite(), self.zero_to_100.is_ordered()),
            ("top_speed", true, self.top_speed.is_ordered()),
            ("power_hp", true, self.power_hp.is_ordered()),
            ("range_km", true, self.range_km.is_ordered()),
            ("length", self.length.is_finite(), self.length.is_ordered()),
            ("width", self.width.is_finite(), self.width.is_ordered()),
            ("height", self.height.is_finite(), self.height.is_ordered()),
            ("wheelbase", self.wheelbase.is_finite(), self.wheelbase.is_ordered()),
        ]
    }
}

/// Ranges for both categories under one aesthetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeTable {
    pub sport: CategoryRanges,
    pub luxury: CategoryRanges,
}

/// The base (present-day) and future range tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeProfiles {
    pub base: RangeTable,
    pub future: RangeTable,
}

impl Default for RangeProfiles {
    fn default() -> Self {
        Self {
            base: base_range_table(),
            future: future_range_table(),
        }
    }
}

/// Shared dimension ranges used by both categories in the base table.
fn base_dimensions() -> (Interval<f64>, Interval<f64>, Interval<f64>, Interval<f64>) {
    (
        Interval::new(4.75, 5.25),
        Interval::new(1.90, 2.02),
        Interval::new(1.23, 1.47),
        Interval::new(2.75, 3.05),
    )
}

pub fn base_range_table() -> RangeTable {
    let (length, width, height, wheelbase) = base_dimensions();
    RangeTable {
        sport: CategoryRanges {
            zero_to_100: Interval::new(2.6, 3.2),
            top_speed: Interval::new(310, 340),
            power_hp: Interval::new(750, 900),
            range_km: Interval::new(700, 950),
            length,
            width,
            height,
            wheelbase,
        },
        luxury: CategoryRanges {
            zero_to_100: Interval::new(3.8, 4.8),
            top_speed: Interval::new(260, 300),
            power_hp: Interval::new(500, 680),
            range_km: Interval::new(700, 950),
            length,
            width,
            height,
            wheelbase,
        },
    }
}

pub fn future_range_table() -> RangeTable {
    let length = Interval::new(4.60, 5.40);
    let width = Interval::new(1.92, 2.10);
    let height = Interval::new(1.10, 1.50);
    let wheelbase = Interval::new(2.70, 3.20);
    RangeTable {
        sport: CategoryRanges {
            zero_to_100: Interval::new(1.8, 2.6),
            top_speed: Interval::new(340, 420),
            power_hp: Interval::new(900, 1400),
            range_km: Interval::new(900, 1300),
            length,
            width,
            height,
            wheelbase,
        },
        luxury: CategoryRanges {
            zero_to_100: Interval::new(3.0, 4.2),
            top_speed: Interval::new(280, 340),
            power_hp: Interval::new(650, 950),
            range_km: Interval::new(900, 1300),
            length,
            width,
            height,
            wheelbase,
        },
    }
}

/// Image generation service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    /// Full URL of the generation endpoint.
    pub endpoint: String,
    pub model: String,
    /// Requested resolution, `<width>x<height>`.
    pub size: String,
    /// File extension for saved images (no leading dot).
    pub extension: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            endpoint: default_image_endpoint(),
            model: "gpt-image-1".to_string(),
            size: "1792x1024".to_string(),
            extension: "jpg".to_string(),
            timeout_secs: 120,
        }
    }
}

/// Feed index settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSettings {
    /// Whether runs splice a card into `index.html`.
    pub enabled: bool,
    pub start_marker: String,
    pub end_marker: String,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            start_marker: DEFAULT_START_MARKER.to_string(),
            end_marker: DEFAULT_END_MARKER.to_string(),
        }
    }
}

/// Literal start sentinel of the feed section.
pub const DEFAULT_START_MARKER: &str = "<!-- FEED:start -->";

/// Literal end sentinel of the feed section.
pub const DEFAULT_END_MARKER: &str = "<!-- FEED:end -->";

pub(crate) fn default_image_endpoint() -> String {
    "https://api.openai.com/v1/images/generations".to_string()
}

pub(crate) fn default_site_title() -> String {
    "FuturaDrive".to_string()
}

/// The site publishes on Paris time; date parity is taken there.
pub(crate) fn default_timezone() -> Tz {
    chrono_tz::Europe::Paris
}

//! Spec sheet randomizer.

use super::VehicleCategory;
use crate::config::{CategoryRanges, Interval};
use rand::Rng;
use serde::Serialize;

/// Exterior dimensions in meters, two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub wheelbase: f64,
}

/// The generated spec sheet. Fields are drawn independently; no
/// cross-field coherence is enforced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleSpec {
    /// 0-100 km/h in seconds, one decimal.
    pub zero_to_100: f64,
    /// km/h
    pub top_speed: u32,
    pub power_hp: u32,
    /// km
    pub range_km: u32,
    pub seats: u32,
    pub tags: Vec<String>,
    pub dimensions: Dimensions,
}

/// Draw a spec sheet for `category` from `ranges`.
///
/// Every numeric field is sampled uniformly from its closed interval;
/// seats and tags are fixed per category.
pub fn randomize_spec<R: Rng>(
    category: VehicleCategory,
    ranges: &CategoryRanges,
    rng: &mut R,
) -> VehicleSpec {
    VehicleSpec {
        zero_to_100: sample_decimal(rng, ranges.zero_to_100, 1),
        top_speed: rng.gen_range(ranges.top_speed.min..=ranges.top_speed.max),
        power_hp: rng.gen_range(ranges.power_hp.min..=ranges.power_hp.max),
        range_km: rng.gen_range(ranges.range_km.min..=ranges.range_km.max),
        seats: category.seats(),
        tags: category.tags().iter().map(|t| t.to_string()).collect(),
        dimensions: Dimensions {
            length: sample_decimal(rng, ranges.length, 2),
            width: sample_decimal(rng, ranges.width, 2),
            height: sample_decimal(rng, ranges.height, 2),
            wheelbase: sample_decimal(rng, ranges.wheelbase, 2),
        },
    }
}

/// Uniform draw rounded to `decimals`, kept inside the interval.
fn sample_decimal<R: Rng>(rng: &mut R, interval: Interval<f64>, decimals: i32) -> f64 {
    let raw = if interval.min == interval.max {
        interval.min
    } else {
        rng.gen_range(interval.min..=interval.max)
    };
    round_within(raw, decimals, interval)
}

fn round_within(value: f64, decimals: i32, interval: Interval<f64>) -> f64 {
    let scale = 10f64.powi(decimals);
    let rounded = (value * scale).round() / scale;
    if interval.contains(rounded) {
        return rounded;
    }

    // Rounding stepped outside an endpoint that has more precision than the
    // output; snap to the nearest representable step inside the interval.
    let candidate = if rounded > interval.max {
        (interval.max * scale).floor() / scale
    } else {
        (interval.min * scale).ceil() / scale
    };
    if interval.contains(candidate) {
        candidate
    } else {
        value.clamp(interval.min, interval.max)
    }
}

//! Configuration model for autoconcept.
//!
//! This module defines the Config struct that represents `autoconcept.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, validation of config values, and an
//! explicit environment overlay so the generator never reads process state
//! on its own.

mod credential;
mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use credential::{API_KEY_ENV, ApiKey};
pub use model::Config;
pub use operations::{FUTURE_MODE_ENV, parse_size};
pub use types::{
    CategoryRanges, DEFAULT_END_MARKER, DEFAULT_START_MARKER, FeedSettings, ImageSettings,
    Interval, RangeProfiles, RangeTable,
};

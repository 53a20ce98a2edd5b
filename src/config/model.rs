//! Config struct definition and default implementation.

use super::types::*;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Configuration for a generation run.
///
/// This struct represents the contents of `autoconcept.yaml` at the project
/// root. Unknown fields in the YAML are ignored for forward compatibility.
/// The API credential is never read from the file; it comes from the
/// environment only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Site settings
    // =========================================================================
    /// Site name shown in article breadcrumbs and titles.
    #[serde(default = "default_site_title")]
    pub site_title: String,

    /// IANA zone the run date is taken in when `--date` is not given.
    #[serde(default = "default_timezone")]
    pub timezone: Tz,

    // =========================================================================
    // Generation settings
    // =========================================================================
    /// Use the future range table and the futuristic prompt clause.
    #[serde(default)]
    pub future_mode: bool,

    /// Numeric ranges per aesthetic and category.
    #[serde(default)]
    pub ranges: RangeProfiles,

    // =========================================================================
    // Service and output settings
    // =========================================================================
    #[serde(default)]
    pub image: ImageSettings,

    #[serde(default)]
    pub feed: FeedSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_title: default_site_title(),
            timezone: default_timezone(),
            future_mode: false,
            ranges: RangeProfiles::default(),
            image: ImageSettings::default(),
            feed: FeedSettings::default(),
        }
    }
}

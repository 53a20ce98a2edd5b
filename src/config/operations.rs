//! Config loading, environment overlay, and validation.

use super::model::Config;
use super::types::{CategoryRanges, RangeTable};
use crate::error::{AutoconceptError, Result};
use crate::vehicle::VehicleCategory;
use serde_yaml::Value;
use std::path::Path;

/// Environment variable that switches on the future aesthetic.
pub const FUTURE_MODE_ENV: &str = "AUTOCONCEPT_FUTURE";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            AutoconceptError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from a YAML file, or fall back to defaults when the file
    /// does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string and validate it.
    ///
    /// The document is laid over the defaults key by key, so a single
    /// interval such as `ranges.base.sport.top_speed` can be given alone.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document; treat it as "all defaults".
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let overrides: Value = serde_yaml::from_str(yaml).map_err(|e| {
            AutoconceptError::ConfigError(format!("failed to parse config YAML: {}", e))
        })?;
        let mut merged = serde_yaml::to_value(Self::default()).map_err(|e| {
            AutoconceptError::ConfigError(format!("failed to serialize default config: {}", e))
        })?;
        merge_yaml(&mut merged, overrides);

        let config: Config = serde_yaml::from_value(merged).map_err(|e| {
            AutoconceptError::ConfigError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            AutoconceptError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Fold environment toggles into the config.
    ///
    /// The lookup is injected so callers decide where values come from;
    /// `main` passes `std::env::var`, tests pass a closure over a map.
    pub fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(FUTURE_MODE_ENV) {
            self.future_mode = is_truthy(&value);
        }
        self
    }

    /// The range table selected by `future_mode`.
    pub fn active_table(&self) -> &RangeTable {
        if self.future_mode {
            &self.ranges.future
        } else {
            &self.ranges.base
        }
    }

    /// Ranges for one category under the active aesthetic.
    pub fn ranges_for(&self, category: VehicleCategory) -> &CategoryRanges {
        let table = self.active_table();
        match category {
            VehicleCategory::Sport => &table.sport,
            VehicleCategory::Luxury => &table.luxury,
        }
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - every float bound in both range tables must be finite
    /// - every interval in both range tables must have `min <= max`
    /// - `image.size` must look like `<width>x<height>`
    /// - `image.extension` must be non-empty without a leading dot
    /// - `image.timeout_secs` must be positive
    /// - feed markers must be non-empty and distinct
    pub fn validate(&self) -> Result<()> {
        for (table_name, table) in [("base", &self.ranges.base), ("future", &self.ranges.future)] {
            for (category, ranges) in [("sport", &table.sport), ("luxury", &table.luxury)] {
                for (field, finite, ordered) in ranges.bound_checks() {
                    if !finite {
                        return Err(invalid(format!(
                            "ranges.{}.{}.{} must be finite",
                            table_name, category, field
                        )));
                    }
                    if !ordered {
                        return Err(invalid(format!(
                            "ranges.{}.{}.{} has min greater than max",
                            table_name, category, field
                        )));
                    }
                }
            }
        }

        if parse_size(&self.image.size).is_none() {
            return Err(invalid(format!(
                "image.size must look like '1024x1024' (found '{}')",
                self.image.size
            )));
        }

        if self.image.extension.is_empty() {
            return Err(invalid("image.extension must be non-empty".to_string()));
        }
        if self.image.extension.starts_with('.') {
            return Err(invalid(format!(
                "image.extension must not have a leading dot (found '{}'). Use '{}' instead.",
                self.image.extension,
                self.image.extension.trim_start_matches('.')
            )));
        }

        if self.image.timeout_secs == 0 {
            return Err(invalid("image.timeout_secs must be greater than 0".to_string()));
        }

        if self.feed.start_marker.is_empty() || self.feed.end_marker.is_empty() {
            return Err(invalid("feed markers must be non-empty".to_string()));
        }
        if self.feed.start_marker == self.feed.end_marker {
            return Err(invalid(
                "feed.start_marker and feed.end_marker must differ".to_string(),
            ));
        }

        Ok(())
    }
}

/// Lay `overlay` over `base`: mappings merge per key, a null keeps the base
/// value, anything else replaces it.
fn merge_yaml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base), Value::Mapping(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(slot) => merge_yaml(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (_, Value::Null) => {}
        (base, overlay) => *base = overlay,
    }
}

fn invalid(message: String) -> AutoconceptError {
    AutoconceptError::ConfigError(format!("config validation failed: {}", message))
}

/// Parse `<width>x<height>` into its two positive dimensions.
pub fn parse_size(size: &str) -> Option<(u32, u32)> {
    let (w, h) = size.split_once('x')?;
    let w: u32 = w.trim().parse().ok()?;
    let h: u32 = h.trim().parse().ok()?;
    (w > 0 && h > 0).then_some((w, h))
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

//! Tests for config functionality.

use crate::config::types::{base_range_table, future_range_table};
use crate::config::{Config, DEFAULT_END_MARKER, DEFAULT_START_MARKER, FUTURE_MODE_ENV, parse_size};
use crate::error::AutoconceptError;
use crate::vehicle::VehicleCategory;
use std::collections::HashMap;
use tempfile::TempDir;

fn env_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.site_title, "FuturaDrive");
    assert_eq!(config.timezone, chrono_tz::Europe::Paris);
    assert!(!config.future_mode);
    assert_eq!(config.image.model, "gpt-image-1");
    assert_eq!(config.image.size, "1792x1024");
    assert_eq!(config.image.extension, "jpg");
    assert_eq!(config.image.timeout_secs, 120);
    assert!(config.feed.enabled);
    assert_eq!(config.feed.start_marker, DEFAULT_START_MARKER);
    assert_eq!(config.feed.end_marker, DEFAULT_END_MARKER);
    assert_eq!(config.ranges.base, base_range_table());
    assert_eq!(config.ranges.future, future_range_table());
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
site_title: Concept Weekly
image:
  size: 1024x1024
  extension: png
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.site_title, "Concept Weekly");
    assert_eq!(config.image.size, "1024x1024");
    assert_eq!(config.image.extension, "png");

    // Unspecified values should use defaults
    assert_eq!(config.image.model, "gpt-image-1");
    assert!(config.feed.enabled);
    assert_eq!(config.ranges.base, base_range_table());
}

#[test]
fn test_parse_custom_ranges() {
    let yaml = r#"
ranges:
  base:
    sport:
      zero_to_100: { min: 2.0, max: 2.5 }
      top_speed: { min: 300, max: 310 }
      power_hp: { min: 700, max: 710 }
      range_km: { min: 600, max: 650 }
      length: { min: 4.5, max: 4.6 }
      width: { min: 1.9, max: 2.0 }
      height: { min: 1.1, max: 1.2 }
      wheelbase: { min: 2.6, max: 2.7 }
    luxury:
      zero_to_100: { min: 4.0, max: 4.5 }
      top_speed: { min: 250, max: 260 }
      power_hp: { min: 400, max: 450 }
      range_km: { min: 800, max: 900 }
      length: { min: 5.0, max: 5.2 }
      width: { min: 1.9, max: 2.0 }
      height: { min: 1.4, max: 1.5 }
      wheelbase: { min: 3.0, max: 3.1 }
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.ranges.base.sport.top_speed.min, 300);
    assert_eq!(config.ranges.base.luxury.power_hp.max, 450);
    // The future table was not given and keeps its defaults.
    assert_eq!(config.ranges.future, future_range_table());
}

#[test]
fn test_single_range_override_keeps_other_defaults() {
    let yaml = r#"
ranges:
  base:
    sport:
      top_speed: { min: 300, max: 310 }
      zero_to_100: { max: 3.0 }
"#;
    let config = Config::from_yaml(yaml).unwrap();
    let defaults = base_range_table();

    assert_eq!(config.ranges.base.sport.top_speed.min, 300);
    assert_eq!(config.ranges.base.sport.top_speed.max, 310);
    assert_eq!(config.ranges.base.sport.zero_to_100.min, defaults.sport.zero_to_100.min);
    assert_eq!(config.ranges.base.sport.zero_to_100.max, 3.0);
    assert_eq!(config.ranges.base.sport.power_hp, defaults.sport.power_hp);
    assert_eq!(config.ranges.base.luxury, defaults.luxury);
    assert_eq!(config.ranges.future, future_range_table());
}

#[test]
fn test_null_section_keeps_defaults() {
    let config = Config::from_yaml("site_title: X
feed:
image:
").unwrap();

    assert_eq!(config.site_title, "X");
    assert_eq!(config.feed, Config::default().feed);
    assert_eq!(config.image, Config::default().image);
}

#[test]
fn test_non_mapping_document_is_config_error() {
    let err = Config::from_yaml("- just
- a list
").unwrap_err();
    assert!(matches!(err, AutoconceptError::ConfigError(_)));
}

#[test]
fn test_parse_timezone() {
    let config = Config::from_yaml("timezone: America/New_York
").unwrap();
    assert_eq!(config.timezone, chrono_tz::America::New_York);
}

#[test]
fn test_unknown_timezone_is_config_error() {
    let err = Config::from_yaml("timezone: Mars/Olympus_Mons
").unwrap_err();
    assert!(matches!(err, AutoconceptError::ConfigError(_)));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let config = Config::from_yaml("some_future_option: 42\nsite_title: X\n").unwrap();
    assert_eq!(config.site_title, "X");
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let err = Config::from_yaml("image: [unterminated").unwrap_err();
    assert!(matches!(err, AutoconceptError::ConfigError(_)));
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_validate_rejects_inverted_interval() {
    let mut config = Config::default();
    config.ranges.future.luxury.top_speed.min = 500;

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("ranges.future.luxury.top_speed"));
}

#[test]
fn test_validate_rejects_infinite_bound() {
    let mut config = Config::default();
    config.ranges.base.sport.zero_to_100.max = f64::INFINITY;

    let err = config.validate().unwrap_err();
    assert!(matches!(err, AutoconceptError::ConfigError(_)));
    assert!(err.to_string().contains("ranges.base.sport.zero_to_100 must be finite"));
}

#[test]
fn test_validate_rejects_nan_bound() {
    let mut config = Config::default();
    config.ranges.future.luxury.height.min = f64::NAN;

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("ranges.future.luxury.height must be finite"));
}

#[test]
fn test_yaml_infinite_bound_is_rejected() {
    let yaml = "ranges:\n  base:\n    sport:\n      zero_to_100: { min: 2.6, max: .inf }\n";

    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("must be finite"));
}

#[test]
fn test_validate_rejects_bad_size() {
    let mut config = Config::default();
    config.image.size = "large".to_string();

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("image.size"));
}

#[test]
fn test_validate_rejects_leading_dot_extension() {
    let mut config = Config::default();
    config.image.extension = ".jpg".to_string();

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Use 'jpg' instead"));
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let mut config = Config::default();
    config.image.timeout_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_identical_markers() {
    let mut config = Config::default();
    config.feed.end_marker = config.feed.start_marker.clone();

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("must differ"));
}

#[test]
fn test_yaml_roundtrip_preserves_config() {
    let mut config = Config::default();
    config.future_mode = true;
    config.feed.enabled = false;

    let yaml = config.to_yaml().unwrap();
    let parsed = Config::from_yaml(&yaml).unwrap();

    assert_eq!(parsed, config);
}

#[test]
fn test_load_or_default_without_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_or_default(temp_dir.path().join("autoconcept.yaml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_reads_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("autoconcept.yaml");
    std::fs::write(&path, "future_mode: true\n").unwrap();

    let config = Config::load_or_default(&path).unwrap();
    assert!(config.future_mode);
}

#[test]
fn test_apply_env_enables_future_mode() {
    let env = env_map(&[(FUTURE_MODE_ENV, "yes")]);
    let config = Config::default().apply_env(|k| env.get(k).cloned());
    assert!(config.future_mode);
}

#[test]
fn test_apply_env_can_disable_future_mode() {
    let env = env_map(&[(FUTURE_MODE_ENV, "0")]);
    let mut config = Config::default();
    config.future_mode = true;

    let config = config.apply_env(|k| env.get(k).cloned());
    assert!(!config.future_mode);
}

#[test]
fn test_apply_env_without_variable_keeps_file_value() {
    let mut config = Config::default();
    config.future_mode = true;

    let config = config.apply_env(|_| None);
    assert!(config.future_mode);
}

#[test]
fn test_ranges_for_follows_future_mode() {
    let mut config = Config::default();
    assert_eq!(
        config.ranges_for(VehicleCategory::Sport),
        &base_range_table().sport
    );

    config.future_mode = true;
    assert_eq!(
        config.ranges_for(VehicleCategory::Luxury),
        &future_range_table().luxury
    );
}

#[test]
fn test_parse_size() {
    assert_eq!(parse_size("1792x1024"), Some((1792, 1024)));
    assert_eq!(parse_size("1024x1024"), Some((1024, 1024)));
    assert_eq!(parse_size("0x1024"), None);
    assert_eq!(parse_size("1024"), None);
    assert_eq!(parse_size("axb"), None);
}

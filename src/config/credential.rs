//! API credential for the image service.

use crate::error::{AutoconceptError, Result};
use std::fmt;

/// Environment variable holding the image service key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Bearer token for the image service. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Resolve the key through `lookup`, failing before any side effect
    /// when it is absent or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(API_KEY_ENV) {
            Some(key) if !key.trim().is_empty() => Ok(Self(key.trim().to_string())),
            _ => Err(AutoconceptError::ConfigError(format!(
                "{} is not set.\n\nExport it before running: export {}='sk-...'",
                API_KEY_ENV, API_KEY_ENV
            ))),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

//! Upstream API configuration types.

use scamsim_common::{default_preferences, DEFAULT_API_BASE, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};

/// Generative Language API settings and model selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Used when the model catalog is unavailable or has no usable entry.
    pub default_model: String,
    /// Substrings matched against catalog names, highest priority first.
    pub preferred_models: Vec<String>,
    /// Connect timeout in seconds (valid range: 1-120).
    pub connect_timeout_secs: u32,
    /// Whole-request timeout in seconds (valid range: 5-600).
    pub request_timeout_secs: u32,
    /// Sampling temperature (valid range: 0.0-2.0). Upstream default when unset.
    pub temperature: Option<f64>,
    /// Reply length cap (valid range: 1-65536). Upstream default when unset.
    pub max_output_tokens: Option<u32>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.into(),
            default_model: DEFAULT_MODEL.into(),
            preferred_models: default_preferences(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
            temperature: None,
            max_output_tokens: None,
        }
    }
}

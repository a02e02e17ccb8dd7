//! Chat and scenario configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Chat behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Let the counterpart speak first when a scenario starts.
    pub open_with_greeting: bool,
    /// Reply length asked of the persona (valid range: 1-10).
    pub max_reply_sentences: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            open_with_greeting: true,
            max_reply_sentences: 3,
        }
    }
}

/// Where scenarios come from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScenariosConfig {
    /// JSON scenario file; the built-in catalog is used when unset.
    pub path: Option<PathBuf>,
}

//! Configuration for the scam-scenario trainer.
//!
//! Provides TOML-based configuration with validation, the persisted API
//! key, and the scenario catalog. All config sections use defaults so
//! partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use scamsim_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config.api.default_model);
//! ```

pub mod credentials;
pub mod scenarios;
pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use credentials::{CredentialStore, API_KEY_ENV};
pub use scenarios::{builtin_scenarios, load_catalog, load_scenarios};
pub use schema::{ScamsimConfig, CONFIG_SCHEMA_VERSION};

use scamsim_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`.
///
/// A missing file is created from the commented template and defaults are
/// returned.
pub fn load_config(path: Option<&Path>) -> Result<ScamsimConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_or_create(path),
        None => toml_loader::load_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_with_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[logging]\nlevel = \"DEBUG\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.logging.level, schema::LogLevel::Debug);
    }
}

//! Persisted API key.
//!
//! The key is the only datum kept across runs: one string in
//! `<config_dir>/scamsim/credentials`. `GEMINI_API_KEY` in the environment
//! takes precedence over the stored value.

use std::path::{Path, PathBuf};

use scamsim_common::ConfigError;
use tracing::{debug, info};

use crate::toml_loader::app_config_dir;

/// Environment variable that overrides the stored key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// File-backed store for the API key.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the per-user application directory.
    pub fn default_location() -> Result<Self, ConfigError> {
        Ok(Self::new(app_config_dir()?.join("credentials")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored key, or `None` when nothing (or only whitespace) is stored.
    pub fn load(&self) -> Result<Option<String>, ConfigError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            ConfigError::CredentialError(format!("failed to read {}: {e}", self.path.display()))
        })?;
        let key = content.trim();
        Ok((!key.is_empty()).then(|| key.to_string()))
    }

    /// Persist `key` (trimmed). Blank keys are rejected.
    pub fn save(&self, key: &str) -> Result<(), ConfigError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::CredentialError("API key is empty".into()));
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::CredentialError(format!(
                    "failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        std::fs::write(&self.path, key).map_err(|e| {
            ConfigError::CredentialError(format!("failed to write {}: {e}", self.path.display()))
        })?;
        restrict_permissions(&self.path)?;

        info!("saved API key to {}", self.path.display());
        Ok(())
    }

    /// Remove the stored key. Succeeds when nothing is stored.
    pub fn clear(&self) -> Result<(), ConfigError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!("removed stored API key");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ConfigError::CredentialError(format!(
                "failed to remove {}: {e}",
                self.path.display()
            ))),
        }
    }

    /// Environment key if set, else the stored one.
    pub fn resolve(&self) -> Result<Option<String>, ConfigError> {
        let from_env = std::env::var(API_KEY_ENV).ok();
        if from_env.is_some() {
            debug!("using API key from {API_KEY_ENV}");
        }
        Ok(pick_api_key(from_env, self.load()?))
    }
}

fn pick_api_key(from_env: Option<String>, stored: Option<String>) -> Option<String> {
    from_env
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .or(stored)
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), ConfigError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).map_err(|e| {
        ConfigError::CredentialError(format!(
            "failed to set permissions on {}: {e}",
            path.display()
        ))
    })
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), ConfigError> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> CredentialStore {
        CredentialStore::new(dir.path().join("scamsim").join("credentials"))
    }

    #[test]
    fn missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(&dir).load().unwrap(), None);
    }

    #[test]
    fn save_then_load_trims() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save("  AIzaTestKey\n").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("AIzaTestKey"));
    }

    #[test]
    fn blank_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(matches!(
            store.save("   "),
            Err(ConfigError::CredentialError(_))
        ));
        assert!(!store.path().exists());
    }

    #[test]
    fn whitespace_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "\n  \n").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn clear_removes_key_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save("AIzaTestKey").unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save("AIzaTestKey").unwrap();
        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn environment_key_takes_precedence() {
        assert_eq!(
            pick_api_key(Some("env-key".into()), Some("stored".into())).as_deref(),
            Some("env-key")
        );
        assert_eq!(
            pick_api_key(Some("  ".into()), Some("stored".into())).as_deref(),
            Some("stored")
        );
        assert_eq!(pick_api_key(None, None), None);
    }
}

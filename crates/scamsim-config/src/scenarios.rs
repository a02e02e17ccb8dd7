//! Scenario catalog loading.
//!
//! Scenarios come from a JSON array of descriptors, either a user-supplied
//! file or the built-in catalog compiled into the binary.

use std::collections::HashSet;
use std::path::Path;

use scamsim_common::{ConfigError, Scenario};
use tracing::info;

use crate::schema::ScenariosConfig;

const BUILTIN_SCENARIOS: &str = include_str!("../scenarios/builtin.json");

/// Parse and check a JSON scenario array.
pub fn parse_scenarios(json: &str) -> Result<Vec<Scenario>, ConfigError> {
    let scenarios: Vec<Scenario> = serde_json::from_str(json)
        .map_err(|e| ConfigError::ScenarioError(format!("failed to parse scenarios: {e}")))?;
    check_catalog(&scenarios)?;
    Ok(scenarios)
}

/// The catalog shipped with the application.
pub fn builtin_scenarios() -> Result<Vec<Scenario>, ConfigError> {
    parse_scenarios(BUILTIN_SCENARIOS)
}

/// Load a scenario file.
pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ScenarioError(format!("failed to read {}: {e}", path.display()))
    })?;
    let scenarios = parse_scenarios(&content)?;
    info!("loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

/// `path_override`, else `[scenarios] path`, else the built-in catalog.
pub fn load_catalog(
    config: &ScenariosConfig,
    path_override: Option<&Path>,
) -> Result<Vec<Scenario>, ConfigError> {
    match path_override.or(config.path.as_deref()) {
        Some(path) => load_scenarios(path),
        None => builtin_scenarios(),
    }
}

fn check_catalog(scenarios: &[Scenario]) -> Result<(), ConfigError> {
    if scenarios.is_empty() {
        return Err(ConfigError::ScenarioError("no scenarios defined".into()));
    }

    let mut seen = HashSet::new();
    for s in scenarios {
        if s.id.trim().is_empty() {
            return Err(ConfigError::ScenarioError(format!(
                "scenario '{}' has an empty id",
                s.title
            )));
        }
        if s.title.trim().is_empty() || s.system_prompt.trim().is_empty() {
            return Err(ConfigError::ScenarioError(format!(
                "scenario '{}' needs a title and a system_prompt",
                s.id
            )));
        }
        if !seen.insert(s.id.as_str()) {
            return Err(ConfigError::ScenarioError(format!(
                "duplicate scenario id '{}'",
                s.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scamsim_common::Difficulty;

    #[test]
    fn builtin_catalog_is_valid() {
        let scenarios = builtin_scenarios().unwrap();
        assert!(scenarios.len() >= 3);
        assert!(scenarios.iter().any(|s| s.difficulty == Difficulty::High));
    }

    #[test]
    fn parses_original_style_descriptors() {
        let json = r#"[{
            "id": "premio",
            "title": "Premio falso",
            "description": "Ganaste un premio",
            "difficulty": "Baja",
            "system_prompt": "Eres un estafador."
        }]"#;
        let scenarios = parse_scenarios(json).unwrap();
        assert_eq!(scenarios[0].difficulty, Difficulty::Low);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[
            {"id": "a", "title": "A", "system_prompt": "p"},
            {"id": "a", "title": "B", "system_prompt": "q"}
        ]"#;
        let err = parse_scenarios(json).unwrap_err().to_string();
        assert!(err.contains("duplicate scenario id 'a'"));
    }

    #[test]
    fn rejects_blank_prompt_and_empty_list() {
        let json = r#"[{"id": "a", "title": "A", "system_prompt": "  "}]"#;
        assert!(parse_scenarios(json).is_err());
        assert!(parse_scenarios("[]").is_err());
        assert!(parse_scenarios("{not json").is_err());
    }

    #[test]
    fn catalog_prefers_override_then_config() {
        let dir = tempfile::tempdir().unwrap();
        let from_config = dir.path().join("config.json");
        let from_flag = dir.path().join("flag.json");
        std::fs::write(
            &from_config,
            r#"[{"id": "cfg", "title": "Config", "system_prompt": "p"}]"#,
        )
        .unwrap();
        std::fs::write(
            &from_flag,
            r#"[{"id": "flag", "title": "Flag", "system_prompt": "p"}]"#,
        )
        .unwrap();

        let config = ScenariosConfig {
            path: Some(from_config),
        };
        assert_eq!(load_catalog(&config, Some(&from_flag)).unwrap()[0].id, "flag");
        assert_eq!(load_catalog(&config, None).unwrap()[0].id, "cfg");
        assert_eq!(
            load_catalog(&ScenariosConfig::default(), None).unwrap(),
            builtin_scenarios().unwrap()
        );
    }

    #[test]
    fn missing_file_is_scenario_error() {
        let err = load_scenarios(Path::new("/tmp/nonexistent_scamsim_scenarios.json")).unwrap_err();
        assert!(matches!(err, ConfigError::ScenarioError(_)));
    }
}

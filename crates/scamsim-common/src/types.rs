use serde::{Deserialize, Serialize};
use std::fmt;

/// How hard a scenario is to see through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[serde(alias = "Low", alias = "Baja")]
    Low,
    #[default]
    #[serde(alias = "Medium", alias = "Media")]
    Medium,
    #[serde(alias = "High", alias = "Alta")]
    High,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Low => "low",
            Difficulty::Medium => "medium",
            Difficulty::High => "high",
        };
        f.write_str(label)
    }
}

/// A scam scenario the trainee can pick.
///
/// Only `system_prompt` (persona instruction) and `title` (analysis context)
/// reach the conversation core; the rest is for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub system_prompt: String,
}

/// Who is being trained. Collected at onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TraineeProfile {
    pub name: String,
    pub age: String,
}

impl TraineeProfile {
    /// Both fields are required before a scenario can start.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.age.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_accepts_localized_labels() {
        let d: Difficulty = serde_json::from_str("\"Baja\"").unwrap();
        assert_eq!(d, Difficulty::Low);
        let d: Difficulty = serde_json::from_str("\"Media\"").unwrap();
        assert_eq!(d, Difficulty::Medium);
        let d: Difficulty = serde_json::from_str("\"Alta\"").unwrap();
        assert_eq!(d, Difficulty::High);
        let d: Difficulty = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(d, Difficulty::High);
    }

    #[test]
    fn difficulty_display() {
        assert_eq!(Difficulty::Low.to_string(), "low");
        assert_eq!(Difficulty::High.to_string(), "high");
    }

    #[test]
    fn scenario_optional_fields_default() {
        let s: Scenario = serde_json::from_str(
            r#"{"id": "bank", "title": "Fake bank call", "system_prompt": "You are a bank agent."}"#,
        )
        .unwrap();
        assert_eq!(s.description, "");
        assert_eq!(s.difficulty, Difficulty::Medium);
    }

    #[test]
    fn scenario_missing_prompt_is_rejected() {
        let res: Result<Scenario, _> = serde_json::from_str(r#"{"id": "x", "title": "X"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn profile_requires_name_and_age() {
        let mut p = TraineeProfile::default();
        assert!(!p.is_complete());
        p.name = "Ana".into();
        assert!(!p.is_complete());
        p.age = "  ".into();
        assert!(!p.is_complete());
        p.age = "67".into();
        assert!(p.is_complete());
    }
}

//! Upstream defaults shared by the config schema and the model resolver.

/// Generative Language API root.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Preferred model identifiers, highest priority first.
pub const DEFAULT_PREFERENCES: &[&str] = &[
    "gemini-2.5-flash",
    "gemini-2.0-flash",
    "gemini-1.5-flash",
    "gemini-1.5-flash-latest",
];

/// Model used whenever the catalog cannot supply one.
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// `DEFAULT_PREFERENCES` as owned strings.
pub fn default_preferences() -> Vec<String> {
    DEFAULT_PREFERENCES.iter().map(|s| s.to_string()).collect()
}

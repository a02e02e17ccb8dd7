//! Fully-qualified generation endpoint.

use std::fmt;

/// Namespace every model name must carry upstream.
pub const MODEL_PREFIX: &str = "models/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRef {
    model: String,
    url: String,
}

impl EndpointRef {
    /// Build the `generateContent` endpoint for `model` under `base_url`,
    /// adding the `models/` prefix when the name is unqualified.
    pub fn new(base_url: &str, model: &str) -> Self {
        let model = if model.starts_with(MODEL_PREFIX) {
            model.to_string()
        } else {
            format!("{MODEL_PREFIX}{model}")
        };
        let url = format!("{}/{}:generateContent", base_url.trim_end_matches('/'), model);
        Self { model, url }
    }

    /// Qualified model name, e.g. `models/gemini-2.5-flash`.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// URL without the credential query parameter.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for EndpointRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

    #[test]
    fn unqualified_name_gets_prefix() {
        let ep = EndpointRef::new(BASE, "gemini-pro");
        assert_eq!(ep.model(), "models/gemini-pro");
        assert_eq!(
            ep.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn qualified_name_is_not_double_prefixed() {
        let ep = EndpointRef::new(BASE, "models/gemini-2.5-flash");
        assert_eq!(ep.model(), "models/gemini-2.5-flash");
        assert!(!ep.url().contains("models/models/"));
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let ep = EndpointRef::new("http://127.0.0.1:8080/", "gemini-pro");
        assert_eq!(ep.url(), "http://127.0.0.1:8080/models/gemini-pro:generateContent");
        assert_eq!(ep.to_string(), "models/gemini-pro");
    }
}

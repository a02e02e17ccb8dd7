//! Conversation core for the scam-scenario trainer.
//!
//! Provides:
//! - A Gemini client for the model catalog and `generateContent`
//! - A model resolver that picks a usable endpoint once per session
//! - A `Session` that owns the turn-ordered transcript and drives the
//!   role-play chat and the closing analysis

pub mod gemini;
pub mod prompts;
pub mod resolver;
pub mod session;
pub mod transcript;

#[cfg(test)]
mod test_support;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use resolver::{EndpointRef, ModelResolver, Resolution, ResolutionSource, Tier};
pub use session::{Session, SessionState};
pub use transcript::Transcript;

/// Upstream generation API as seen by the resolver and the session.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Base URL that catalog model names are qualified against.
    fn base_url(&self) -> &str;

    /// Fetch the catalog of models available to the credential.
    async fn list_models(&self) -> Result<Vec<ModelInfo>, AiError>;

    /// Send the whole transcript to `endpoint` and return the first
    /// candidate's text.
    async fn generate_content(
        &self,
        endpoint: &EndpointRef,
        turns: &[Turn],
    ) -> Result<String, AiError>;
}

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The trainee (`"user"` upstream).
    Initiator,
    /// The simulated counterpart (`"model"` upstream).
    Counterpart,
}

impl Speaker {
    pub fn wire_role(self) -> &'static str {
        match self {
            Speaker::Initiator => "user",
            Speaker::Counterpart => "model",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub content: String,
}

impl Turn {
    pub fn initiator(content: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Initiator,
            content: content.into(),
        }
    }

    pub fn counterpart(content: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Counterpart,
            content: content.into(),
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub name: String,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    pub fn new(name: impl Into<String>, methods: &[&str]) -> Self {
        Self {
            name: name.into(),
            supported_generation_methods: methods.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Whether the model advertises free-form text generation.
    pub fn supports_generation(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == "generateContent")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AiError {
    #[error("model catalog unavailable: {0}")]
    CatalogUnavailable(String),
    #[error("no compatible model found for this API key")]
    NoCompatibleModel,
    #[error("{0}")]
    GenerationRequestFailed(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("network error: {0}")]
    NetworkError(String),
    #[error("session is busy with another request")]
    Busy,
    #[error("message is empty")]
    EmptyMessage,
    #[error("failed to build HTTP client: {0}")]
    ClientInit(String),
}

impl From<AiError> for scamsim_common::ScamsimError {
    fn from(err: AiError) -> Self {
        scamsim_common::ScamsimError::Ai(err.to_string())
    }
}

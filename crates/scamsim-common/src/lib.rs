//! Shared types for the scam-scenario trainer: errors, identifiers, and the
//! scenario/trainee descriptors handed to the conversation core.

pub mod errors;
pub mod id;
pub mod models;
pub mod types;

pub use errors::{ConfigError, ScamsimError};
pub use id::SessionId;
pub use models::{default_preferences, DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_PREFERENCES};
pub use types::{Difficulty, Scenario, TraineeProfile};

pub type Result<T> = std::result::Result<T, ScamsimError>;

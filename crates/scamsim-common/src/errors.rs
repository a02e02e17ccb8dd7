use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("credential store error: {0}")]
    CredentialError(String),

    #[error("scenario catalog error: {0}")]
    ScenarioError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ScamsimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("ai error: {0}")]
    Ai(String),

    #[error("missing API key: {0}")]
    MissingCredential(String),
}

//! Full configuration validation.
//!
//! Validates numeric ranges and required strings, collecting every error
//! into a single `ConfigError`.

mod api;
mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::ScamsimConfig;
use scamsim_common::ConfigError;

use helpers::validate_range;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ScamsimConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    api::validate_api(&mut errors, config);
    validate_range(
        &mut errors,
        "chat.max_reply_sentences",
        config.chat.max_reply_sentences,
        1,
        10,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

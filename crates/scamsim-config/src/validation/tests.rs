//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = ScamsimConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_non_http_base_url() {
    let mut config = ScamsimConfig::default();
    config.api.base_url = "generativelanguage.googleapis.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.base_url"));
}

#[test]
fn catches_empty_default_model() {
    let mut config = ScamsimConfig::default();
    config.api.default_model = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.default_model"));
}

#[test]
fn catches_empty_preference() {
    let mut config = ScamsimConfig::default();
    config.api.preferred_models.push(String::new());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.preferred_models"));
}

#[test]
fn empty_preference_list_is_allowed() {
    let mut config = ScamsimConfig::default();
    config.api.preferred_models.clear();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_request_timeout_out_of_range() {
    let mut config = ScamsimConfig::default();
    config.api.request_timeout_secs = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.request_timeout_secs"));
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = ScamsimConfig::default();
    config.api.temperature = Some(3.5);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.temperature"));
}

#[test]
fn catches_reply_sentences_zero() {
    let mut config = ScamsimConfig::default();
    config.chat.max_reply_sentences = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.max_reply_sentences"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = ScamsimConfig::default();
    config.api.connect_timeout_secs = 0;
    config.api.max_output_tokens = Some(0);
    config.chat.max_reply_sentences = 50;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.connect_timeout_secs"));
    assert!(err.contains("api.max_output_tokens"));
    assert!(err.contains("chat.max_reply_sentences"));
}

//! Validation for the `[api]` section.

use crate::schema::ScamsimConfig;

use super::helpers::validate_range;

pub(crate) fn validate_api(errors: &mut Vec<String>, config: &ScamsimConfig) {
    let api = &config.api;

    if !(api.base_url.starts_with("https://") || api.base_url.starts_with("http://")) {
        errors.push(format!(
            "api.base_url = {:?} must be an http(s) URL",
            api.base_url
        ));
    }

    if api.default_model.trim().is_empty() {
        errors.push("api.default_model must not be empty".into());
    }

    if api.preferred_models.iter().any(|m| m.trim().is_empty()) {
        errors.push("api.preferred_models must not contain empty names".into());
    }

    validate_range(errors, "api.connect_timeout_secs", api.connect_timeout_secs, 1, 120);
    validate_range(errors, "api.request_timeout_secs", api.request_timeout_secs, 5, 600);

    if let Some(temperature) = api.temperature {
        validate_range(errors, "api.temperature", temperature, 0.0, 2.0);
    }
    if let Some(max) = api.max_output_tokens {
        validate_range(errors, "api.max_output_tokens", max, 1, 65536);
    }
}

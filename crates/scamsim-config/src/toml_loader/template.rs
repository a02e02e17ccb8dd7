//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Scam simulator configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[api]
# base_url = "https://generativelanguage.googleapis.com/v1beta"
# default_model = "gemini-pro"      # used when the model catalog has nothing usable
# preferred_models = ["gemini-2.5-flash", "gemini-2.0-flash", "gemini-1.5-flash", "gemini-1.5-flash-latest"]
# connect_timeout_secs = 10         # 1-120
# request_timeout_secs = 120        # 5-600
# temperature = 0.7                 # 0.0-2.0, upstream default when unset
# max_output_tokens = 1024          # 1-65536, upstream default when unset

[scenarios]
# path = "/path/to/scenarios.json"  # built-in scenarios when unset

[chat]
# open_with_greeting = true         # counterpart speaks first
# max_reply_sentences = 3           # 1-10

[logging]
# level = "INFO"                    # DEBUG, INFO, WARNING, ERROR
"##
}

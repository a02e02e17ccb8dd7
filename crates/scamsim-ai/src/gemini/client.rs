//! Gemini API client struct, request building, and response parsing.

use crate::{AiError, Turn};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AiError::ClientInit(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub(crate) fn models_url(&self) -> String {
        format!("{}/models", self.config.base_url.trim_end_matches('/'))
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(&self, turns: &[Turn]) -> serde_json::Value {
        let contents: Vec<_> = turns
            .iter()
            .map(|turn| {
                serde_json::json!({
                    "role": turn.speaker.wire_role(),
                    "parts": [{ "text": turn.content }]
                })
            })
            .collect();

        let mut body = serde_json::json!({ "contents": contents });

        let mut generation = serde_json::Map::new();
        if let Some(temperature) = self.config.temperature {
            generation.insert("temperature".into(), temperature.into());
        }
        if let Some(max) = self.config.max_output_tokens {
            generation.insert("maxOutputTokens".into(), max.into());
        }
        if !generation.is_empty() {
            body["generationConfig"] = serde_json::Value::Object(generation);
        }

        body
    }
}

/// Text of the first part of the first candidate.
pub(crate) fn parse_response(json: &serde_json::Value) -> Result<String, AiError> {
    let first = json["candidates"]
        .as_array()
        .and_then(|c| c.first())
        .ok_or_else(|| AiError::MalformedResponse("no candidates in response".to_string()))?;

    first["content"]["parts"]
        .as_array()
        .and_then(|parts| parts.first())
        .and_then(|part| part["text"].as_str())
        .map(str::to_string)
        .ok_or_else(|| AiError::MalformedResponse("candidate has no text content".to_string()))
}

/// Upstream `error.message` if the body carries one, else a generic message.
pub(crate) fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(str::to_string))
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| format!("Gemini API request failed (HTTP {status})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Speaker;

    fn client(config: GeminiConfig) -> GeminiClient {
        GeminiClient::new(config).unwrap()
    }

    #[test]
    fn body_carries_whole_transcript_in_order() {
        let c = client(GeminiConfig::new("k"));
        let turns = vec![
            Turn::initiator("persona"),
            Turn::counterpart("ready"),
            Turn::initiator("hello"),
        ];
        let body = c.build_request_body(&turns);
        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[2]["parts"][0]["text"], "hello");
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn generation_config_only_when_set() {
        let c = client(
            GeminiConfig::new("k")
                .with_temperature(0.9)
                .with_max_output_tokens(256),
        );
        let body = c.build_request_body(&[Turn {
            speaker: Speaker::Initiator,
            content: "hi".into(),
        }]);
        assert_eq!(body["generationConfig"]["temperature"], 0.9);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 256);
    }

    #[test]
    fn parses_first_candidate_text() {
        let json = serde_json::json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "Hi there!" }, { "text": "ignored" }] } },
                { "content": { "parts": [{ "text": "second" }] } }
            ]
        });
        assert_eq!(parse_response(&json).unwrap(), "Hi there!");
    }

    #[test]
    fn missing_shape_is_malformed() {
        for json in [
            serde_json::json!({}),
            serde_json::json!({ "candidates": [] }),
            serde_json::json!({ "candidates": [{ "finishReason": "SAFETY" }] }),
            serde_json::json!({ "candidates": [{ "content": { "parts": [] } }] }),
        ] {
            assert!(matches!(
                parse_response(&json),
                Err(AiError::MalformedResponse(_))
            ));
        }
    }

    #[test]
    fn error_message_prefers_upstream_text() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(
            error_message(reqwest::StatusCode::BAD_REQUEST, body),
            "API key not valid. Please pass a valid API key."
        );
    }

    #[test]
    fn error_message_falls_back_to_generic() {
        let msg = error_message(reqwest::StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert_eq!(msg, "Gemini API request failed (HTTP 502 Bad Gateway)");
    }

    #[test]
    fn models_url_under_base() {
        let c = client(GeminiConfig::new("k").with_base_url("http://localhost:9000/v1beta/"));
        assert_eq!(c.models_url(), "http://localhost:9000/v1beta/models");
    }
}

//! AiClient trait implementation for GeminiClient (catalog + generateContent).

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::{AiClient, AiError, EndpointRef, ModelInfo, Turn};

use super::client::{error_message, parse_response, GeminiClient};

#[derive(Deserialize)]
struct ModelCatalog {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

#[async_trait]
impl AiClient for GeminiClient {
    fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, AiError> {
        let response = self
            .http
            .get(self.models_url())
            .query(&[("key", &self.config.api_key)])
            .send()
            .await
            .map_err(|e| AiError::CatalogUnavailable(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AiError::CatalogUnavailable(format!("HTTP {status}")));
        }

        let catalog: ModelCatalog = response
            .json()
            .await
            .map_err(|e| AiError::CatalogUnavailable(e.without_url().to_string()))?;

        debug!(count = catalog.models.len(), "model catalog fetched");
        Ok(catalog.models)
    }

    async fn generate_content(
        &self,
        endpoint: &EndpointRef,
        turns: &[Turn],
    ) -> Result<String, AiError> {
        let body = self.build_request_body(turns);

        debug!(model = %endpoint, turns = turns.len(), "Gemini API request");

        let response = self
            .http
            .post(endpoint.url())
            .query(&[("key", &self.config.api_key)])
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::NetworkError(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::GenerationRequestFailed(error_message(status, &text)));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::MalformedResponse(e.without_url().to_string()))?;

        parse_response(&json)
    }
}

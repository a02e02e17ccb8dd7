//! In-memory `AiClient` with scripted catalog and replies.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{AiClient, AiError, EndpointRef, ModelInfo, Turn};

pub(crate) const TEST_BASE: &str = "http://gemini.test/v1beta";

pub(crate) fn generative(name: &str) -> ModelInfo {
    ModelInfo::new(name, &["generateContent", "countTokens"])
}

pub(crate) struct ScriptedClient {
    catalog: Result<Vec<ModelInfo>, AiError>,
    replies: Mutex<VecDeque<Result<String, AiError>>>,
    requests: Mutex<Vec<(EndpointRef, Vec<Turn>)>>,
    catalog_calls: AtomicUsize,
}

impl ScriptedClient {
    pub(crate) fn new() -> Self {
        Self {
            catalog: Ok(vec![generative("models/gemini-2.5-flash")]),
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            catalog_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_catalog(mut self, catalog: Vec<ModelInfo>) -> Self {
        self.catalog = Ok(catalog);
        self
    }

    pub(crate) fn with_catalog_error(mut self, err: AiError) -> Self {
        self.catalog = Err(err);
        self
    }

    pub(crate) fn reply(self, reply: Result<&str, AiError>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(reply.map(str::to_string));
        self
    }

    pub(crate) fn catalog_calls(&self) -> usize {
        self.catalog_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn generate_calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn last_request(&self) -> Option<(EndpointRef, Vec<Turn>)> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl AiClient for ScriptedClient {
    fn base_url(&self) -> &str {
        TEST_BASE
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, AiError> {
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        self.catalog.clone()
    }

    async fn generate_content(
        &self,
        endpoint: &EndpointRef,
        turns: &[Turn],
    ) -> Result<String, AiError> {
        // Suspend once, like a real round trip, so overlapping calls interleave.
        tokio::task::yield_now().await;
        self.requests
            .lock()
            .unwrap()
            .push((endpoint.clone(), turns.to_vec()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AiError::NetworkError("no scripted reply".into())))
    }
}

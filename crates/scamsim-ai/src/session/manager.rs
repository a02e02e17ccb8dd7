//! Session struct and transcript ownership.

use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use scamsim_common::SessionId;
use tracing::debug;

use crate::resolver::{ModelResolver, Resolution};
use crate::transcript::Transcript;
use crate::AiClient;

use super::types::{state_of, SessionState};

/// One simulated conversation: transcript, resolved endpoint, and the
/// scenario label used as context for the closing analysis.
///
/// Requests take `&self`, so a session can be shared; the busy flag
/// admits one request at a time.
pub struct Session {
    pub(super) id: SessionId,
    pub(super) client: Arc<dyn AiClient>,
    /// Memoized endpoint resolution. Held across the catalog request.
    pub(super) resolver: tokio::sync::Mutex<ModelResolver>,
    /// Append-only dialogue, priming pair first.
    pub(super) transcript: Mutex<Transcript>,
    pub(super) scenario_label: String,
    /// Set while a request is outstanding.
    pub(super) busy: AtomicBool,
}

impl Session {
    /// Seed a new session with the priming pair for `system_prompt`.
    pub fn new(
        client: Arc<dyn AiClient>,
        resolver: ModelResolver,
        system_prompt: impl Into<String>,
        scenario_label: impl Into<String>,
    ) -> Self {
        let id = SessionId::new();
        let scenario_label = scenario_label.into();
        debug!(session = %id, scenario = %scenario_label, "session created");
        Self {
            id,
            client,
            resolver: tokio::sync::Mutex::new(resolver),
            transcript: Mutex::new(Transcript::primed(system_prompt)),
            scenario_label,
            busy: AtomicBool::new(false),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Snapshot of the transcript.
    pub fn transcript(&self) -> Transcript {
        self.lock_transcript().clone()
    }

    pub fn scenario_label(&self) -> &str {
        &self.scenario_label
    }

    pub fn state(&self) -> SessionState {
        state_of(&self.busy)
    }

    /// The endpoint resolution, if one has happened yet.
    pub async fn resolution(&self) -> Option<Resolution> {
        self.resolver.lock().await.resolved().cloned()
    }

    /// Drop the memoized endpoint so the next request resolves again.
    pub fn reset_endpoint(&mut self) {
        self.resolver.get_mut().reset();
    }

    pub(super) fn lock_transcript(&self) -> MutexGuard<'_, Transcript> {
        self.transcript.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(super) async fn resolve(&self) -> Resolution {
        self.resolver
            .lock()
            .await
            .resolve(self.client.as_ref())
            .await
    }
}

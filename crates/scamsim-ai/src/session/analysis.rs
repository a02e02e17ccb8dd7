//! Closing analysis of the conversation.

use tracing::{debug, warn};

use crate::prompts::{analysis_prompt, ANALYSIS_FALLBACK};
use crate::{AiError, Turn};

use super::manager::Session;
use super::types::BusyGuard;

impl Session {
    /// Critique of the conversation so far, as lightly marked-up text
    /// (`<p>`, `<b>`, `<ul>`, `<li>`), returned verbatim.
    ///
    /// Never fails: any error yields [`ANALYSIS_FALLBACK`]. The transcript
    /// is not modified.
    pub async fn analyze(&self) -> String {
        match self.request_analysis().await {
            Ok(text) => text,
            Err(e) => {
                warn!(session = %self.id, error = %e, "analysis failed, returning fallback");
                ANALYSIS_FALLBACK.to_string()
            }
        }
    }

    async fn request_analysis(&self) -> Result<String, AiError> {
        let _guard = BusyGuard::acquire(&self.busy)?;

        let turns = self
            .lock_transcript()
            .with_appended(Turn::initiator(analysis_prompt(&self.scenario_label)));

        let resolution = self.resolve().await;
        debug!(session = %self.id, model = %resolution.endpoint, "requesting analysis");

        self.client
            .generate_content(&resolution.endpoint, &turns)
            .await
    }
}

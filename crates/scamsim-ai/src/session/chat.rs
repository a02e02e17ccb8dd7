//! Role-play turn exchange.

use tracing::debug;

use crate::prompts::OPENER;
use crate::{AiError, Turn};

use super::manager::Session;
use super::types::BusyGuard;

impl Session {
    /// Append the trainee's `text`, send the whole transcript, append and
    /// return the counterpart's reply.
    ///
    /// Blank input is rejected before anything is touched, and so is a call
    /// made while another request is outstanding (`AiError::Busy`). On
    /// failure the trainee's turn stays in the transcript and is re-sent as
    /// context by the next call.
    pub async fn send_turn(&self, text: &str) -> Result<String, AiError> {
        if text.trim().is_empty() {
            return Err(AiError::EmptyMessage);
        }

        let _guard = BusyGuard::acquire(&self.busy)?;

        self.lock_transcript().push(Turn::initiator(text));

        let resolution = self.resolve().await;
        let turns = self.lock_transcript().turns().to_vec();
        debug!(
            session = %self.id,
            model = %resolution.endpoint,
            turns = turns.len(),
            "sending turn"
        );

        let reply = self
            .client
            .generate_content(&resolution.endpoint, &turns)
            .await?;

        self.lock_transcript().push(Turn::counterpart(reply.clone()));
        Ok(reply)
    }

    /// Ask the counterpart to speak first, through the hidden opener turn.
    pub async fn open(&self) -> Result<String, AiError> {
        self.send_turn(OPENER).await
    }
}

//! Turn-ordered dialogue transcript.
//!
//! The first two turns are always the priming pair: the persona
//! instruction as an initiator turn, then a counterpart acknowledgement.
//! Turns are only ever appended.

use crate::prompts::PRIMING_ACK;
use crate::Turn;

/// Number of synthetic turns at the head of every transcript.
pub const PRIMING_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Seed a transcript with the priming pair for `system_prompt`.
    pub fn primed(system_prompt: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn::initiator(system_prompt), Turn::counterpart(PRIMING_ACK)],
        }
    }

    pub(crate) fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Every turn in order, priming pair included. This is what goes upstream.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Turns after the priming pair.
    pub fn conversation(&self) -> &[Turn] {
        &self.turns[PRIMING_LEN..]
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// A disposable copy with `turn` appended; `self` is left untouched.
    pub fn with_appended(&self, turn: Turn) -> Vec<Turn> {
        let mut turns = Vec::with_capacity(self.turns.len() + 1);
        turns.extend(self.turns.iter().cloned());
        turns.push(turn);
        turns
    }
}

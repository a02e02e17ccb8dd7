//! Conversation session management.
//!
//! A `Session` owns the transcript of one simulated conversation, the
//! memoized endpoint, and the in-flight state. It drives two modes against
//! the same transcript: the role-play chat and the closing analysis.

mod analysis;
mod chat;
mod manager;
mod types;


pub use manager::Session;
pub use types::SessionState;

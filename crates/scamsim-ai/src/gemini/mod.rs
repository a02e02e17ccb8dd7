//! Google Gemini API client.
//!
//! Implements the `AiClient` trait against the Generative Language API:
//! the model catalog and non-streaming `generateContent`. The credential is
//! sent as the `key` query parameter.

mod api;
mod client;
mod config;

pub use client::GeminiClient;
pub use config::GeminiConfig;

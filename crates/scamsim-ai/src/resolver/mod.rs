//! Model resolution.
//!
//! Turns a credential's model catalog into one callable `generateContent`
//! endpoint, once per session. Resolution never fails: catalog problems
//! resolve to the configured default model, and the outcome records which
//! branch was taken.

mod endpoint;
mod model_resolver;
mod selection;

pub use endpoint::{EndpointRef, MODEL_PREFIX};
pub use model_resolver::{
    ModelResolver, Resolution, ResolutionSource, DEFAULT_MODEL, DEFAULT_PREFERENCES,
};
pub use selection::{select_model, selection_tiers, Tier};

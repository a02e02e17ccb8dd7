//! Memoizing resolver over the upstream catalog.

use scamsim_common::default_preferences;
pub use scamsim_common::{DEFAULT_MODEL, DEFAULT_PREFERENCES};
use tracing::{debug, info, warn};

use crate::{AiClient, AiError};

use super::endpoint::EndpointRef;
use super::selection::{select_model, selection_tiers, Tier};

/// How a resolution was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Picked from the catalog by `tier`.
    Catalog { tier: Tier },
    /// Catalog lookup failed with `reason`; the default model was used.
    Default { reason: AiError },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub endpoint: EndpointRef,
    pub source: ResolutionSource,
}

impl Resolution {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, ResolutionSource::Default { .. })
    }
}

/// Resolves and caches the generation endpoint for one session.
#[derive(Debug, Clone)]
pub struct ModelResolver {
    tiers: Vec<Tier>,
    default_model: String,
    resolved: Option<Resolution>,
}

impl ModelResolver {
    pub fn new(preferences: &[String], default_model: impl Into<String>) -> Self {
        Self {
            tiers: selection_tiers(preferences),
            default_model: default_model.into(),
            resolved: None,
        }
    }

    /// Return the cached resolution, or query the catalog and cache the
    /// result. Never fails.
    pub async fn resolve(&mut self, client: &dyn AiClient) -> Resolution {
        if let Some(cached) = &self.resolved {
            return cached.clone();
        }

        let resolution = match self.lookup(client).await {
            Ok((name, tier)) => {
                let endpoint = EndpointRef::new(client.base_url(), &name);
                info!(model = %endpoint, tier = %tier, "auto-selected model");
                Resolution {
                    endpoint,
                    source: ResolutionSource::Catalog { tier },
                }
            }
            Err(reason) => {
                let endpoint = EndpointRef::new(client.base_url(), &self.default_model);
                warn!(error = %reason, model = %endpoint, "model resolution failed, using default");
                Resolution {
                    endpoint,
                    source: ResolutionSource::Default { reason },
                }
            }
        };

        self.resolved = Some(resolution.clone());
        resolution
    }

    /// Shorthand for `resolve(..).endpoint`.
    pub async fn resolve_endpoint(&mut self, client: &dyn AiClient) -> EndpointRef {
        self.resolve(client).await.endpoint
    }

    pub fn resolved(&self) -> Option<&Resolution> {
        self.resolved.as_ref()
    }

    /// Forget the cached endpoint; the next call queries the catalog again.
    pub fn reset(&mut self) {
        self.resolved = None;
    }

    async fn lookup(&self, client: &dyn AiClient) -> Result<(String, Tier), AiError> {
        debug!("detecting available models");
        let catalog = client.list_models().await?;
        select_model(&catalog, &self.tiers)
            .map(|(model, tier)| (model.name.clone(), tier.clone()))
            .ok_or(AiError::NoCompatibleModel)
    }
}

impl Default for ModelResolver {
    fn default() -> Self {
        Self::new(&default_preferences(), DEFAULT_MODEL)
    }
}

//! Catalog model selection as an ordered list of tiers.

use std::fmt;

use crate::ModelInfo;

/// One selection rule. Tiers are tried in order; the first tier with a
/// matching catalog entry wins, and within a tier catalog order decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tier {
    /// Name contains the identifier and the model can generate text.
    Preferred(String),
    /// Any model that can generate text.
    AnyGenerative,
}

impl Tier {
    pub fn matches(&self, model: &ModelInfo) -> bool {
        match self {
            Tier::Preferred(id) => model.name.contains(id.as_str()) && model.supports_generation(),
            Tier::AnyGenerative => model.supports_generation(),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Preferred(id) => write!(f, "preferred:{id}"),
            Tier::AnyGenerative => f.write_str("any-generative"),
        }
    }
}

/// Preferred tiers in priority order, then the catch-all tier. Blank
/// identifiers are skipped; they would match every model.
pub fn selection_tiers(preferences: &[String]) -> Vec<Tier> {
    preferences
        .iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .map(|id| Tier::Preferred(id.to_string()))
        .chain(std::iter::once(Tier::AnyGenerative))
        .collect()
}

/// First catalog entry satisfying the highest-priority tier that has one.
pub fn select_model<'a, 't>(
    catalog: &'a [ModelInfo],
    tiers: &'t [Tier],
) -> Option<(&'a ModelInfo, &'t Tier)> {
    tiers
        .iter()
        .find_map(|tier| catalog.iter().find(|m| tier.matches(m)).map(|m| (m, tier)))
}

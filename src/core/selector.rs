use crate::core::random::{RandomSource, ThreadRandom};
use crate::core::rules::{PairingRule, CANDIDATE_GROUPS, DEFAULT_PAIRINGS, FILLER_INGREDIENTS};
use crate::models::DrinkIngredient;
use std::collections::HashSet;
use std::sync::Arc;

/// Picks a food pairing rule for a cocktail's ingredient list.
///
/// # Selection stages
/// 1. Lowercase and trim ingredient names, drop fillers
/// 2. First candidate group (declaration order) with a key in the set wins
/// 3. Uniform random pick from the winning group's options
/// 4. No match: uniform random pick from the default pool
#[derive(Clone)]
pub struct PairingSelector {
    rng: Arc<dyn RandomSource>,
}

impl PairingSelector {
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self { rng }
    }

    pub fn with_thread_rng() -> Self {
        Self::new(Arc::new(ThreadRandom))
    }

    /// The selector's random source, shared with the fallback cascade.
    pub fn random_source(&self) -> &dyn RandomSource {
        self.rng.as_ref()
    }

    /// Choose a pairing rule for the given ingredient list.
    ///
    /// Total: always returns exactly one rule. Matching is
    /// case-insensitive on ingredient names; the static keys are already
    /// lowercase.
    pub fn select_rule(&self, ingredients: &[DrinkIngredient]) -> PairingRule {
        let keywords = filtered_keywords(ingredients);

        for group in CANDIDATE_GROUPS {
            if group.match_keys.iter().any(|key| keywords.contains(*key)) {
                let rule = group.options[self.rng.pick_index(group.options.len())];
                tracing::debug!("Matched keys {:?}, picked rule {}", group.match_keys, rule);
                return rule;
            }
        }

        let rule = DEFAULT_PAIRINGS[self.rng.pick_index(DEFAULT_PAIRINGS.len())];
        tracing::debug!("No spirit matched, picked default rule {}", rule);
        rule
    }
}

impl Default for PairingSelector {
    fn default() -> Self {
        Self::with_thread_rng()
    }
}

/// Stage 1: the lowercased, trimmed ingredient names minus fillers.
fn filtered_keywords(ingredients: &[DrinkIngredient]) -> HashSet<String> {
    ingredients
        .iter()
        .map(|ingredient| ingredient.name.trim().to_lowercase())
        .filter(|name| !name.is_empty() && !FILLER_INGREDIENTS.contains(&name.as_str()))
        .collect()
}

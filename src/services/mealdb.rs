use crate::core::{PairingRule, RandomSource, RuleKind, DEFAULT_PAIRINGS, MAX_PAIRINGS};
use crate::models::{MealSummary, MealsEnvelope};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the meal API
#[derive(Debug, Error)]
pub enum MealDbError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),
}

/// A resolved pairing: the rule whose lookup produced the meals. When the
/// cascade is exhausted, `meals` is empty and `rule` is the primary rule.
/// That is a valid "no pairing found" outcome, not an error.
#[derive(Debug, Clone)]
pub struct PairingOutcome {
    pub rule: PairingRule,
    pub meals: Vec<MealSummary>,
}

/// Meal recipe API client
///
/// Handles the food side of a pairing: filtering meals by cuisine area or
/// dish category, and the fallback cascade when a lookup comes up dry.
pub struct MealDbClient {
    base_url: String,
    client: Client,
}

impl MealDbClient {
    /// Create a new meal API client
    pub fn new(base_url: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// Filter meals by a pairing rule. An empty result set is `Ok(vec![])`,
    /// not an error.
    pub async fn filter_by_rule(&self, rule: &PairingRule) -> Result<Vec<MealSummary>, MealDbError> {
        tracing::debug!("Filtering meals by rule: {}", rule);
        match rule.kind {
            RuleKind::Area => self.filter("a", rule.value).await,
            RuleKind::Category => self.filter("c", rule.value).await,
        }
    }

    /// Filter meals by an arbitrary dish category (the category browse
    /// page takes the value from the URL path).
    pub async fn filter_by_category(&self, category: &str) -> Result<Vec<MealSummary>, MealDbError> {
        tracing::debug!("Filtering meals by category: {}", category);
        self.filter("c", category).await
    }

    async fn filter(&self, param: &str, value: &str) -> Result<Vec<MealSummary>, MealDbError> {
        let url = format!(
            "{}/filter.php?{}={}",
            self.base_url.trim_end_matches('/'),
            param,
            urlencoding::encode(value)
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(MealDbError::ApiError(format!(
                "Meal API request failed: {}",
                response.status()
            )));
        }

        let envelope: MealsEnvelope = response.json().await?;

        Ok(envelope.meals.unwrap_or_default())
    }

    /// Fetch meal suggestions for a pairing rule, degrading instead of
    /// failing.
    ///
    /// The primary rule is tried first; a non-empty result is truncated to
    /// [`MAX_PAIRINGS`] and returned in API order. On a lookup failure or
    /// an empty result the default pool is tried in shuffled order,
    /// stopping at the first rule that yields meals. Lookup failures are
    /// logged and swallowed; an exhausted cascade returns an empty list,
    /// which callers render as "no pairing found" rather than an error.
    pub async fn find_pairings(&self, rule: &PairingRule, rng: &dyn RandomSource) -> PairingOutcome {
        match self.filter_by_rule(rule).await {
            Ok(meals) if !meals.is_empty() => {
                return PairingOutcome { rule: *rule, meals: truncate(meals) };
            }
            Ok(_) => {
                tracing::debug!("No meals for primary rule {}, entering fallback cascade", rule);
            }
            Err(e) => {
                tracing::warn!("Meal lookup failed for primary rule {}: {}", rule, e);
            }
        }

        for index in rng.permutation(DEFAULT_PAIRINGS.len()) {
            let fallback = DEFAULT_PAIRINGS[index];
            match self.filter_by_rule(&fallback).await {
                Ok(meals) if !meals.is_empty() => {
                    return PairingOutcome { rule: fallback, meals: truncate(meals) };
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("Meal lookup failed for fallback rule {}: {}", fallback, e);
                }
            }
        }

        tracing::debug!("Fallback cascade exhausted, no pairings for rule {}", rule);
        PairingOutcome { rule: *rule, meals: Vec::new() }
    }
}

fn truncate(mut meals: Vec<MealSummary>) -> Vec<MealSummary> {
    meals.truncate(MAX_PAIRINGS);
    meals
}

use crate::models::{CategoryRow, Drink, DrinkSummary, DrinksEnvelope};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the cocktail API
#[derive(Debug, Error)]
pub enum CocktailDbError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Cocktail recipe API client
///
/// Handles all communication with the drink API including:
/// - Listing drink categories
/// - Searching by name and filtering by ingredient
/// - Fetching a random drink
/// - Looking up a drink by id
pub struct CocktailDbClient {
    base_url: String,
    client: Client,
}

impl CocktailDbClient {
    /// Create a new cocktail API client
    pub fn new(base_url: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// List all drink categories
    pub async fn list_categories(&self) -> Result<Vec<String>, CocktailDbError> {
        let url = format!("{}/list.php?c=list", self.base_url.trim_end_matches('/'));

        tracing::debug!("Listing drink categories from: {}", url);

        let envelope: DrinksEnvelope<CategoryRow> = self.get_envelope(&url).await?;

        Ok(envelope
            .drinks
            .unwrap_or_default()
            .into_iter()
            .map(|row| row.str_category)
            .collect())
    }

    /// Search drinks by name. An empty result set is not an error.
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<DrinkSummary>, CocktailDbError> {
        let url = format!(
            "{}/search.php?s={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(term)
        );

        tracing::debug!("Searching drinks by name: {}", term);

        let envelope: DrinksEnvelope<DrinkSummary> = self.get_envelope(&url).await?;

        Ok(envelope.drinks.unwrap_or_default())
    }

    /// List drinks containing the given ingredient. An empty result set is
    /// not an error.
    pub async fn filter_by_ingredient(&self, ingredient: &str) -> Result<Vec<DrinkSummary>, CocktailDbError> {
        let url = format!(
            "{}/filter.php?i={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(ingredient)
        );

        tracing::debug!("Filtering drinks by ingredient: {}", ingredient);

        let envelope: DrinksEnvelope<DrinkSummary> = self.get_envelope(&url).await?;

        Ok(envelope.drinks.unwrap_or_default())
    }

    /// Fetch a random drink. The endpoint contractually returns one
    /// record, so an empty envelope is an upstream fault.
    pub async fn random_drink(&self) -> Result<Drink, CocktailDbError> {
        let url = format!("{}/random.php", self.base_url.trim_end_matches('/'));

        let envelope: DrinksEnvelope<Drink> = self.get_envelope(&url).await?;

        envelope
            .drinks
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| CocktailDbError::InvalidResponse("Random endpoint returned no drink".into()))
    }

    /// Look up a drink by id. `None` when the id is unknown.
    pub async fn lookup(&self, id: &str) -> Result<Option<Drink>, CocktailDbError> {
        let url = format!(
            "{}/lookup.php?i={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(id)
        );

        tracing::debug!("Looking up drink: {}", id);

        let envelope: DrinksEnvelope<Drink> = self.get_envelope(&url).await?;

        Ok(envelope.drinks.unwrap_or_default().into_iter().next())
    }

    async fn get_envelope<T>(&self, url: &str) -> Result<DrinksEnvelope<T>, CocktailDbError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(CocktailDbError::ApiError(format!(
                "Drink API request failed: {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}

use serde::{Deserialize, Serialize};

/// Compact meal shape returned by the meal API's filter endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id_meal: String,
    #[serde(rename = "strMeal")]
    pub str_meal: String,
    #[serde(rename = "strMealThumb", default)]
    pub str_meal_thumb: Option<String>,
}

impl MealSummary {
    pub fn thumb(&self) -> &str {
        self.str_meal_thumb.as_deref().unwrap_or("")
    }
}

/// Envelope for meal API responses: `{ "meals": [...] }` or
/// `{ "meals": null }` for no results.
#[derive(Debug, Clone, Deserialize)]
pub struct MealsEnvelope {
    pub meals: Option<Vec<MealSummary>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_envelope_with_results() {
        let json = r#"{ "meals": [
            { "idMeal": "52977", "strMeal": "Corba", "strMealThumb": "https://example.test/corba.jpg" }
        ] }"#;
        let envelope: MealsEnvelope = serde_json::from_str(json).unwrap();
        let meals = envelope.meals.unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].str_meal, "Corba");
    }

    #[test]
    fn test_meal_envelope_null() {
        let envelope: MealsEnvelope = serde_json::from_str(r#"{ "meals": null }"#).unwrap();
        assert!(envelope.meals.is_none());
    }
}
